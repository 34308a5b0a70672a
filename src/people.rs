//! Agent types. A [`Person`] is created once during population construction,
//! receives its routine lists once from routine assignment, and thereafter
//! only its current location changes (driven by the external stepping
//! driver). Locations hold no ownership of people; everything lives in the
//! population list.

use crate::locations::LocationId;
use crate::routines::Routine;

/// Opaque handle for an agent, unique within one constructed population.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub usize);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse infection-risk category derived from age.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Risk {
    Low,
    High,
}

/// The closed set of agent roles. Routine assignment and the assignment
/// engine switch on this tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PersonRole {
    Student,
    Faculty,
    Other,
}

/// One agent in the synthesized population.
#[derive(Clone, Debug)]
pub struct Person {
    pub id: PersonId,
    pub age: u8,
    pub role: PersonRole,
    /// Home assignment; always set by the assignment engine.
    pub home: LocationId,
    /// Campus workplace, for faculty. `None` when no campus buildings exist.
    pub work: Option<LocationId>,
    /// Campus school building, for students. `None` when no campus buildings
    /// exist.
    pub school: Option<LocationId>,
    pub regulation_compliance_prob: f64,
    pub risk: Risk,
    /// Mutated every tick by the stepping driver; starts at home.
    pub current_location: LocationId,
    /// Candidate destinations evaluated outside school hours (students).
    pub outside_school_routines: Vec<Routine>,
    /// Candidate destinations evaluated during work hours (faculty).
    pub during_work_routines: Vec<Routine>,
    /// Candidate destinations evaluated outside work hours (faculty).
    pub outside_work_routines: Vec<Routine>,
}

impl Person {
    pub(crate) fn student(
        id: PersonId,
        age: u8,
        home: LocationId,
        school: Option<LocationId>,
        compliance_prob: f64,
        risk: Risk,
    ) -> Person {
        Person {
            id,
            age,
            role: PersonRole::Student,
            home,
            work: None,
            school,
            regulation_compliance_prob: compliance_prob,
            risk,
            current_location: home,
            outside_school_routines: Vec::new(),
            during_work_routines: Vec::new(),
            outside_work_routines: Vec::new(),
        }
    }

    pub(crate) fn faculty(
        id: PersonId,
        age: u8,
        home: LocationId,
        work: Option<LocationId>,
        compliance_prob: f64,
        risk: Risk,
    ) -> Person {
        Person {
            id,
            age,
            role: PersonRole::Faculty,
            home,
            work,
            school: None,
            regulation_compliance_prob: compliance_prob,
            risk,
            current_location: home,
            outside_school_routines: Vec::new(),
            during_work_routines: Vec::new(),
            outside_work_routines: Vec::new(),
        }
    }
}
