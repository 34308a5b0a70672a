use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `CampusError` and maps other errors to
/// convert to a `CampusError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum CampusError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    /// Not enough apartment inventory for the households that must be placed.
    InsufficientHousing { required: usize, available: usize },
    /// Not enough dorm buildings for the dorm-eligible student population.
    InsufficientDorms { required: usize, available: usize },
    CampusError(String),
}

impl From<io::Error> for CampusError {
    fn from(error: io::Error) -> Self {
        CampusError::IoError(error)
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(error: serde_json::Error) -> Self {
        CampusError::JsonError(error)
    }
}

impl From<String> for CampusError {
    fn from(error: String) -> Self {
        CampusError::CampusError(error)
    }
}

impl From<&str> for CampusError {
    fn from(error: &str) -> Self {
        CampusError::CampusError(error.to_string())
    }
}

impl std::error::Error for CampusError {}

impl Display for CampusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CampusError::InsufficientHousing {
                required,
                available,
            } => write!(
                f,
                "Error: insufficient apartment inventory (required {required}, available {available})"
            ),
            CampusError::InsufficientDorms {
                required,
                available,
            } => write!(
                f,
                "Error: insufficient dorm buildings (required {required}, available {available})"
            ),
            _ => write!(f, "Error: {self:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn housing_error_reports_shortfall() {
        let e = CampusError::InsufficientHousing {
            required: 800,
            available: 200,
        };
        let msg = e.to_string();
        assert!(msg.contains("800"));
        assert!(msg.contains("200"));
    }

    #[test]
    fn string_conversion() {
        let e: CampusError = "registry not initialized".into();
        assert!(matches!(e, CampusError::CampusError(_)));
    }
}
