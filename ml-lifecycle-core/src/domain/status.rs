use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a model build as reported by the service.
///
/// `Complete` is the only terminal-success marker; anything the service
/// reports that we do not recognise is preserved verbatim in `Other` and
/// treated as "not yet complete".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ModelStatus {
    NotStarted,
    Pending,
    Running,
    Complete,
    Failed,
    Other(String),
}

impl ModelStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ModelStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Not Started" => Self::NotStarted,
            "Pending" => Self::Pending,
            "Running" => Self::Running,
            "Complete" => Self::Complete,
            "Failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl From<ModelStatus> for String {
    fn from(status: ModelStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_complete_is_terminal_success() {
        assert!(ModelStatus::Complete.is_complete());
        assert!(!ModelStatus::Running.is_complete());
        assert!(!ModelStatus::Failed.is_complete());
        assert!(!ModelStatus::Other("Queued".to_string()).is_complete());
    }

    #[test]
    fn test_status_round_trips_through_strings() {
        let status: ModelStatus = serde_json::from_str("\"Complete\"").unwrap();
        assert_eq!(status, ModelStatus::Complete);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Complete\"");
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: ModelStatus = serde_json::from_str("\"Provisioning\"").unwrap();
        assert_eq!(status, ModelStatus::Other("Provisioning".to_string()));
        assert_eq!(status.to_string(), "Provisioning");
    }
}
