use serde::{Deserialize, Serialize};
use std::fmt;

/// The ML service hands out small integral ids for every resource it
/// creates. Each kind gets its own newtype so a dataset id can never be
/// passed where an analysis id is expected.
macro_rules! resource_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

resource_id!(
    /// Id of an uploaded dataset.
    DatasetId
);
resource_id!(
    /// Id of a project grouping a dataset for analysis.
    ProjectId
);
resource_id!(
    /// Id of an analysis configured under a project.
    AnalysisId
);
resource_id!(
    /// Id of a model trained from an analysis.
    ModelId
);
resource_id!(
    /// Id of a dataset version snapshot used to train a model.
    VersionSetId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_conversion() {
        let id = DatasetId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: ModelId = serde_json::from_str("7").unwrap();
        assert_eq!(id, ModelId(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
