use std::collections::BTreeMap;

use serde::Serialize;

/// The build-tool axis value of a variant.
///
/// Every combination produced by the matrix carries a single tool
/// with its pinned version. The one synthesized `latest` variant
/// instead bundles every configured tool, carrying the full
/// tool -> version mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildTool {
    Single {
        name: String,
        version: Option<String>,
    },
    All(BTreeMap<String, String>),
}

impl BuildTool {
    /// The tool name, `None` for the bundled-tools sentinel.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Single { name, .. } => Some(name),
            Self::All(_) => None,
        }
    }

    /// The tool version, `None` when unspecified or for the
    /// bundled-tools sentinel.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Single { version, .. } => version.as_deref(),
            Self::All(_) => None,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All(_))
    }
}

impl std::fmt::Display for BuildTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single {
                name,
                version: Some(version),
            } => write!(f, "{name}@{version}"),
            Self::Single { name, version: None } => write!(f, "{name}"),
            Self::All(_) => write!(f, "all"),
        }
    }
}

impl Serialize for BuildTool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Single { .. } => serializer.serialize_str(&self.to_string()),
            Self::All(versions) => versions.serialize(serializer),
        }
    }
}
