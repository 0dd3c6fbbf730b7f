use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de::Error};

use crate::error::MatrixError;

/// A namespaced distribution release tag, e.g. `ubuntu/jammy`.
///
/// The family selects the architecture restriction for a variant,
/// while the codename is what ends up in derived image tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistroTag {
    family: String,
    codename: String,
}

impl DistroTag {
    #[must_use]
    pub fn new<F, C>(family: F, codename: C) -> Self
    where
        F: Into<String>,
        C: Into<String>,
    {
        Self {
            family: family.into(),
            codename: codename.into(),
        }
    }

    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[must_use]
    pub fn codename(&self) -> &str {
        &self.codename
    }
}

impl std::fmt::Display for DistroTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", &self.family, &self.codename)
    }
}

impl FromStr for DistroTag {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((family, codename))
                if !family.is_empty() && !codename.is_empty() && !codename.contains('/') =>
            {
                Ok(Self::new(family, codename))
            }
            _ => Err(MatrixError::InvalidDistroTag {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for DistroTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DistroTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
