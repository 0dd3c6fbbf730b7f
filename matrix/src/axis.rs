use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
    hash::Hash,
};

use bon::Builder;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::{distro::DistroTag, error::MatrixError, exclude::ExclusionRule, string_vec};

/// An axis lookup table with an optional fallback entry.
///
/// Per-key lookups fall back to the table's fallback value; a lookup
/// that finds neither is a fatal configuration error.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "K: Serialize + Eq + Hash, V: Serialize"))]
pub struct AxisTable<K, V> {
    entries: IndexMap<K, V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<V>,
}

impl<K, V> AxisTable<K, V> {
    #[must_use]
    pub fn with_fallback(mut self, value: V) -> Self {
        self.fallback = Some(value);
        self
    }
}

impl<K, V> AxisTable<K, V>
where
    K: Hash + Eq + Display,
{
    /// Resolves `key`, falling back to the table's fallback entry.
    ///
    /// # Errors
    /// Errors when neither the key nor a fallback is configured.
    pub fn get_or_default(&self, key: &K) -> Result<&V, MatrixError> {
        self.entries
            .get(key)
            .or(self.fallback.as_ref())
            .ok_or_else(|| MatrixError::MissingDefault {
                key: key.to_string(),
            })
    }
}

impl<K, V> Default for AxisTable<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            fallback: None,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AxisTable<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            fallback: None,
        }
    }
}

/// The static description of every build-matrix axis and its
/// defaults.
///
/// One immutable value is constructed at process start and passed
/// explicitly through every stage of the pipeline.
#[derive(Debug, Clone, Serialize, Builder)]
pub struct AxisConfig {
    /// Every JDK version the matrix is generated for.
    pub jdk_versions: IndexSet<u32>,

    /// The JDK version used for the `latest` image and omitted from
    /// derived tags.
    pub default_jdk_version: u32,

    /// Ordered base image candidates per JDK version.
    pub base_images: AxisTable<u32, Vec<String>>,

    /// Distro sets per base image.
    pub distros: AxisTable<String, IndexSet<DistroTag>>,

    /// Default distro per JDK version, omitted from derived tags.
    pub default_distros: AxisTable<u32, DistroTag>,

    /// Pinned version per build tool.
    pub build_tools: BTreeMap<String, String>,

    /// The tool omitted from derived tags when at its pinned version.
    #[builder(into)]
    pub default_build_tool: String,

    /// Restricted architecture sets per distro family. Families
    /// without an entry build for `default_architectures`.
    #[builder(default)]
    pub arch_overrides: IndexMap<String, BTreeSet<String>>,

    pub default_architectures: BTreeSet<String>,

    /// Partial-field predicates marking combinations as never
    /// buildable.
    #[builder(default)]
    pub exclusions: Vec<ExclusionRule>,

    pub maintainers: Vec<String>,
}

impl AxisConfig {
    /// The default distro resolved for a JDK version.
    ///
    /// # Errors
    /// Errors when the version has no entry and no fallback exists.
    pub fn default_distro(&self, jdk_version: u32) -> Result<&DistroTag, MatrixError> {
        self.default_distros.get_or_default(&jdk_version)
    }

    /// The maintainer string attached to every variant.
    #[must_use]
    pub fn maintainer(&self) -> String {
        self.maintainers.join(", ")
    }

    /// The shipped production build matrix.
    #[must_use]
    pub fn builtin() -> Self {
        let noble = DistroTag::new("ubuntu", "noble");
        let jammy = DistroTag::new("ubuntu", "jammy");
        let focal = DistroTag::new("ubuntu", "focal");
        let alpine = DistroTag::new("alpine", "alpine");

        Self {
            jdk_versions: [8, 11, 17, 21].into_iter().collect(),
            default_jdk_version: 21,
            base_images: AxisTable::default().with_fallback(string_vec!["eclipse-temurin"]),
            distros: AxisTable::default().with_fallback(
                [noble.clone(), jammy, focal.clone(), alpine]
                    .into_iter()
                    .collect(),
            ),
            default_distros: AxisTable::from_iter([(8, focal)]).with_fallback(noble.clone()),
            build_tools: BTreeMap::from([
                ("maven".to_string(), "3.9.9".to_string()),
                ("gradle".to_string(), "8.10.2".to_string()),
                ("sbt".to_string(), "1.10.2".to_string()),
            ]),
            default_build_tool: "maven".into(),
            arch_overrides: IndexMap::from_iter([(
                "alpine".to_string(),
                BTreeSet::from(["amd64".to_string()]),
            )]),
            default_architectures: BTreeSet::from(["amd64".to_string(), "arm64".to_string()]),
            exclusions: vec![
                // JDK 8 images stay on the focal-era distros
                ExclusionRule::builder().jdk_version(8).distro(noble.clone()).build(),
                ExclusionRule::builder().jdk_version(8).build_tool("gradle").build(),
                // the all-defaults single-tool image collides with the
                // synthesized `latest` image
                ExclusionRule::builder()
                    .jdk_version(21)
                    .distro(noble)
                    .build_tool("maven")
                    .build_tool_version("3.9.9")
                    .build(),
            ],
            maintainers: string_vec!["JDK Images Maintainers <team@jdk-images.dev>"],
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::AxisTable;

    #[test]
    fn get_or_default_prefers_entry() {
        let table = AxisTable::from_iter([(8, "focal")]).with_fallback("noble");

        assert_eq!(table.get_or_default(&8).unwrap(), &"focal");
        assert_eq!(table.get_or_default(&21).unwrap(), &"noble");
    }

    #[test]
    fn get_or_default_missing_is_fatal() {
        let table: AxisTable<u32, &str> = AxisTable::from_iter([(8, "focal")]);

        assert!(table.get_or_default(&21).is_err());
    }

    #[test]
    fn builtin_resolves_a_default_distro_for_every_jdk() {
        let config = super::AxisConfig::builtin();

        for &jdk in &config.jdk_versions {
            assert!(config.default_distro(jdk).is_ok());
        }
    }
}
