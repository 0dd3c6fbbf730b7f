use std::collections::BTreeSet;

use bon::Builder;
use serde::Serialize;

use crate::{build_tool::BuildTool, distro::DistroTag, tags::LATEST_TAG};

/// The lowest JDK version the matrix will ever generate.
pub const MIN_JDK_VERSION: u32 = 8;

/// One fully resolved, tagged combination of axis values representing
/// a single buildable image.
///
/// A variant is created from a raw axis tuple, enriched with its tags
/// and then read-only. It is either dropped by validation or an
/// exclusion rule, or survives unchanged into the final ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Builder)]
pub struct Variant {
    pub jdk_version: u32,

    /// The image the variant's Containerfile starts from.
    #[builder(into)]
    pub base_image: String,

    /// The fully tagged form of `base_image`, e.g.
    /// `eclipse-temurin:17-jdk-jammy`.
    #[builder(into)]
    pub base_image_tag: String,

    pub distro: DistroTag,

    pub build_tool: BuildTool,

    /// The sparse human-facing tag the image is published under.
    /// Unique across the final variant set.
    #[builder(into)]
    pub docker_tag: String,

    #[builder(into)]
    pub maintainer: String,

    /// Restricted architecture set, present only when the distro
    /// family has an override configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architectures: Option<BTreeSet<String>>,
}

impl Variant {
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.docker_tag == LATEST_TAG
    }
}

#[cfg(test)]
mod test {
    use std::collections::{BTreeMap, BTreeSet};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{build_tool::BuildTool, distro::DistroTag};

    use super::Variant;

    #[test]
    fn serializes_for_the_manifest() {
        let variant = Variant::builder()
            .jdk_version(8)
            .base_image("eclipse-temurin")
            .base_image_tag("eclipse-temurin:8-jdk-alpine")
            .distro(DistroTag::new("alpine", "alpine"))
            .build_tool(BuildTool::Single {
                name: "maven".to_string(),
                version: Some("3.9.9".to_string()),
            })
            .docker_tag("8-alpine")
            .maintainer("team@jdk-images.dev")
            .architectures(BTreeSet::from(["amd64".to_string()]))
            .build();

        assert_eq!(
            serde_json::to_value(&variant).unwrap(),
            json!({
                "jdk_version": 8,
                "base_image": "eclipse-temurin",
                "base_image_tag": "eclipse-temurin:8-jdk-alpine",
                "distro": "alpine/alpine",
                "build_tool": "maven@3.9.9",
                "docker_tag": "8-alpine",
                "maintainer": "team@jdk-images.dev",
                "architectures": ["amd64"],
            })
        );
    }

    #[test]
    fn latest_serializes_the_bundled_tool_versions() {
        let variant = Variant::builder()
            .jdk_version(21)
            .base_image("eclipse-temurin")
            .base_image_tag("eclipse-temurin:21-jdk-noble")
            .distro(DistroTag::new("ubuntu", "noble"))
            .build_tool(BuildTool::All(BTreeMap::from([
                ("gradle".to_string(), "8.10.2".to_string()),
                ("maven".to_string(), "3.9.9".to_string()),
            ])))
            .docker_tag("latest")
            .maintainer("team@jdk-images.dev")
            .build();

        let value = serde_json::to_value(&variant).unwrap();

        assert!(variant.is_latest());
        assert_eq!(
            value["build_tool"],
            json!({ "gradle": "8.10.2", "maven": "3.9.9" })
        );
        assert_eq!(value.get("architectures"), None);
    }
}
