use bon::Builder;
use log::trace;
use serde::Serialize;

use crate::{distro::DistroTag, variant::Variant};

/// A partial-field predicate marking certain axis combinations as
/// never buildable. Unset fields are wildcards.
///
/// A rule with no fields set matches every variant; guarding against
/// that is the configuration's job, not this type's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Builder)]
pub struct ExclusionRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jdk_version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distro: Option<DistroTag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub build_tool: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub build_tool_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub base_image: Option<String>,
}

impl ExclusionRule {
    /// True when every set field equals the variant's value.
    ///
    /// A field the variant cannot answer, such as a tool name or
    /// version asked of the bundled-tools sentinel, is treated as
    /// non-matching rather than a shape error.
    #[must_use]
    pub fn matches(&self, variant: &Variant) -> bool {
        self.jdk_version
            .is_none_or(|jdk_version| jdk_version == variant.jdk_version)
            && self
                .distro
                .as_ref()
                .is_none_or(|distro| distro == &variant.distro)
            && self
                .build_tool
                .as_deref()
                .is_none_or(|build_tool| variant.build_tool.name() == Some(build_tool))
            && self
                .build_tool_version
                .as_deref()
                .is_none_or(|version| variant.build_tool.version() == Some(version))
            && self
                .base_image
                .as_deref()
                .is_none_or(|base_image| base_image == variant.base_image)
    }
}

/// True when any configured rule matches the variant.
#[must_use]
pub fn excluded(rules: &[ExclusionRule], variant: &Variant) -> bool {
    rules.iter().any(|rule| {
        let matched = rule.matches(variant);
        if matched {
            trace!("{rule:?} excludes variant '{}'", variant.docker_tag);
        }
        matched
    })
}
