use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{build_tool::BuildTool, variant::{MIN_JDK_VERSION, Variant}};

static IMAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-\w]+(?::[-\w.]+)?$").expect("hardcoded regex is valid"));
static DOCKER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-\w.]+$").expect("hardcoded regex is valid"));
static TOOL_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.]+$").expect("hardcoded regex is valid"));

/// True for `name` or `name:tag` image references.
#[must_use]
pub fn valid_image_name(value: &str) -> bool {
    IMAGE_NAME.is_match(value)
}

#[must_use]
pub fn valid_docker_tag(value: &str) -> bool {
    DOCKER_TAG.is_match(value)
}

/// True for dotted numeric version strings.
#[must_use]
pub fn valid_tool_version(value: &str) -> bool {
    TOOL_VERSION.is_match(value)
}

impl Variant {
    /// Structural and grammar checks on a candidate combination.
    ///
    /// An invalid variant is silently dropped from the candidate set;
    /// it represents a combination with no sensible instantiation,
    /// not a data-integrity failure.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let build_tool_ok = match &self.build_tool {
            BuildTool::Single { name, version } => {
                !name.trim().is_empty()
                    && version.as_deref().is_none_or(valid_tool_version)
            }
            BuildTool::All(versions) => {
                versions.iter().all(|(name, version)| {
                    !name.trim().is_empty() && valid_tool_version(version)
                })
            }
        };

        let valid = self.jdk_version >= MIN_JDK_VERSION
            && valid_image_name(&self.base_image)
            && valid_image_name(&self.base_image_tag)
            && valid_docker_tag(&self.docker_tag)
            && !self.maintainer.trim().is_empty()
            && !self.distro.family().is_empty()
            && !self.distro.codename().is_empty()
            && self.architectures.as_ref().is_none_or(|architectures| {
                !architectures.is_empty()
                    && architectures.iter().all(|arch| !arch.trim().is_empty())
            })
            && build_tool_ok;

        if !valid {
            debug!("Dropping invalid candidate variant {self:?}");
        }
        valid
    }
}
