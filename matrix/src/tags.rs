use crate::{axis::AxisConfig, build_tool::BuildTool, distro::DistroTag, error::MatrixError};

/// The tag of the all-defaults, all-build-tools image.
pub const LATEST_TAG: &str = "latest";

/// Derives the fully tagged base image for a combination.
///
/// Temurin-style images name their JDK flavor in the tag
/// (`eclipse-temurin:17-jdk-jammy`), everything else is plain
/// `image:version-codename`.
#[must_use]
pub fn base_image_tag(base_image: &str, jdk_version: u32, distro: &DistroTag) -> String {
    let separator = if base_image.contains("temurin") {
        "-jdk-"
    } else {
        "-"
    };

    format!("{base_image}:{jdk_version}{separator}{}", distro.codename())
}

/// Derives the sparse human-facing docker tag for a combination.
///
/// Each segment is included only when it differs from the configured
/// default: the JDK version, the build tool (with its version when it
/// is not the pinned one), and the distro codename. A combination
/// matching every default collapses to `latest`, as does the
/// bundled-tools sentinel.
///
/// # Errors
/// Errors when no default distro can be resolved for `jdk_version`.
pub fn docker_tag(
    config: &AxisConfig,
    jdk_version: u32,
    build_tool: &BuildTool,
    distro: &DistroTag,
) -> Result<String, MatrixError> {
    if build_tool.is_all() {
        return Ok(LATEST_TAG.to_string());
    }

    let mut segments = Vec::new();

    if jdk_version != config.default_jdk_version {
        segments.push(jdk_version.to_string());
    }

    if let BuildTool::Single { name, version } = build_tool {
        let pinned = config.build_tools.get(name).map(String::as_str);
        let default_version = version
            .as_deref()
            .is_none_or(|version| Some(version) == pinned);

        if !(name == &config.default_build_tool && default_version) {
            segments.push(match version.as_deref() {
                Some(version) if Some(version) != pinned => format!("{name}-{version}"),
                _ => name.clone(),
            });
        }
    }

    let default_distro = config.default_distros.get_or_default(&jdk_version)?;
    if distro != default_distro {
        segments.push(distro.codename().to_string());
    }

    if segments.is_empty() {
        Ok(LATEST_TAG.to_string())
    } else {
        Ok(segments.join("-"))
    }
}
