use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    axis::AxisConfig,
    build_tool::BuildTool,
    distro::DistroTag,
    error::MatrixError,
    exclude::excluded,
    tags,
    variant::Variant,
};

/// Generates the raw cartesian product of axis values, one tuple per
/// `{base image} x {jdk} x {distro} x {tool, version}` combination,
/// plus the single synthesized `latest` combination.
///
/// The result is a set: identical tuples collapse, and its iteration
/// order is never externally observable. Ordering flows exclusively
/// through [`crate::order::sort_variants`].
///
/// # Errors
/// Errors when an axis lookup finds neither an entry nor a fallback.
pub fn build_matrix(config: &AxisConfig) -> Result<HashSet<Variant>, MatrixError> {
    let maintainer = config.maintainer();
    let mut variants = HashSet::new();

    for &jdk_version in &config.jdk_versions {
        let base_images = config.base_images.get_or_default(&jdk_version)?;

        for base_image in base_images {
            let distros = config.distros.get_or_default(base_image)?;

            for distro in distros {
                for (name, version) in &config.build_tools {
                    let build_tool = BuildTool::Single {
                        name: name.clone(),
                        version: Some(version.clone()),
                    };
                    variants.insert(make_variant(
                        config,
                        jdk_version,
                        base_image,
                        distro,
                        build_tool,
                        &maintainer,
                    )?);
                }
            }
        }
    }

    variants.insert(latest_variant(config, &maintainer)?);
    debug!("Generated {} raw variants", variants.len());

    Ok(variants)
}

/// The full pipeline output: matrix generation, tag derivation,
/// validation and exclusion filtering. Unordered.
///
/// # Errors
/// Errors when an axis lookup finds neither an entry nor a fallback.
pub fn valid_variants(config: &AxisConfig) -> Result<HashSet<Variant>, MatrixError> {
    let raw = build_matrix(config)?;
    let raw_count = raw.len();

    let variants: HashSet<Variant> = raw
        .into_iter()
        .filter(Variant::is_valid)
        .filter(|variant| !excluded(&config.exclusions, variant))
        .collect();
    trace!("{} of {raw_count} raw variants survived", variants.len());

    Ok(variants)
}

fn make_variant(
    config: &AxisConfig,
    jdk_version: u32,
    base_image: &str,
    distro: &DistroTag,
    build_tool: BuildTool,
    maintainer: &str,
) -> Result<Variant, MatrixError> {
    let docker_tag = tags::docker_tag(config, jdk_version, &build_tool, distro)?;

    Ok(Variant::builder()
        .jdk_version(jdk_version)
        .base_image(base_image)
        .base_image_tag(tags::base_image_tag(base_image, jdk_version, distro))
        .distro(distro.clone())
        .build_tool(build_tool)
        .docker_tag(docker_tag)
        .maintainer(maintainer)
        .maybe_architectures(config.arch_overrides.get(distro.family()).cloned())
        .build())
}

fn latest_variant(config: &AxisConfig, maintainer: &str) -> Result<Variant, MatrixError> {
    let jdk_version = config.default_jdk_version;
    let base_image = config
        .base_images
        .get_or_default(&jdk_version)?
        .first()
        .ok_or(MatrixError::NoBaseImage { jdk: jdk_version })?;
    let distro = config.default_distro(jdk_version)?;

    make_variant(
        config,
        jdk_version,
        base_image,
        distro,
        BuildTool::All(config.build_tools.clone()),
        maintainer,
    )
}

#[cfg(test)]
mod test {
    use std::collections::{BTreeMap, BTreeSet, HashSet};

    use pretty_assertions::assert_eq;

    use crate::{
        axis::{AxisConfig, AxisTable},
        distro::DistroTag,
        exclude::ExclusionRule,
        order::sort_variants,
        string_vec,
        variant::Variant,
    };

    use super::valid_variants;

    /// Two JDK versions, one base image, two distros, two tools, two
    /// exclusions. Small enough to enumerate by hand.
    fn minimal_config() -> AxisConfig {
        let jammy = DistroTag::new("ubuntu", "jammy");
        let focal = DistroTag::new("ubuntu", "focal");

        AxisConfig::builder()
            .jdk_versions([8, 11].into_iter().collect())
            .default_jdk_version(11)
            .base_images(AxisTable::default().with_fallback(string_vec!["eclipse-temurin"]))
            .distros(
                AxisTable::default()
                    .with_fallback([jammy.clone(), focal.clone()].into_iter().collect()),
            )
            .default_distros(AxisTable::default().with_fallback(jammy.clone()))
            .build_tools(BTreeMap::from([
                ("maven".to_string(), "3.9.9".to_string()),
                ("gradle".to_string(), "8.10.2".to_string()),
            ]))
            .default_build_tool("maven")
            .default_architectures(BTreeSet::from(["amd64".to_string(), "arm64".to_string()]))
            .exclusions(vec![
                ExclusionRule::builder().jdk_version(8).distro(focal).build(),
                ExclusionRule::builder()
                    .jdk_version(11)
                    .distro(jammy)
                    .build_tool("maven")
                    .build_tool_version("3.9.9")
                    .build(),
            ])
            .maintainers(string_vec!["team@jdk-images.dev"])
            .build()
    }

    #[test]
    fn minimal_scenario_matches_manual_enumeration() {
        // 2 jdks x 2 distros x 2 tools = 8, minus 2 for (8, focal, *),
        // minus 1 for the all-defaults maven image, plus latest = 6
        let variants = valid_variants(&minimal_config()).unwrap();

        let tags: HashSet<&str> = variants.iter().map(|v| v.docker_tag.as_str()).collect();
        let expected: HashSet<&str> =
            ["latest", "8", "8-gradle", "focal", "gradle", "gradle-focal"]
                .into_iter()
                .collect();

        assert_eq!(tags, expected);
        assert_eq!(variants.len(), 6);
    }

    #[test]
    fn exactly_one_latest_variant() {
        let variants = valid_variants(&minimal_config()).unwrap();

        assert_eq!(variants.iter().filter(|v| v.is_latest()).count(), 1);
    }

    #[test]
    fn latest_variant_bundles_every_tool() {
        let config = minimal_config();
        let variants = valid_variants(&config).unwrap();
        let latest: Vec<&Variant> = variants.iter().filter(|v| v.is_latest()).collect();

        assert_eq!(latest.len(), 1);
        assert!(latest[0].build_tool.is_all());
        assert_eq!(latest[0].jdk_version, config.default_jdk_version);
        assert_eq!(latest[0].base_image_tag, "eclipse-temurin:11-jdk-jammy");
    }

    #[test]
    fn builtin_pipeline_has_no_tag_collision() {
        let variants = valid_variants(&AxisConfig::builtin()).unwrap();
        let sorted = sort_variants(&variants).unwrap();

        assert_eq!(sorted.len(), variants.len());

        let pairs: HashSet<(u32, &str)> = sorted
            .iter()
            .map(|v| (v.jdk_version, v.docker_tag.as_str()))
            .collect();
        assert_eq!(pairs.len(), sorted.len());
    }

    #[test]
    fn architectures_attached_only_for_overridden_families() {
        let variants = valid_variants(&AxisConfig::builtin()).unwrap();

        for variant in &variants {
            match variant.distro.family() {
                "alpine" => assert_eq!(
                    variant.architectures,
                    Some(BTreeSet::from(["amd64".to_string()]))
                ),
                _ => assert_eq!(variant.architectures, None),
            }
        }
    }

    #[test]
    fn missing_default_is_fatal() {
        let mut config = minimal_config();
        config.default_distros = AxisTable::from_iter([(8, DistroTag::new("ubuntu", "jammy"))]);

        // JDK 11 has neither an entry nor a fallback
        assert!(valid_variants(&config).is_err());
    }
}
