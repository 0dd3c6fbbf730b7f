use std::{cmp::Ordering, collections::HashSet};

use log::trace;

use crate::{error::MatrixError, tags::LATEST_TAG, variant::Variant};

fn compare(first: &Variant, second: &Variant) -> Ordering {
    // `latest` first, then JDK ascending, then tag lexicographic
    (
        first.docker_tag != LATEST_TAG,
        first.jdk_version,
        &first.docker_tag,
    )
        .cmp(&(
            second.docker_tag != LATEST_TAG,
            second.jdk_version,
            &second.docker_tag,
        ))
}

/// Establishes the total order over the surviving variant set.
///
/// The only externally observable ordering of the pipeline flows
/// through this function; every earlier stage is order-agnostic.
///
/// # Errors
/// Errors when two distinct variants share a
/// `(jdk_version, docker_tag)` pair. A correct axis configuration
/// never triggers this; the check catches configuration regressions.
pub fn sort_variants(variants: &HashSet<Variant>) -> Result<Vec<Variant>, MatrixError> {
    let mut sorted: Vec<Variant> = variants.iter().cloned().collect();
    sorted.sort_by(compare);
    trace!("Sorted {} variants", sorted.len());

    if let Some(pair) = sorted
        .windows(2)
        .find(|pair| pair[0].jdk_version == pair[1].jdk_version && pair[0].docker_tag == pair[1].docker_tag)
    {
        return Err(MatrixError::DuplicateTag {
            tag: pair[0].docker_tag.clone(),
            jdk: pair[0].jdk_version,
            first: Box::new(pair[0].clone()),
            second: Box::new(pair[1].clone()),
        });
    }

    Ok(sorted)
}
