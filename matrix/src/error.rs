use miette::Diagnostic;
use thiserror::Error;

use crate::variant::Variant;

#[derive(Error, Diagnostic, Debug)]
pub enum MatrixError {
    /// An axis table has neither the requested entry nor a fallback.
    ///
    /// No combination can be generated for the missing key, so the
    /// pipeline aborts instead of producing a partial matrix.
    #[error("No entry and no fallback configured for axis key '{key}'")]
    #[diagnostic(help("add an entry for '{key}' or a fallback entry to the axis table"))]
    MissingDefault { key: String },

    /// No candidate base image is configured for a JDK version.
    #[error("Base image candidate list for JDK {jdk} is empty")]
    NoBaseImage { jdk: u32 },

    /// Two distinct variants derived the same tag. This is a
    /// configuration regression, never a recoverable condition.
    #[error(
        "Duplicate docker tag '{tag}' for JDK {jdk}:\nfirst: {first:#?}\nsecond: {second:#?}"
    )]
    #[diagnostic(help(
        "adjust the axis configuration or add an exclusion rule so the tags no longer collide"
    ))]
    DuplicateTag {
        tag: String,
        jdk: u32,
        first: Box<Variant>,
        second: Box<Variant>,
    },

    /// A distro tag string is not of the form `family/codename`.
    #[error("Invalid distro tag '{value}', expected 'family/codename'")]
    InvalidDistroTag { value: String },
}
