use thiserror::Error;

/// Errors detected while configuring an auto-replace rule.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("You must provide a `transform` option.")]
    MissingTransform,

    #[error("You must provide a `trigger` option.")]
    MissingTrigger,

    #[error("`trigger` and `trigger_regex` cannot both be set.")]
    ConflictingTrigger,

    #[error("Invalid `{field}` pattern.")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}
