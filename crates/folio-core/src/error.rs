use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("alphabet `{0}` has no characters")]
    EmptyAlphabet(&'static str),
    #[error("unknown effects preset `{0}`")]
    UnknownPreset(String),
}
