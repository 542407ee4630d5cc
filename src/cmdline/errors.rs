use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmdLineError {
    #[error("Switch not found: {0}.")]
    SwitchNotFound(String),

    #[error("Switch '{0}' requires a value.")]
    MissingValue(String),

    #[error("Invalid value '{value}' for switch '{switch}': {reason}.")]
    InvalidValue {
        switch: String,
        value: String,
        reason: String,
    },

    #[error("Invalid arguments: {0}.")]
    InvalidArguments(String),
}
