use thiserror::Error;

#[derive(Debug, Error)]
pub enum LangError {
    #[error("Unknown language code: '{0}'. Run with --languages for the supported list.")]
    UnknownLanguage(String),
}
