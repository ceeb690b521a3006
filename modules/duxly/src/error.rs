use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("cannot read action type: payload is null")]
    MissingPayload,

    #[error("action type must be a string, found {found}")]
    InvalidActionType { found: &'static str },

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}
