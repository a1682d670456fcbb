use thiserror::Error;

/// Misuse of the field API. Environmental degeneracies (zero-sized viewport,
/// empty field) are not errors and never produce one of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("field ticked before initialize()")]
    Uninitialized,
}
