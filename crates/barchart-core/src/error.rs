// File: crates/barchart-core/src/error.rs
// Summary: Library error taxonomy (validation, destroyed-state, renderer failures).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Raw input to `set_data` failed validation; the whole batch is rejected
    /// and prior state is left untouched.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A mutating call was made after `destroy()`.
    #[error("{0} has been destroyed")]
    Destroyed(&'static str),

    /// The scene-graph surface reported a failure.
    #[error("renderer error: {0}")]
    Renderer(String),
}
