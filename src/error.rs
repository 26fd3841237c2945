//! Process-level errors
//!
//! Geometry never fails: bad numeric input becomes NaN. [`AppError`] only
//! covers what can go wrong around it, such as the terminal, the log file,
//! and command-line arguments.

use crate::geometry::{Field, ShapeKind, UnknownField};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("{kind} has no '{field}' dimension (expected one of: {expected})")]
    FieldNotApplicable {
        kind: ShapeKind,
        field: Field,
        expected: String,
    },

    #[error("malformed dimension '{0}', expected NAME=VALUE")]
    MalformedDimension(String),
}

impl AppError {
    pub fn not_applicable(kind: ShapeKind, field: Field) -> Self {
        let expected = kind
            .fields()
            .iter()
            .map(|f| f.key())
            .collect::<Vec<_>>()
            .join(", ");
        AppError::FieldNotApplicable {
            kind,
            field,
            expected,
        }
    }
}
