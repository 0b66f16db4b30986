use thiserror::Error;

/// Reasons a generation pass can be skipped.
///
/// None of these are fatal: the field keeps its previous particle set and the
/// caller typically logs the error and waits for the next resize.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("surface is not measurable yet ({width}x{height})")]
    InvalidSurface { width: f32, height: f32 },
    #[error("field has no surface; call mount first")]
    NotMeasured,
}
