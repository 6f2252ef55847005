use thiserror::Error;

use crate::jaw::JawSide;

/// Top-level error type for soft jaw generation.
#[derive(Debug, Error)]
pub enum SoftJawsError {
    #[error(transparent)]
    Preset(#[from] InvalidPresetError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Body(#[from] BodyError),

    #[error(transparent)]
    Degenerate(#[from] GeometryError),

    #[error(transparent)]
    Geometry(#[from] GeometryCreationError),

    #[error(transparent)]
    BoundaryFill(#[from] BoundaryFillError),
}

/// The selected vise index does not name a known vise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid vise: index {index} is out of range [0, {max}]")]
pub struct InvalidPresetError {
    /// The rejected index.
    pub index: usize,
    /// Largest valid index.
    pub max: usize,
}

/// A jaw dimension violates its constraint.
///
/// Variants are listed in the order the checks run; only the first
/// failing check is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid length: must be > 0 (got {length})")]
    Length { length: f64 },

    #[error(
        "invalid width: must be > 0 and leave the part exposed between the jaws \
         (got {width}, body width {body_width})"
    )]
    Width { width: f64, body_width: f64 },

    #[error("invalid clamp width: must be > 0 and < width of jaws (got {clamp_width}, width {width})")]
    ClampWidth { clamp_width: f64, width: f64 },

    #[error("invalid height: must be > 0 (got {height})")]
    Height { height: f64 },

    #[error(
        "invalid clamp height: must be > 0 and < height of jaws (got {clamp_height}, height {height})"
    )]
    ClampHeight { clamp_height: f64, height: f64 },
}

/// Errors raised while looking up the selected body.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body not found: {0}")]
    NotFound(String),

    #[error("no body selected")]
    NoSelection,

    #[error("expected one body, {0} selected")]
    MultipleSelected(usize),
}

/// Errors related to malformed geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// The host could not materialize a construction plane.
#[derive(Debug, Error)]
#[error("failed to create {side} construction plane: {reason}")]
pub struct GeometryCreationError {
    /// Which jaw plane failed.
    pub side: JawSide,
    /// Host-supplied reason.
    pub reason: String,
}

/// The host could not start the boundary fill.
#[derive(Debug, Error)]
#[error("failed to launch boundary fill: {reason}")]
pub struct BoundaryFillError {
    /// Host-supplied reason.
    pub reason: String,
}

/// Convenience type alias for results using [`SoftJawsError`].
pub type Result<T> = std::result::Result<T, SoftJawsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_error_message_names_range() {
        let err = InvalidPresetError { index: 7, max: 4 };
        assert_eq!(err.to_string(), "invalid vise: index 7 is out of range [0, 4]");
    }

    #[test]
    fn validation_error_converts_transparently() {
        let err: SoftJawsError = ValidationError::Length { length: 0.0 }.into();
        assert!(matches!(err, SoftJawsError::Validation(ValidationError::Length { .. })));
        assert!(err.to_string().starts_with("invalid length"));
    }

    #[test]
    fn geometry_error_names_side() {
        let err = GeometryCreationError {
            side: JawSide::Front,
            reason: "kernel refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to create front construction plane: kernel refused"
        );
    }
}
