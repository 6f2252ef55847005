use super::JawDimensions;

/// Requested jaw size and grip face, in centimeters.
///
/// Constraints between the fields (and against the part's bounding box)
/// are checked by [`JawPlanes`](crate::operations::JawPlanes), not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JawSpec {
    /// Jaw length along X, centered on the part.
    pub length: f64,
    /// Full jaw stock thickness in the clamping direction.
    pub width: f64,
    /// Full jaw stock height.
    pub height: f64,
    /// Part of `width` that is cut away to grip the part.
    pub clamp_width: f64,
    /// Part of `height` that is cut away to grip the part.
    pub clamp_height: f64,
}

impl JawSpec {
    /// Creates a new jaw spec.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64, clamp_width: f64, clamp_height: f64) -> Self {
        Self {
            length,
            width,
            height,
            clamp_width,
            clamp_height,
        }
    }

    /// Builds a spec from stock dimensions plus the grip face size.
    #[must_use]
    pub fn from_dimensions(dims: JawDimensions, clamp_width: f64, clamp_height: f64) -> Self {
        Self::new(dims.length, dims.width, dims.height, clamp_width, clamp_height)
    }

    /// Jaw stock left beyond the grip face in the clamping direction.
    #[must_use]
    pub fn width_margin(&self) -> f64 {
        self.width - self.clamp_width
    }

    /// Jaw stock left below the grip face.
    #[must_use]
    pub fn height_margin(&self) -> f64 {
        self.height - self.clamp_height
    }
}
