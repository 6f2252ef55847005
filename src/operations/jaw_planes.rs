use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::geometry::{Axis, BasePlane, BoundingBox, UpAxis};
use crate::jaw::{JawPlane, JawSide, JawSpec, PlaneOffsetSet};

/// Computes the six construction planes bounding a pair of soft jaws.
///
/// Length runs along X and is centered on the part. Width is measured
/// along the horizontal axis perpendicular to X (Z when Y is up, Y when
/// Z is up); height along the up axis.
pub struct JawPlanes {
    bbox: BoundingBox,
    up_axis: UpAxis,
    spec: JawSpec,
}

impl JawPlanes {
    /// Creates a new `JawPlanes` computation.
    #[must_use]
    pub fn new(bbox: BoundingBox, up_axis: UpAxis, spec: JawSpec) -> Self {
        Self {
            bbox,
            up_axis,
            spec,
        }
    }

    /// Validates the spec against the part and computes the plane offsets.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in field order: length, width,
    /// clamp width, height, clamp height.
    pub fn execute(&self) -> Result<PlaneOffsetSet> {
        self.validate()?;

        let bbox = &self.bbox;
        let up = self.up_axis;
        let spec = &self.spec;
        let width_margin = spec.width_margin();
        let height_margin = spec.height_margin();

        let floor = bbox.min_along(up.height_axis());
        let bottom = floor - height_margin;
        let top = floor + spec.clamp_height;

        // The Z-up case flips which side of the width axis is "back".
        let (back, front) = match up {
            UpAxis::YUp => (
                bbox.min_along(Axis::Z) - width_margin,
                bbox.max_along(Axis::Z) + width_margin,
            ),
            UpAxis::ZUp => (
                bbox.max_along(Axis::Y) + width_margin,
                bbox.min_along(Axis::Y) - width_margin,
            ),
        };

        let overhang = (bbox.extent(Axis::X) - spec.length) / 2.0;
        let left = bbox.min_along(Axis::X) + overhang;
        let right = bbox.max_along(Axis::X) - overhang;

        let height_plane = up.height_plane();
        let width_plane = up.width_plane();
        let set = PlaneOffsetSet {
            bottom: plane(JawSide::Bottom, height_plane, bottom),
            top: plane(JawSide::Top, height_plane, top),
            back: plane(JawSide::Back, width_plane, back),
            front: plane(JawSide::Front, width_plane, front),
            left: plane(JawSide::Left, BasePlane::YZ, left),
            right: plane(JawSide::Right, BasePlane::YZ, right),
        };
        debug!(?up, bottom, top, back, front, left, right, "computed jaw planes");
        Ok(set)
    }

    /// Checks each jaw field in order, stopping at the first failure.
    ///
    /// Every check is phrased as "holds" so that NaN and infinite values
    /// fail it.
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        let spec = &self.spec;
        let body_width = self.bbox.extent(self.up_axis.width_axis());

        if !positive(spec.length) {
            return Err(ValidationError::Length {
                length: spec.length,
            });
        }
        if !(positive(spec.width) && spec.width * 2.0 < body_width) {
            return Err(ValidationError::Width {
                width: spec.width,
                body_width,
            });
        }
        if !(positive(spec.clamp_width) && spec.clamp_width < spec.width) {
            return Err(ValidationError::ClampWidth {
                clamp_width: spec.clamp_width,
                width: spec.width,
            });
        }
        if !positive(spec.height) {
            return Err(ValidationError::Height {
                height: spec.height,
            });
        }
        if !(positive(spec.clamp_height) && spec.clamp_height < spec.height) {
            return Err(ValidationError::ClampHeight {
                clamp_height: spec.clamp_height,
                height: spec.height,
            });
        }
        Ok(())
    }
}

/// `true` for finite values greater than zero.
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn plane(side: JawSide, base: BasePlane, offset: f64) -> JawPlane {
    JawPlane { side, base, offset }
}
