use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::Axis;

/// An axis-aligned bounding box, in centimeters.
///
/// Corners are finite and `min <= max` on every axis; the only way to
/// build one is through [`BoundingBox::new`] or [`BoundingBox::from_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Point3,
    max: Point3,
}

impl BoundingBox {
    /// Creates a bounding box from its two corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if any coordinate is not finite
    /// or `min` exceeds `max` on some axis.
    pub fn new(min: Point3, max: Point3) -> Result<Self> {
        if min.iter().chain(max.iter()).any(|c| !c.is_finite()) {
            return Err(GeometryError::Degenerate("non-finite corner".into()).into());
        }
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if axis.component(&min) > axis.component(&max) {
                return Err(
                    GeometryError::Degenerate(format!("min exceeds max along {axis:?}")).into(),
                );
            }
        }
        Ok(Self { min, max })
    }

    /// Computes the smallest box enclosing `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `points` is empty or holds
    /// a non-finite coordinate.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| GeometryError::Degenerate("no points".into()))?;
        let (min, max) = iter.fold((*first, *first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        });
        Self::new(min, max)
    }

    /// Minimum corner of the bounding box.
    #[must_use]
    pub fn min(&self) -> &Point3 {
        &self.min
    }

    /// Maximum corner of the bounding box.
    #[must_use]
    pub fn max(&self) -> &Point3 {
        &self.max
    }

    /// Lower bound along `axis`.
    #[must_use]
    pub fn min_along(&self, axis: Axis) -> f64 {
        axis.component(&self.min)
    }

    /// Upper bound along `axis`.
    #[must_use]
    pub fn max_along(&self, axis: Axis) -> f64 {
        axis.component(&self.max)
    }

    /// Size of the box along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max_along(axis) - self.min_along(axis)
    }

    /// Size of the box along all three axes.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn extents_per_axis() {
        let bbox = BoundingBox::new(p(-1.0, 0.0, 2.0), p(3.0, 5.0, 2.5)).unwrap();
        assert_relative_eq!(bbox.extent(Axis::X), 4.0);
        assert_relative_eq!(bbox.extent(Axis::Y), 5.0);
        assert_relative_eq!(bbox.extent(Axis::Z), 0.5);
        assert_relative_eq!(bbox.size(), Vector3::new(4.0, 5.0, 0.5));
    }

    #[test]
    fn inverted_corners_rejected() {
        let result = BoundingBox::new(p(0.0, 1.0, 0.0), p(1.0, 0.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_rejected() {
        let result = BoundingBox::new(p(0.0, 0.0, f64::NAN), p(1.0, 1.0, 1.0));
        assert!(result.is_err());
        let result = BoundingBox::new(p(0.0, 0.0, 0.0), p(f64::INFINITY, 1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn extents_are_never_negative() {
        let bbox = BoundingBox::new(p(-5.0, -1.0, 2.0), p(-4.0, 3.0, 2.0)).unwrap();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert!(bbox.extent(axis) >= 0.0);
            assert!(bbox.min_along(axis) <= bbox.max_along(axis));
        }
    }

    #[test]
    fn flat_box_allowed() {
        let bbox = BoundingBox::new(p(0.0, 0.0, 1.0), p(2.0, 2.0, 1.0)).unwrap();
        assert_relative_eq!(bbox.extent(Axis::Z), 0.0);
    }

    #[test]
    fn from_points_encloses_all() {
        let pts = [p(1.0, -2.0, 0.5), p(-3.0, 4.0, 0.0), p(0.0, 0.0, 7.0)];
        let bbox = BoundingBox::from_points(&pts).unwrap();
        assert_eq!(*bbox.min(), p(-3.0, -2.0, 0.0));
        assert_eq!(*bbox.max(), p(1.0, 4.0, 7.0));
    }

    #[test]
    fn from_points_empty_fails() {
        let pts: [Point3; 0] = [];
        assert!(BoundingBox::from_points(&pts).is_err());
    }
}
