use crate::math::{Point3, Vector3};

use super::BasePlane;

/// An infinite plane in 3D space.
///
/// Defined by an origin point, and two orthogonal direction vectors
/// (`u_dir`, `v_dir`). The normal is `u_dir × v_dir`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// The plane parallel to `base`, shifted `offset` along its normal.
    #[must_use]
    pub fn offset_from(base: BasePlane, offset: f64) -> Self {
        let (u, v) = base.in_plane_axes();
        let normal = base.normal_axis().unit();
        Self {
            origin: Point3::origin() + normal * offset,
            u_dir: u.unit(),
            v_dir: v.unit(),
            normal,
        }
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (*point - self.origin).dot(&self.normal)
    }
}
