//! Seams to the host modeling application.
//!
//! The host owns body selection, construction plane creation and the
//! boundary fill that carves the jaws. These traits describe the narrow
//! slice of each that jaw generation needs; [`BodyStore`] and
//! [`ConstructionPlaneStore`] are in-memory implementations.

mod body_store;
mod plane_store;

pub use body_store::{BodyId, BodyStore};
pub use plane_store::{ConstructionPlane, ConstructionPlaneId, ConstructionPlaneStore};

use crate::error::Result;
use crate::geometry::{BasePlane, BoundingBox};

/// Looks up the bounding box of a solid body.
pub trait BoundingBoxProvider {
    /// Host handle for a body.
    type Body;

    /// Returns the axis-aligned bounding box of `body`, in centimeters.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not exist.
    fn bounding_box(&self, body: &Self::Body) -> Result<BoundingBox>;
}

/// Creates named offset construction planes.
pub trait PlaneFactory {
    /// Host handle for a created plane.
    type Plane;

    /// Creates a plane `offset` centimeters from `base` and names it.
    ///
    /// # Errors
    ///
    /// Returns an error (with a host-supplied reason) if the plane could
    /// not be created.
    fn create_offset_plane(
        &mut self,
        base: BasePlane,
        offset: f64,
        name: &str,
    ) -> std::result::Result<Self::Plane, String>;
}

/// Starts the host's boundary fill on a set of bounding planes.
///
/// The request is one-way: once launched, the host takes over and
/// nothing about the fill itself is reported back.
pub trait BoundaryFill {
    /// Host handle for a plane.
    type Plane;

    /// Selects `planes` and launches the boundary fill.
    ///
    /// # Errors
    ///
    /// Returns a host-supplied reason if the fill command could not be
    /// started, e.g. the host does not provide one.
    fn launch(&mut self, planes: &[Self::Plane]) -> std::result::Result<(), String>;
}
