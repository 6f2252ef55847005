use slotmap::SlotMap;

use crate::geometry::{BasePlane, Plane};

use super::PlaneFactory;

slotmap::new_key_type! {
    /// Unique identifier for a construction plane.
    pub struct ConstructionPlaneId;
}

/// A named construction plane offset from one of the origin planes.
#[derive(Debug, Clone)]
pub struct ConstructionPlane {
    /// Display name.
    pub name: String,
    /// Origin plane the offset is measured from.
    pub base: BasePlane,
    /// Signed distance along the base plane normal, in centimeters.
    pub offset: f64,
    /// Resulting plane geometry.
    pub plane: Plane,
}

/// In-memory arena of construction planes.
#[derive(Debug, Default)]
pub struct ConstructionPlaneStore {
    planes: SlotMap<ConstructionPlaneId, ConstructionPlane>,
}

impl ConstructionPlaneStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the plane with the given ID, if any.
    #[must_use]
    pub fn get(&self, id: ConstructionPlaneId) -> Option<&ConstructionPlane> {
        self.planes.get(id)
    }

    /// Finds the first plane with the given display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<(ConstructionPlaneId, &ConstructionPlane)> {
        self.planes.iter().find(|(_, p)| p.name == name)
    }

    /// Number of planes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Returns `true` if the store holds no planes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl PlaneFactory for ConstructionPlaneStore {
    type Plane = ConstructionPlaneId;

    fn create_offset_plane(
        &mut self,
        base: BasePlane,
        offset: f64,
        name: &str,
    ) -> Result<ConstructionPlaneId, String> {
        if !offset.is_finite() {
            return Err(format!("offset {offset} is not a finite distance"));
        }
        Ok(self.planes.insert(ConstructionPlane {
            name: name.to_owned(),
            base,
            offset,
            plane: Plane::offset_from(base, offset),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn created_plane_is_positioned_and_named() {
        let mut store = ConstructionPlaneStore::new();
        let id = store
            .create_offset_plane(BasePlane::XY, 2.5, "SoftJaws Top")
            .unwrap();

        let cp = store.get(id).unwrap();
        assert_eq!(cp.name, "SoftJaws Top");
        assert_eq!(cp.base, BasePlane::XY);
        assert_relative_eq!(*cp.plane.normal(), Vector3::z());
        assert_relative_eq!(cp.plane.signed_distance(&Point3::new(7.0, -1.0, 2.5)), 0.0);
    }

    #[test]
    fn non_finite_offset_rejected() {
        let mut store = ConstructionPlaneStore::new();
        let result = store.create_offset_plane(BasePlane::YZ, f64::INFINITY, "bad");
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn find_by_name() {
        let mut store = ConstructionPlaneStore::new();
        store.create_offset_plane(BasePlane::YZ, 1.0, "a").unwrap();
        let b = store.create_offset_plane(BasePlane::XZ, 2.0, "b").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_name("b").map(|(id, _)| id), Some(b));
        assert!(store.find_by_name("c").is_none());
    }
}
