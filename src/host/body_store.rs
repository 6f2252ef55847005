use slotmap::SlotMap;

use crate::error::{BodyError, Result};
use crate::geometry::BoundingBox;

use super::BoundingBoxProvider;

slotmap::new_key_type! {
    /// Unique identifier for a body in the body store.
    pub struct BodyId;
}

/// In-memory set of bodies, each known only by its bounding box.
#[derive(Debug, Default)]
pub struct BodyStore {
    bodies: SlotMap<BodyId, BoundingBox>,
}

impl BodyStore {
    /// Creates a new, empty body store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body and returns its ID.
    pub fn add_body(&mut self, bbox: BoundingBox) -> BodyId {
        self.bodies.insert(bbox)
    }

    /// Removes a body, returning its bounding box if it existed.
    pub fn remove_body(&mut self, id: BodyId) -> Option<BoundingBox> {
        self.bodies.remove(id)
    }

    /// Number of bodies in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if the store holds no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl BoundingBoxProvider for BodyStore {
    type Body = BodyId;

    fn bounding_box(&self, body: &BodyId) -> Result<BoundingBox> {
        self.bodies
            .get(*body)
            .copied()
            .ok_or_else(|| BodyError::NotFound(format!("{body:?}")).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SoftJawsError;
    use crate::math::Point3;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).unwrap()
    }

    #[test]
    fn added_body_is_found() {
        let mut store = BodyStore::new();
        let id = store.add_body(unit_box());
        assert_eq!(store.len(), 1);
        assert_eq!(store.bounding_box(&id).unwrap(), unit_box());
    }

    #[test]
    fn removed_body_is_not_found() {
        let mut store = BodyStore::new();
        let id = store.add_body(unit_box());
        store.remove_body(id);
        assert!(store.is_empty());
        assert!(matches!(
            store.bounding_box(&id),
            Err(SoftJawsError::Body(BodyError::NotFound(_)))
        ));
    }
}
