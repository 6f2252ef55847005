mod axis;
mod bounding_box;
mod plane;

pub use axis::{Axis, BasePlane, UpAxis};
pub use bounding_box::BoundingBox;
pub use plane::Plane;
