pub mod units;

pub use units::{LengthUnit, INCH_TO_CM};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
