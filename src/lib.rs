//! Construction planes for vise soft jaws.
//!
//! Given a part's bounding box and the jaw stock to cut, [`JawPlanes`]
//! computes the six offset planes (bottom, top, back, front, left,
//! right) that bound the jaw material. [`GenerateSoftJaws`] drives a
//! host application through the [`host`] traits: it creates those planes
//! and hands them to the host's boundary fill.
//!
//! All lengths are in centimeters.

pub mod error;
pub mod geometry;
pub mod host;
pub mod jaw;
pub mod math;
pub mod operations;

pub use error::{Result, SoftJawsError};
pub use operations::{GenerateSoftJaws, JawPlanes};
