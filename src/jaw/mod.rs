mod inputs;
mod plane_set;
mod preset;
mod spec;

pub use inputs::JawInputs;
pub use plane_set::{JawPlane, JawSide, PlaneOffsetSet};
pub use preset::{JawDimensions, VisePreset};
pub use spec::JawSpec;
