mod generate;
mod jaw_planes;

pub use generate::GenerateSoftJaws;
pub use jaw_planes::JawPlanes;
