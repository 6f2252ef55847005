use std::fmt;

use crate::geometry::BasePlane;

/// One of the six faces bounding the jaw stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JawSide {
    Bottom,
    Top,
    Back,
    Front,
    Left,
    Right,
}

impl JawSide {
    /// All sides, in the order their planes are created.
    pub const ALL: [Self; 6] = [
        Self::Bottom,
        Self::Top,
        Self::Back,
        Self::Front,
        Self::Left,
        Self::Right,
    ];

    /// Display name given to the construction plane for this side.
    #[must_use]
    pub fn plane_name(self) -> &'static str {
        match self {
            Self::Bottom => "SoftJaws Bottom",
            Self::Top => "SoftJaws Top",
            Self::Back => "SoftJaws Back",
            Self::Front => "SoftJaws Front",
            Self::Left => "SoftJaws Left",
            Self::Right => "SoftJaws Right",
        }
    }
}

impl fmt::Display for JawSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Back => "back",
            Self::Front => "front",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// A construction plane request: `offset` centimeters from `base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JawPlane {
    /// Which face of the jaw stock this plane bounds.
    pub side: JawSide,
    /// Origin plane the offset is measured from.
    pub base: BasePlane,
    /// Signed distance along the base plane normal.
    pub offset: f64,
}

impl JawPlane {
    /// Display name for the plane.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.side.plane_name()
    }
}

/// The six planes bounding one set of soft jaws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneOffsetSet {
    /// Below the part by the jaw stock left under the grip face.
    pub bottom: JawPlane,
    /// Top of the grip face.
    pub top: JawPlane,
    /// Outer face of the back jaw.
    pub back: JawPlane,
    /// Outer face of the front jaw.
    pub front: JawPlane,
    /// Start of the jaw length along X.
    pub left: JawPlane,
    /// End of the jaw length along X.
    pub right: JawPlane,
}

impl PlaneOffsetSet {
    /// Returns the plane for `side`.
    #[must_use]
    pub fn get(&self, side: JawSide) -> &JawPlane {
        match side {
            JawSide::Bottom => &self.bottom,
            JawSide::Top => &self.top,
            JawSide::Back => &self.back,
            JawSide::Front => &self.front,
            JawSide::Left => &self.left,
            JawSide::Right => &self.right,
        }
    }

    /// Planes in creation order: bottom, top, back, front, left, right.
    #[must_use]
    pub fn planes(&self) -> [JawPlane; 6] {
        JawSide::ALL.map(|side| *self.get(side))
    }
}
