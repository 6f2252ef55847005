use crate::math::{Point3, Vector3};

/// A principal coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the component of `p` along this axis.
    #[must_use]
    pub fn component(self, p: &Point3) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
            Self::Z => p.z,
        }
    }

    /// Unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }
}

/// One of the three origin construction planes of a design.
///
/// Offsets are measured along the plane normal, which is the axis the
/// plane does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasePlane {
    XY,
    XZ,
    YZ,
}

impl BasePlane {
    /// The axis perpendicular to this plane.
    #[must_use]
    pub fn normal_axis(self) -> Axis {
        match self {
            Self::XY => Axis::Z,
            Self::XZ => Axis::Y,
            Self::YZ => Axis::X,
        }
    }

    /// The two in-plane axes `(u, v)`, ordered so that `u × v` is the
    /// positive normal axis.
    #[must_use]
    pub fn in_plane_axes(self) -> (Axis, Axis) {
        match self {
            Self::XY => (Axis::X, Axis::Y),
            Self::XZ => (Axis::Z, Axis::X),
            Self::YZ => (Axis::Y, Axis::Z),
        }
    }
}

/// Which world axis points up in the design.
///
/// Length always runs along X. The up axis decides which of Y and Z is
/// the jaw height direction and which is the width (clamping) direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpAxis {
    YUp,
    #[default]
    ZUp,
}

impl UpAxis {
    /// Builds the convention from a host "is Y up" flag.
    #[must_use]
    pub fn from_y_up(is_y_up: bool) -> Self {
        if is_y_up {
            Self::YUp
        } else {
            Self::ZUp
        }
    }

    /// Axis along which the jaws clamp the part.
    #[must_use]
    pub fn width_axis(self) -> Axis {
        match self {
            Self::YUp => Axis::Z,
            Self::ZUp => Axis::Y,
        }
    }

    /// Vertical axis.
    #[must_use]
    pub fn height_axis(self) -> Axis {
        match self {
            Self::YUp => Axis::Y,
            Self::ZUp => Axis::Z,
        }
    }

    /// Base plane for bottom/top offsets (normal to the height axis).
    #[must_use]
    pub fn height_plane(self) -> BasePlane {
        match self {
            Self::YUp => BasePlane::XZ,
            Self::ZUp => BasePlane::XY,
        }
    }

    /// Base plane for back/front offsets (normal to the width axis).
    #[must_use]
    pub fn width_plane(self) -> BasePlane {
        match self {
            Self::YUp => BasePlane::XY,
            Self::ZUp => BasePlane::XZ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_plane_normals() {
        assert_eq!(BasePlane::XY.normal_axis(), Axis::Z);
        assert_eq!(BasePlane::XZ.normal_axis(), Axis::Y);
        assert_eq!(BasePlane::YZ.normal_axis(), Axis::X);
    }

    #[test]
    fn in_plane_axes_are_right_handed() {
        for base in [BasePlane::XY, BasePlane::XZ, BasePlane::YZ] {
            let (u, v) = base.in_plane_axes();
            assert_eq!(u.unit().cross(&v.unit()), base.normal_axis().unit());
        }
    }

    #[test]
    fn plane_tags_are_normal_to_their_axis() {
        for up in [UpAxis::YUp, UpAxis::ZUp] {
            assert_eq!(up.height_plane().normal_axis(), up.height_axis());
            assert_eq!(up.width_plane().normal_axis(), up.width_axis());
        }
    }

    #[test]
    fn y_up_flag() {
        assert_eq!(UpAxis::from_y_up(true), UpAxis::YUp);
        assert_eq!(UpAxis::from_y_up(false), UpAxis::ZUp);
        assert_eq!(UpAxis::default(), UpAxis::ZUp);
    }
}
