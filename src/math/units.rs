//! Length units.
//!
//! All geometry in this crate is expressed in centimeters, the host's
//! internal length unit. User-facing values are converted at the edge.

/// Centimeters per inch.
pub const INCH_TO_CM: f64 = 2.54;

/// A display unit for lengths entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Millimeters.
    Millimeter,
    /// Centimeters (internal unit).
    #[default]
    Centimeter,
    /// Meters.
    Meter,
    /// Inches.
    Inch,
    /// Feet.
    Foot,
}

impl LengthUnit {
    /// Number of centimeters in one of this unit.
    #[must_use]
    pub fn cm_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => 0.1,
            Self::Centimeter => 1.0,
            Self::Meter => 100.0,
            Self::Inch => INCH_TO_CM,
            Self::Foot => INCH_TO_CM * 12.0,
        }
    }

    /// Converts `value` in this unit to centimeters.
    #[must_use]
    pub fn to_cm(self, value: f64) -> f64 {
        value * self.cm_per_unit()
    }

    /// Converts `value` in centimeters to this unit.
    #[must_use]
    pub fn from_cm(self, value: f64) -> f64 {
        value / self.cm_per_unit()
    }

    /// Unit abbreviation as shown next to a value.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }
}
