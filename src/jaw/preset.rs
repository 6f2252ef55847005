use crate::error::InvalidPresetError;
use crate::math::INCH_TO_CM;

/// Jaw stock dimensions: length x width x height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JawDimensions {
    /// Along the vise jaw (X).
    pub length: f64,
    /// Jaw thickness in the clamping direction.
    pub width: f64,
    /// Vertical size of the jaw.
    pub height: f64,
}

impl JawDimensions {
    /// Creates a new set of dimensions.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Converts dimensions given in inches to centimeters.
    #[must_use]
    pub fn to_cm(self) -> Self {
        Self::new(
            self.length * INCH_TO_CM,
            self.width * INCH_TO_CM,
            self.height * INCH_TO_CM,
        )
    }
}

/// A known vise model whose jaw size can seed the jaw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisePreset {
    /// No particular vise; user-supplied dimensions stand.
    #[default]
    Generic,
    Kurt6x1x2,
    Kurt6x2x2,
    Orange6x1x2,
    Orange6x2x2,
}

impl VisePreset {
    /// All presets, in selection-list order.
    pub const ALL: [Self; 5] = [
        Self::Generic,
        Self::Kurt6x1x2,
        Self::Kurt6x2x2,
        Self::Orange6x1x2,
        Self::Orange6x2x2,
    ];

    /// Looks up a preset by its position in the selection list.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPresetError`] if `index` is past the last preset.
    pub fn from_index(index: usize) -> Result<Self, InvalidPresetError> {
        Self::ALL.get(index).copied().ok_or(InvalidPresetError {
            index,
            max: Self::ALL.len() - 1,
        })
    }

    /// Position of this preset in the selection list.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label shown in the selection list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Kurt6x1x2 => "Kurt 6x1x2",
            Self::Kurt6x2x2 => "Kurt 6x2x2",
            Self::Orange6x1x2 => "Orange 6x1x2",
            Self::Orange6x2x2 => "Orange 6x2x2",
        }
    }

    /// Default jaw dimensions for this vise, in inches.
    ///
    /// Returns `None` for [`VisePreset::Generic`], meaning the current
    /// values should be kept.
    #[must_use]
    pub fn resolve(self) -> Option<JawDimensions> {
        match self {
            Self::Generic => None,
            Self::Kurt6x1x2 | Self::Orange6x1x2 => Some(JawDimensions::new(6.0, 1.0, 2.0)),
            Self::Kurt6x2x2 | Self::Orange6x2x2 => Some(JawDimensions::new(6.0, 2.0, 2.0)),
        }
    }
}
