use crate::error::InvalidPresetError;
use crate::math::LengthUnit;

use super::{JawDimensions, JawSpec, VisePreset};

/// Editable jaw fields, in centimeters, with the selected vise.
///
/// Defaults match a 6x1x2 inch jaw with a quarter inch grip face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JawInputs {
    /// Currently selected vise.
    pub preset: VisePreset,
    /// Jaw length along X.
    pub length: f64,
    /// Jaw stock thickness in the clamping direction.
    pub width: f64,
    /// Jaw stock height.
    pub height: f64,
    /// Depth of the grip face cut into the width.
    pub clamp_width: f64,
    /// Depth of the grip face cut into the height.
    pub clamp_height: f64,
}

impl Default for JawInputs {
    fn default() -> Self {
        let inch = |v| LengthUnit::Inch.to_cm(v);
        Self {
            preset: VisePreset::Generic,
            length: inch(6.0),
            width: inch(1.0),
            height: inch(2.0),
            clamp_width: inch(0.25),
            clamp_height: inch(0.25),
        }
    }
}

impl JawInputs {
    /// Creates inputs from values entered in `unit`.
    #[must_use]
    pub fn in_unit(
        unit: LengthUnit,
        dims: JawDimensions,
        clamp_width: f64,
        clamp_height: f64,
    ) -> Self {
        Self {
            preset: VisePreset::Generic,
            length: unit.to_cm(dims.length),
            width: unit.to_cm(dims.width),
            height: unit.to_cm(dims.height),
            clamp_width: unit.to_cm(clamp_width),
            clamp_height: unit.to_cm(clamp_height),
        }
    }

    /// Selects the vise at `index` and loads its jaw size.
    ///
    /// Length, width and height are overwritten when the vise has a known
    /// size; the generic vise leaves them untouched. Clamp fields are
    /// never changed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPresetError`] for an unknown index; the inputs are
    /// left unchanged.
    pub fn select_preset(&mut self, index: usize) -> Result<(), InvalidPresetError> {
        let preset = VisePreset::from_index(index)?;
        self.preset = preset;
        if let Some(dims) = preset.resolve() {
            let cm = dims.to_cm();
            self.length = cm.length;
            self.width = cm.width;
            self.height = cm.height;
        }
        Ok(())
    }

    /// The jaw spec described by the current field values.
    #[must_use]
    pub fn to_spec(&self) -> JawSpec {
        JawSpec::new(
            self.length,
            self.width,
            self.height,
            self.clamp_width,
            self.clamp_height,
        )
    }
}
