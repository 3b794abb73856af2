/// Per-photo edit parameters
///
/// This struct stores every adjustment the user has made to a photo inside
/// its page slot. It lives on the photo itself so the values survive
/// re-pagination, and it can be serialized to JSON for a future project
/// save format. All edits are non-destructive.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCALE, MIN_SCALE};

/// All edit parameters for one photo
///
/// `scale` and `offset` position the photo inside its fixed slot;
/// `brightness` and `contrast` adjust the rendered pixels. Setters report
/// whether they actually changed anything so callers can track dirty state
/// without comparing whole structs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EditState {
    /// Uniform magnification factor (0.5 to 3.0)
    /// - 1.0 = the photo exactly fills its slot
    pub scale: f32,

    /// Horizontal translation within the slot, in points
    /// - Unbounded on purpose: panning past the slot edge reveals
    ///   a different part of the oversized source
    pub offset_x: f32,

    /// Vertical translation within the slot, in points
    pub offset_y: f32,

    /// Brightness adjustment (-1.0 to +1.0)
    /// - 0.0 = no adjustment
    pub brightness: f32,

    /// Contrast multiplier (0.5 to 2.0)
    /// - 1.0 = no adjustment
    pub contrast: f32,
}

impl Default for EditState {
    /// Create default edit parameters (photo exactly fills its slot, untouched)
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            brightness: 0.0,
            contrast: 1.0,
        }
    }
}

impl EditState {
    /// Create new default edit parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scale, clamped to the allowed zoom range.
    /// Returns true if the stored value changed.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        if clamped == self.scale {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Set the offset. No clamping: panning beyond the slot is allowed.
    /// Returns true if the stored value changed.
    pub fn set_offset(&mut self, x: f32, y: f32) -> bool {
        if x == self.offset_x && y == self.offset_y {
            return false;
        }
        self.offset_x = x;
        self.offset_y = y;
        true
    }

    /// Set the brightness adjustment, clamped to [-1, 1].
    /// Returns true if the stored value changed.
    pub fn set_brightness(&mut self, brightness: f32) -> bool {
        let clamped = brightness.clamp(-1.0, 1.0);
        if clamped == self.brightness {
            return false;
        }
        self.brightness = clamped;
        true
    }

    /// Set the contrast multiplier, clamped to [0.5, 2.0].
    /// Returns true if the stored value changed.
    pub fn set_contrast(&mut self, contrast: f32) -> bool {
        let clamped = contrast.clamp(0.5, 2.0);
        if clamped == self.contrast {
            return false;
        }
        self.contrast = clamped;
        true
    }

    /// True when the photo sits exactly in its slot with no adjustments
    pub fn is_unedited(&self) -> bool {
        *self == Self::default()
    }

    /// True when scale and offset are at identity (pixel adjustments may differ)
    pub fn is_identity_transform(&self) -> bool {
        self.scale == 1.0 && self.offset_x == 0.0 && self.offset_y == 0.0
    }

    /// True when brightness or contrast differ from their defaults
    pub fn has_pixel_adjustments(&self) -> bool {
        self.brightness != 0.0 || self.contrast != 1.0
    }

    /// Reset all adjustments to default (no edits)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert to a JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unedited() {
        let edit = EditState::default();
        assert!(edit.is_unedited());
        assert!(edit.is_identity_transform());
        assert!(!edit.has_pixel_adjustments());
    }

    #[test]
    fn test_setters_report_changes() {
        let mut edit = EditState::default();

        assert!(edit.set_scale(1.5));
        assert!(!edit.set_scale(1.5));

        assert!(edit.set_offset(10.0, -4.0));
        assert!(!edit.set_offset(10.0, -4.0));

        assert!(edit.set_brightness(0.2));
        assert!(!edit.set_brightness(0.2));

        assert!(edit.set_contrast(1.3));
        assert!(!edit.set_contrast(1.3));
    }

    #[test]
    fn test_scale_setter_clamps() {
        let mut edit = EditState::default();

        edit.set_scale(100.0);
        assert_eq!(edit.scale, MAX_SCALE);

        edit.set_scale(-3.0);
        assert_eq!(edit.scale, MIN_SCALE);

        // Clamping to the value already stored is not a change
        assert!(!edit.set_scale(0.1));
    }

    #[test]
    fn test_serialization() {
        let mut edit = EditState::default();
        edit.set_scale(1.5);
        edit.set_offset(20.0, -7.5);
        edit.set_brightness(-0.1);

        // Serialize to JSON
        let json = edit.to_json().unwrap();

        // Deserialize back
        let restored = EditState::from_json(&json).unwrap();

        assert_eq!(edit, restored);
        assert!(!restored.is_unedited());
    }

    #[test]
    fn test_reset() {
        let mut edit = EditState::default();
        edit.set_scale(2.0);
        edit.set_offset(5.0, 5.0);
        edit.set_contrast(1.8);

        assert!(!edit.is_unedited());

        edit.reset();

        assert!(edit.is_unedited());
    }
}
