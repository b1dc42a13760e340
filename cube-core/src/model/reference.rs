//! The set of reference colors a slice is checked against.

use serde::{Deserialize, Serialize};

use super::Rgb;
use crate::config::{DEFAULT_REFERENCES, MAX_REFERENCES};
use crate::error::{CubeError, Result};

/// One reference color and whether its constraint applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSlot {
    pub color: Rgb,
    pub enabled: bool,
}

/// Up to three reference colors.
///
/// Slot 0 is always enabled; slots 1 and 2 can be toggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceSet {
    slots: [ReferenceSlot; MAX_REFERENCES],
}

impl Default for ReferenceSet {
    fn default() -> Self {
        let mut slots = DEFAULT_REFERENCES.map(|color| ReferenceSlot {
            color,
            enabled: false,
        });
        slots[0].enabled = true;
        Self { slots }
    }
}

impl ReferenceSet {
    /// A set with a single active reference color.
    pub fn single(color: Rgb) -> Self {
        let mut set = Self::default();
        set.slots[0].color = color;
        set
    }

    /// A set whose active colors are exactly `colors` (1 to 3 of them).
    pub fn from_colors(colors: &[Rgb]) -> Result<Self> {
        if colors.is_empty() || colors.len() > MAX_REFERENCES {
            return Err(CubeError::ReferenceCount {
                count: colors.len(),
            });
        }

        let mut set = Self::default();
        for (slot, &color) in set.slots.iter_mut().zip(colors) {
            slot.color = color;
            slot.enabled = true;
        }
        Ok(set)
    }

    /// All slots, active or not.
    pub fn slots(&self) -> &[ReferenceSlot; MAX_REFERENCES] {
        &self.slots
    }

    /// Replace the color of a slot.
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CubeError::InvalidReferenceIndex { index })?;
        slot.color = color;
        Ok(())
    }

    /// Enable or disable a slot. Slot 0 cannot be disabled.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<()> {
        if index == 0 && !enabled {
            return Err(CubeError::InvalidReferenceIndex { index });
        }
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CubeError::InvalidReferenceIndex { index })?;
        slot.enabled = enabled;
        Ok(())
    }

    /// Colors whose constraint currently applies. Never empty.
    pub fn active(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.slots.iter().filter(|s| s.enabled).map(|s| s.color)
    }

    /// Number of active colors.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.enabled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_only_primary_active() {
        let set = ReferenceSet::default();
        assert_eq!(set.active().collect::<Vec<_>>(), vec![Rgb::WHITE]);
        let slots = set.slots();
        assert_eq!(slots[1].color, Rgb::new(0, 255, 0));
        assert_eq!(slots[2].color, Rgb::new(255, 0, 0));
        assert!(slots[0].enabled && !slots[1].enabled && !slots[2].enabled);
    }

    #[test]
    fn test_primary_cannot_be_disabled() {
        let mut set = ReferenceSet::default();
        assert!(set.set_enabled(0, false).is_err());
        assert_eq!(set.active_count(), 1);
    }

    #[test]
    fn test_toggle_secondary() {
        let mut set = ReferenceSet::default();
        set.set_enabled(2, true).unwrap();
        assert_eq!(
            set.active().collect::<Vec<_>>(),
            vec![Rgb::WHITE, Rgb::new(255, 0, 0)]
        );
        set.set_enabled(2, false).unwrap();
        assert_eq!(set.active_count(), 1);
        assert!(set.set_enabled(3, true).is_err());
    }

    #[test]
    fn test_from_colors() {
        let set = ReferenceSet::from_colors(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert_eq!(
            set.active().collect::<Vec<_>>(),
            vec![Rgb::BLACK, Rgb::WHITE]
        );

        assert_eq!(
            ReferenceSet::from_colors(&[]),
            Err(CubeError::ReferenceCount { count: 0 })
        );
        assert!(ReferenceSet::from_colors(&[Rgb::BLACK; 4]).is_err());
    }
}
