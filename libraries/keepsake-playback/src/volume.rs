//! Volume control
//!
//! The widget slider works in whole percent (0-100). The media element
//! applies its own perceptual curve, so the gain handed to it is linear.

/// Volume level in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,
}

impl Volume {
    /// Create a volume, clamping to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Media element volume in `[0, 1]`
    pub fn gain(&self) -> f64 {
        f64::from(self.level) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(80);
        assert_eq!(vol.level(), 80);
        assert_eq!(Volume::default().level(), 70);
    }

    #[test]
    fn set_volume_level() {
        let mut vol = Volume::new(50);
        vol.set_level(75);
        assert_eq!(vol.level(), 75);

        // Clamp to 100
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn gain_is_linear_percent() {
        assert_eq!(Volume::new(0).gain(), 0.0);
        assert_eq!(Volume::new(70).gain(), 0.7);
        assert_eq!(Volume::new(100).gain(), 1.0);
    }
}
