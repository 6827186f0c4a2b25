//! Channel-validity detection
//!
//! A tick's signal is confirmed only once each of the first four channels
//! has shown a pulse above the detect threshold. Partial sets carry over
//! into the next tick; only a complete set clears the mask.

/// Number of channels that must be present to confirm the signal
pub const REQUIRED_CHANNELS: u8 = 4;

/// Counter decrement applied on each confirmed signal
pub const VALID_SIGNAL_DECAY: u16 = 20;

const FULL_MASK: u8 = (1 << REQUIRED_CHANNELS) - 1;

/// Bitmask of required channels seen with a valid pulse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelValidity {
    mask: u8,
}

impl ChannelValidity {
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Record one channel pulse
    ///
    /// Returns true when the required set is complete. The mask is cleared
    /// in that case.
    pub fn record(&mut self, channel: u8, pulse_us: u16, detect_threshold: u16) -> bool {
        if channel < REQUIRED_CHANNELS && pulse_us > detect_threshold {
            self.mask |= 1 << channel;
        }

        if self.mask == FULL_MASK {
            self.mask = 0;
            return true;
        }

        false
    }

    /// Raw mask, bit N set for channel N
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Check if a required channel has been seen since the last full set
    pub fn is_present(&self, channel: u8) -> bool {
        channel < REQUIRED_CHANNELS && self.mask & (1 << channel) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u16 = 985;

    #[test]
    fn test_full_set_confirms_and_clears() {
        let mut validity = ChannelValidity::new();
        assert!(!validity.record(0, 1500, THRESHOLD));
        assert!(!validity.record(1, 1500, THRESHOLD));
        assert!(!validity.record(2, 1500, THRESHOLD));
        assert!(validity.record(3, 1100, THRESHOLD));
        assert_eq!(validity.mask(), 0);
    }

    #[test]
    fn test_pulse_at_threshold_is_not_present() {
        let mut validity = ChannelValidity::new();
        validity.record(0, THRESHOLD, THRESHOLD);
        assert!(!validity.is_present(0));
        validity.record(0, THRESHOLD + 1, THRESHOLD);
        assert!(validity.is_present(0));
    }

    #[test]
    fn test_extra_channels_ignored() {
        let mut validity = ChannelValidity::new();
        for channel in 4..16 {
            assert!(!validity.record(channel, 1500, THRESHOLD));
        }
        assert_eq!(validity.mask(), 0);
    }

    #[test]
    fn test_partial_set_carries_over() {
        let mut validity = ChannelValidity::new();

        // First tick: throttle channel missing
        validity.record(0, 1500, THRESHOLD);
        validity.record(1, 1500, THRESHOLD);
        validity.record(2, 1500, THRESHOLD);
        validity.record(3, 900, THRESHOLD);
        assert_eq!(validity.mask(), 0b0111);

        // Next tick: only throttle needed to complete the set
        assert!(validity.record(3, 1200, THRESHOLD));
    }

    #[test]
    fn test_repeated_channel_does_not_complete() {
        let mut validity = ChannelValidity::new();
        for _ in 0..10 {
            assert!(!validity.record(2, 1500, THRESHOLD));
        }
        assert_eq!(validity.mask(), 0b0100);
    }
}
