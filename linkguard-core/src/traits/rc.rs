//! RC command values consumed by the control loop

/// Control axes carried in the first four RC channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Roll = 0,
    Pitch = 1,
    Yaw = 2,
    Throttle = 3,
}

/// Axes held at neutral during forced landing
pub const STICK_AXES: [Axis; 3] = [Axis::Roll, Axis::Pitch, Axis::Yaw];

impl Axis {
    /// Channel index of this axis
    pub fn channel(self) -> usize {
        self as usize
    }
}

/// Per-axis command values read by the stabilization/mixing stage
///
/// Writes are synchronous and take effect on the same tick.
pub trait RcCommandOutput {
    /// Overwrite the commanded value for one axis (µs)
    fn set_command(&mut self, axis: Axis, value: u16);
}

impl RcCommandOutput for [u16] {
    fn set_command(&mut self, axis: Axis, value: u16) {
        // Short buffers simply have no slot for this axis
        if let Some(slot) = self.get_mut(axis.channel()) {
            *slot = value;
        }
    }
}

impl<const N: usize> RcCommandOutput for [u16; N] {
    fn set_command(&mut self, axis: Axis, value: u16) {
        self.as_mut_slice().set_command(axis, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_command_write() {
        let mut rc_data = [1000u16; 8];
        rc_data.set_command(Axis::Yaw, 1500);
        rc_data.set_command(Axis::Throttle, 1200);
        assert_eq!(rc_data[2], 1500);
        assert_eq!(rc_data[3], 1200);
        assert_eq!(rc_data[4], 1000);
    }

    #[test]
    fn test_short_buffer_ignores_missing_axis() {
        let mut rc_data = [1000u16; 2];
        rc_data.set_command(Axis::Throttle, 1200);
        assert_eq!(rc_data, [1000, 1000]);
    }
}
