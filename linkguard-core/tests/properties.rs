//! Property tests for the failsafe counter and response rules

use linkguard_core::arming::ArmingState;
use linkguard_core::config::{FailsafeConfig, RxConfig, MAX_DELAY};
use linkguard_core::failsafe::VALID_SIGNAL_DECAY;
use linkguard_core::{Failsafe, FailsafeMonitor};
use proptest::prelude::*;

const DETECT_THRESHOLD: u16 = 985;

fn monitor(delay: u8, off_delay: u8) -> FailsafeMonitor {
    let mut monitor = FailsafeMonitor::new();
    monitor.init(RxConfig::default()).unwrap();
    monitor
        .use_config(FailsafeConfig {
            detect_threshold: DETECT_THRESHOLD,
            delay,
            off_delay,
            throttle: 1200,
        })
        .unwrap();
    monitor
}

fn arming(armed: bool) -> ArmingState {
    let mut arming = ArmingState::new();
    arming.update_switch(false);
    if armed {
        arming.update_switch(true);
    }
    arming
}

/// Strategy for the configurable delays (0.1 s units)
fn delay_strategy() -> impl Strategy<Value = u8> {
    0..=MAX_DELAY
}

/// Strategy for one tick's decoded pulses (0-8 channels, 800-2200 µs)
fn frame_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(800u16..2200, 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Without a confirmed signal the counter rises by exactly one per tick
    #[test]
    fn prop_counter_rises_without_signal(
        delay in delay_strategy(),
        off_delay in delay_strategy(),
        missing in 0u8..4,
        frames in prop::collection::vec(frame_strategy(), 1..300),
    ) {
        let mut monitor = monitor(delay, off_delay);
        let mut arming = arming(true);
        let mut rc_data = [1500u16; 8];

        for (tick, mut frame) in frames.into_iter().enumerate() {
            // One required channel never shows a valid pulse
            if let Some(pulse) = frame.get_mut(missing as usize) {
                *pulse = DETECT_THRESHOLD;
            }
            monitor.run_cycle(&frame, &mut rc_data, &mut arming).unwrap();
            prop_assert_eq!(monitor.get_counter() as usize, tick + 1);
        }
    }

    /// A full valid set decays the counter by 20, never below zero
    #[test]
    fn prop_valid_set_decays_counter(
        lost_ticks in 0u16..400,
        pulses in prop::array::uniform4(DETECT_THRESHOLD + 1..2200),
    ) {
        let mut monitor = monitor(10, 200);
        for _ in 0..lost_ticks {
            monitor.increment_counter().unwrap();
        }

        let mut confirmed = false;
        for (channel, &pulse) in pulses.iter().enumerate() {
            confirmed = monitor.check_pulse(channel as u8, pulse).unwrap();
        }

        prop_assert!(confirmed);
        prop_assert_eq!(
            monitor.get_counter(),
            lost_ticks.saturating_sub(VALID_SIGNAL_DECAY)
        );
    }

    /// Landing and disarm fire exactly when their conditions hold
    #[test]
    fn prop_response_matches_thresholds(
        delay in delay_strategy(),
        off_delay in delay_strategy(),
        lost_ticks in 0u16..2200,
        armed in any::<bool>(),
    ) {
        let mut monitor = monitor(delay, off_delay);
        let mut arming = arming(armed);
        let mut rc_data = [1700u16; 8];

        for _ in 0..lost_ticks {
            monitor.increment_counter().unwrap();
        }
        let response = monitor.update_state(&mut rc_data, &mut arming).unwrap();

        let landing_threshold = 5 * delay as u16;
        let disarm_threshold = 5 * (delay as u16 + off_delay as u16);
        let elapsed = lost_ticks > landing_threshold;

        prop_assert_eq!(response.forced_landing, elapsed && armed);
        prop_assert_eq!(
            response.forced_disarm,
            elapsed && (lost_ticks > disarm_threshold || !armed)
        );
        prop_assert_eq!(monitor.get_event_count(), u32::from(response.forced_landing));
        if response.forced_disarm {
            prop_assert!(arming.is_rearm_locked_out());
        }
    }

    /// Every armed tick past the guard time counts as an event
    #[test]
    fn prop_event_count_per_landing_tick(
        delay in 0u8..20,
        off_delay in 0u8..20,
        ticks in 0u16..300,
    ) {
        let mut monitor = monitor(delay, off_delay);
        let mut arming = arming(true);
        let mut rc_data = [1500u16; 8];

        for _ in 0..ticks {
            monitor.run_cycle(&[], &mut rc_data, &mut arming).unwrap();
        }

        // Landing runs from the first tick past the guard time through the
        // tick that also disarms
        let first = 5 * delay as u16 + 1;
        let last = ticks.min(5 * (delay as u16 + off_delay as u16) + 1);
        let expected = if last >= first { last - first + 1 } else { 0 };
        prop_assert_eq!(monitor.get_event_count(), u32::from(expected));
    }

    /// Rebinding the thresholds clears the counter and keeps the event count
    #[test]
    fn prop_use_config_resets_counter_only(
        delay in delay_strategy(),
        ticks in 0u16..400,
    ) {
        let mut monitor = monitor(delay, 200);
        let mut arming = arming(true);
        let mut rc_data = [1500u16; 8];

        for _ in 0..ticks {
            monitor.run_cycle(&[], &mut rc_data, &mut arming).unwrap();
        }
        let events = monitor.get_event_count();

        monitor.use_config(FailsafeConfig::default()).unwrap();
        prop_assert_eq!(monitor.get_counter(), 0);
        prop_assert!(monitor.is_idle());
        prop_assert_eq!(monitor.get_event_count(), events);
    }
}
