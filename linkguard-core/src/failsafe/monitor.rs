//! Failsafe monitor implementation
//!
//! Owns the elapsed-loss counter, the forced-landing event count and the
//! channel-validity mask. One instance exists per aircraft and is driven
//! from the control loop once per tick.

use heapless::HistoryBuffer;

use super::detector::{ChannelValidity, VALID_SIGNAL_DECAY};
use super::phase::{Phase, PhaseChange};
use super::status::FailsafeStatus;
use crate::config::{FailsafeConfig, RxConfig};
use crate::error::FailsafeError;
use crate::traits::{ArmingControl, Axis, Failsafe, RcCommandOutput, STICK_AXES};

/// Number of phase changes kept for diagnostics
pub const PHASE_HISTORY_LEN: usize = 8;

/// Actions taken by one `update_state` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FailsafeResponse {
    /// Sticks were neutralized and landing throttle applied
    pub forced_landing: bool,
    /// Disarm and re-arm lockout were issued
    pub forced_disarm: bool,
}

impl FailsafeResponse {
    /// Check if any corrective action was taken
    pub fn is_active(&self) -> bool {
        self.forced_landing || self.forced_disarm
    }
}

/// RC link-loss failsafe monitor
///
/// Must be bound with [`FailsafeMonitor::init`] and
/// [`FailsafeMonitor::use_config`] (in either order) before any tick
/// operation. Unbound tick operations fail instead of acting on missing
/// thresholds.
#[derive(Debug, Clone)]
pub struct FailsafeMonitor {
    /// Ticks since the signal was last confirmed, decayed on confirmation
    counter: u16,
    /// Ticks on which forced landing was applied
    events: u32,
    /// Required channels seen since the last complete set
    validity: ChannelValidity,
    rx_config: Option<RxConfig>,
    config: Option<FailsafeConfig>,
    /// Phase observed at the last `update_state`, for the history only
    last_phase: Phase,
    history: HistoryBuffer<PhaseChange, PHASE_HISTORY_LEN>,
}

impl Default for FailsafeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FailsafeMonitor {
    /// Create an unbound monitor
    pub const fn new() -> Self {
        Self {
            counter: 0,
            events: 0,
            validity: ChannelValidity::new(),
            rx_config: None,
            config: None,
            last_phase: Phase::Idle,
            history: HistoryBuffer::new(),
        }
    }

    /// Bind the RC configuration and clear the event count
    ///
    /// May only be called once.
    pub fn init(&mut self, rx_config: RxConfig) -> Result<(), FailsafeError> {
        if self.rx_config.is_some() {
            return Err(FailsafeError::AlreadyInitialized);
        }
        rx_config.validate()?;

        self.rx_config = Some(rx_config);
        self.events = 0;
        info!("failsafe: rx config bound, mid_rc={=u16}", rx_config.mid_rc);
        Ok(())
    }

    /// Bind or rebind the failsafe thresholds
    ///
    /// Called on startup and whenever a different profile is selected.
    /// Clears the counter but keeps the event count. A rejected config
    /// leaves the previous binding and the counter untouched.
    pub fn use_config(&mut self, config: FailsafeConfig) -> Result<(), FailsafeError> {
        if let Err(e) = config.validate() {
            warn!("failsafe: rejected config: {}", e);
            return Err(e.into());
        }

        self.config = Some(config);
        self.reset();
        info!(
            "failsafe: thresholds landing={=u16} disarm={=u16}",
            config.landing_threshold(),
            config.disarm_threshold()
        );
        Ok(())
    }

    /// Check if both bindings are in place
    pub fn is_ready(&self) -> bool {
        self.rx_config.is_some() && self.config.is_some()
    }

    pub fn rx_config(&self) -> Option<&RxConfig> {
        self.rx_config.as_ref()
    }

    pub fn config(&self) -> Option<&FailsafeConfig> {
        self.config.as_ref()
    }

    /// Get the elapsed-loss counter
    pub fn get_counter(&self) -> u16 {
        self.counter
    }

    /// Get the number of ticks forced landing was applied
    pub fn get_event_count(&self) -> u32 {
        self.events
    }

    /// Get the channel-validity mask
    pub fn get_validity(&self) -> ChannelValidity {
        self.validity
    }

    /// Current phase for the given armed state
    pub fn phase(&self, armed: bool) -> Result<Phase, FailsafeError> {
        let (_, config) = self.bindings()?;
        Ok(Phase::derive(self.counter, armed, &config))
    }

    /// Snapshot for telemetry
    pub fn status(&self, armed: bool) -> Result<FailsafeStatus, FailsafeError> {
        let (_, config) = self.bindings()?;
        Ok(FailsafeStatus {
            phase: Phase::derive(self.counter, armed, &config),
            counter: self.counter,
            event_count: self.events,
            landing_threshold: config.landing_threshold(),
            disarm_threshold: config.disarm_threshold(),
        })
    }

    /// Recent phase changes, oldest first
    pub fn phase_history(&self) -> impl Iterator<Item = &PhaseChange> {
        self.history.oldest_ordered()
    }

    /// Run one full tick in the required order
    ///
    /// `pulses` holds the decoded pulse width of every channel the
    /// receiver reported this tick, indexed by channel. Each is passed to
    /// `check_pulse`, then the counter is incremented and the response
    /// applied.
    pub fn run_cycle<C, A>(
        &mut self,
        pulses: &[u16],
        commands: &mut C,
        arming: &mut A,
    ) -> Result<FailsafeResponse, FailsafeError>
    where
        C: RcCommandOutput + ?Sized,
        A: ArmingControl + ?Sized,
    {
        self.bindings()?;

        for (channel, &pulse_us) in pulses.iter().enumerate().take(u8::MAX as usize + 1) {
            self.check_pulse(channel as u8, pulse_us)?;
        }
        self.increment_counter()?;
        self.update_state(commands, arming)
    }

    fn bindings(&self) -> Result<(RxConfig, FailsafeConfig), FailsafeError> {
        let rx_config = self.rx_config.ok_or(FailsafeError::RxConfigMissing)?;
        let config = self.config.ok_or(FailsafeError::FailsafeConfigMissing)?;
        Ok((rx_config, config))
    }

    fn on_valid_data_received(&mut self) {
        self.counter = self.counter.saturating_sub(VALID_SIGNAL_DECAY);
    }

    fn track_phase(&mut self, armed: bool, config: &FailsafeConfig) {
        let phase = Phase::derive(self.counter, armed, config);
        if phase == self.last_phase {
            return;
        }

        match phase {
            Phase::ForcedLanding => warn!("failsafe: forced landing, counter={=u16}", self.counter),
            Phase::ForcedDisarm => error!("failsafe: forced disarm, counter={=u16}", self.counter),
            Phase::Idle => info!("failsafe: signal recovered"),
            Phase::Accumulating => debug!("failsafe: counting loss, counter={=u16}", self.counter),
        }

        self.history.write(PhaseChange {
            from: self.last_phase,
            to: phase,
            counter: self.counter,
        });
        self.last_phase = phase;
    }
}

impl Failsafe for FailsafeMonitor {
    fn reset(&mut self) {
        self.counter = 0;
    }

    fn is_idle(&self) -> bool {
        self.counter == 0
    }

    fn has_timer_elapsed(&self) -> Result<bool, FailsafeError> {
        let (_, config) = self.bindings()?;
        Ok(self.counter > config.landing_threshold())
    }

    fn should_force_landing(&self, armed: bool) -> Result<bool, FailsafeError> {
        Ok(self.has_timer_elapsed()? && armed)
    }

    fn should_have_caused_landing_by_now(&self) -> Result<bool, FailsafeError> {
        let (_, config) = self.bindings()?;
        Ok(self.counter > config.disarm_threshold())
    }

    fn increment_counter(&mut self) -> Result<(), FailsafeError> {
        self.bindings()?;
        self.counter = self.counter.saturating_add(1);
        Ok(())
    }

    fn update_state<C, A>(
        &mut self,
        commands: &mut C,
        arming: &mut A,
    ) -> Result<FailsafeResponse, FailsafeError>
    where
        C: RcCommandOutput + ?Sized,
        A: ArmingControl + ?Sized,
    {
        let (rx_config, config) = self.bindings()?;
        let armed = arming.is_armed();
        self.track_phase(armed, &config);

        let mut response = FailsafeResponse::default();

        if !self.has_timer_elapsed()? {
            return Ok(response);
        }

        if self.should_force_landing(armed)? {
            for axis in STICK_AXES {
                commands.set_command(axis, rx_config.mid_rc);
            }
            commands.set_command(Axis::Throttle, config.throttle);
            // Counted on every qualifying tick, not only on entry
            self.events = self.events.saturating_add(1);
            response.forced_landing = true;
        }

        if self.should_have_caused_landing_by_now()? || !armed {
            // Pilot must switch off before the link coming back can re-arm
            arming.disarm();
            arming.lock_out_rearm();
            response.forced_disarm = true;
        }

        Ok(response)
    }

    fn check_pulse(&mut self, channel: u8, pulse_us: u16) -> Result<bool, FailsafeError> {
        let (_, config) = self.bindings()?;

        if self.validity.record(channel, pulse_us, config.detect_threshold) {
            self.on_valid_data_received();
            return Ok(true);
        }

        Ok(false)
    }
}
