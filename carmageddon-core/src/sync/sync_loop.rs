//! The synchronization loop itself

use carmageddon_display::DrawSurface;
use carmageddon_hal::{AnalogInput, Serial};
use carmageddon_protocol::{parse_inbound, ButtonMask, LineAssembler, OutboundReport};

use super::report::{InboundOutcome, SendOutcome, StartupReport, TickReport};
use crate::config::TimingConfig;
use crate::output::{LampDriver, LampMask, SegmentReadout};
use crate::render;
use crate::state::VehicleState;
use crate::timing::Throttle;
use crate::traits::PanelModule;

/// Most link bytes consumed by one tick
pub const MAX_BYTES_PER_TICK: usize = 64;

/// Startup banner when the OLED is working
const BANNER_READY: &str = "---";

/// Startup banner when the OLED is missing
const BANNER_NO_OLED: &str = "OLEDFAIL";

/// Panel-to-simulation synchronization loop
///
/// Owns every collaborator. The OLED surface and the panel module are
/// optional; every step is defined for their absence.
pub struct SyncLoop<S, P, A, L> {
    surface: Option<S>,
    panel: Option<P>,
    sensor: A,
    link: L,

    state: VehicleState,
    assembler: LineAssembler,
    readout: SegmentReadout,
    lamps: LampDriver,
    tick_gate: Throttle,
    send_gate: Throttle,

    /// Last sensor sample that succeeded
    last_sample: Option<u16>,
    /// Values of the last report that reached the link
    last_sent_sensor: Option<u16>,
    last_sent_buttons: Option<ButtonMask>,
    /// Buttons seen by the previous tick
    last_buttons: ButtonMask,
}

impl<S, P, A, L> SyncLoop<S, P, A, L>
where
    S: DrawSurface,
    P: PanelModule,
    A: AnalogInput,
    L: Serial,
{
    /// Create a loop with nothing rendered, sent or sampled yet
    pub fn new(timing: &TimingConfig, surface: Option<S>, panel: Option<P>, sensor: A, link: L) -> Self {
        Self {
            surface,
            panel,
            sensor,
            link,
            state: VehicleState::new(),
            assembler: LineAssembler::new(),
            readout: SegmentReadout::new(),
            lamps: LampDriver::new(timing.lamp_interval_ms),
            tick_gate: Throttle::new(timing.tick_interval_ms),
            send_gate: Throttle::new(timing.send_interval_ms),
            last_sample: None,
            last_sent_sensor: None,
            last_sent_buttons: None,
            last_buttons: ButtonMask::NONE,
        }
    }

    /// Current vehicle state
    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// Buttons seen by the most recent tick
    pub fn last_buttons(&self) -> ButtonMask {
        self.last_buttons
    }

    /// Get access to the OLED surface
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Get access to the panel module
    pub fn panel(&self) -> Option<&P> {
        self.panel.as_ref()
    }

    /// Get mutable access to the OLED surface
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Get mutable access to the panel module
    pub fn panel_mut(&mut self) -> Option<&mut P> {
        self.panel.as_mut()
    }

    /// Get mutable access to the throttle sensor
    pub fn sensor_mut(&mut self) -> &mut A {
        &mut self.sensor
    }

    /// Get access to the link
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get mutable access to the link
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Bring the outputs to a known state
    ///
    /// Blanks the OLED, darkens the lamps and shows a banner on the digits
    /// telling whether the OLED is present. Never fails.
    pub fn begin(&mut self) -> StartupReport {
        let surface = self.surface.as_mut().map(|surface| {
            surface.clear()?;
            surface.present()
        });

        let banner = if self.surface.is_some() {
            BANNER_READY
        } else {
            BANNER_NO_OLED
        };
        if let Some(panel) = self.panel.as_mut() {
            LampMask::OFF.apply(panel);
        }
        self.readout.show_banner(self.panel.as_mut(), banner);

        StartupReport {
            surface,
            panel: self.panel.is_some(),
        }
    }

    /// Run one pass of the loop at `now_ms`
    ///
    /// Returns `None` without touching any hardware when called sooner than
    /// the tick interval after the previous pass.
    pub fn tick(&mut self, now_ms: u32) -> Option<TickReport> {
        if !self.tick_gate.poll(now_ms) {
            return None;
        }

        let sample = self.sample_sensor();
        let buttons = self
            .panel
            .as_mut()
            .map(|panel| ButtonMask::from_raw(panel.read_buttons()))
            .unwrap_or(ButtonMask::NONE);

        let inbound = self.receive();
        let render = render::render(self.surface.as_mut(), &mut self.state);
        let readout_written = self.readout.show_speed(self.panel.as_mut(), self.state.speed());
        let lamps_refreshed =
            self.lamps
                .refresh(self.panel.as_mut(), self.state.collectible_count(), now_ms);
        let send = self.send(sample, buttons, now_ms);

        self.last_buttons = buttons;

        Some(TickReport {
            inbound,
            render,
            readout_written,
            lamps_refreshed,
            send,
        })
    }

    /// Read the sensor, falling back to the previous sample on error
    fn sample_sensor(&mut self) -> Option<u16> {
        if let Ok(value) = self.sensor.read_raw() {
            self.last_sample = Some(value);
        }
        self.last_sample
    }

    /// Pull bytes until a line completes or the link runs dry
    fn receive(&mut self) -> InboundOutcome {
        for _ in 0..MAX_BYTES_PER_TICK {
            let byte = match self.link.poll_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => break,
                Err(_) => return InboundOutcome::LinkError,
            };
            let line = match self.assembler.feed(byte) {
                Ok(Some(line)) => line,
                Ok(None) => continue,
                Err(e) => return InboundOutcome::Rejected(e),
            };
            return match parse_inbound(&line) {
                Ok(message) => {
                    self.state.set_speed(message.speed);
                    self.state
                        .set_collectible_count(i64::from(message.collectible_count));
                    InboundOutcome::Applied(message)
                }
                Err(e) => InboundOutcome::Rejected(e),
            };
        }
        InboundOutcome::Idle
    }

    /// Report the inputs when the interval elapsed and something changed
    fn send(&mut self, sample: Option<u16>, buttons: ButtonMask, now_ms: u32) -> SendOutcome {
        if !self.send_gate.is_due(now_ms) {
            return SendOutcome::NotDue;
        }
        let Some(sensor_value) = sample else {
            return SendOutcome::NoSample;
        };
        let changed = self.last_sent_sensor != Some(sensor_value)
            || self.last_sent_buttons != Some(buttons);
        if !changed {
            return SendOutcome::Unchanged;
        }

        let report = OutboundReport::new(sensor_value, buttons);
        let Ok(line) = report.to_line() else {
            return SendOutcome::EncodeFailed;
        };
        if self.link.write_bytes(&line).is_err() {
            return SendOutcome::LinkError;
        }

        self.send_gate.mark(now_ms);
        self.last_sent_sensor = Some(sensor_value);
        self.last_sent_buttons = Some(buttons);
        SendOutcome::Sent(report)
    }
}
