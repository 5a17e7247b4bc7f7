use log::{debug, warn};
use steppwm_shared::{MachineState, PixelBuffer, SpindleOutput, SpindleSettings};

use crate::stepper::{Stepper, StepperDirection, StepperError};

/// Intensity bytes map 0..=255 onto the 0..=100 duty range.
const INTENSITY_PER_PERCENT: f32 = 2.55;

/// Clocks raster pixels out of a buffer with step pulses.
///
/// Exactly one pixel is consumed per full mechanical step, not per
/// microstep; the sample point sits in the center of each full-step
/// window to keep raster-phase artifacts down. Each sampled byte becomes
/// an immediate laser duty command.
pub struct RasterLaserStepper<OUT, MACHINE, PIXELS> {
    out: OUT,
    machine: MACHINE,
    pixels: PIXELS,
    settings: SpindleSettings,
    microsteps_per_step: i32,
    step_is_forward: bool,
    position: i32,
    speed: f32,
    enabled: bool,
}

impl<OUT, MACHINE, PIXELS> RasterLaserStepper<OUT, MACHINE, PIXELS> {
    pub fn new(out: OUT, machine: MACHINE, pixels: PIXELS, settings: SpindleSettings) -> Self {
        Self {
            out,
            machine,
            pixels,
            settings,
            microsteps_per_step: 1,
            step_is_forward: false,
            position: 0,
            speed: settings.speed,
            enabled: false,
        }
    }

    /// Raw step count, one per pulse regardless of microstep resolution.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Last computed output speed.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<OUT, MACHINE, PIXELS> Stepper for RasterLaserStepper<OUT, MACHINE, PIXELS>
where
    OUT: SpindleOutput,
    MACHINE: MachineState,
    PIXELS: PixelBuffer,
{
    fn set_microsteps(&mut self, microsteps: u8) {
        // Unlike the hobby-servo driver the raw value is the multiplier;
        // it paces sampling, not accumulation. Zero would leave no
        // full-step window to sample in.
        if microsteps == 0 {
            warn!("ignoring microstep resolution 0, keeping previous pacing");
            return;
        }
        self.microsteps_per_step = i32::from(microsteps);
    }

    fn set_power_level(&mut self, _power: f32) {
        // the sampled pixel intensity is the power
    }

    fn can_step(&mut self) -> bool {
        true
    }

    fn enable(&mut self) -> Result<(), StepperError> {
        if !self.enabled {
            self.enabled = true;
            debug!("raster laser stepper enabled");
            if self.machine.is_active_tool_laser() {
                self.out.set_immediate_speed(self.speed);
            }
        }
        Ok(())
    }

    fn disable(&mut self) -> Result<(), StepperError> {
        if self.enabled {
            self.enabled = false;
            debug!("raster laser stepper disabled");
            if self.machine.is_active_tool_laser() {
                self.out.set_immediate_speed(0.0);
            }
        }
        Ok(())
    }

    fn direction(&mut self, direction: StepperDirection) -> Result<(), StepperError> {
        self.step_is_forward = direction == StepperDirection::Cw;
        Ok(())
    }

    #[inline(always)]
    fn step_start(&mut self) -> Result<(), StepperError> {
        if !self.enabled {
            return Ok(());
        }

        if self.step_is_forward {
            self.position = self.position.wrapping_add(1);
        } else {
            self.position = self.position.wrapping_sub(1);
        }

        // Only tick once per full step, with the tick phase centered in
        // the full-step window rather than on its edge.
        let phase = self.position.wrapping_add(self.microsteps_per_step / 2);
        if phase % self.microsteps_per_step != 0 {
            return Ok(());
        }
        if !self.machine.is_active_tool_laser() {
            return Ok(());
        }

        // An exhausted buffer skips the sample entirely; the cursor only
        // advances on sampling edges.
        if let Some(value) = self.pixels.read_next_byte() {
            self.speed = self
                .settings
                .clamp(f32::from(value) / INTENSITY_PER_PERCENT);
            self.out.set_immediate_speed(self.speed);
        }

        Ok(())
    }

    fn step_end(&mut self) -> Result<(), StepperError> {
        Ok(())
    }
}
