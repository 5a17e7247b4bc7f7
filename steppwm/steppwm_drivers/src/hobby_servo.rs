use log::{debug, warn};
use steppwm_shared::{DiagnosticSink, MachineState, SpindleOutput, SpindleSettings};

use crate::microsteps::{COUNTS_PER_FULL_STEP, servo_scale};
use crate::stepper::{Stepper, StepperDirection, StepperError};

/// Drives a PWM hobby servo (or laser) from step/direction pulses.
///
/// The pulse count, not the pulse timing, encodes the commanded value: the
/// driver accumulates a multiplier-scaled position and pushes
/// `position / 32` to the spindle output, clamped into the configured
/// speed range, whenever the active tool is a laser.
pub struct HobbyServoStepper<OUT, MACHINE, DIAG> {
    out: OUT,
    machine: MACHINE,
    diag: DIAG,
    settings: SpindleSettings,
    microsteps_per_step: i32,
    step_is_forward: bool,
    position: i32,
    speed: f32,
    enabled: bool,
}

impl<OUT, MACHINE, DIAG> HobbyServoStepper<OUT, MACHINE, DIAG> {
    pub fn new(out: OUT, machine: MACHINE, diag: DIAG, settings: SpindleSettings) -> Self {
        Self {
            out,
            machine,
            diag,
            settings,
            microsteps_per_step: 1,
            step_is_forward: false,
            position: 0,
            speed: settings.speed,
            enabled: false,
        }
    }

    /// Accumulated, multiplier-scaled position. The same value is written
    /// to the diagnostic sink after every step.
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

impl<OUT, MACHINE, DIAG> Stepper for HobbyServoStepper<OUT, MACHINE, DIAG>
where
    OUT: SpindleOutput,
    MACHINE: MachineState,
    DIAG: DiagnosticSink,
{
    fn set_microsteps(&mut self, microsteps: u8) {
        match servo_scale(microsteps) {
            Some(scale) => self.microsteps_per_step = scale,
            // unmapped values keep the previous multiplier
            None => warn!("unmapped microstep resolution {microsteps}, keeping previous scale"),
        }
    }

    fn set_power_level(&mut self, _power: f32) {
        // the derived speed is the power; a separate level has no meaning here
    }

    fn can_step(&mut self) -> bool {
        true
    }

    fn enable(&mut self) -> Result<(), StepperError> {
        if !self.enabled {
            self.enabled = true;
            debug!("hobby servo stepper enabled");
            if self.machine.is_active_tool_laser() {
                self.out.set_immediate_speed(self.speed);
            }
        }
        Ok(())
    }

    fn disable(&mut self) -> Result<(), StepperError> {
        if self.enabled {
            self.enabled = false;
            debug!("hobby servo stepper disabled");
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
            self.position = self.position.wrapping_add(self.microsteps_per_step);
        } else {
            self.position = self.position.wrapping_sub(self.microsteps_per_step);
        }

        self.speed = self
            .settings
            .clamp(self.position as f32 / COUNTS_PER_FULL_STEP as f32);

        // 0% == speed_min -> 100% == speed_max
        if self.machine.is_active_tool_laser() {
            self.out.set_immediate_speed(self.speed);
        } else {
            // Re-sync path: switch off the laser tool, then command a
            // zero-position move so the planner agrees with the reset.
            self.position = 0;
        }
        self.diag.record_position(self.position);

        Ok(())
    }

    fn step_end(&mut self) -> Result<(), StepperError> {
        Ok(())
    }
}
