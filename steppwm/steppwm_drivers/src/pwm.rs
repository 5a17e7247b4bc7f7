use embedded_hal::pwm::SetDutyCycle;
use steppwm_shared::{SpindleOutput, SpindleSettings};

/// Bridges the spindle-output seam onto an `embedded-hal` PWM channel.
///
/// The configured speed range maps linearly onto the channel's duty
/// range: `speed_min` is fully off, `speed_max` is fully on. Speeds
/// outside the range are clamped before conversion.
pub struct PwmSpindleOutput<PWM> {
    pwm: PWM,
    speed_min: f32,
    speed_max: f32,
}

impl<PWM> PwmSpindleOutput<PWM> {
    pub fn new(pwm: PWM, settings: &SpindleSettings) -> Self {
        Self {
            pwm,
            speed_min: settings.speed_min,
            speed_max: settings.speed_max,
        }
    }

    pub fn into_inner(self) -> PWM {
        self.pwm
    }
}

impl<PWM> SpindleOutput for PwmSpindleOutput<PWM>
where
    PWM: SetDutyCycle,
{
    fn set_immediate_speed(&mut self, speed: f32) {
        let span = self.speed_max - self.speed_min;
        let fraction = if span > 0.0 {
            ((speed - self.speed_min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let duty = (fraction * f32::from(self.pwm.max_duty_cycle())) as u16;
        // fire-and-forget: a refused duty update must not stall the step path
        let _ = self.pwm.set_duty_cycle(duty);
    }
}
