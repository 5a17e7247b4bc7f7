/// Analog output for the active spindle or laser.
///
/// Fire-and-forget: the drivers call this from the step pulse context, so
/// implementations must be non-blocking and must not fail loudly.
pub trait SpindleOutput {
    fn set_immediate_speed(&mut self, speed: f32);
}

/// Spindle speed configuration, captured from the machine configuration
/// when a driver is assembled.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpindleSettings {
    /// spindle speed at the time the driver is constructed
    pub speed: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

impl SpindleSettings {
    pub fn new(speed: f32, speed_min: f32, speed_max: f32) -> Self {
        Self {
            speed,
            speed_min,
            speed_max,
        }
    }

    /// Clamp a computed speed into the configured range.
    pub fn clamp(&self, speed: f32) -> f32 {
        if speed > self.speed_max {
            return self.speed_max;
        }
        if speed < self.speed_min {
            return self.speed_min;
        }
        speed
    }
}
