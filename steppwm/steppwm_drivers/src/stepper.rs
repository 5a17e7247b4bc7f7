#[derive(Debug, Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepperDirection {
    /// Clockwise, counted as forward motion.
    Cw,
    /// Anything that is not clockwise is counted as reverse.
    #[default]
    Ccw,
}

/// A simple synchronous stepper trait, driven once per pulse edge by the
/// pulse generator.
///
/// Every operation runs in the step timing path and must be constant-time
/// and non-blocking.
pub trait Stepper {
    // configuration

    /// Reconfigure the microstep resolution. Interpretation is
    /// driver-specific; unusable values are ignored.
    fn set_microsteps(&mut self, microsteps: u8);

    /// Set a separate power level, for drivers that have one.
    fn set_power_level(&mut self, power: f32);

    // operation

    /// Whether the driver can accept a step pulse right now.
    fn can_step(&mut self) -> bool;

    fn enable(&mut self) -> Result<(), StepperError>;
    fn disable(&mut self) -> Result<(), StepperError>;

    /// Latch the direction governing subsequent `step_start` calls.
    fn direction(&mut self, direction: StepperDirection) -> Result<(), StepperError>;

    /// Perform the leading edge of a single step pulse.
    fn step_start(&mut self) -> Result<(), StepperError>;

    /// Perform the trailing edge of a single step pulse.
    fn step_end(&mut self) -> Result<(), StepperError>;
}

#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepperError {
    IoError,
}
