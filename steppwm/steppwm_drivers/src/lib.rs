#![cfg_attr(not(test), no_std)]

//! Translation drivers that make non-stepper actuators (hobby servos,
//! lasers) look like stepper motors to a step/direction pulse generator.
//! Each driver turns the pulse stream into immediate spindle speed
//! commands instead of motor phase currents.

pub mod hobby_servo;
pub mod microsteps;
pub mod pwm;
pub mod raster_laser;
pub mod stepper;

pub use hobby_servo::HobbyServoStepper;
pub use pwm::PwmSpindleOutput;
pub use raster_laser::RasterLaserStepper;
pub use stepper::{Stepper, StepperDirection, StepperError};

#[cfg(test)]
mod testutil;
