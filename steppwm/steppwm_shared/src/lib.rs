#![cfg_attr(not(test), no_std)]

//! Seams between the pulse-to-analog translation drivers and the rest of
//! the machine. The drivers own implementations of these traits by value;
//! sharing one collaborator across drivers is the assembly layer's concern,
//! so implementations are expected to be cheap handles.

pub mod machine;
pub mod raster;
pub mod spindle;

pub use machine::{DiagnosticSink, MachineState};
pub use raster::PixelBuffer;
pub use spindle::{SpindleOutput, SpindleSettings};
