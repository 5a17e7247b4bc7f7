use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use steppwm_shared::{DiagnosticSink, MachineState, PixelBuffer, SpindleOutput, SpindleSettings};

pub(crate) fn settings() -> SpindleSettings {
    SpindleSettings::new(0.0, 0.0, 100.0)
}

/// Records every speed pushed to the spindle output.
#[derive(Clone, Default)]
pub(crate) struct RecordingOutput(pub Rc<RefCell<Vec<f32>>>);

impl RecordingOutput {
    pub fn speeds(&self) -> Vec<f32> {
        self.0.borrow().clone()
    }
}

impl SpindleOutput for RecordingOutput {
    fn set_immediate_speed(&mut self, speed: f32) {
        self.0.borrow_mut().push(speed);
    }
}

/// Machine-state stub whose active tool can be flipped mid-test.
#[derive(Clone)]
pub(crate) struct ToolFlag(pub Rc<Cell<bool>>);

impl ToolFlag {
    pub fn laser() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn other() -> Self {
        Self(Rc::new(Cell::new(false)))
    }
}

impl MachineState for ToolFlag {
    fn is_active_tool_laser(&self) -> bool {
        self.0.get()
    }
}

/// Single-slot diagnostic register.
#[derive(Clone, Default)]
pub(crate) struct LastPosition(pub Rc<Cell<i32>>);

impl DiagnosticSink for LastPosition {
    fn record_position(&mut self, position: i32) {
        self.0.set(position);
    }
}

/// Pixel buffer backed by a queue of bytes.
#[derive(Clone, Default)]
pub(crate) struct ByteStream(pub Rc<RefCell<VecDeque<u8>>>);

impl ByteStream {
    pub fn of(bytes: &[u8]) -> Self {
        Self(Rc::new(RefCell::new(bytes.iter().copied().collect())))
    }

    pub fn remaining(&self) -> usize {
        self.0.borrow().len()
    }
}

impl PixelBuffer for ByteStream {
    fn read_next_byte(&mut self) -> Option<u8> {
        self.0.borrow_mut().pop_front()
    }
}
