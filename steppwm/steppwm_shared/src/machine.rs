/// Machine-state query shared by all drivers.
pub trait MachineState {
    /// Whether the currently active tool is configured as a laser.
    ///
    /// Pure query with no side effects; the answer may change between
    /// calls when the operator switches tools.
    fn is_active_tool_laser(&self) -> bool;
}

/// Single-slot write-only register holding the last accumulated position,
/// for external inspection.
pub trait DiagnosticSink {
    fn record_position(&mut self, position: i32);
}
