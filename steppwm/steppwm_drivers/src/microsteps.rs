/// Position counts contributed by one full mechanical step; also the
/// divisor that turns accumulated position into a speed.
pub const COUNTS_PER_FULL_STEP: i32 = 32;

/// Maps a requested microstep resolution onto the internal position
/// multiplier used by the hobby-servo driver.
///
/// The relationship is inverse: finer requested resolutions get a smaller
/// multiplier, so one full mechanical step always contributes
/// [`COUNTS_PER_FULL_STEP`] position counts.
pub const fn servo_scale(microsteps: u8) -> Option<i32> {
    match microsteps {
        1 => Some(32),
        2 => Some(16),
        4 => Some(8),
        8 => Some(4),
        16 => Some(2),
        32 => Some(1),
        _ => None,
    }
}
