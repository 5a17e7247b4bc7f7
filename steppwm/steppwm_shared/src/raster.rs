/// Source of pre-rendered raster intensity samples.
pub trait PixelBuffer {
    /// Next intensity byte, or `None` when the buffer is exhausted.
    ///
    /// Exhaustion is not an error; the caller skips that sample.
    fn read_next_byte(&mut self) -> Option<u8>;
}
