//! Transport seam between the state core and the card.

/// Access to the card's register aperture, command FIFO and local memory.
///
/// The engine always reserves FIFO capacity for the exact number of register
/// writes it is about to issue and then issues exactly that many. Callers
/// that proxy a real card must block in [`CardBus::reserve_fifo`] until the
/// queue has room; test doubles can instead assert the discipline.
pub trait CardBus {
    /// Wait until the command FIFO can accept `entries` more register writes.
    fn reserve_fifo(&mut self, entries: u32);

    /// Write a 32-bit engine register. `reg` is the byte offset into the
    /// register aperture.
    fn write_reg(&mut self, reg: u32, value: u32);

    /// Store a 32-bit word at `offset` into card-local memory through the
    /// framebuffer aperture. Aperture stores do not consume FIFO entries.
    fn write_vram(&mut self, offset: u32, value: u32);
}
