#![allow(dead_code)]

use carmine_accel::{
    AccelConfig, AccelEngine, ByteOrder, CardBus, PipelineState, Surface,
};
use carmine_pixel::PixelFormat;

/// Framebuffer-relative scratch offset the test engines stage constant
/// colors at.
pub const SCRATCH: u32 = 0x0009_0000;

/// Register write log with FIFO reservation accounting.
///
/// The stub panics when a register write arrives without remaining reserved
/// capacity and when a new reservation is issued before the previous burst
/// was fully consumed, so any test driving an engine through it checks the
/// reservation discipline for free. Call [`RecordingBus::finish`] at the end
/// to assert no reserved slots were left unused.
#[derive(Default)]
pub struct RecordingBus {
    reserved: u32,
    pub writes: Vec<(u32, u32)>,
    pub vram: Vec<(u32, u32)>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the most recent write to `reg`.
    pub fn last(&self, reg: u32) -> Option<u32> {
        self.writes
            .iter()
            .rev()
            .find(|&&(r, _)| r == reg)
            .map(|&(_, v)| v)
    }

    /// How many times `reg` was written.
    pub fn count(&self, reg: u32) -> usize {
        self.writes.iter().filter(|&&(r, _)| r == reg).count()
    }

    pub fn finish(self) {
        assert_eq!(self.reserved, 0, "reserved FIFO slots left unused");
    }
}

impl CardBus for RecordingBus {
    fn reserve_fifo(&mut self, entries: u32) {
        assert_eq!(
            self.reserved, 0,
            "reservation issued before the previous burst completed"
        );
        self.reserved = entries;
    }

    fn write_reg(&mut self, reg: u32, value: u32) {
        assert!(
            self.reserved > 0,
            "write to {reg:#06x} without FIFO reservation"
        );
        self.reserved -= 1;
        self.writes.push((reg, value));
    }

    fn write_vram(&mut self, offset: u32, value: u32) {
        self.vram.push((offset, value));
    }
}

pub fn engine() -> AccelEngine {
    AccelEngine::new(AccelConfig {
        fb_offset: 0,
        scratch_offset: SCRATCH,
        byte_order: ByteOrder::Little,
    })
}

pub fn big_endian_engine() -> AccelEngine {
    AccelEngine::new(AccelConfig {
        fb_offset: 0,
        scratch_offset: SCRATCH,
        byte_order: ByteOrder::Big,
    })
}

pub fn surface(format: PixelFormat, width: u32, height: u32, pitch: u32) -> Surface {
    Surface {
        format,
        width,
        height,
        pitch,
        ..Surface::default()
    }
}

/// Snapshot with only a destination bound, everything else default.
pub fn dest_state(format: PixelFormat, width: u32, height: u32, pitch: u32) -> PipelineState {
    PipelineState {
        destination: surface(format, width, height, pitch),
        ..PipelineState::default()
    }
}

/// Snapshot with an RGB16 destination and a source of the given format.
pub fn blit_state(src_format: PixelFormat, width: u32, height: u32, pitch: u32) -> PipelineState {
    PipelineState {
        source: surface(src_format, width, height, pitch),
        ..dest_state(PixelFormat::Rgb16, 640, 480, 1280)
    }
}
