//! Pipeline state snapshots and the validity bookkeeping that decides how
//! much of a snapshot must be re-translated into register writes.

use bitflags::bitflags;
use carmine_pixel::{Color, PixelFormat};

use crate::blend::BlendFactor;

bitflags! {
    /// Drawing modifiers for solid fills, lines and rectangle outlines.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct DrawFlags: u32 {
        /// Blend the constant color against the destination.
        const BLEND = 1 << 0;
        /// Combine with the destination through XOR instead of copying.
        const XOR = 1 << 1;
    }
}

bitflags! {
    /// Blitting modifiers for copies and textured triangles.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct BlitFlags: u32 {
        /// Modulate source alpha with the per-texel alpha channel.
        const BLEND_ALPHA_CHANNEL = 1 << 0;
        /// Modulate source alpha with the constant color's alpha.
        const BLEND_COLOR_ALPHA = 1 << 1;
        /// Modulate source color with the constant color.
        const COLORIZE = 1 << 2;
        /// Discard source pixels matching the source color key.
        const SRC_COLORKEY = 1 << 3;
        /// Multiply source color by the constant alpha before blending.
        const SRC_PREMULTCOLOR = 1 << 4;
        /// Read a single field of an interlaced source.
        const DEINTERLACE = 1 << 5;
        /// Combine with the destination through XOR instead of copying.
        const XOR = 1 << 6;
    }
}

bitflags! {
    /// One bit per independently validated slice of pipeline state.
    ///
    /// A set bit means the registers backing that aspect already match the
    /// current snapshot and the corresponding validator may return without
    /// touching the card.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Aspects: u32 {
        const DESTINATION = 1 << 0;
        const SOURCE = 1 << 1;
        const CLIP = 1 << 2;
        const COLOR = 1 << 3;
        const SRC_COLORKEY = 1 << 4;
        const SRC_BLEND = 1 << 5;
        const DST_BLEND = 1 << 6;
        const DRAWING_FLAGS = 1 << 7;
        const BLITTING_FLAGS = 1 << 8;
    }
}

/// Events that ripple beyond the aspect being validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// The destination pixel format changed.
    DestFormat,
    /// The destination moved between packed 4:2:2 and anything else.
    DestPacking,
    /// The source pixel format changed.
    SrcFormat,
    /// A drawing mode was just programmed.
    DrawModeSelected,
    /// A blitting mode was just programmed.
    BlitModeSelected,
}

/// Aspects whose cached registers are stale after `change`.
///
/// This is the whole cross-aspect dependency graph; validators never
/// invalidate anything outside of it.
pub fn downstream(change: StateChange) -> Aspects {
    match change {
        // Constant colors and blend codes are packed per destination format.
        StateChange::DestFormat => Aspects::COLOR | Aspects::SRC_BLEND,
        // Packed 4:2:2 destinations halve scissor X and disable the YUV
        // conversion of the sampler, so both must be reprogrammed.
        StateChange::DestPacking => Aspects::SOURCE | Aspects::CLIP,
        // Combiner routing keys on whether the source carries only alpha.
        StateChange::SrcFormat => Aspects::BLITTING_FLAGS,
        // Drawing and blitting share DP_GUI_MASTER_CNTL, RB3D_CNTL and the
        // combiner stages; selecting one mode clobbers the other's setup.
        StateChange::DrawModeSelected => Aspects::BLITTING_FLAGS,
        StateChange::BlitModeSelected => Aspects::DRAWING_FLAGS,
    }
}

/// Which field of an interlaced surface each line belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldLayout {
    /// Even and odd lines alternate within one buffer.
    Interleaved,
    /// All even lines first, all odd lines after them.
    Separated,
}

/// The field a deinterlacing blit reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Even,
    Odd,
}

/// Geometry of an optional 16-bit depth plane attached to a destination.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthPlane {
    /// Byte offset of the plane inside card memory, framebuffer relative.
    pub offset: u32,
    /// Byte pitch of one depth line.
    pub pitch: u32,
}

/// A bound surface, destination or source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Surface {
    pub format: PixelFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels. For interlaced content this counts both fields.
    pub height: u32,
    /// Byte offset of the first pixel, framebuffer relative. Must be
    /// 32-byte aligned.
    pub offset: u32,
    /// Byte pitch of one line. Must be 64-byte aligned.
    pub pitch: u32,
    /// Depth plane, destinations only.
    pub depth: Option<DepthPlane>,
    pub field_layout: FieldLayout,
    pub field: Field,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            format: PixelFormat::Argb,
            width: 0,
            height: 0,
            offset: 0,
            pitch: 0,
            depth: None,
            field_layout: FieldLayout::Interleaved,
            field: Field::Even,
        }
    }
}

/// Inclusive clip rectangle in destination pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ClipRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ClipRect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// The operation a snapshot is being validated for.
///
/// Only [`AccelOp::TexTriangles`] changes the emitted registers (it needs a
/// full vertex format); the other operations exist so dispatch can pick the
/// right validators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccelOp {
    FillRectangle,
    DrawRectangle,
    DrawLine,
    FillTriangle,
    Blit,
    StretchBlit,
    TexTriangles,
}

/// Everything the dispatch layer hands down for one batch of operations.
///
/// The snapshot is complete; validators read only the parts their aspect
/// covers, so stale unrelated fields are harmless.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    pub destination: Surface,
    pub source: Surface,
    pub clip: ClipRect,
    /// Constant color for fills and modulation.
    pub color: Color,
    /// Palette index, used in place of `color` on indexed destinations.
    pub color_index: u8,
    /// Source color key in source pixel encoding.
    pub src_colorkey: u32,
    pub src_blend: BlendFactor,
    pub dst_blend: BlendFactor,
    pub draw_flags: DrawFlags,
    pub blit_flags: BlitFlags,
    pub op: AccelOp,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            destination: Surface::default(),
            source: Surface::default(),
            clip: ClipRect::default(),
            color: Color::new(0xff, 0xff, 0xff, 0xff),
            color_index: 0,
            src_colorkey: 0,
            src_blend: BlendFactor::One,
            dst_blend: BlendFactor::Zero,
            draw_flags: DrawFlags::empty(),
            blit_flags: BlitFlags::empty(),
            op: AccelOp::FillRectangle,
        }
    }
}
