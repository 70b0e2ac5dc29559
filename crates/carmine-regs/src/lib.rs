#![forbid(unsafe_code)]

//! R100 register map: MMIO offsets and field encodings for the 2D GUI engine,
//! the 3D render backend, the setup engine and the texture pipe.
//!
//! Only the subset the state core programs is listed. Offsets are byte
//! offsets into the card's register aperture; all registers are 32 bits wide.

/// Global surface/aperture control. Holds the host byte-swap configuration
/// for non-tiled aperture accesses, among other things.
///
/// Unlike the GUI/3D registers below this one is not consumed from the
/// command FIFO; the core still reserves a slot for it so the reservation
/// discipline stays uniform.
pub const SURFACE_CNTL: u32 = 0x0b00;

/// Swap 16-bit quantities on aperture 0 accesses.
pub const NONSURF_AP0_SWP_16BPP: u32 = 1 << 20;
/// Swap 32-bit quantities on aperture 0 accesses.
pub const NONSURF_AP0_SWP_32BPP: u32 = 1 << 21;

/// 2D destination surface base address (card space, 32-byte aligned).
pub const DST_OFFSET: u32 = 0x1404;
/// 2D destination pitch in bytes (64-byte aligned).
pub const DST_PITCH: u32 = 0x1408;

/// 2D source surface base address (card space, 32-byte aligned).
pub const SRC_OFFSET: u32 = 0x15ac;
/// 2D source pitch in bytes (64-byte aligned).
pub const SRC_PITCH: u32 = 0x15b0;

/// Master control for the 2D raster engine: brush/source datatypes,
/// destination datatype, ROP3 code and addressing mode.
pub const DP_GUI_MASTER_CNTL: u32 = 0x146c;

pub const GMC_SRC_PITCH_OFFSET_CNTL: u32 = 1 << 0;
pub const GMC_DST_PITCH_OFFSET_CNTL: u32 = 1 << 1;
pub const GMC_SRC_CLIPPING: u32 = 1 << 2;
pub const GMC_DST_CLIPPING: u32 = 1 << 3;

/// Brush datatype field (bits 4..8).
pub const GMC_BRUSH_SOLID_COLOR: u32 = 13 << 4;
pub const GMC_BRUSH_NONE: u32 = 15 << 4;

/// Destination datatype field (bits 8..12).
pub const GMC_DST_8BPP: u32 = 2 << 8;
pub const GMC_DST_15BPP: u32 = 3 << 8;
pub const GMC_DST_16BPP: u32 = 4 << 8;
pub const GMC_DST_24BPP: u32 = 5 << 8;
pub const GMC_DST_32BPP: u32 = 6 << 8;
/// Packed 4:2:2, chip component order VYUY (a YUY2 surface in memory).
pub const GMC_DST_VYUY: u32 = 11 << 8;
/// Packed 4:2:2, chip component order YVYU (a UYVY surface in memory).
pub const GMC_DST_YVYU: u32 = 12 << 8;

/// Source datatype field (bits 12..14).
pub const GMC_SRC_DATATYPE_MONO_FG_LA: u32 = 1 << 12;
pub const GMC_SRC_DATATYPE_COLOR: u32 = 3 << 12;

/// ROP3 field (bits 16..24), classic Windows ROP3 codes.
pub const ROP3_PATCOPY: u32 = 0x00f0_0000;
pub const ROP3_PATXOR: u32 = 0x005a_0000;
pub const ROP3_SRCCOPY: u32 = 0x00cc_0000;

/// Source-of-data field (bits 24..27).
pub const GMC_DP_SRC_SOURCE_MEMORY: u32 = 2 << 24;

pub const GMC_CLR_CMP_CNTL_DIS: u32 = 1 << 28;
pub const GMC_WR_MSK_DIS: u32 = 1 << 30;

/// Solid 2D brush foreground color, in destination format.
pub const DP_BRUSH_FRGD_CLR: u32 = 0x147c;

/// 2D blit direction control.
pub const DP_CNTL: u32 = 0x16c0;

pub const DST_X_LEFT_TO_RIGHT: u32 = 1 << 0;
pub const DST_Y_TOP_TO_BOTTOM: u32 = 1 << 1;

/// Color-compare (color key) control for 2D blits.
pub const CLR_CMP_CNTL: u32 = 0x15c0;
/// Source color-key value, in source format.
pub const CLR_CMP_CLR_SRC: u32 = 0x15c4;
/// Bit mask applied to both sides of the color-key comparison.
pub const CLR_CMP_MASK: u32 = 0x15cc;

/// Compare function field (bits 0..3): reject source pixels equal to the key.
pub const SRC_CMP_EQ_COLOR: u32 = 5 << 0;
/// Compare-source field (bit 24): compare against the blit source.
pub const CLR_CMP_SRC_SOURCE: u32 = 1 << 24;

/// 2D scissor, top-left corner, `(y << 16) | x`, inclusive.
pub const SC_TOP_LEFT: u32 = 0x16ec;
/// 2D scissor, bottom-right corner, `(y << 16) | x`, exclusive.
pub const SC_BOTTOM_RIGHT: u32 = 0x16f0;

/// 3D render backend control: blend/dither/ROP/Z enables and the color
/// buffer format (bits 10..14).
pub const RB3D_CNTL: u32 = 0x1c3c;

pub const ALPHA_BLEND_ENABLE: u32 = 1 << 0;
pub const PLANE_MASK_ENABLE: u32 = 1 << 1;
pub const DITHER_ENABLE: u32 = 1 << 2;
pub const ROP_ENABLE: u32 = 1 << 6;
pub const Z_ENABLE: u32 = 1 << 8;

pub const COLOR_FORMAT_ARGB1555: u32 = 3 << 10;
pub const COLOR_FORMAT_RGB565: u32 = 4 << 10;
pub const COLOR_FORMAT_ARGB8888: u32 = 6 << 10;
pub const COLOR_FORMAT_RGB332: u32 = 7 << 10;
pub const COLOR_FORMAT_RGB8: u32 = 9 << 10;
/// Packed 4:2:2 color buffer, chip order VYUY (YUY2 in memory).
pub const COLOR_FORMAT_YUV422_VYUY: u32 = 11 << 10;
/// Packed 4:2:2 color buffer, chip order YVYU (UYVY in memory).
pub const COLOR_FORMAT_YUV422_YVYU: u32 = 12 << 10;
pub const COLOR_FORMAT_ARGB4444: u32 = 15 << 10;

/// 3D color buffer base address (card space).
pub const RB3D_COLOROFFSET: u32 = 0x1c40;
/// 3D color buffer pitch in pixels, not bytes.
pub const RB3D_COLORPITCH: u32 = 0x1c48;

/// Alpha blend factors, `src | dst`. Factor codes are the GL blend
/// enumeration offset to 32, source field at bit 16, destination at bit 24.
pub const RB3D_BLENDCNTL: u32 = 0x1c20;

pub const SRC_BLEND_GL_ZERO: u32 = 32 << 16;
pub const SRC_BLEND_GL_ONE: u32 = 33 << 16;
pub const SRC_BLEND_GL_SRC_COLOR: u32 = 34 << 16;
pub const SRC_BLEND_GL_ONE_MINUS_SRC_COLOR: u32 = 35 << 16;
pub const SRC_BLEND_GL_DST_COLOR: u32 = 36 << 16;
pub const SRC_BLEND_GL_ONE_MINUS_DST_COLOR: u32 = 37 << 16;
pub const SRC_BLEND_GL_SRC_ALPHA: u32 = 38 << 16;
pub const SRC_BLEND_GL_ONE_MINUS_SRC_ALPHA: u32 = 39 << 16;
pub const SRC_BLEND_GL_DST_ALPHA: u32 = 40 << 16;
pub const SRC_BLEND_GL_ONE_MINUS_DST_ALPHA: u32 = 41 << 16;
pub const SRC_BLEND_GL_SRC_ALPHA_SATURATE: u32 = 42 << 16;

pub const DST_BLEND_GL_ZERO: u32 = 32 << 24;
pub const DST_BLEND_GL_ONE: u32 = 33 << 24;
pub const DST_BLEND_GL_SRC_COLOR: u32 = 34 << 24;
pub const DST_BLEND_GL_ONE_MINUS_SRC_COLOR: u32 = 35 << 24;
pub const DST_BLEND_GL_DST_COLOR: u32 = 36 << 24;
pub const DST_BLEND_GL_ONE_MINUS_DST_COLOR: u32 = 37 << 24;
pub const DST_BLEND_GL_SRC_ALPHA: u32 = 38 << 24;
pub const DST_BLEND_GL_ONE_MINUS_SRC_ALPHA: u32 = 39 << 24;
pub const DST_BLEND_GL_DST_ALPHA: u32 = 40 << 24;
pub const DST_BLEND_GL_ONE_MINUS_DST_ALPHA: u32 = 41 << 24;

/// Depth buffer base address (card space).
pub const RB3D_DEPTHOFFSET: u32 = 0x1c24;
/// Depth buffer pitch in pixels (16-bit Z: byte pitch >> 1).
pub const RB3D_DEPTHPITCH: u32 = 0x1c28;
/// Depth/stencil format and test control.
pub const RB3D_ZSTENCILCNTL: u32 = 0x1c2c;

/// Depth format field (bits 0..4): 16-bit integer Z.
pub const DEPTH_FORMAT_16BIT_INT_Z: u32 = 0 << 0;
/// Z test function field (bits 4..7): always pass.
pub const Z_TEST_ALWAYS: u32 = 7 << 4;

/// Texture pipe control: per-unit and per-combiner-stage enables plus the
/// scissor enable.
pub const PP_CNTL: u32 = 0x1c38;

pub const TEX_0_ENABLE: u32 = 1 << 4;
pub const TEX_1_ENABLE: u32 = 1 << 5;
pub const TEX_BLEND_0_ENABLE: u32 = 1 << 12;
pub const TEX_BLEND_1_ENABLE: u32 = 1 << 13;
pub const SCISSOR_ENABLE: u32 = 1 << 24;

/// Texture unit 0 sampler state. Unit 1 is the same block 0x18 higher.
pub const PP_TXFILTER_0: u32 = 0x1c54;
pub const PP_TXFORMAT_0: u32 = 0x1c58;
pub const PP_TXOFFSET_0: u32 = 0x1c5c;
pub const PP_TXCBLEND_0: u32 = 0x1c60;
pub const PP_TXABLEND_0: u32 = 0x1c64;
pub const PP_TFACTOR_0: u32 = 0x1c68;

pub const PP_TXFILTER_1: u32 = 0x1c6c;
pub const PP_TXFORMAT_1: u32 = 0x1c70;
pub const PP_TXOFFSET_1: u32 = 0x1c74;
pub const PP_TXCBLEND_1: u32 = 0x1c78;
pub const PP_TXABLEND_1: u32 = 0x1c7c;
pub const PP_TFACTOR_1: u32 = 0x1c80;

/// `(height << 16) | width` of texture unit 0, both minus one.
pub const PP_TEX_SIZE_0: u32 = 0x1d04;
/// Texture unit 0 pitch in bytes, minus 32.
pub const PP_TEX_PITCH_0: u32 = 0x1d08;

pub const MAG_FILTER_LINEAR: u32 = 1 << 0;
pub const MIN_FILTER_LINEAR: u32 = 1 << 1;
/// Sample-time YUV to RGB conversion for packed 4:2:2 textures.
pub const YUV_TO_RGB: u32 = 1 << 20;
/// S/T wrap mode fields (bits 23..26 and 27..30): clamp to last texel.
pub const CLAMP_S_CLAMP_LAST: u32 = 2 << 23;
pub const CLAMP_T_CLAMP_LAST: u32 = 2 << 27;

/// Texel format field (bits 0..5).
pub const TXFORMAT_I8: u32 = 0 << 0;
pub const TXFORMAT_RGB332: u32 = 2 << 0;
pub const TXFORMAT_ARGB1555: u32 = 3 << 0;
pub const TXFORMAT_RGB565: u32 = 4 << 0;
pub const TXFORMAT_ARGB4444: u32 = 5 << 0;
pub const TXFORMAT_ARGB8888: u32 = 6 << 0;
/// Packed 4:2:2, chip order VYUY (YUY2 in memory).
pub const TXFORMAT_VYUY422: u32 = 10 << 0;
/// Packed 4:2:2, chip order YVYU (UYVY in memory).
pub const TXFORMAT_YVYU422: u32 = 11 << 0;
/// Take alpha from the texel rather than forcing it to one.
pub const TXFORMAT_ALPHA_IN_MAP: u32 = 1 << 6;
/// Dimensions come from PP_TEX_SIZE/PP_TEX_PITCH, not the po2 fields.
pub const TXFORMAT_NON_POWER2: u32 = 1 << 7;

/// Combiner stage color equation `A*B + C`: argument codes in slot A
/// (bits 0..5), B (bits 5..10) and C (bits 10..15). Unset slots are zero.
pub const COLOR_ARG_A_T0_COLOR: u32 = 10 << 0;
pub const COLOR_ARG_B_TFACTOR_COLOR: u32 = 8 << 5;
pub const COLOR_ARG_B_TFACTOR_ALPHA: u32 = 9 << 5;
pub const COLOR_ARG_B_T1_COLOR: u32 = 12 << 5;
pub const COLOR_ARG_C_TFACTOR_COLOR: u32 = 8 << 10;
pub const COLOR_ARG_C_TFACTOR_ALPHA: u32 = 9 << 10;
pub const COLOR_ARG_C_T0_COLOR: u32 = 10 << 10;
pub const COLOR_ARG_C_T0_ALPHA: u32 = 11 << 10;
pub const COLOR_ARG_C_T1_COLOR: u32 = 12 << 10;

/// Combiner stage alpha equation `A*B + C`: argument codes in slot A
/// (bits 0..4), B (bits 4..8) and C (bits 8..12).
pub const ALPHA_ARG_A_T0_ALPHA: u32 = 5 << 0;
pub const ALPHA_ARG_B_TFACTOR_ALPHA: u32 = 4 << 4;
pub const ALPHA_ARG_C_TFACTOR_ALPHA: u32 = 4 << 8;
pub const ALPHA_ARG_C_T0_ALPHA: u32 = 5 << 8;

/// Setup engine control: shading, face modes, pixel center and rounding.
pub const SE_CNTL: u32 = 0x1c4c;

pub const BFACE_SOLID: u32 = 3 << 1;
pub const FFACE_SOLID: u32 = 3 << 3;
pub const FLAT_SHADE_VTX_LAST: u32 = 3 << 6;
pub const DIFFUSE_SHADE_FLAT: u32 = 1 << 8;
pub const DIFFUSE_SHADE_GOURAUD: u32 = 2 << 8;
pub const ALPHA_SHADE_FLAT: u32 = 1 << 10;
pub const ALPHA_SHADE_GOURAUD: u32 = 2 << 10;
pub const SPECULAR_SHADE_GOURAUD: u32 = 2 << 12;
pub const VTX_PIX_CENTER_OGL: u32 = 1 << 27;
pub const ROUND_MODE_ROUND: u32 = 1 << 28;
/// Rounding precision field (bits 30..32).
pub const ROUND_PREC_8TH_PIX: u32 = 1 << 30;
pub const ROUND_PREC_4TH_PIX: u32 = 2 << 30;

/// Vertex coordinate interpretation for the setup engine.
pub const SE_COORD_FMT: u32 = 0x1c50;

pub const VTX_XY_PRE_MULT_1_OVER_W0: u32 = 1 << 0;
pub const VTX_ST0_NONPARAMETRIC: u32 = 1 << 8;
pub const VTX_ST1_NONPARAMETRIC: u32 = 1 << 9;
/// W routing field for texture 1 (bit 26); the W0 selection is the zero
/// value, spelled out where written for legibility.
pub const TEX1_W_ROUTING_USE_W0: u32 = 0 << 26;

/// Per-vertex data layout fed to the setup engine.
pub const SE_VTX_FMT: u32 = 0x2080;

/// XY is the always-present base layout (no bit of its own).
pub const SE_VTX_FMT_XY: u32 = 0;
pub const SE_VTX_FMT_W0: u32 = 1 << 0;
pub const SE_VTX_FMT_ST0: u32 = 1 << 7;
pub const SE_VTX_FMT_ST1: u32 = 1 << 8;
pub const SE_VTX_FMT_Z: u32 = 1 << 30;

/// 3D scissor, top-left, `(y << 16) | x`, inclusive.
pub const RE_TOP_LEFT: u32 = 0x26c0;
/// 3D scissor, bottom-right, `(y << 16) | x`, inclusive (unlike the 2D one).
pub const RE_BOTTOM_RIGHT: u32 = 0x26c4;
