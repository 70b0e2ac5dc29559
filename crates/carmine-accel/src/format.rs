//! Per-format hardware encodings.
//!
//! Everything the engine needs to know about a pixel format sits in one
//! [`FormatDescriptor`] so the validators never scatter per-format switches
//! across register assembly.

use carmine_pixel::PixelFormat;
use carmine_regs as regs;

/// Chroma plane order of a three-plane 4:2:0 surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChromaOrder {
    /// Cb plane first, then Cr (I420).
    CbCr,
    /// Cr plane first, then Cb (YV12).
    CrCb,
}

/// Hardware encodings and capabilities of one engine-supported format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Destination datatype field for DP_GUI_MASTER_CNTL.
    pub gmc_dst: u32,
    /// Color buffer format for RB3D_CNTL, dither enable included where the
    /// format wants dithering.
    pub rb3d_color: u32,
    /// Texel format field for PP_TXFORMAT, alpha-in-map included.
    pub tx_format: u32,
    /// Whether the sampler may filter linearly. Indexed formats and the
    /// 2554 layout must point-sample.
    pub linear_filter: bool,
    /// Mask limiting the source color-key comparison to meaningful bits.
    pub key_mask: u32,
    pub has_alpha: bool,
    /// Packed 4:2:2, two pixels per 32-bit unit.
    pub packed_422: bool,
    /// Chroma plane order for three-plane 4:2:0 formats.
    pub planar: Option<ChromaOrder>,
    /// Constant colors cannot be fed to the texture factor directly and must
    /// be staged as a one-pixel texture in card memory.
    pub staged_constant_color: bool,
    /// Bytes per pixel of the first plane.
    pub bytes_per_pixel: u32,
}

/// Look up the engine encodings for `format`.
///
/// # Panics
///
/// On formats the engine cannot render to or sample from. The dispatch
/// layer's capability check filters those before state reaches the core, so
/// hitting this is a driver bug, not a caller error.
pub fn describe(format: PixelFormat) -> FormatDescriptor {
    let base = FormatDescriptor {
        gmc_dst: 0,
        rb3d_color: 0,
        tx_format: 0,
        linear_filter: true,
        key_mask: 0,
        has_alpha: format.has_alpha(),
        packed_422: false,
        planar: None,
        staged_constant_color: false,
        bytes_per_pixel: format.bytes_per_pixel(),
    };
    match format {
        PixelFormat::Lut8 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_8BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB8,
            tx_format: regs::TXFORMAT_I8,
            linear_filter: false,
            key_mask: 0x0000_00ff,
            ..base
        },
        PixelFormat::Alut44 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_8BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB8,
            tx_format: regs::TXFORMAT_I8,
            linear_filter: false,
            key_mask: 0x0000_000f,
            ..base
        },
        PixelFormat::A8 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_8BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB8,
            tx_format: regs::TXFORMAT_I8 | regs::TXFORMAT_ALPHA_IN_MAP,
            key_mask: 0,
            ..base
        },
        PixelFormat::Rgb332 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_8BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB332 | regs::DITHER_ENABLE,
            tx_format: regs::TXFORMAT_RGB332,
            key_mask: 0x0000_00ff,
            ..base
        },
        // Rendered as 565; the hardware has no 2554 color buffer. Undithered
        // on purpose, dithering the shared low bits wrecks the alpha field.
        PixelFormat::Argb2554 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_16BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB565,
            tx_format: regs::TXFORMAT_RGB565,
            linear_filter: false,
            key_mask: 0x0000_3fff,
            ..base
        },
        PixelFormat::Argb4444 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_16BPP,
            rb3d_color: regs::COLOR_FORMAT_ARGB4444 | regs::DITHER_ENABLE,
            tx_format: regs::TXFORMAT_ARGB4444 | regs::TXFORMAT_ALPHA_IN_MAP,
            key_mask: 0x0000_0fff,
            ..base
        },
        PixelFormat::Argb1555 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_15BPP,
            rb3d_color: regs::COLOR_FORMAT_ARGB1555 | regs::DITHER_ENABLE,
            tx_format: regs::TXFORMAT_ARGB1555 | regs::TXFORMAT_ALPHA_IN_MAP,
            key_mask: 0x0000_7fff,
            ..base
        },
        PixelFormat::Rgb16 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_16BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB565 | regs::DITHER_ENABLE,
            tx_format: regs::TXFORMAT_RGB565,
            key_mask: 0x0000_ffff,
            ..base
        },
        PixelFormat::Rgb32 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_32BPP,
            rb3d_color: regs::COLOR_FORMAT_ARGB8888,
            tx_format: regs::TXFORMAT_ARGB8888,
            key_mask: 0x00ff_ffff,
            ..base
        },
        PixelFormat::Argb | PixelFormat::AiRgb => FormatDescriptor {
            gmc_dst: regs::GMC_DST_32BPP,
            rb3d_color: regs::COLOR_FORMAT_ARGB8888,
            tx_format: regs::TXFORMAT_ARGB8888 | regs::TXFORMAT_ALPHA_IN_MAP,
            key_mask: 0x00ff_ffff,
            ..base
        },
        // The chip names 4:2:2 component orders after the swapped view, so
        // a UYVY surface programs the YVYU codes and YUY2 programs VYUY.
        PixelFormat::Uyvy => FormatDescriptor {
            gmc_dst: regs::GMC_DST_YVYU,
            rb3d_color: regs::COLOR_FORMAT_YUV422_YVYU,
            tx_format: regs::TXFORMAT_YVYU422,
            key_mask: 0xffff_ffff,
            packed_422: true,
            staged_constant_color: true,
            ..base
        },
        PixelFormat::Yuy2 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_VYUY,
            rb3d_color: regs::COLOR_FORMAT_YUV422_VYUY,
            tx_format: regs::TXFORMAT_VYUY422,
            key_mask: 0xffff_ffff,
            packed_422: true,
            staged_constant_color: true,
            ..base
        },
        // Planar 4:2:0 runs through the engine one plane at a time as an
        // 8bpp surface; the chroma plane offsets are derived at bind time.
        PixelFormat::I420 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_8BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB8,
            tx_format: regs::TXFORMAT_I8,
            key_mask: 0x0000_00ff,
            planar: Some(ChromaOrder::CbCr),
            ..base
        },
        PixelFormat::Yv12 => FormatDescriptor {
            gmc_dst: regs::GMC_DST_8BPP,
            rb3d_color: regs::COLOR_FORMAT_RGB8,
            tx_format: regs::TXFORMAT_I8,
            key_mask: 0x0000_00ff,
            planar: Some(ChromaOrder::CrCb),
            ..base
        },
        PixelFormat::Rgb24 | PixelFormat::Nv12 | PixelFormat::Nv16 => {
            panic!("pixel format {format:?} is not supported by the engine")
        }
    }
}
