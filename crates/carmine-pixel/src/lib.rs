#![forbid(unsafe_code)]

//! Pixel-format vocabulary shared by the accelerator core and the layers
//! around it: the format enumeration with its layout queries, packed-pixel
//! constructors, and integer RGB to YCbCr conversion.
//!
//! This crate knows nothing about the hardware; which formats the engine can
//! actually render to or sample from is the accelerator core's business.

pub const FOURCC_UYVY: u32 = fourcc(b"UYVY");
pub const FOURCC_YUY2: u32 = fourcc(b"YUY2");
pub const FOURCC_I420: u32 = fourcc(b"I420");
pub const FOURCC_YV12: u32 = fourcc(b"YV12");
pub const FOURCC_NV12: u32 = fourcc(b"NV12");
pub const FOURCC_NV16: u32 = fourcc(b"NV16");

const fn fourcc(tag: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*tag)
}

/// Surface pixel formats.
///
/// Indexed formats (`Lut8`, `Alut44`) store palette indices; the palette
/// itself lives with the surface, not here. `AiRgb` is ARGB with the alpha
/// channel stored inverted. The YUV family covers packed 4:2:2 (`Uyvy`,
/// `Yuy2`), three-plane 4:2:0 (`I420` with Cb before Cr, `Yv12` mirrored)
/// and the two-plane variants (`Nv12`, `Nv16`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Lut8,
    Alut44,
    A8,
    Rgb332,
    Argb2554,
    Argb4444,
    Argb1555,
    Rgb16,
    Rgb24,
    Rgb32,
    Argb,
    AiRgb,
    Uyvy,
    Yuy2,
    I420,
    Yv12,
    Nv12,
    Nv16,
}

impl PixelFormat {
    /// Bytes per pixel of the first (or only) plane.
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Lut8
            | PixelFormat::Alut44
            | PixelFormat::A8
            | PixelFormat::Rgb332
            | PixelFormat::I420
            | PixelFormat::Yv12
            | PixelFormat::Nv12
            | PixelFormat::Nv16 => 1,
            PixelFormat::Argb2554
            | PixelFormat::Argb4444
            | PixelFormat::Argb1555
            | PixelFormat::Rgb16
            | PixelFormat::Uyvy
            | PixelFormat::Yuy2 => 2,
            PixelFormat::Rgb24 => 3,
            PixelFormat::Rgb32 | PixelFormat::Argb | PixelFormat::AiRgb => 4,
        }
    }

    /// Whether pixels (or palette entries) carry an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            PixelFormat::Lut8
                | PixelFormat::Alut44
                | PixelFormat::A8
                | PixelFormat::Argb2554
                | PixelFormat::Argb4444
                | PixelFormat::Argb1555
                | PixelFormat::Argb
                | PixelFormat::AiRgb
        )
    }

    pub const fn is_indexed(self) -> bool {
        matches!(self, PixelFormat::Lut8 | PixelFormat::Alut44)
    }

    /// Packed 4:2:2: luma and chroma interleaved, two pixels per 32-bit unit.
    pub const fn is_packed_422(self) -> bool {
        matches!(self, PixelFormat::Uyvy | PixelFormat::Yuy2)
    }

    /// 4:2:0 with the luma plane followed by subsampled chroma storage.
    pub const fn is_planar_420(self) -> bool {
        matches!(self, PixelFormat::I420 | PixelFormat::Yv12 | PixelFormat::Nv12)
    }

    /// The format's fourcc tag, for the video formats that have one.
    pub const fn fourcc(self) -> Option<u32> {
        match self {
            PixelFormat::Uyvy => Some(FOURCC_UYVY),
            PixelFormat::Yuy2 => Some(FOURCC_YUY2),
            PixelFormat::I420 => Some(FOURCC_I420),
            PixelFormat::Yv12 => Some(FOURCC_YV12),
            PixelFormat::Nv12 => Some(FOURCC_NV12),
            PixelFormat::Nv16 => Some(FOURCC_NV16),
            _ => None,
        }
    }
}

/// Error for [`PixelFormat::try_from`] on an unrecognized fourcc tag.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized pixel format fourcc {0:#010x}")]
pub struct UnknownFourcc(pub u32);

impl TryFrom<u32> for PixelFormat {
    type Error = UnknownFourcc;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            FOURCC_UYVY => Ok(PixelFormat::Uyvy),
            FOURCC_YUY2 => Ok(PixelFormat::Yuy2),
            FOURCC_I420 => Ok(PixelFormat::I420),
            FOURCC_YV12 => Ok(PixelFormat::Yv12),
            FOURCC_NV12 => Ok(PixelFormat::Nv12),
            FOURCC_NV16 => Ok(PixelFormat::Nv16),
            other => Err(UnknownFourcc(other)),
        }
    }
}

/// An 8-bit-per-channel color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// RGB channels multiplied by alpha, rounding down.
    pub const fn premultiplied(self) -> Self {
        let a = self.a as u32;
        Color {
            a: self.a,
            r: (self.r as u32 * a / 255) as u8,
            g: (self.g as u32 * a / 255) as u8,
            b: (self.b as u32 * a / 255) as u8,
        }
    }
}

pub const fn pack_rgb332(r: u8, g: u8, b: u8) -> u32 {
    (r as u32 & 0xe0) | ((g as u32 & 0xe0) >> 3) | ((b as u32 & 0xc0) >> 6)
}

pub const fn pack_argb2554(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32 & 0xc0) << 8)
        | ((r as u32 & 0xf8) << 6)
        | ((g as u32 & 0xf8) << 1)
        | ((b as u32 & 0xf0) >> 4)
}

pub const fn pack_argb4444(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32 & 0xf0) << 8)
        | ((r as u32 & 0xf0) << 4)
        | (g as u32 & 0xf0)
        | ((b as u32 & 0xf0) >> 4)
}

pub const fn pack_argb1555(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32 & 0x80) << 8)
        | ((r as u32 & 0xf8) << 7)
        | ((g as u32 & 0xf8) << 2)
        | ((b as u32 & 0xf8) >> 3)
}

pub const fn pack_rgb16(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32 & 0xf8) << 8) | ((g as u32 & 0xfc) << 3) | ((b as u32 & 0xf8) >> 3)
}

/// xRGB with a zero top byte.
pub const fn pack_rgb32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// ARGB with the alpha byte stored inverted.
pub const fn pack_airgb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    pack_argb(a ^ 0xff, r, g, b)
}

/// Two-pixel UYVY unit (byte order Cb Y0 Cr Y1) with both lumas equal.
pub const fn pack_uyvy(y: u8, cb: u8, cr: u8) -> u32 {
    ((y as u32) << 24) | ((cr as u32) << 16) | ((y as u32) << 8) | cb as u32
}

/// Two-pixel YUY2 unit (byte order Y0 Cb Y1 Cr) with both lumas equal.
pub const fn pack_yuy2(y: u8, cb: u8, cr: u8) -> u32 {
    ((cr as u32) << 24) | ((y as u32) << 16) | ((cb as u32) << 8) | y as u32
}

/// RGB to YCbCr, ITU-R BT.601 studio swing, integer approximation.
///
/// For full-range u8 inputs the result sits in Y 16..=235, Cb/Cr 16..=239,
/// so no clamping is needed. The right shift is arithmetic (floor), which
/// matches the reference tables this was checked against.
pub const fn ycbcr_from_rgb(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let y = 16 + ((66 * r + 129 * g + 25 * b) >> 8);
    let cb = 128 + ((-38 * r - 74 * g + 112 * b) >> 8);
    let cr = 128 + ((112 * r - 94 * g - 18 * b) >> 8);
    (y as u8, cb as u8, cr as u8)
}
