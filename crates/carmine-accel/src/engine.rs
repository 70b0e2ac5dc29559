//! The state validation engine.
//!
//! One [`AccelEngine`] per card translates pipeline snapshots into register
//! bursts, skipping every aspect whose registers already match. Texture
//! unit 0 and combiner stage 0 serve blitting, unit 1 and stage 1 serve
//! drawing, so a mode switch never reprograms the other mode's sampler.
//! The combiner evaluates `A*B + C` per stage with unset slots reading zero.

use carmine_pixel::{
    pack_airgb, pack_argb, pack_argb1555, pack_argb2554, pack_argb4444, pack_rgb16, pack_rgb32,
    pack_rgb332, pack_uyvy, pack_yuy2, ycbcr_from_rgb, PixelFormat,
};
use carmine_regs as regs;

use crate::blend::resolve_blend;
use crate::fifo::CardBus;
use crate::format::{describe, ChromaOrder};
use crate::state::{
    downstream, AccelOp, Aspects, BlitFlags, ClipRect, DrawFlags, Field, FieldLayout,
    PipelineState, StateChange,
};

/// Host byte order, as far as the aperture swap logic cares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl Default for ByteOrder {
    fn default() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

/// Fixed per-card parameters the engine is created with.
#[derive(Debug, Copy, Clone, Default)]
pub struct AccelConfig {
    /// Card-space byte offset where the framebuffer begins.
    pub fb_offset: u32,
    /// Framebuffer-relative offset of the scratch area reserved for staged
    /// constant colors.
    pub scratch_offset: u32,
    /// Big-endian hosts reprogram the aperture swap when the source pixel
    /// size changes; little-endian hosts never touch it.
    pub byte_order: ByteOrder,
}

/// `(y << 16) | x` as the scissor registers want it.
fn pack_xy(y: i32, x: i32) -> u32 {
    ((y as u32) << 16) | (x as u32 & 0xffff)
}

/// Next SURFACE_CNTL value when binding a source of the given pixel size.
fn swapped_surface_cntl(current: u32, bytes_per_pixel: u32) -> u32 {
    match bytes_per_pixel {
        2 => (current & !regs::NONSURF_AP0_SWP_32BPP) | regs::NONSURF_AP0_SWP_16BPP,
        4 => (current & !regs::NONSURF_AP0_SWP_16BPP) | regs::NONSURF_AP0_SWP_32BPP,
        _ => current & !(regs::NONSURF_AP0_SWP_16BPP | regs::NONSURF_AP0_SWP_32BPP),
    }
}

/// Per-card mirror of every register the validators program, plus the
/// validity bits that decide whether a validator touches the card at all.
///
/// The dispatch layer clears validity bits when its snapshot fields change
/// and then calls the validators the pending operation needs, destination
/// first. Everything else ripples through [`downstream`].
#[derive(Debug)]
pub struct AccelEngine {
    fb_offset: u32,
    scratch_offset: u32,
    byte_order: ByteOrder,

    valid: Aspects,

    dst_format: Option<PixelFormat>,
    dst_offset: u32,
    dst_pitch: u32,
    dst_422: bool,
    dst_offset_cb: u32,
    dst_offset_cr: u32,

    src_format: Option<PixelFormat>,
    src_offset: u32,
    src_pitch: u32,
    src_width: u32,
    src_height: u32,
    src_mask: u32,
    src_offset_cb: u32,
    src_offset_cr: u32,

    src_key: u32,

    clip: ClipRect,

    y_cop: u32,
    cb_cop: u32,
    cr_cop: u32,

    draw_flags: DrawFlags,
    blit_flags: BlitFlags,

    dp_gui_master_cntl: u32,
    rb3d_cntl: u32,
    surface_cntl: u32,
}

impl AccelEngine {
    pub fn new(config: AccelConfig) -> Self {
        Self {
            fb_offset: config.fb_offset,
            scratch_offset: config.scratch_offset,
            byte_order: config.byte_order,
            valid: Aspects::empty(),
            dst_format: None,
            dst_offset: 0,
            dst_pitch: 0,
            dst_422: false,
            dst_offset_cb: 0,
            dst_offset_cr: 0,
            src_format: None,
            src_offset: 0,
            src_pitch: 0,
            src_width: 0,
            src_height: 0,
            src_mask: 0,
            src_offset_cb: 0,
            src_offset_cr: 0,
            src_key: 0,
            clip: ClipRect::default(),
            y_cop: 0,
            cb_cop: 0,
            cr_cop: 0,
            draw_flags: DrawFlags::empty(),
            blit_flags: BlitFlags::empty(),
            dp_gui_master_cntl: 0,
            rb3d_cntl: 0,
            surface_cntl: 0,
        }
    }

    pub fn valid_aspects(&self) -> Aspects {
        self.valid
    }

    pub fn is_valid(&self, aspects: Aspects) -> bool {
        self.valid.contains(aspects)
    }

    /// Drop validity for `aspects`; the next matching validator call will
    /// reprogram them. Called by dispatch when snapshot fields change.
    pub fn invalidate(&mut self, aspects: Aspects) {
        self.valid.remove(aspects);
    }

    pub fn dst_format(&self) -> Option<PixelFormat> {
        self.dst_format
    }

    pub fn src_format(&self) -> Option<PixelFormat> {
        self.src_format
    }

    /// Whether the bound destination is packed 4:2:2.
    pub fn dst_is_packed_422(&self) -> bool {
        self.dst_422
    }

    /// Card-space offsets of the destination chroma planes, Cb then Cr.
    /// Stale unless a planar 4:2:0 destination is bound.
    pub fn dst_chroma_offsets(&self) -> (u32, u32) {
        (self.dst_offset_cb, self.dst_offset_cr)
    }

    /// Card-space offsets of the source chroma planes, Cb then Cr. Stale
    /// unless a planar 4:2:0 source is bound.
    pub fn src_chroma_offsets(&self) -> (u32, u32) {
        (self.src_offset_cb, self.src_offset_cr)
    }

    /// Per-plane constant colors for planar fills: luma, Cb, Cr.
    pub fn plane_colors(&self) -> (u32, u32, u32) {
        (self.y_cop, self.cb_cop, self.cr_cop)
    }

    /// Color-key comparison mask of the bound source format.
    pub fn src_key_mask(&self) -> u32 {
        self.src_mask
    }

    /// The mirrored SURFACE_CNTL value, aperture swap bits included.
    pub fn surface_cntl(&self) -> u32 {
        self.surface_cntl
    }

    fn mark_valid(&mut self, aspects: Aspects) {
        self.valid.insert(aspects);
    }

    fn apply(&mut self, change: StateChange) {
        self.valid.remove(downstream(change));
    }

    /// Park a one-pixel YUY2 texture holding the constant color in the
    /// scratch area and aim texture unit 1 at it. Packed 4:2:2 destinations
    /// cannot take the constant through the texture factor.
    fn stage_constant_color(&mut self, bus: &mut impl CardBus, y: u8, cb: u8, cr: u8) {
        bus.write_vram(self.scratch_offset, pack_yuy2(y, cb, cr));
        bus.reserve_fifo(1);
        bus.write_reg(regs::PP_TXOFFSET_1, self.fb_offset + self.scratch_offset);
    }

    /// Bind the destination surface to both the 2D engine and the 3D color
    /// buffer, plus the depth buffer when the surface carries one.
    ///
    /// When offset, pitch and format all match the cached binding only the
    /// validity bit is restored and nothing is written.
    pub fn set_destination(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::DESTINATION) {
            return;
        }

        let surface = &state.destination;
        assert_eq!(surface.offset % 32, 0, "destination offset not 32-byte aligned");
        assert_eq!(surface.pitch % 64, 0, "destination pitch not 64-byte aligned");

        let offset = self.fb_offset + surface.offset;
        let pitch = surface.pitch;

        if self.dst_offset != offset || self.dst_pitch != pitch || self.dst_format != Some(surface.format)
        {
            let desc = describe(surface.format);

            self.dp_gui_master_cntl = desc.gmc_dst
                | regs::GMC_WR_MSK_DIS
                | regs::GMC_SRC_PITCH_OFFSET_CNTL
                | regs::GMC_DST_PITCH_OFFSET_CNTL
                | regs::GMC_DST_CLIPPING;
            self.rb3d_cntl = desc.rb3d_color;

            match desc.planar {
                Some(ChromaOrder::CbCr) => {
                    self.dst_offset_cb = offset + pitch * surface.height;
                    self.dst_offset_cr = self.dst_offset_cb + pitch * surface.height / 4;
                }
                Some(ChromaOrder::CrCb) => {
                    self.dst_offset_cr = offset + pitch * surface.height;
                    self.dst_offset_cb = self.dst_offset_cr + pitch * surface.height / 4;
                }
                None => {}
            }

            bus.reserve_fifo(2);
            bus.write_reg(regs::DST_OFFSET, offset);
            bus.write_reg(regs::DST_PITCH, pitch);

            bus.reserve_fifo(2);
            bus.write_reg(regs::RB3D_COLOROFFSET, offset);
            bus.write_reg(regs::RB3D_COLORPITCH, pitch / desc.bytes_per_pixel);

            if let Some(depth) = surface.depth {
                bus.reserve_fifo(3);
                bus.write_reg(regs::RB3D_DEPTHOFFSET, self.fb_offset + depth.offset);
                bus.write_reg(regs::RB3D_DEPTHPITCH, depth.pitch >> 1);
                bus.write_reg(
                    regs::RB3D_ZSTENCILCNTL,
                    regs::DEPTH_FORMAT_16BIT_INT_Z | regs::Z_TEST_ALWAYS,
                );
                self.rb3d_cntl |= regs::Z_ENABLE;
            }

            if self.dst_format != Some(surface.format) {
                if desc.packed_422 != self.dst_422 {
                    self.apply(StateChange::DestPacking);
                }
                self.apply(StateChange::DestFormat);
                tracing::debug!(format = ?surface.format, offset, pitch, "destination bound");
            }

            self.dst_format = Some(surface.format);
            self.dst_offset = offset;
            self.dst_pitch = pitch;
            self.dst_422 = desc.packed_422;
        }

        self.mark_valid(Aspects::DESTINATION);
    }

    /// Bind the source surface to the 2D engine and texture unit 0.
    ///
    /// Deinterlacing halves the sampled height and, for the odd field,
    /// advances the plane offsets: a separated surface skips the whole even
    /// field (luma by `height * pitch`, chroma by a quarter of that), an
    /// interleaved one skips a single line (luma by `pitch`, chroma by half)
    /// and doubles the pitch to step over the other field.
    pub fn set_source(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::SOURCE)
            && state.blit_flags.contains(BlitFlags::DEINTERLACE)
                == self.blit_flags.contains(BlitFlags::DEINTERLACE)
        {
            return;
        }

        let surface = &state.source;
        assert_eq!(surface.offset % 32, 0, "source offset not 32-byte aligned");
        assert_eq!(surface.pitch % 64, 0, "source pitch not 64-byte aligned");

        self.src_offset = self.fb_offset + surface.offset;
        self.src_pitch = surface.pitch;
        self.src_width = surface.width - 1;
        self.src_height = surface.height - 1;

        let desc = describe(surface.format);

        let tx_format = regs::TXFORMAT_NON_POWER2 | desc.tx_format;
        let mut tx_filter = regs::MAG_FILTER_LINEAR
            | regs::MIN_FILTER_LINEAR
            | regs::CLAMP_S_CLAMP_LAST
            | regs::CLAMP_T_CLAMP_LAST;
        if !desc.linear_filter {
            tx_filter &= !(regs::MAG_FILTER_LINEAR | regs::MIN_FILTER_LINEAR);
        }
        // A packed 4:2:2 destination consumes 4:2:2 texels raw.
        if desc.packed_422 && !self.dst_422 {
            tx_filter |= regs::YUV_TO_RGB;
        }

        self.src_mask = desc.key_mask;

        match desc.planar {
            Some(ChromaOrder::CbCr) => {
                self.src_offset_cb = self.src_offset + self.src_pitch * surface.height;
                self.src_offset_cr = self.src_offset_cb + self.src_pitch * surface.height / 4;
            }
            Some(ChromaOrder::CrCb) => {
                self.src_offset_cr = self.src_offset + self.src_pitch * surface.height;
                self.src_offset_cb = self.src_offset_cr + self.src_pitch * surface.height / 4;
            }
            None => {}
        }

        if state.blit_flags.contains(BlitFlags::DEINTERLACE) {
            self.src_height /= 2;
            match surface.field_layout {
                FieldLayout::Separated => {
                    if surface.field == Field::Odd {
                        self.src_offset += self.src_height * self.src_pitch;
                        self.src_offset_cr += self.src_height * self.src_pitch / 4;
                        self.src_offset_cb += self.src_height * self.src_pitch / 4;
                    }
                }
                FieldLayout::Interleaved => {
                    if surface.field == Field::Odd {
                        self.src_offset += self.src_pitch;
                        self.src_offset_cr += self.src_pitch / 2;
                        self.src_offset_cb += self.src_pitch / 2;
                    }
                    self.src_pitch *= 2;
                }
            }
        }

        if self.byte_order == ByteOrder::Big && self.src_format != Some(surface.format) {
            self.surface_cntl = swapped_surface_cntl(self.surface_cntl, desc.bytes_per_pixel);
            bus.reserve_fifo(1);
            bus.write_reg(regs::SURFACE_CNTL, self.surface_cntl);
            tracing::debug!(surface_cntl = self.surface_cntl, "aperture swap reprogrammed");
        }

        bus.reserve_fifo(2);
        bus.write_reg(regs::SRC_OFFSET, self.src_offset);
        bus.write_reg(regs::SRC_PITCH, self.src_pitch);

        bus.reserve_fifo(5);
        bus.write_reg(regs::PP_TXFILTER_0, tx_filter);
        bus.write_reg(regs::PP_TXFORMAT_0, tx_format);
        bus.write_reg(
            regs::PP_TEX_SIZE_0,
            (self.src_height << 16) | (self.src_width & 0xffff),
        );
        bus.write_reg(regs::PP_TEX_PITCH_0, self.src_pitch - 32);
        bus.write_reg(regs::PP_TXOFFSET_0, self.src_offset);

        if self.src_format != Some(surface.format) {
            self.apply(StateChange::SrcFormat);
            tracing::debug!(format = ?surface.format, "source bound");
        }
        self.src_format = Some(surface.format);

        self.mark_valid(Aspects::SOURCE);
    }

    /// Program the 2D scissor and the 3D scissor from the clip rectangle.
    ///
    /// The 2D bottom-right is exclusive, the 3D one inclusive. On packed
    /// 4:2:2 destinations the 2D engine addresses 32-bit units of two
    /// pixels, so the 2D X coordinates halve; the 3D scissor stays in
    /// pixels.
    pub fn set_clip(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::CLIP) {
            return;
        }

        let clip = state.clip;

        bus.reserve_fifo(2);
        if self.dst_422 {
            bus.write_reg(regs::SC_TOP_LEFT, pack_xy(clip.y1, clip.x1 / 2));
            bus.write_reg(regs::SC_BOTTOM_RIGHT, pack_xy(clip.y2 + 1, (clip.x2 + 1) / 2));
        } else {
            bus.write_reg(regs::SC_TOP_LEFT, pack_xy(clip.y1, clip.x1));
            bus.write_reg(regs::SC_BOTTOM_RIGHT, pack_xy(clip.y2 + 1, clip.x2 + 1));
        }

        bus.reserve_fifo(2);
        bus.write_reg(regs::RE_TOP_LEFT, pack_xy(clip.y1, clip.x1));
        bus.write_reg(regs::RE_BOTTOM_RIGHT, pack_xy(clip.y2, clip.x2));

        self.clip = clip;
        self.mark_valid(Aspects::CLIP);
    }

    /// Translate the constant color for drawing: a 2D brush color in
    /// destination packing and a 3D texture factor for stage 1.
    ///
    /// Skipped only when both the color and the drawing mode are already
    /// valid, since the mode decides how the color is consumed.
    pub fn set_drawing_color(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::COLOR | Aspects::DRAWING_FLAGS) {
            return;
        }

        let color = state.color;
        let argb = pack_argb(color.a, color.r, color.g, color.b);
        let dst_format = self.dst_format;

        let (color2d, color3d) = match dst_format {
            Some(PixelFormat::Alut44) => {
                let index = state.color_index | (color.a & 0xf0);
                (u32::from(index), pack_rgb32(index, index, index))
            }
            Some(PixelFormat::Lut8) => {
                let index = state.color_index;
                (u32::from(index), pack_rgb32(index, index, index))
            }
            Some(PixelFormat::A8) => {
                let a = u32::from(color.a);
                (a, (a << 24) | 0x00ff_ffff)
            }
            Some(PixelFormat::Rgb332) => (pack_rgb332(color.r, color.g, color.b), argb),
            Some(PixelFormat::Argb2554) => {
                (pack_argb2554(color.a, color.r, color.g, color.b), argb)
            }
            Some(PixelFormat::Argb4444) => {
                (pack_argb4444(color.a, color.r, color.g, color.b), argb)
            }
            Some(PixelFormat::Argb1555) => {
                (pack_argb1555(color.a, color.r, color.g, color.b), argb)
            }
            Some(PixelFormat::Rgb16) => (pack_rgb16(color.r, color.g, color.b), argb),
            Some(PixelFormat::Rgb32) => (pack_rgb32(color.r, color.g, color.b), argb),
            Some(PixelFormat::Argb) => (argb, argb),
            Some(PixelFormat::AiRgb) => (pack_airgb(color.a, color.r, color.g, color.b), argb),
            Some(PixelFormat::Uyvy) => {
                let (y, cb, cr) = ycbcr_from_rgb(color.r, color.g, color.b);
                self.stage_constant_color(bus, y, cb, cr);
                (pack_uyvy(y, cb, cr), argb)
            }
            Some(PixelFormat::Yuy2) => {
                let (y, cb, cr) = ycbcr_from_rgb(color.r, color.g, color.b);
                self.stage_constant_color(bus, y, cb, cr);
                (pack_yuy2(y, cb, cr), argb)
            }
            Some(PixelFormat::I420) | Some(PixelFormat::Yv12) => {
                let (y, cb, cr) = ycbcr_from_rgb(color.r, color.g, color.b);
                self.y_cop = pack_argb(color.a, y, y, y);
                self.cb_cop = pack_argb(color.a, cb, cb, cb);
                self.cr_cop = pack_argb(color.a, cr, cr, cr);
                (self.y_cop, self.y_cop)
            }
            _ => panic!("drawing color for unsupported destination {dst_format:?}"),
        };

        bus.reserve_fifo(2);
        bus.write_reg(regs::DP_BRUSH_FRGD_CLR, color2d);
        bus.write_reg(regs::PP_TFACTOR_1, color3d);

        self.mark_valid(Aspects::COLOR);
    }

    /// Translate the constant color for blitting into the stage 0 texture
    /// factor, premultiplied when the mode modulates with it after its own
    /// premultiply step.
    pub fn set_blitting_color(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::COLOR | Aspects::BLITTING_FLAGS) {
            return;
        }

        let mut color = state.color;
        if state.blit_flags.contains(BlitFlags::COLORIZE)
            && state.blit_flags.contains(BlitFlags::SRC_PREMULTCOLOR)
        {
            color = color.premultiplied();
        }

        let color3d = match self.dst_format {
            Some(PixelFormat::A8) => (u32::from(color.a) << 24) | 0x00ff_ffff,
            Some(PixelFormat::I420) | Some(PixelFormat::Yv12) => {
                let (y, cb, cr) = ycbcr_from_rgb(color.r, color.g, color.b);
                self.y_cop = pack_argb(color.a, y, y, y);
                self.cb_cop = pack_argb(color.a, cb, cb, cb);
                self.cr_cop = pack_argb(color.a, cr, cr, cr);
                self.y_cop
            }
            Some(PixelFormat::Uyvy) | Some(PixelFormat::Yuy2) => {
                let (y, cb, cr) = ycbcr_from_rgb(color.r, color.g, color.b);
                self.stage_constant_color(bus, y, cb, cr);
                pack_argb(color.a, color.r, color.g, color.b)
            }
            _ => pack_argb(color.a, color.r, color.g, color.b),
        };

        bus.reserve_fifo(1);
        bus.write_reg(regs::PP_TFACTOR_0, color3d);

        self.mark_valid(Aspects::COLOR);
    }

    /// Program the source color key, masked to the bits the bound source
    /// format actually stores.
    pub fn set_src_colorkey(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::SRC_COLORKEY) {
            return;
        }

        self.src_key = state.src_colorkey;

        bus.reserve_fifo(2);
        bus.write_reg(regs::CLR_CMP_CLR_SRC, self.src_key);
        bus.write_reg(regs::CLR_CMP_MASK, self.src_mask);

        self.mark_valid(Aspects::SRC_COLORKEY);
    }

    /// Program the blend equation, degrading destination-alpha source
    /// factors when the destination stores no alpha.
    pub fn set_blend_function(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::SRC_BLEND | Aspects::DST_BLEND) {
            return;
        }

        let dst_has_alpha = self.dst_format.map_or(false, PixelFormat::has_alpha);
        let (sblend, dblend) = resolve_blend(state.src_blend, state.dst_blend, dst_has_alpha);

        bus.reserve_fifo(1);
        bus.write_reg(regs::RB3D_BLENDCNTL, sblend | dblend);

        self.mark_valid(Aspects::SRC_BLEND | Aspects::DST_BLEND);
    }

    /// Configure both engines for drawing: solid brush for the 2D side,
    /// combiner stage 1 fed from the texture factor for the 3D side.
    pub fn set_drawing_flags(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::DRAWING_FLAGS) {
            return;
        }

        let mut master = self.dp_gui_master_cntl
            | regs::GMC_SRC_DATATYPE_MONO_FG_LA
            | regs::GMC_BRUSH_SOLID_COLOR
            | regs::GMC_DP_SRC_SOURCE_MEMORY
            | regs::GMC_CLR_CMP_CNTL_DIS;
        // Dithering a constant color only adds noise.
        let mut rb3d = self.rb3d_cntl & !regs::DITHER_ENABLE;
        let mut pp = regs::SCISSOR_ENABLE | regs::TEX_BLEND_1_ENABLE;
        let mut cblend = regs::COLOR_ARG_C_TFACTOR_COLOR;

        if self.dst_422 {
            pp |= regs::TEX_1_ENABLE;
            cblend = regs::COLOR_ARG_C_T1_COLOR;
        }

        if state.draw_flags.contains(DrawFlags::BLEND) {
            rb3d |= regs::ALPHA_BLEND_ENABLE;
        } else if self.dst_format == Some(PixelFormat::A8) {
            cblend = regs::COLOR_ARG_C_TFACTOR_ALPHA;
        }

        if state.draw_flags.contains(DrawFlags::XOR) {
            rb3d |= regs::ROP_ENABLE;
            master |= regs::ROP3_PATXOR;
        } else {
            master |= regs::ROP3_PATCOPY;
        }

        bus.reserve_fifo(2);
        bus.write_reg(regs::DP_GUI_MASTER_CNTL, master);
        bus.write_reg(regs::DP_CNTL, regs::DST_X_LEFT_TO_RIGHT | regs::DST_Y_TOP_TO_BOTTOM);

        bus.reserve_fifo(6);
        bus.write_reg(regs::RB3D_CNTL, rb3d);
        bus.write_reg(
            regs::SE_CNTL,
            regs::DIFFUSE_SHADE_FLAT
                | regs::ALPHA_SHADE_FLAT
                | regs::BFACE_SOLID
                | regs::FFACE_SOLID
                | regs::VTX_PIX_CENTER_OGL
                | regs::ROUND_MODE_ROUND
                | regs::ROUND_PREC_4TH_PIX,
        );
        bus.write_reg(regs::PP_CNTL, pp);
        bus.write_reg(regs::PP_TXCBLEND_1, cblend);
        bus.write_reg(regs::PP_TXABLEND_1, regs::ALPHA_ARG_C_TFACTOR_ALPHA);
        bus.write_reg(regs::SE_VTX_FMT, regs::SE_VTX_FMT_XY);

        self.draw_flags = state.draw_flags;

        self.mark_valid(Aspects::DRAWING_FLAGS);
        self.apply(StateChange::DrawModeSelected);
    }

    /// Configure both engines for blitting: memory source for the 2D side,
    /// texture unit 0 through combiner stage 0 for the 3D side. Textured
    /// triangles additionally interpolate color, alpha and depth per vertex.
    pub fn set_blitting_flags(&mut self, bus: &mut impl CardBus, state: &PipelineState) {
        if self.is_valid(Aspects::BLITTING_FLAGS) {
            return;
        }

        let mut master = self.dp_gui_master_cntl;
        let mut cmp = 0;
        let mut rb3d = self.rb3d_cntl;
        let mut se =
            regs::BFACE_SOLID | regs::FFACE_SOLID | regs::VTX_PIX_CENTER_OGL | regs::ROUND_MODE_ROUND;
        let mut pp = regs::SCISSOR_ENABLE | regs::TEX_0_ENABLE | regs::TEX_BLEND_0_ENABLE;
        let mut cblend = regs::COLOR_ARG_C_T0_COLOR;
        let mut ablend = regs::ALPHA_ARG_C_T0_ALPHA;
        let mut vtx = regs::SE_VTX_FMT_XY | regs::SE_VTX_FMT_ST0;
        let mut coord = regs::VTX_XY_PRE_MULT_1_OVER_W0 | regs::TEX1_W_ROUTING_USE_W0;

        if state.op == AccelOp::TexTriangles {
            se |= regs::DIFFUSE_SHADE_GOURAUD
                | regs::ALPHA_SHADE_GOURAUD
                | regs::SPECULAR_SHADE_GOURAUD
                | regs::FLAT_SHADE_VTX_LAST
                | regs::ROUND_PREC_8TH_PIX;
            vtx |= regs::SE_VTX_FMT_W0 | regs::SE_VTX_FMT_Z;
        } else {
            se |= regs::DIFFUSE_SHADE_FLAT | regs::ALPHA_SHADE_FLAT | regs::ROUND_PREC_4TH_PIX;
            coord |= regs::VTX_ST0_NONPARAMETRIC | regs::VTX_ST1_NONPARAMETRIC;
        }

        if state
            .blit_flags
            .intersects(BlitFlags::BLEND_COLOR_ALPHA | BlitFlags::BLEND_ALPHA_CHANNEL)
        {
            if state.blit_flags.contains(BlitFlags::BLEND_COLOR_ALPHA) {
                ablend = if state.blit_flags.contains(BlitFlags::BLEND_ALPHA_CHANNEL) {
                    regs::ALPHA_ARG_A_T0_ALPHA | regs::ALPHA_ARG_B_TFACTOR_ALPHA
                } else {
                    regs::ALPHA_ARG_C_TFACTOR_ALPHA
                };
            }
            rb3d |= regs::ALPHA_BLEND_ENABLE;
        }

        if self.dst_format != Some(PixelFormat::A8) {
            if state.blit_flags.contains(BlitFlags::COLORIZE) {
                if self.dst_422 {
                    cblend = if self.src_format == Some(PixelFormat::A8) {
                        regs::COLOR_ARG_C_T1_COLOR
                    } else {
                        regs::COLOR_ARG_A_T0_COLOR | regs::COLOR_ARG_B_T1_COLOR
                    };
                    pp |= regs::TEX_1_ENABLE;
                } else {
                    cblend = if self.src_format == Some(PixelFormat::A8) {
                        regs::COLOR_ARG_C_TFACTOR_COLOR
                    } else {
                        regs::COLOR_ARG_A_T0_COLOR | regs::COLOR_ARG_B_TFACTOR_COLOR
                    };
                }
            } else if state.blit_flags.contains(BlitFlags::SRC_PREMULTCOLOR) {
                cblend = if self.src_format == Some(PixelFormat::A8) {
                    regs::COLOR_ARG_C_T0_ALPHA
                } else {
                    regs::COLOR_ARG_A_T0_COLOR | regs::COLOR_ARG_B_TFACTOR_ALPHA
                };
            }
        } else {
            // Writing alpha: route whichever term carries it.
            cblend = if state
                .blit_flags
                .intersects(BlitFlags::BLEND_COLOR_ALPHA | BlitFlags::BLEND_ALPHA_CHANNEL)
            {
                regs::COLOR_ARG_C_TFACTOR_COLOR
            } else {
                regs::COLOR_ARG_C_T0_ALPHA
            };
        }

        if state.blit_flags.contains(BlitFlags::SRC_COLORKEY) {
            cmp = regs::SRC_CMP_EQ_COLOR | regs::CLR_CMP_SRC_SOURCE;
        } else {
            master |= regs::GMC_CLR_CMP_CNTL_DIS;
        }

        if state.blit_flags.contains(BlitFlags::XOR) {
            master |= regs::ROP3_PATXOR;
            rb3d |= regs::ROP_ENABLE;
        } else {
            master |= regs::ROP3_SRCCOPY;
        }

        bus.reserve_fifo(2);
        bus.write_reg(regs::CLR_CMP_CNTL, cmp);
        bus.write_reg(
            regs::DP_GUI_MASTER_CNTL,
            master | regs::GMC_BRUSH_NONE | regs::GMC_SRC_DATATYPE_COLOR | regs::GMC_DP_SRC_SOURCE_MEMORY,
        );

        bus.reserve_fifo(7);
        bus.write_reg(regs::RB3D_CNTL, rb3d);
        bus.write_reg(regs::SE_CNTL, se);
        bus.write_reg(regs::PP_CNTL, pp);
        bus.write_reg(regs::PP_TXCBLEND_0, cblend);
        bus.write_reg(regs::PP_TXABLEND_0, ablend);
        bus.write_reg(regs::SE_VTX_FMT, vtx);
        bus.write_reg(regs::SE_COORD_FMT, coord);

        self.blit_flags = state.blit_flags;

        self.mark_valid(Aspects::BLITTING_FLAGS);
        self.apply(StateChange::BlitModeSelected);
    }
}
