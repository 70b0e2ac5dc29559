//! Blend factor translation into RB3D_BLENDCNTL field codes.

use carmine_regs as regs;

/// Porter-Duff style blend factors as the dispatch layer names them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    InvSrcColor,
    SrcAlpha,
    InvSrcAlpha,
    DestAlpha,
    InvDestAlpha,
    DestColor,
    InvDestColor,
    SrcAlphaSat,
}

/// Source-side field code for `factor`.
pub const fn src_blend_code(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::Zero => regs::SRC_BLEND_GL_ZERO,
        BlendFactor::One => regs::SRC_BLEND_GL_ONE,
        BlendFactor::SrcColor => regs::SRC_BLEND_GL_SRC_COLOR,
        BlendFactor::InvSrcColor => regs::SRC_BLEND_GL_ONE_MINUS_SRC_COLOR,
        BlendFactor::SrcAlpha => regs::SRC_BLEND_GL_SRC_ALPHA,
        BlendFactor::InvSrcAlpha => regs::SRC_BLEND_GL_ONE_MINUS_SRC_ALPHA,
        BlendFactor::DestAlpha => regs::SRC_BLEND_GL_DST_ALPHA,
        BlendFactor::InvDestAlpha => regs::SRC_BLEND_GL_ONE_MINUS_DST_ALPHA,
        BlendFactor::DestColor => regs::SRC_BLEND_GL_DST_COLOR,
        BlendFactor::InvDestColor => regs::SRC_BLEND_GL_ONE_MINUS_DST_COLOR,
        BlendFactor::SrcAlphaSat => regs::SRC_BLEND_GL_SRC_ALPHA_SATURATE,
    }
}

/// Destination-side field code for `factor`.
///
/// The hardware has no destination-side alpha saturate; that request
/// produces zero, dropping the destination term.
pub const fn dst_blend_code(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::Zero => regs::DST_BLEND_GL_ZERO,
        BlendFactor::One => regs::DST_BLEND_GL_ONE,
        BlendFactor::SrcColor => regs::DST_BLEND_GL_SRC_COLOR,
        BlendFactor::InvSrcColor => regs::DST_BLEND_GL_ONE_MINUS_SRC_COLOR,
        BlendFactor::SrcAlpha => regs::DST_BLEND_GL_SRC_ALPHA,
        BlendFactor::InvSrcAlpha => regs::DST_BLEND_GL_ONE_MINUS_SRC_ALPHA,
        BlendFactor::DestAlpha => regs::DST_BLEND_GL_DST_ALPHA,
        BlendFactor::InvDestAlpha => regs::DST_BLEND_GL_ONE_MINUS_DST_ALPHA,
        BlendFactor::DestColor => regs::DST_BLEND_GL_DST_COLOR,
        BlendFactor::InvDestColor => regs::DST_BLEND_GL_ONE_MINUS_DST_COLOR,
        BlendFactor::SrcAlphaSat => regs::DST_BLEND_GL_ZERO,
    }
}

/// Both field codes for an equation, degraded for alpha-less destinations.
///
/// A destination without stored alpha reads back alpha as one, so a
/// destination-alpha factor on the source side becomes its constant
/// equivalent: `DestAlpha` reads as one, `InvDestAlpha` as zero. Only the
/// source side degrades; the destination side keeps its requested factor.
pub const fn resolve_blend(src: BlendFactor, dst: BlendFactor, dst_has_alpha: bool) -> (u32, u32) {
    let src_code = if dst_has_alpha {
        src_blend_code(src)
    } else {
        match src {
            BlendFactor::DestAlpha => regs::SRC_BLEND_GL_ONE,
            BlendFactor::InvDestAlpha => regs::SRC_BLEND_GL_ZERO,
            other => src_blend_code(other),
        }
    };
    (src_code, dst_blend_code(dst))
}
