//! Validity tracking: which validators skip, which re-emit, and how changes
//! to one aspect ripple into others.

mod common;

use carmine_accel::{Aspects, BlendFactor, BlitFlags, PipelineState};
use carmine_pixel::PixelFormat;
use carmine_regs as regs;

use common::{blit_state, dest_state, engine, surface, RecordingBus};

#[test]
fn everything_starts_invalid() {
    assert_eq!(engine().valid_aspects(), Aspects::empty());
}

#[test]
fn one_blit_pass_validates_what_it_touches() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = blit_state(PixelFormat::Argb, 64, 64, 256);

    eng.set_destination(&mut bus, &state);
    eng.set_source(&mut bus, &state);
    eng.set_clip(&mut bus, &state);
    eng.set_src_colorkey(&mut bus, &state);
    eng.set_blend_function(&mut bus, &state);
    eng.set_blitting_flags(&mut bus, &state);
    eng.set_blitting_color(&mut bus, &state);

    let expected = Aspects::DESTINATION
        | Aspects::SOURCE
        | Aspects::CLIP
        | Aspects::SRC_COLORKEY
        | Aspects::SRC_BLEND
        | Aspects::DST_BLEND
        | Aspects::BLITTING_FLAGS
        | Aspects::COLOR;
    assert_eq!(eng.valid_aspects(), expected);
    assert!(!eng.is_valid(Aspects::DRAWING_FLAGS));
    bus.finish();
}

#[test]
fn a_second_pass_writes_nothing() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = blit_state(PixelFormat::Argb, 64, 64, 256);

    for _ in 0..2 {
        eng.set_destination(&mut bus, &state);
        eng.set_source(&mut bus, &state);
        eng.set_clip(&mut bus, &state);
        eng.set_src_colorkey(&mut bus, &state);
        eng.set_blend_function(&mut bus, &state);
        eng.set_blitting_flags(&mut bus, &state);
        eng.set_blitting_color(&mut bus, &state);
    }
    let after_two = bus.writes.len();

    let mut once = engine();
    let mut once_bus = RecordingBus::new();
    once.set_destination(&mut once_bus, &state);
    once.set_source(&mut once_bus, &state);
    once.set_clip(&mut once_bus, &state);
    once.set_src_colorkey(&mut once_bus, &state);
    once.set_blend_function(&mut once_bus, &state);
    once.set_blitting_flags(&mut once_bus, &state);
    once.set_blitting_color(&mut once_bus, &state);

    assert_eq!(after_two, once_bus.writes.len());
    bus.finish();
    once_bus.finish();
}

#[test]
fn destination_format_change_ripples_to_color_and_source_blend() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = dest_state(PixelFormat::Rgb16, 640, 480, 1280);

    eng.set_destination(&mut bus, &state);
    eng.set_blitting_color(&mut bus, &state);
    eng.set_blend_function(&mut bus, &state);
    assert!(eng.is_valid(Aspects::COLOR | Aspects::SRC_BLEND | Aspects::DST_BLEND));

    let moved = dest_state(PixelFormat::Argb, 640, 480, 2560);
    eng.invalidate(Aspects::DESTINATION);
    eng.set_destination(&mut bus, &moved);

    assert!(eng.is_valid(Aspects::DESTINATION));
    assert!(!eng.is_valid(Aspects::COLOR));
    assert!(!eng.is_valid(Aspects::SRC_BLEND));
    assert!(eng.is_valid(Aspects::DST_BLEND));

    eng.set_blend_function(&mut bus, &moved);
    assert_eq!(bus.count(regs::RB3D_BLENDCNTL), 2);
    bus.finish();
}

#[test]
fn destination_move_without_format_change_keeps_colors() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = dest_state(PixelFormat::Rgb16, 640, 480, 1280);

    eng.set_destination(&mut bus, &state);
    eng.set_blitting_color(&mut bus, &state);
    eng.set_blend_function(&mut bus, &state);

    let mut moved = state.clone();
    moved.destination.offset = 0x0002_0000;
    eng.invalidate(Aspects::DESTINATION);
    eng.set_destination(&mut bus, &moved);

    assert_eq!(bus.count(regs::DST_OFFSET), 2);
    assert_eq!(bus.last(regs::DST_OFFSET), Some(0x0002_0000));
    assert!(eng.is_valid(Aspects::COLOR | Aspects::SRC_BLEND | Aspects::DST_BLEND));
    bus.finish();
}

#[test]
fn packed_422_transitions_invalidate_source_and_clip_both_ways() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let rgb = blit_state(PixelFormat::Argb, 64, 64, 256);

    eng.set_destination(&mut bus, &rgb);
    eng.set_source(&mut bus, &rgb);
    eng.set_clip(&mut bus, &rgb);
    assert!(eng.is_valid(Aspects::SOURCE | Aspects::CLIP));

    let yuv = PipelineState {
        destination: surface(PixelFormat::Yuy2, 320, 240, 640),
        ..rgb.clone()
    };
    eng.invalidate(Aspects::DESTINATION);
    eng.set_destination(&mut bus, &yuv);
    assert!(!eng.is_valid(Aspects::SOURCE));
    assert!(!eng.is_valid(Aspects::CLIP));

    eng.set_source(&mut bus, &yuv);
    eng.set_clip(&mut bus, &yuv);

    eng.invalidate(Aspects::DESTINATION);
    eng.set_destination(&mut bus, &rgb);
    assert!(!eng.is_valid(Aspects::SOURCE));
    assert!(!eng.is_valid(Aspects::CLIP));
    bus.finish();
}

#[test]
fn source_format_change_invalidates_the_blitting_mode() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = blit_state(PixelFormat::Argb, 64, 64, 256);

    eng.set_destination(&mut bus, &state);
    eng.set_source(&mut bus, &state);
    eng.set_blitting_flags(&mut bus, &state);
    assert!(eng.is_valid(Aspects::BLITTING_FLAGS));

    let alpha = blit_state(PixelFormat::A8, 64, 64, 64);
    eng.invalidate(Aspects::SOURCE);
    eng.set_source(&mut bus, &alpha);
    assert!(!eng.is_valid(Aspects::BLITTING_FLAGS));

    eng.set_blitting_flags(&mut bus, &alpha);
    assert_eq!(bus.count(regs::PP_TXCBLEND_0), 2);
    bus.finish();
}

#[test]
fn source_rebind_with_same_format_keeps_the_blitting_mode() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = blit_state(PixelFormat::Argb, 64, 64, 256);

    eng.set_destination(&mut bus, &state);
    eng.set_source(&mut bus, &state);
    eng.set_blitting_flags(&mut bus, &state);

    let mut moved = state.clone();
    moved.source.offset = 0x0004_0000;
    eng.invalidate(Aspects::SOURCE);
    eng.set_source(&mut bus, &moved);

    assert!(eng.is_valid(Aspects::BLITTING_FLAGS));
    assert_eq!(bus.count(regs::SRC_OFFSET), 2);
    bus.finish();
}

#[test]
fn deinterlace_toggle_reaches_an_otherwise_valid_source() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = blit_state(PixelFormat::Yuy2, 320, 240, 640);

    eng.set_destination(&mut bus, &state);
    eng.set_source(&mut bus, &state);
    eng.set_blitting_flags(&mut bus, &state);
    assert_eq!(bus.count(regs::PP_TEX_SIZE_0), 1);

    // Dispatch sees a blitting-flags change; it has no idea the new flag
    // also affects the source binding.
    let mut fielded = state.clone();
    fielded.blit_flags |= BlitFlags::DEINTERLACE;
    eng.invalidate(Aspects::BLITTING_FLAGS);

    // Source is still valid, but the deinterlace disagreement forces a
    // rebind anyway.
    eng.set_source(&mut bus, &fielded);
    assert_eq!(bus.count(regs::PP_TEX_SIZE_0), 2);

    eng.set_blitting_flags(&mut bus, &fielded);
    eng.set_source(&mut bus, &fielded);
    assert_eq!(bus.count(regs::PP_TEX_SIZE_0), 2);
    bus.finish();
}

#[test]
fn mode_switches_are_mutually_exclusive() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = blit_state(PixelFormat::Argb, 64, 64, 256);

    eng.set_destination(&mut bus, &state);
    eng.set_source(&mut bus, &state);

    eng.set_drawing_flags(&mut bus, &state);
    assert!(eng.is_valid(Aspects::DRAWING_FLAGS));

    eng.set_blitting_flags(&mut bus, &state);
    assert!(eng.is_valid(Aspects::BLITTING_FLAGS));
    assert!(!eng.is_valid(Aspects::DRAWING_FLAGS));

    eng.set_drawing_flags(&mut bus, &state);
    assert!(eng.is_valid(Aspects::DRAWING_FLAGS));
    assert!(!eng.is_valid(Aspects::BLITTING_FLAGS));

    assert_eq!(bus.count(regs::DP_GUI_MASTER_CNTL), 3);
    bus.finish();
}

#[test]
fn blend_reruns_when_either_side_is_dirty() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = PipelineState {
        src_blend: BlendFactor::SrcAlpha,
        dst_blend: BlendFactor::InvSrcAlpha,
        ..dest_state(PixelFormat::Argb, 640, 480, 2560)
    };

    eng.set_destination(&mut bus, &state);
    eng.set_blend_function(&mut bus, &state);
    eng.invalidate(Aspects::DST_BLEND);
    eng.set_blend_function(&mut bus, &state);
    eng.invalidate(Aspects::SRC_BLEND);
    eng.set_blend_function(&mut bus, &state);

    assert_eq!(bus.count(regs::RB3D_BLENDCNTL), 3);
    assert!(eng.is_valid(Aspects::SRC_BLEND | Aspects::DST_BLEND));
    bus.finish();
}

#[test]
fn clip_reemits_only_after_invalidation() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = dest_state(PixelFormat::Rgb16, 640, 480, 1280);

    eng.set_destination(&mut bus, &state);
    eng.set_clip(&mut bus, &state);
    eng.set_clip(&mut bus, &state);
    assert_eq!(bus.count(regs::SC_TOP_LEFT), 1);

    eng.invalidate(Aspects::CLIP);
    eng.set_clip(&mut bus, &state);
    assert_eq!(bus.count(regs::SC_TOP_LEFT), 2);
    bus.finish();
}

#[test]
fn constant_color_settles_once_a_mode_is_programmed() {
    let mut eng = engine();
    let mut bus = RecordingBus::new();
    let state = dest_state(PixelFormat::Rgb16, 640, 480, 1280);

    eng.set_destination(&mut bus, &state);
    // Until a drawing mode is selected the gate never closes.
    eng.set_drawing_color(&mut bus, &state);
    eng.set_drawing_color(&mut bus, &state);
    assert_eq!(bus.count(regs::DP_BRUSH_FRGD_CLR), 2);

    eng.set_drawing_flags(&mut bus, &state);
    eng.set_drawing_color(&mut bus, &state);
    assert_eq!(bus.count(regs::DP_BRUSH_FRGD_CLR), 2);
    bus.finish();
}
