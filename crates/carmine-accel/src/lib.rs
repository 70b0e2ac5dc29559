//! State validation core for an R100-class fixed-function accelerator.
//!
//! The card keeps the whole raster pipeline in registers: surface bases and
//! pitches, scissor, constant colors, blend factors and the texture combiner
//! routing. Reprogramming all of it per operation would drown the command
//! FIFO, so this crate tracks per-aspect validity and translates only the
//! slices of a [`PipelineState`] snapshot whose registers are actually
//! stale.
//!
//! The [`engine`] module holds the validators and the register mirror, one
//! [`AccelEngine`] per card. The [`format`] module maps pixel formats to
//! hardware encodings, [`blend`] maps blend factors to RB3D_BLENDCNTL
//! fields, and [`fifo`] defines the [`CardBus`] transport the engine writes
//! through. Register writes always travel in bursts with FIFO capacity
//! reserved up front for the exact burst length.
#![forbid(unsafe_code)]

pub mod blend;
pub mod engine;
pub mod fifo;
pub mod format;
pub mod state;

pub use blend::{dst_blend_code, resolve_blend, src_blend_code, BlendFactor};
pub use engine::{AccelConfig, AccelEngine, ByteOrder};
pub use fifo::CardBus;
pub use format::{describe, ChromaOrder, FormatDescriptor};
pub use state::{
    downstream, AccelOp, Aspects, BlitFlags, ClipRect, DepthPlane, DrawFlags, Field, FieldLayout,
    PipelineState, StateChange, Surface,
};
