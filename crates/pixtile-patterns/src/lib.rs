//! Pattern generators and the machinery that displays them.
//!
//! This crate provides the built-in catalogue of tile patterns (both still
//! and animated), a frame pacer abstraction for driving animation loops,
//! the per-tile scheduler, the [`Gallery`] that lays tiles out in two rows,
//! and the animated [`WarpedBackground`] banner.

mod gallery;
mod pacing;
mod patterns;
mod pool;
mod registry;
mod scheduler;
mod warped;

pub use gallery::{Gallery, GalleryOptions, RebuildSummary};
pub use pacing::{FrameHandle, FramePacer, FrameQueue};
pub use pool::SurfacePool;
pub use registry::{ANIMATED_PATTERNS, AnimatedDraw, PatternKind, PatternSpec, Registry, StaticDraw};
pub use scheduler::{Attach, PatternInstance, TileAnimation, TileScheduler};
pub use warped::{BANNER_HEIGHT, BLOCK_SIZE, VIEWPORT_MARGIN, WarpedBackground, block_color};
