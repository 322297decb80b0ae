//! Per-tile draw scheduling.
//!
//! Static tiles are painted once when attached. Animated tiles get a
//! [`TileAnimation`] that redraws on every frame the pacer delivers and
//! immediately asks for the next one. Every pending request is owned by
//! exactly one animation, so tearing down cancels each one exactly once.

use pixtile_core::Palette;
use tracing::debug;

use crate::pacing::{FrameHandle, FramePacer};
use crate::pool::SurfacePool;
use crate::registry::PatternSpec;

/// One displayed pattern, identified by its position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternInstance {
    pub id: usize,
    pub spec: PatternSpec,
}

/// What happened when a tile was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// No surface was mounted for the tile.
    Skipped,
    /// A static pattern was drawn once.
    Drawn,
    /// An animation loop was started.
    Animating,
}

/// Redraw loop state for one animated tile.
#[derive(Debug)]
pub struct TileAnimation {
    id: usize,
    spec: PatternSpec,
    frame: u64,
    pending: Option<FrameHandle>,
}

impl TileAnimation {
    fn new(id: usize, spec: PatternSpec) -> Self {
        Self {
            id,
            spec,
            frame: 0,
            pending: None,
        }
    }

    /// Index of the next frame to draw.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Draw the current frame and request the next. Returns `false` if the
    /// tile no longer has a surface.
    fn tick(&mut self, pool: &mut SurfacePool, palette: &Palette, pacer: &mut dyn FramePacer) -> bool {
        let Some(surface) = pool.get_mut(self.id) else {
            return false;
        };
        surface.fill(palette.background());
        self.spec.draw(surface, palette, self.frame);
        self.frame += 1;
        self.pending = Some(pacer.request_frame());
        true
    }

    /// Cancel the outstanding request, if any.
    fn cancel(&mut self, pacer: &mut dyn FramePacer) -> bool {
        match self.pending.take() {
            Some(handle) => {
                pacer.cancel_frame(handle);
                true
            }
            None => false,
        }
    }
}

/// Drives every tile of one instance set.
#[derive(Debug, Default)]
pub struct TileScheduler {
    animations: Vec<TileAnimation>,
}

impl TileScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a tile for the first time, starting its loop if it animates.
    ///
    /// Re-attaching an id that is already animating replaces its loop.
    pub fn attach(
        &mut self,
        instance: &PatternInstance,
        pool: &mut SurfacePool,
        palette: &Palette,
        pacer: &mut dyn FramePacer,
    ) -> Attach {
        self.detach(instance.id, pacer);

        if pool.get(instance.id).is_none() {
            debug!(tile = instance.id, pattern = instance.spec.name(), "no surface, skipping tile");
            return Attach::Skipped;
        }

        if instance.spec.is_animated() {
            let mut animation = TileAnimation::new(instance.id, instance.spec);
            animation.tick(pool, palette, pacer);
            self.animations.push(animation);
            return Attach::Animating;
        }

        if let Some(surface) = pool.get_mut(instance.id) {
            surface.fill(palette.background());
            instance.spec.draw(surface, palette, 0);
        }
        Attach::Drawn
    }

    /// Run the tick that `handle` was requested for. Returns `true` if a
    /// tile was redrawn; handles this scheduler does not own are ignored.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        pool: &mut SurfacePool,
        palette: &Palette,
        pacer: &mut dyn FramePacer,
    ) -> bool {
        let Some(index) = self
            .animations
            .iter()
            .position(|animation| animation.pending == Some(handle))
        else {
            return false;
        };

        let animation = &mut self.animations[index];
        animation.pending = None;
        if animation.tick(pool, palette, pacer) {
            return true;
        }

        debug!(tile = animation.id, "surface released, stopping animation");
        self.animations.swap_remove(index);
        false
    }

    /// Stop the loop of a single tile.
    pub fn detach(&mut self, id: usize, pacer: &mut dyn FramePacer) -> bool {
        let Some(index) = self.animations.iter().position(|a| a.id == id) else {
            return false;
        };
        let mut animation = self.animations.swap_remove(index);
        animation.cancel(pacer);
        true
    }

    /// Cancel every outstanding request and forget all loops. Returns the
    /// number of requests cancelled.
    pub fn teardown(&mut self, pacer: &mut dyn FramePacer) -> usize {
        let mut cancelled = 0;
        for mut animation in self.animations.drain(..) {
            if animation.cancel(pacer) {
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            debug!(cancelled, "tile animations torn down");
        }
        cancelled
    }

    /// Number of running loops.
    pub fn active(&self) -> usize {
        self.animations.len()
    }

    pub fn animation(&self, id: usize) -> Option<&TileAnimation> {
        self.animations.iter().find(|a| a.id == id)
    }
}
