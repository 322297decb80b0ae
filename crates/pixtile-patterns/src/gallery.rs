//! The tile gallery: registry, layout, surfaces and scheduling together.

use pixtile_core::{GridLayout, Palette, Surface, TILE_SIZE};
use tracing::debug;

use crate::pacing::{FrameHandle, FramePacer};
use crate::pool::SurfacePool;
use crate::registry::Registry;
use crate::scheduler::{Attach, PatternInstance, TileScheduler};

/// Display-order options. Changing either field rebuilds the instance set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryOptions {
    /// Shuffle the catalogue instead of showing declared order.
    pub randomize: bool,
    /// Seed for the shuffle. `None` gives a different order every rebuild.
    pub seed: Option<u64>,
}

/// Counts from the last rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub drawn: usize,
    pub animating: usize,
    pub skipped: usize,
}

/// A two-row grid of pattern tiles.
#[derive(Debug)]
pub struct Gallery {
    registry: Registry,
    palette: Palette,
    options: GalleryOptions,
    tile_size: u32,
    layout: GridLayout,
    instances: Vec<PatternInstance>,
    pool: SurfacePool,
    scheduler: TileScheduler,
}

impl Gallery {
    /// Create an unmounted gallery. Call [`Gallery::rebuild`] to show it.
    pub fn new(registry: Registry, palette: Palette) -> Self {
        Self {
            registry,
            palette,
            options: GalleryOptions::default(),
            tile_size: TILE_SIZE,
            layout: GridLayout::default(),
            instances: Vec::new(),
            pool: SurfacePool::new(),
            scheduler: TileScheduler::new(),
        }
    }

    /// Use a tile size other than [`TILE_SIZE`]. Takes effect on rebuild.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Tear down the current tiles and build a fresh set for `options`.
    pub fn rebuild(&mut self, options: GalleryOptions, pacer: &mut dyn FramePacer) -> RebuildSummary {
        self.unmount(pacer);
        self.options = options;

        let ordered = self.registry.ordered(options.randomize, options.seed);
        self.layout = GridLayout::for_count(ordered.len());
        self.instances = ordered
            .into_iter()
            .take(self.layout.visible)
            .enumerate()
            .map(|(id, spec)| PatternInstance { id, spec })
            .collect();

        for instance in &self.instances {
            self.pool.mount(instance.id, self.tile_size, self.tile_size);
        }

        let mut summary = RebuildSummary::default();
        for instance in &self.instances {
            match self
                .scheduler
                .attach(instance, &mut self.pool, &self.palette, pacer)
            {
                Attach::Drawn => summary.drawn += 1,
                Attach::Animating => summary.animating += 1,
                Attach::Skipped => summary.skipped += 1,
            }
        }

        debug!(
            randomize = options.randomize,
            seed = ?options.seed,
            tiles = self.instances.len(),
            columns = self.layout.columns,
            animating = summary.animating,
            "gallery rebuilt"
        );
        summary
    }

    /// Rebuild only if `options` differ from the current ones or nothing
    /// is mounted yet.
    pub fn set_options(&mut self, options: GalleryOptions, pacer: &mut dyn FramePacer) -> bool {
        if options == self.options && self.is_mounted() {
            return false;
        }
        self.rebuild(options, pacer);
        true
    }

    /// Swap the palette and repaint every tile.
    pub fn set_palette(&mut self, palette: Palette, pacer: &mut dyn FramePacer) {
        self.palette = palette;
        if self.is_mounted() {
            self.rebuild(self.options, pacer);
        }
    }

    /// Cancel every loop and release every surface.
    pub fn unmount(&mut self, pacer: &mut dyn FramePacer) {
        self.scheduler.teardown(pacer);
        self.pool.clear();
        self.instances.clear();
        self.layout = GridLayout::default();
    }

    /// Deliver a frame. Returns `true` if a tile was redrawn.
    pub fn on_frame(&mut self, handle: FrameHandle, pacer: &mut dyn FramePacer) -> bool {
        self.scheduler
            .on_frame(handle, &mut self.pool, &self.palette, pacer)
    }

    pub fn is_mounted(&self) -> bool {
        !self.instances.is_empty()
    }

    pub fn instances(&self) -> &[PatternInstance] {
        &self.instances
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn options(&self) -> GalleryOptions {
        self.options
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Surface of the tile with `id`, if mounted.
    pub fn surface(&self, id: usize) -> Option<&Surface> {
        self.pool.get(id)
    }

    /// Number of tiles currently animating.
    pub fn animating(&self) -> usize {
        self.scheduler.active()
    }
}
