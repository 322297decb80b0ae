//! Tile surfaces indexed by instance id.

use pixtile_core::Surface;

/// Arena of tile surfaces. Slot `id` belongs to the instance with that id.
///
/// A slot that was never mounted (or was unmounted) has no surface, which
/// the scheduler treats as "no drawing context yet".
#[derive(Debug, Default)]
pub struct SurfacePool {
    slots: Vec<Option<Surface>>,
}

impl SurfacePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the surface for `id`, replacing any previous one.
    pub fn mount(&mut self, id: usize, width: u32, height: u32) {
        if self.slots.len() <= id {
            self.slots.resize_with(id + 1, || None);
        }
        self.slots[id] = Some(Surface::new(width, height));
    }

    /// Release the surface for `id`.
    pub fn unmount(&mut self, id: usize) -> Option<Surface> {
        self.slots.get_mut(id).and_then(Option::take)
    }

    /// Release every surface.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, id: usize) -> Option<&Surface> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut Surface> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Number of mounted surfaces.
    pub fn mounted(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_and_unmount() {
        let mut pool = SurfacePool::new();
        pool.mount(3, 8, 8);
        assert_eq!(pool.mounted(), 1);
        assert!(pool.get(0).is_none());
        assert_eq!(pool.get(3).map(Surface::width), Some(8));

        assert!(pool.unmount(3).is_some());
        assert!(pool.unmount(3).is_none());
        assert!(pool.unmount(42).is_none());
        assert_eq!(pool.mounted(), 0);
    }
}
