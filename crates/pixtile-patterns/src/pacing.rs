//! Frame pacing: one-shot "draw on the next refresh" requests.
//!
//! Anything that animates asks a [`FramePacer`] for the next frame and keeps
//! the returned [`FrameHandle`] so it can cancel later. The host decides
//! when a refresh happens; [`FrameQueue`] fires every outstanding request
//! once per [`FrameQueue::advance`].

/// Identifies one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

/// Schedules work for the next display refresh.
pub trait FramePacer {
    /// Request one callback on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A queue of frame requests fired in request order.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every request made since the last refresh.
    ///
    /// Requests made while handling the returned handles are due on the
    /// following call, so a callback never runs twice in one refresh.
    pub fn advance(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl FramePacer for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&pending| pending != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_fire_once() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        assert_eq!(queue.advance(), vec![a, b]);
        assert!(queue.advance().is_empty());
    }

    #[test]
    fn test_handles_are_unique() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        queue.advance();
        let b = queue.request_frame();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        queue.cancel_frame(a);
        queue.cancel_frame(a);
        assert_eq!(queue.pending(), 0);
        assert!(queue.advance().is_empty());
    }
}
