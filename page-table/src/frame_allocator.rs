use crate::FrameNumber;

/// Hands out physical frames in ascending order until none are left.
///
/// Frames are never given back individually: once every frame is in use the
/// pager recycles them through eviction, and only `reset` makes them free
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameAllocator<const FRAMES: usize> {
    next_free: usize,
}

impl<const FRAMES: usize> FrameAllocator<FRAMES> {
    pub fn init() -> Self {
        Self { next_free: 0 }
    }

    pub fn allocate_frame(&mut self) -> Option<FrameNumber> {
        if self.next_free >= FRAMES {
            log::debug!("No free frames");
            return None;
        }
        let frame = self.next_free;
        self.next_free += 1;
        Some(frame)
    }

    /// How many frames have been handed out so far.
    pub fn allocated(&self) -> usize {
        self.next_free
    }

    pub fn is_full(&self) -> bool {
        self.next_free >= FRAMES
    }

    pub fn reset(&mut self) {
        self.next_free = 0;
    }
}
