use crate::{FrameNumber, Tick};

/// Maps one page of the address space to the frame holding it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageTableEntry {
    frame_number: Option<FrameNumber>,
    last_used: Option<Tick>,
}

impl PageTableEntry {
    pub const fn unmapped() -> Self {
        PageTableEntry {
            frame_number: None,
            last_used: None,
        }
    }

    pub fn is_resident(&self) -> bool {
        self.frame_number.is_some()
    }

    pub fn get_frame_number(&self) -> Option<FrameNumber> {
        self.frame_number
    }

    /// Tick of the most recent load or hit. Survives eviction.
    pub fn last_used(&self) -> Option<Tick> {
        self.last_used
    }

    pub(crate) fn set_frame_number(&mut self, frame_number: FrameNumber) {
        self.frame_number = Some(frame_number);
    }

    pub(crate) fn set_timestamp(&mut self, tick: Tick) {
        self.last_used = Some(tick);
    }

    pub(crate) fn clear_frame(&mut self) -> Option<FrameNumber> {
        self.frame_number.take()
    }
}
