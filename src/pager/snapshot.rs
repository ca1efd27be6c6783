use disk::Word;
use page_table::{FrameNumber, PageNumber, PageTableEntry, Tick};

use crate::replacer::Policy;

/// Owned copy of the pager state, taken after an operation for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub frame_size: usize,
    /// Indexed by page number.
    pub page_table: Vec<PageTableEntry>,
    /// Contents of physical memory, frame after frame.
    pub frames: Vec<Word>,
    pub backing_store: Vec<Word>,
    pub load_queue: Vec<Option<PageNumber>>,
    pub history: Vec<usize>,
    pub policy: Policy,
    pub clock: Tick,
    pub hits: usize,
    pub faults: usize,
}

impl Snapshot {
    pub fn frame_count(&self) -> usize {
        self.frames.len() / self.frame_size
    }

    pub fn frame(&self, frame_number: FrameNumber) -> Option<&[Word]> {
        let start = frame_number.checked_mul(self.frame_size)?;
        self.frames.get(start..start + self.frame_size)
    }

    pub fn page(&self, page_number: PageNumber) -> Option<&[Word]> {
        let start = page_number.checked_mul(self.frame_size)?;
        self.backing_store.get(start..start + self.frame_size)
    }

    /// The resident page held by each frame, in frame order.
    pub fn frame_owners(&self) -> Vec<Option<PageNumber>> {
        let mut owners = vec![None; self.frame_count()];
        for (page_number, entry) in self.page_table.iter().enumerate() {
            if let Some(owner) = entry
                .get_frame_number()
                .and_then(|frame| owners.get_mut(frame))
            {
                *owner = Some(page_number);
            }
        }
        owners
    }

    pub fn accesses(&self) -> usize {
        self.hits + self.faults
    }

    pub fn hit_ratio(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            accesses => self.hits as f64 / accesses as f64,
        }
    }
}
