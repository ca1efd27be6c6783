use page_table::PageNumber;

use super::{PageReplacer, Residency};

/// Evicts pages in the order their frames were filled.
///
/// The cursor walks the load queue independently of its insertion cursor. It
/// outlives policy switches and is only rewound when the pager resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FifoReplacer {
    cursor: usize,
}

impl FifoReplacer {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl PageReplacer for FifoReplacer {
    fn pick_victim<const PAGES: usize, const FRAMES: usize>(
        &mut self,
        residency: &Residency<'_, PAGES, FRAMES>,
    ) -> Option<PageNumber> {
        if FRAMES == 0 {
            return None;
        }
        let victim = residency.load_queue.get(self.cursor);
        self.cursor = (self.cursor + 1) % FRAMES;
        victim
    }
}
