use page_table::PageNumber;

/// Records resident pages in the order they were loaded.
///
/// A ring of `FRAMES` slots. Loads into a free frame write at the insertion
/// cursor; a load that evicts takes over the victim's slot instead, so the
/// slot order stays the order in which frames were filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadQueue<const FRAMES: usize> {
    slots: [Option<PageNumber>; FRAMES],
    cursor: usize,
}

impl<const FRAMES: usize> LoadQueue<FRAMES> {
    pub fn new() -> Self {
        Self {
            slots: [None; FRAMES],
            cursor: 0,
        }
    }

    pub fn push(&mut self, page_number: PageNumber) {
        if FRAMES == 0 {
            return;
        }
        self.slots[self.cursor] = Some(page_number);
        self.cursor = (self.cursor + 1) % FRAMES;
    }

    /// Puts `page_number` in the first slot holding `victim`.
    /// Returns false when `victim` is not queued.
    pub fn replace(&mut self, victim: PageNumber, page_number: PageNumber) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(victim)) {
            Some(slot) => {
                *slot = Some(page_number);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, slot: usize) -> Option<PageNumber> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn insertion_cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[Option<PageNumber>] {
        &self.slots
    }

    pub fn clear(&mut self) {
        self.slots = [None; FRAMES];
        self.cursor = 0;
    }
}

impl<const FRAMES: usize> Default for LoadQueue<FRAMES> {
    fn default() -> Self {
        Self::new()
    }
}
