mod frame_allocator;
mod iter;
mod page_table_entry;

use std::fmt;

pub use frame_allocator::FrameAllocator;
pub use iter::PageTableIterator;
pub use page_table_entry::PageTableEntry;

pub type PageNumber = usize;
pub type FrameNumber = usize;
/// Value of the logical access clock, not a wall clock.
pub type Tick = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTableError {
    PageOutOfRange(PageNumber),
}

impl fmt::Display for PageTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageTableError::PageOutOfRange(page) => {
                write!(f, "page {} is outside the page table", page)
            }
        }
    }
}

impl std::error::Error for PageTableError {}

/// This table maps every page of the address space to the frame in physical
/// memory holding it. Each entry represents a map from page ---> frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable<const PAGES: usize> {
    entries: [PageTableEntry; PAGES],
}

impl<const PAGES: usize> PageTable<PAGES> {
    pub fn init() -> Self {
        Self {
            entries: [PageTableEntry::unmapped(); PAGES],
        }
    }

    /// Resets every entry to unmapped and never used.
    pub fn initialize(&mut self) {
        self.entries = [PageTableEntry::unmapped(); PAGES];
    }

    pub fn len(&self) -> usize {
        PAGES
    }

    pub fn is_empty(&self) -> bool {
        PAGES == 0
    }

    pub fn get_entry(&self, page_number: PageNumber) -> Result<PageTableEntry, PageTableError> {
        self.entries
            .get(page_number)
            .copied()
            .ok_or(PageTableError::PageOutOfRange(page_number))
    }

    fn entry_mut(&mut self, page_number: PageNumber) -> Result<&mut PageTableEntry, PageTableError> {
        self.entries
            .get_mut(page_number)
            .ok_or(PageTableError::PageOutOfRange(page_number))
    }

    pub fn is_resident(&self, page_number: PageNumber) -> Result<bool, PageTableError> {
        Ok(self.get_entry(page_number)?.is_resident())
    }

    pub fn get_frame(&self, page_number: PageNumber) -> Result<Option<FrameNumber>, PageTableError> {
        Ok(self.get_entry(page_number)?.get_frame_number())
    }

    pub fn last_used(&self, page_number: PageNumber) -> Result<Option<Tick>, PageTableError> {
        Ok(self.get_entry(page_number)?.last_used())
    }

    /// Makes `page_number` resident in `frame_number`, stamped with `tick`.
    pub fn map_to_frame(
        &mut self,
        page_number: PageNumber,
        frame_number: FrameNumber,
        tick: Tick,
    ) -> Result<(), PageTableError> {
        let entry = self.entry_mut(page_number)?;
        entry.set_frame_number(frame_number);
        entry.set_timestamp(tick);
        Ok(())
    }

    pub fn update_timestamp(&mut self, page_number: PageNumber, tick: Tick) -> Result<(), PageTableError> {
        self.entry_mut(page_number)?.set_timestamp(tick);
        Ok(())
    }

    /// Drops the frame mapping of a page and returns the frame it held.
    pub fn unmap_page(&mut self, page_number: PageNumber) -> Result<Option<FrameNumber>, PageTableError> {
        Ok(self.entry_mut(page_number)?.clear_frame())
    }

    /// The resident page currently mapped to `frame_number`, if any.
    pub fn owner_of(&self, frame_number: FrameNumber) -> Option<PageNumber> {
        self.iter()
            .find(|(_, entry)| entry.get_frame_number() == Some(frame_number))
            .map(|(page_number, _)| page_number)
    }

    pub fn resident_pages(&self) -> impl Iterator<Item = (PageNumber, PageTableEntry)> + '_ {
        self.iter().filter(|(_, entry)| entry.is_resident())
    }

    pub fn iter(&self) -> PageTableIterator<'_> {
        PageTableIterator::new(&self.entries)
    }

    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }
}

impl<const PAGES: usize> Default for PageTable<PAGES> {
    fn default() -> Self {
        Self::init()
    }
}
