#[cfg(test)]
mod tests;

mod snapshot;

use std::fmt;

use disk::{Disk, DiskError, Word};
use log::{debug, info, trace, warn};
use memory::{MemoryError, PhysicalMemory};
use page_table::{FrameAllocator, FrameNumber, PageNumber, PageTable, PageTableError, Tick};

pub use snapshot::Snapshot;

use crate::{
    history::{AccessHistory, HistoryFull, DEFAULT_HISTORY_CAPACITY},
    load_queue::LoadQueue,
    replacer::{Policy, Replacer, Residency},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    AddressOutOfBounds {
        address: usize,
        page_number: PageNumber,
        total_pages: usize,
    },
    AccessHistoryExhausted {
        capacity: usize,
    },
    /// Every frame is in use but the active policy found nothing to evict.
    NoVictim,
    Disk(DiskError),
    Memory(MemoryError),
    PageTable(PageTableError),
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagerError::AddressOutOfBounds {
                address,
                page_number,
                total_pages,
            } => write!(
                f,
                "Invalid logical address {}: page number {} is out of bounds (only {} pages)",
                address, page_number, total_pages
            ),
            PagerError::AccessHistoryExhausted { capacity } => {
                write!(f, "Access history is full after {} accesses, reset to continue", capacity)
            }
            PagerError::NoVictim => write!(f, "No page could be chosen for eviction"),
            PagerError::Disk(err) => write!(f, "Backing store error: {}", err),
            PagerError::Memory(err) => write!(f, "Physical memory error: {}", err),
            PagerError::PageTable(err) => write!(f, "Page table error: {}", err),
        }
    }
}

impl std::error::Error for PagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PagerError::Disk(err) => Some(err),
            PagerError::Memory(err) => Some(err),
            PagerError::PageTable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DiskError> for PagerError {
    fn from(err: DiskError) -> Self {
        PagerError::Disk(err)
    }
}

impl From<MemoryError> for PagerError {
    fn from(err: MemoryError) -> Self {
        PagerError::Memory(err)
    }
}

impl From<PageTableError> for PagerError {
    fn from(err: PageTableError) -> Self {
        PagerError::PageTable(err)
    }
}

impl From<HistoryFull> for PagerError {
    fn from(err: HistoryFull) -> Self {
        PagerError::AccessHistoryExhausted {
            capacity: err.capacity,
        }
    }
}

/// Outcome of translating one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub logical_address: usize,
    pub page_number: PageNumber,
    pub offset: usize,
    pub frame_number: FrameNumber,
    pub physical_address: usize,
    pub word: Word,
    pub hit: bool,
    /// Page that lost its frame to serve this access.
    pub evicted: Option<PageNumber>,
}

/// Demand pager over a backing store of `TOTAL_PAGES` pages and a physical
/// memory of `TOTAL_FRAMES` frames, both `FRAME_SIZE` words per page.
///
/// All simulation state is owned here and only `access`, `run` and `reset`
/// change it.
#[derive(Debug, Clone)]
pub struct Pager<const FRAME_SIZE: usize, const TOTAL_FRAMES: usize, const TOTAL_PAGES: usize> {
    disk: Disk<FRAME_SIZE, TOTAL_PAGES>,
    memory: PhysicalMemory<FRAME_SIZE, TOTAL_FRAMES>,
    page_table: PageTable<TOTAL_PAGES>,
    frame_allocator: FrameAllocator<TOTAL_FRAMES>,
    load_queue: LoadQueue<TOTAL_FRAMES>,
    history: AccessHistory,
    replacer: Replacer,
    policy: Policy,
    clock: Tick,
    hits: usize,
    faults: usize,
}

impl<const FRAME_SIZE: usize, const TOTAL_FRAMES: usize, const TOTAL_PAGES: usize>
    Pager<FRAME_SIZE, TOTAL_FRAMES, TOTAL_PAGES>
{
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        assert!(FRAME_SIZE > 0, "Frame size must not be zero");
        assert!(TOTAL_FRAMES > 0, "There must be at least one frame");
        Self {
            disk: Disk::create(),
            memory: PhysicalMemory::create(),
            page_table: PageTable::init(),
            frame_allocator: FrameAllocator::init(),
            load_queue: LoadQueue::new(),
            history: AccessHistory::with_capacity(capacity),
            replacer: Replacer::new(),
            policy: Policy::default(),
            clock: 0,
            hits: 0,
            faults: 0,
        }
    }

    /// Splits a logical address into (page number, offset).
    pub fn translate(logical_address: usize) -> (PageNumber, usize) {
        (logical_address / FRAME_SIZE, logical_address % FRAME_SIZE)
    }

    fn check_address(logical_address: usize) -> Result<(), PagerError> {
        let (page_number, _) = Self::translate(logical_address);
        if page_number >= TOTAL_PAGES {
            warn!(
                "Invalid logical address {}. Page number {} is out of bounds.",
                logical_address, page_number
            );
            return Err(PagerError::AddressOutOfBounds {
                address: logical_address,
                page_number,
                total_pages: TOTAL_PAGES,
            });
        }
        Ok(())
    }

    /// Translates one logical address, loading its page on a fault.
    ///
    /// A rejected address leaves the pager untouched.
    pub fn access(&mut self, logical_address: usize) -> Result<Access, PagerError> {
        Self::check_address(logical_address)?;
        let index = self.history.record(logical_address).map_err(|err| {
            warn!("Access to {} rejected: {}", logical_address, err);
            PagerError::from(err)
        })?;
        self.serve(index, logical_address)
    }

    /// Replays a whole reference string.
    ///
    /// The trace is validated and recorded up front, so `Optimal` sees every
    /// later access of the trace when it has to choose a victim. Nothing is
    /// mutated when any address is out of bounds or the trace does not fit
    /// in the history.
    pub fn run(&mut self, trace: &[usize]) -> Result<Vec<Access>, PagerError> {
        for address in trace {
            Self::check_address(*address)?;
        }
        let indices = self.history.extend(trace)?;
        indices
            .zip(trace)
            .map(|(index, address)| self.serve(index, *address))
            .collect()
    }

    fn serve(&mut self, index: usize, logical_address: usize) -> Result<Access, PagerError> {
        let (page_number, offset) = Self::translate(logical_address);
        let (frame_number, hit, evicted) = match self.page_table.get_frame(page_number)? {
            Some(frame_number) => {
                trace!("Page {} is in memory at frame {}", page_number, frame_number);
                self.page_table.update_timestamp(page_number, self.clock)?;
                self.clock += 1;
                self.hits += 1;
                (frame_number, true, None)
            }
            None => {
                debug!(
                    "Page fault! Page {} is not in memory, applying {}",
                    page_number, self.policy
                );
                self.faults += 1;
                let (frame_number, evicted) = self.load(page_number, index)?;
                (frame_number, false, evicted)
            }
        };

        let physical_address = frame_number * FRAME_SIZE + offset;
        let word = self.memory.read_word(physical_address)?;
        trace!(
            "Logical address {} maps to physical address {} with value {}",
            logical_address,
            physical_address,
            word
        );
        Ok(Access {
            logical_address,
            page_number,
            offset,
            frame_number,
            physical_address,
            word,
            hit,
            evicted,
        })
    }

    /// Brings `page_number` into memory, evicting a page if every frame is
    /// taken. Returns the frame used and the evicted page.
    fn load(
        &mut self,
        page_number: PageNumber,
        index: usize,
    ) -> Result<(FrameNumber, Option<PageNumber>), PagerError> {
        let (frame_number, evicted) = match self.frame_allocator.allocate_frame() {
            Some(frame_number) => {
                self.load_queue.push(page_number);
                (frame_number, None)
            }
            None => {
                let residency = Residency {
                    page_table: &self.page_table,
                    load_queue: &self.load_queue,
                    upcoming: self.history.upcoming(index),
                    page_size: FRAME_SIZE,
                };
                let victim = self
                    .replacer
                    .select_victim(self.policy, &residency)
                    .ok_or(PagerError::NoVictim)?;
                let frame_number = self
                    .page_table
                    .unmap_page(victim)?
                    .ok_or(PagerError::NoVictim)?;
                self.load_queue.replace(victim, page_number);
                debug!(
                    "Evicted page {} from frame {} ({})",
                    victim, frame_number, self.policy
                );
                (frame_number, Some(victim))
            }
        };

        let block = self.disk.read_block(page_number)?;
        self.memory.write_frame(frame_number, block)?;
        self.page_table
            .map_to_frame(page_number, frame_number, self.clock)?;
        self.clock += 1;
        Ok((frame_number, evicted))
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Takes effect on the next fault. Residency is left alone.
    pub fn set_policy(&mut self, policy: Policy) {
        if policy != self.policy {
            info!("Page replacement policy changed from {} to {}", self.policy, policy);
        }
        self.policy = policy;
    }

    /// Returns to the startup state. The backing store and the active policy
    /// are kept.
    pub fn reset(&mut self) {
        info!("Resetting pager");
        self.page_table.initialize();
        self.memory.clear();
        self.load_queue.clear();
        self.replacer.reset();
        self.frame_allocator.reset();
        self.history.clear();
        self.clock = 0;
        self.hits = 0;
        self.faults = 0;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn faults(&self) -> usize {
        self.faults
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn page_table(&self) -> &PageTable<TOTAL_PAGES> {
        &self.page_table
    }

    pub fn memory(&self) -> &PhysicalMemory<FRAME_SIZE, TOTAL_FRAMES> {
        &self.memory
    }

    pub fn disk(&self) -> &Disk<FRAME_SIZE, TOTAL_PAGES> {
        &self.disk
    }

    pub fn load_queue(&self) -> &LoadQueue<TOTAL_FRAMES> {
        &self.load_queue
    }

    pub fn history(&self) -> &AccessHistory {
        &self.history
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame_size: FRAME_SIZE,
            page_table: self.page_table.entries().to_vec(),
            frames: self.memory.words().to_vec(),
            backing_store: self.disk.words().to_vec(),
            load_queue: self.load_queue.slots().to_vec(),
            history: self.history.as_slice().to_vec(),
            policy: self.policy,
            clock: self.clock,
            hits: self.hits,
            faults: self.faults,
        }
    }
}

impl<const FRAME_SIZE: usize, const TOTAL_FRAMES: usize, const TOTAL_PAGES: usize> Default
    for Pager<FRAME_SIZE, TOTAL_FRAMES, TOTAL_PAGES>
{
    fn default() -> Self {
        Self::new()
    }
}
