mod fifo;
mod lru;
mod optimal;

use std::{fmt, str::FromStr};

use page_table::{PageNumber, PageTable};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::load_queue::LoadQueue;

/// Page replacement policy used once every frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    #[default]
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(pub String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown replacement policy '{}'", self.0)
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "f" => Ok(Policy::Fifo),
            "lru" | "l" => Ok(Policy::Lru),
            "optimal" | "opt" | "o" => Ok(Policy::Optimal),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// What a replacer may look at when picking a victim.
pub struct Residency<'a, const PAGES: usize, const FRAMES: usize> {
    pub page_table: &'a PageTable<PAGES>,
    pub load_queue: &'a LoadQueue<FRAMES>,
    /// Logical addresses recorded after the access being served.
    pub upcoming: &'a [usize],
    pub page_size: usize,
}

pub trait PageReplacer {
    /// Chooses the resident page to evict. `None` only when nothing is
    /// resident.
    fn pick_victim<const PAGES: usize, const FRAMES: usize>(
        &mut self,
        residency: &Residency<'_, PAGES, FRAMES>,
    ) -> Option<PageNumber>;
}

/// Holds one replacer per policy so that each keeps its own state across
/// policy switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacer {
    fifo: FifoReplacer,
    lru: LruReplacer,
    optimal: OptimalReplacer,
}

impl Replacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_victim<const PAGES: usize, const FRAMES: usize>(
        &mut self,
        policy: Policy,
        residency: &Residency<'_, PAGES, FRAMES>,
    ) -> Option<PageNumber> {
        match policy {
            Policy::Fifo => self.fifo.pick_victim(residency),
            Policy::Lru => self.lru.pick_victim(residency),
            Policy::Optimal => self.optimal.pick_victim(residency),
        }
    }

    pub fn fifo_cursor(&self) -> usize {
        self.fifo.cursor()
    }

    /// Forgets per-policy progress.
    pub fn reset(&mut self) {
        self.fifo.reset();
    }
}
