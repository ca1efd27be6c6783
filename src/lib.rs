pub mod history;
pub mod load_queue;
pub mod meta_commands;
pub mod pager;
pub mod render;
pub mod replacer;
pub mod repl;

pub use disk::Word;
pub use page_table::{FrameNumber, PageNumber, PageTableEntry, Tick};
pub use pager::{Access, Pager, PagerError, Snapshot};
pub use replacer::Policy;

pub const FRAME_SIZE: usize = 10;
pub const TOTAL_FRAMES: usize = 10;
pub const TOTAL_PAGES: usize = 10;

/// The pager with the demo geometry: 10 pages, 10 frames, 10 words each.
pub type DefaultPager = Pager<FRAME_SIZE, TOTAL_FRAMES, TOTAL_PAGES>;
