use std::fmt;

use log::info;

/// A single addressable unit of the simulated storage.
pub type Word = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskError {
    OverCapacity,
}

impl fmt::Display for DiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskError::OverCapacity => write!(f, "block number is over disk capacity"),
        }
    }
}

impl std::error::Error for DiskError {}

/// Secondary storage backing the simulated address space.
///
/// The disk holds `BLOCKS` blocks of `BLOCKSIZE` words each. Its content is
/// fixed at creation: the word at offset `i` holds the value `i`. Nothing
/// writes to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk<const BLOCKSIZE: usize, const BLOCKS: usize> {
    words: Vec<Word>,
}

impl<const BLOCKSIZE: usize, const BLOCKS: usize> Disk<BLOCKSIZE, BLOCKS> {
    pub fn create() -> Self {
        assert!(BLOCKSIZE > 0, "Block size must not be zero");
        let words = (0..BLOCKSIZE * BLOCKS).map(|i| i as Word).collect();
        Self { words }
    }

    pub fn block_count(&self) -> usize {
        BLOCKS
    }

    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    pub fn read_block(&self, block_number: usize) -> Result<&[Word], DiskError> {
        info!("Reading block[{}]", block_number);
        if block_number >= BLOCKS {
            return Err(DiskError::OverCapacity);
        }
        Ok(&self.words[block_number * BLOCKSIZE..(block_number + 1) * BLOCKSIZE])
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<const BLOCKSIZE: usize, const BLOCKS: usize> Default for Disk<BLOCKSIZE, BLOCKS> {
    fn default() -> Self {
        Self::create()
    }
}
