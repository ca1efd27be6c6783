use std::fmt;

pub use disk::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    OverCapacity,
    IncorrectFrameSize,
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::OverCapacity => write!(f, "address is over memory capacity"),
            MemoryError::IncorrectFrameSize => write!(f, "data does not match the frame size"),
        }
    }
}

impl std::error::Error for MemoryError {}

/// Physical memory, split into `FRAMES` frames of `FRAME_SIZE` words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalMemory<const FRAME_SIZE: usize, const FRAMES: usize> {
    buffer: Vec<Word>,
}

impl<const FRAME_SIZE: usize, const FRAMES: usize> PhysicalMemory<FRAME_SIZE, FRAMES> {
    pub fn create() -> Self {
        assert!(FRAME_SIZE > 0, "Frame size must not be zero");
        Self {
            buffer: vec![0; FRAME_SIZE * FRAMES],
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn check_address(&self, address: usize) -> Result<(), MemoryError> {
        if address >= self.capacity() {
            return Err(MemoryError::OverCapacity);
        }
        Ok(())
    }

    pub fn read_word(&self, address: usize) -> Result<Word, MemoryError> {
        self.check_address(address)?;
        Ok(self.buffer[address])
    }

    pub fn frame(&self, frame_number: usize) -> Result<&[Word], MemoryError> {
        if frame_number >= FRAMES {
            return Err(MemoryError::OverCapacity);
        }
        Ok(&self.buffer[frame_number * FRAME_SIZE..(frame_number + 1) * FRAME_SIZE])
    }

    /// Overwrites a whole frame with `data`.
    pub fn write_frame(&mut self, frame_number: usize, data: &[Word]) -> Result<(), MemoryError> {
        if frame_number >= FRAMES {
            return Err(MemoryError::OverCapacity);
        } else if data.len() != FRAME_SIZE {
            return Err(MemoryError::IncorrectFrameSize);
        }
        self.buffer[frame_number * FRAME_SIZE..(frame_number + 1) * FRAME_SIZE]
            .copy_from_slice(data);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn words(&self) -> &[Word] {
        &self.buffer
    }
}

impl<const FRAME_SIZE: usize, const FRAMES: usize> Default for PhysicalMemory<FRAME_SIZE, FRAMES> {
    fn default() -> Self {
        Self::create()
    }
}
