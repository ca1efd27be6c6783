use std::{fmt, ops::Range};

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryFull {
    pub capacity: usize,
}

impl fmt::Display for HistoryFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "access history is full ({} accesses)", self.capacity)
    }
}

impl std::error::Error for HistoryFull {}

/// Append-only log of logical addresses, indexed by access sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessHistory {
    addresses: Vec<usize>,
    capacity: usize,
}

impl AccessHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            addresses: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.addresses.len()
    }

    /// Appends one address and returns its sequence number.
    pub fn record(&mut self, address: usize) -> Result<usize, HistoryFull> {
        if self.remaining() == 0 {
            return Err(HistoryFull {
                capacity: self.capacity,
            });
        }
        self.addresses.push(address);
        Ok(self.addresses.len() - 1)
    }

    /// Appends a whole trace, or nothing when it does not fit.
    pub fn extend(&mut self, trace: &[usize]) -> Result<Range<usize>, HistoryFull> {
        if trace.len() > self.remaining() {
            return Err(HistoryFull {
                capacity: self.capacity,
            });
        }
        let start = self.addresses.len();
        self.addresses.extend_from_slice(trace);
        Ok(start..self.addresses.len())
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.addresses.get(index).copied()
    }

    /// Everything recorded strictly after `index`.
    pub fn upcoming(&self, index: usize) -> &[usize] {
        self.addresses.get(index + 1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.addresses
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }
}

impl Default for AccessHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_returns_sequence_numbers() {
        let mut history = AccessHistory::with_capacity(4);
        assert_eq!(history.record(12), Ok(0));
        assert_eq!(history.record(3), Ok(1));
        assert_eq!(history.get(1), Some(3));
        assert_eq!(history.get(2), None);
        assert_eq!(history.remaining(), 2);
    }

    #[test]
    fn record_past_capacity() {
        let mut history = AccessHistory::with_capacity(1);
        history.record(0).unwrap();
        assert_eq!(history.record(1), Err(HistoryFull { capacity: 1 }));
        assert_eq!(history.as_slice(), &[0]);
    }

    #[test]
    fn extend_is_all_or_nothing() {
        let mut history = AccessHistory::with_capacity(4);
        history.record(1).unwrap();
        assert_eq!(history.extend(&[2, 3, 4, 5]), Err(HistoryFull { capacity: 4 }));
        assert_eq!(history.len(), 1);
        assert_eq!(history.extend(&[2, 3, 4]), Ok(1..4));
        assert_eq!(history.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn upcoming_excludes_current() {
        let mut history = AccessHistory::default();
        history.extend(&[0, 10, 20, 0]).unwrap();
        assert_eq!(history.upcoming(0), &[10, 20, 0]);
        assert_eq!(history.upcoming(3), &[] as &[usize]);
        assert_eq!(history.upcoming(10), &[] as &[usize]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut history = AccessHistory::with_capacity(2);
        history.extend(&[1, 2]).unwrap();
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 2);
        assert_eq!(history.remaining(), 2);
    }
}
