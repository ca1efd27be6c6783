use page_table::PageNumber;

use super::{PageReplacer, Residency};

/// Evicts the resident page with the oldest `last_used` tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruReplacer;

impl PageReplacer for LruReplacer {
    fn pick_victim<const PAGES: usize, const FRAMES: usize>(
        &mut self,
        residency: &Residency<'_, PAGES, FRAMES>,
    ) -> Option<PageNumber> {
        let mut oldest_page = None;
        let mut oldest_timestamp = None;
        for (page_number, entry) in residency.page_table.resident_pages() {
            // Strict comparison keeps the lowest page number on ties.
            if oldest_page.is_none() || entry.last_used() < oldest_timestamp {
                oldest_timestamp = entry.last_used();
                oldest_page = Some(page_number);
            }
        }
        oldest_page
    }
}

#[cfg(test)]
mod tests {
    use page_table::PageTable;

    use super::*;
    use crate::load_queue::LoadQueue;

    fn pick(table: &PageTable<8>) -> Option<PageNumber> {
        let queue = LoadQueue::<4>::new();
        let residency = Residency {
            page_table: table,
            load_queue: &queue,
            upcoming: &[],
            page_size: 1,
        };
        LruReplacer.pick_victim(&residency)
    }

    #[test]
    fn picks_smallest_tick() {
        let mut table: PageTable<8> = PageTable::init();
        table.map_to_frame(0, 0, 5).unwrap();
        table.map_to_frame(1, 1, 3).unwrap();
        table.map_to_frame(2, 2, 8).unwrap();
        assert_eq!(pick(&table), Some(1));
    }

    #[test]
    fn ties_go_to_lowest_page() {
        let mut table: PageTable<8> = PageTable::init();
        table.map_to_frame(6, 0, 2).unwrap();
        table.map_to_frame(3, 1, 2).unwrap();
        table.map_to_frame(5, 2, 4).unwrap();
        assert_eq!(pick(&table), Some(3));
    }

    #[test]
    fn skips_evicted_pages() {
        let mut table: PageTable<8> = PageTable::init();
        table.map_to_frame(0, 0, 0).unwrap();
        table.map_to_frame(1, 1, 4).unwrap();
        table.map_to_frame(2, 2, 6).unwrap();
        table.unmap_page(0).unwrap();
        assert_eq!(pick(&table), Some(1));
    }

    #[test]
    fn nothing_resident() {
        let table: PageTable<8> = PageTable::init();
        assert_eq!(pick(&table), None);
    }
}
