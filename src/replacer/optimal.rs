use page_table::PageNumber;

use super::{PageReplacer, Residency};

/// Belady's algorithm: evicts the resident page whose next reference lies
/// farthest in the recorded future.
///
/// Only accesses already in the history count as future references, so the
/// choice is only as good as the trace handed to the pager up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalReplacer;

impl PageReplacer for OptimalReplacer {
    fn pick_victim<const PAGES: usize, const FRAMES: usize>(
        &mut self,
        residency: &Residency<'_, PAGES, FRAMES>,
    ) -> Option<PageNumber> {
        let page_size = residency.page_size.max(1);
        let mut victim = None;
        let mut farthest = None;
        for (page_number, _) in residency.page_table.resident_pages() {
            let next_use = residency
                .upcoming
                .iter()
                .position(|address| address / page_size == page_number);
            match next_use {
                None => return Some(page_number),
                Some(distance) => {
                    if farthest.map_or(true, |farthest| distance > farthest) {
                        farthest = Some(distance);
                        victim = Some(page_number);
                    }
                }
            }
        }
        victim
    }
}
