use crate::{
    pager::{Pager, PagerError},
    replacer::Policy,
    DefaultPager,
};

/// Three frames over six pages, enough to force evictions.
type SmallPager = Pager<10, 3, 6>;

/// Pages 1,2,3,4,1,2,5,1,2,3,4,5 as logical addresses.
const BELADY_TRACE: [usize; 12] = [10, 20, 30, 40, 10, 20, 50, 10, 20, 30, 40, 50];

pub fn initialize() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn first_access_faults_second_hits() {
    initialize();
    let mut pager = DefaultPager::new();
    let first = pager.access(42).unwrap();
    assert!(!first.hit);
    let second = pager.access(42).unwrap();
    assert!(second.hit);
    assert_eq!(first.physical_address, second.physical_address);
    assert_eq!(pager.hits(), 1);
    assert_eq!(pager.faults(), 1);
}

#[test]
fn translate_to_physical_address() {
    initialize();
    let mut pager = DefaultPager::new();
    let access = pager.access(35).unwrap();
    assert_eq!(access.page_number, 3);
    assert_eq!(access.offset, 5);
    assert_eq!(access.frame_number, 0);
    assert_eq!(access.physical_address, 5);
    assert_eq!(access.word, 35);
    assert_eq!(access.evicted, None);

    let access = pager.access(71).unwrap();
    assert_eq!(access.frame_number, 1);
    assert_eq!(access.physical_address, 11);
    assert_eq!(access.word, 71);
}

#[test]
fn fault_copies_whole_page() {
    initialize();
    let mut pager = DefaultPager::new();
    pager.access(47).unwrap();
    let expected: Vec<u32> = (40..50).collect();
    assert_eq!(pager.memory().frame(0).unwrap(), expected.as_slice());
    assert_eq!(pager.memory().frame(1).unwrap(), &[0; 10]);
}

#[test]
fn out_of_bounds_changes_nothing() {
    initialize();
    let mut pager = DefaultPager::new();
    pager.access(3).unwrap();
    let before = pager.snapshot();
    assert_eq!(
        pager.access(100),
        Err(PagerError::AddressOutOfBounds {
            address: 100,
            page_number: 10,
            total_pages: 10,
        })
    );
    assert_eq!(pager.snapshot(), before);
}

#[test]
fn clock_advances_once_per_access() {
    initialize();
    let mut pager = DefaultPager::new();
    pager.access(0).unwrap();
    assert_eq!(pager.clock(), 1);
    pager.access(1).unwrap();
    assert_eq!(pager.clock(), 2);
    assert_eq!(pager.page_table().last_used(0).unwrap(), Some(1));
    pager.access(10).unwrap();
    assert_eq!(pager.clock(), 3);
    assert_eq!(pager.page_table().last_used(1).unwrap(), Some(2));
}

#[test]
fn sequential_pages_fill_all_frames() {
    initialize();
    let mut pager = DefaultPager::new();
    for page in 0..10 {
        let access = pager.access(page * 10).unwrap();
        assert!(!access.hit);
        assert_eq!(access.evicted, None);
        assert_eq!(access.frame_number, page);
    }
    assert_eq!(pager.faults(), 10);
    assert_eq!(pager.page_table().resident_pages().count(), 10);
    for page in 0..10 {
        assert!(pager.access(page * 10 + 9).unwrap().hit);
    }
}

#[test]
fn fifo_evicts_first_loaded_page() {
    initialize();
    let mut pager: Pager<10, 10, 11> = Pager::new();
    for page in 0..10 {
        pager.access(page * 10).unwrap();
    }
    let access = pager.access(100).unwrap();
    assert_eq!(access.evicted, Some(0));
    assert_eq!(access.frame_number, 0);
    assert_eq!(access.word, 100);
    assert!(!pager.page_table().is_resident(0).unwrap());
    assert_eq!(pager.load_queue().get(0), Some(10));
}

#[test]
fn lru_evicts_least_recently_used() {
    initialize();
    let mut pager: Pager<10, 3, 4> = Pager::new();
    pager.set_policy(Policy::Lru);
    for address in [0, 10, 20, 0, 10] {
        pager.access(address).unwrap();
    }
    let access = pager.access(30).unwrap();
    assert_eq!(access.evicted, Some(2));
    assert_eq!(access.frame_number, 2);
}

#[test]
fn optimal_without_lookahead_takes_lowest_page() {
    initialize();
    let mut pager: Pager<10, 3, 4> = Pager::new();
    pager.set_policy(Policy::Optimal);
    for address in [20, 10, 0] {
        pager.access(address).unwrap();
    }
    let access = pager.access(30).unwrap();
    assert_eq!(access.evicted, Some(0));
    assert_eq!(access.frame_number, 2);
}

#[test]
fn belady_reference_string() {
    initialize();
    let expected = [(Policy::Fifo, 9), (Policy::Lru, 10), (Policy::Optimal, 7)];
    for (policy, faults) in expected {
        let mut pager = SmallPager::new();
        pager.set_policy(policy);
        let accesses = pager.run(&BELADY_TRACE).unwrap();
        assert_eq!(accesses.len(), BELADY_TRACE.len());
        assert_eq!(pager.faults(), faults, "{} faults", policy);
        assert_eq!(pager.hits(), BELADY_TRACE.len() - faults, "{} hits", policy);
        assert_eq!(
            accesses.iter().filter(|access| !access.hit).count(),
            faults
        );
    }
}

#[test]
fn optimal_victims_follow_the_future() {
    initialize();
    let mut pager = SmallPager::new();
    pager.set_policy(Policy::Optimal);
    let evicted: Vec<_> = pager
        .run(&BELADY_TRACE)
        .unwrap()
        .into_iter()
        .filter_map(|access| access.evicted)
        .collect();
    assert_eq!(evicted, vec![3, 4, 1, 2]);
}

#[test]
fn run_matches_single_accesses_without_lookahead() {
    initialize();
    for policy in [Policy::Fifo, Policy::Lru] {
        let mut replayed = SmallPager::new();
        replayed.set_policy(policy);
        let mut stepped = SmallPager::new();
        stepped.set_policy(policy);

        let from_run = replayed.run(&BELADY_TRACE).unwrap();
        let from_access: Vec<_> = BELADY_TRACE
            .iter()
            .map(|address| stepped.access(*address).unwrap())
            .collect();
        assert_eq!(from_run, from_access);
        assert_eq!(replayed.snapshot(), stepped.snapshot());
    }
}

#[test]
fn run_rejects_whole_trace() {
    initialize();
    let mut pager = SmallPager::new();
    let before = pager.snapshot();
    assert_eq!(
        pager.run(&[0, 10, 60, 20]),
        Err(PagerError::AddressOutOfBounds {
            address: 60,
            page_number: 6,
            total_pages: 6,
        })
    );
    assert_eq!(pager.snapshot(), before);
}

#[test]
fn history_exhaustion() {
    initialize();
    let mut pager = SmallPager::with_history_capacity(2);
    pager.access(0).unwrap();
    pager.access(1).unwrap();
    let before = pager.snapshot();
    assert_eq!(
        pager.access(2),
        Err(PagerError::AccessHistoryExhausted { capacity: 2 })
    );
    assert_eq!(pager.snapshot(), before);
    assert_eq!(
        pager.run(&[0]),
        Err(PagerError::AccessHistoryExhausted { capacity: 2 })
    );

    pager.reset();
    assert!(pager.access(2).is_ok());
}

#[test]
fn run_longer_than_history() {
    initialize();
    let mut pager = SmallPager::with_history_capacity(4);
    assert_eq!(
        pager.run(&[0, 1, 2, 3, 4]),
        Err(PagerError::AccessHistoryExhausted { capacity: 4 })
    );
    assert!(pager.history().is_empty());
    assert_eq!(pager.faults(), 0);
}

#[test]
fn policy_switch_keeps_residency() {
    initialize();
    let mut pager = SmallPager::new();
    pager.run(&[0, 10, 20]).unwrap();
    let before = pager.snapshot();
    pager.set_policy(Policy::Optimal);
    let after = pager.snapshot();
    assert_eq!(before.page_table, after.page_table);
    assert_eq!(before.frames, after.frames);
    assert_eq!(after.policy, Policy::Optimal);
}

#[test]
fn fifo_cursor_survives_policy_switch() {
    initialize();
    let mut pager: Pager<10, 2, 5> = Pager::new();
    pager.access(0).unwrap();
    pager.access(10).unwrap();
    assert_eq!(pager.access(20).unwrap().evicted, Some(0));

    pager.set_policy(Policy::Lru);
    assert_eq!(pager.access(30).unwrap().evicted, Some(1));

    pager.set_policy(Policy::Fifo);
    assert_eq!(pager.access(40).unwrap().evicted, Some(3));
}

#[test]
fn fifo_restarts_after_reset() {
    initialize();
    let mut pager: Pager<10, 2, 4> = Pager::new();
    pager.run(&[0, 10, 20]).unwrap();
    pager.reset();
    pager.run(&[0, 10]).unwrap();
    assert_eq!(pager.access(20).unwrap().evicted, Some(0));
}

#[test]
fn eviction_clears_frame_and_keeps_timestamp() {
    initialize();
    let mut pager: Pager<10, 1, 3> = Pager::new();
    pager.access(5).unwrap();
    pager.access(15).unwrap();
    let entry = pager.page_table().get_entry(0).unwrap();
    assert!(!entry.is_resident());
    assert_eq!(entry.get_frame_number(), None);
    assert_eq!(entry.last_used(), Some(0));
    assert_eq!(pager.page_table().owner_of(0), Some(1));
}

#[test]
fn reset_restores_startup_state() {
    initialize();
    let mut pager = SmallPager::new();
    let startup = pager.snapshot();
    pager.run(&BELADY_TRACE).unwrap();
    pager.reset();
    assert_eq!(pager.snapshot(), startup);
}

#[test]
fn reset_is_idempotent() {
    initialize();
    let mut pager = SmallPager::new();
    pager.set_policy(Policy::Lru);
    pager.run(&BELADY_TRACE).unwrap();
    pager.reset();
    let once = pager.snapshot();
    pager.reset();
    assert_eq!(pager.snapshot(), once);
    assert_eq!(once.policy, Policy::Lru);
    assert_eq!(once.hits, 0);
    assert_eq!(once.faults, 0);
    assert!(once.history.is_empty());
    assert!(once.frames.iter().all(|word| *word == 0));
}

#[test]
fn snapshot_reflects_state() {
    initialize();
    let mut pager = SmallPager::new();
    pager.run(&[25, 5, 25]).unwrap();
    let snapshot = pager.snapshot();
    assert_eq!(snapshot.frame_size, 10);
    assert_eq!(snapshot.frame_count(), 3);
    assert_eq!(snapshot.hits, 1);
    assert_eq!(snapshot.faults, 2);
    assert_eq!(snapshot.clock, 3);
    assert_eq!(snapshot.history, vec![25, 5, 25]);
    assert_eq!(snapshot.load_queue, vec![Some(2), Some(0), None]);
    assert_eq!(snapshot.frame_owners(), vec![Some(2), Some(0), None]);
    assert_eq!(snapshot.page(2), snapshot.frame(0));
    assert_eq!(snapshot.backing_store.len(), 60);
    assert!((snapshot.hit_ratio() - 1.0 / 3.0).abs() < 1e-9);
}
