use centered_deque::{CenteredDeque, DequeError, ResizeStats};

#[test]
fn test_mixed_end_scenario() {
    let mut deque = CenteredDeque::new();
    deque.push_front("one");
    deque.push_back("two");
    deque.push_back("three");
    deque.push_front("four");

    let order: Vec<_> = deque.iter().copied().collect();
    assert_eq!(order, ["four", "one", "two", "three"]);
}

#[test]
fn test_remove_from_empty() {
    let mut deque: CenteredDeque<String> = CenteredDeque::new();
    assert_eq!(deque.try_pop_front(), Err(DequeError::Empty));
    assert_eq!(deque.try_pop_back(), Err(DequeError::Empty));
    assert_eq!(deque.pop_front(), None);
}

#[test]
fn test_missing_item_is_rejected() {
    let mut deque = CenteredDeque::new();
    deque.push_back(1);
    assert_eq!(deque.try_push_front(None), Err(DequeError::InvalidArgument));
    assert_eq!(deque.len(), 1);
}

#[test]
fn test_fill_then_drain_front() {
    let mut deque = CenteredDeque::new();
    for i in 0..1000 {
        deque.push_back(i);
    }
    assert_eq!(deque.len(), 1000);
    let peak = deque.capacity();
    assert!(peak >= 1000);

    for i in 0..1000 {
        assert_eq!(deque.try_pop_front(), Ok(i));
    }
    assert!(deque.is_empty());
    assert!(deque.capacity() <= 8, "capacity {} after draining", deque.capacity());
    assert!(deque.stats().shrinks > 0);
}

#[test]
fn test_fill_then_drain_back() {
    let mut deque: CenteredDeque<u32> = CenteredDeque::new();
    for i in 0..1000 {
        deque.push_front(i);
    }
    for i in 0..1000 {
        assert_eq!(deque.pop_back(), Some(i));
    }
    assert!(deque.is_empty());
    assert!(deque.capacity() <= 8);
}

#[test]
fn test_symmetry_at_both_ends() {
    let mut deque: CenteredDeque<u32> = (10..20).collect();
    let len = deque.len();

    deque.push_front(99);
    assert_eq!(deque.pop_front(), Some(99));
    assert_eq!(deque.len(), len);

    deque.push_back(77);
    assert_eq!(deque.pop_back(), Some(77));
    assert_eq!(deque.len(), len);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), (10..20).collect::<Vec<_>>());
}

#[test]
fn test_queue_workload_keeps_capacity_bounded() {
    let mut deque = CenteredDeque::new();
    for i in 0..16u64 {
        deque.push_back(i);
    }
    for i in 16..10_000u64 {
        deque.push_back(i);
        assert_eq!(deque.pop_front(), Some(i - 16));
        assert!(deque.capacity() <= 128);
    }
    let stats = deque.stats();
    assert!(stats.moved <= 4 * 20_000, "{stats:?}");
}

#[test]
fn test_iteration_is_one_shot() {
    let deque: CenteredDeque<char> = "abc".chars().collect();
    let mut iter = deque.iter();
    assert_eq!(iter.by_ref().collect::<String>(), "abc");
    assert!(!iter.has_next());
    assert_eq!(iter.try_next(), Err(DequeError::NoMoreElements));

    // A fresh traversal needs a fresh iterator.
    assert_eq!(deque.iter().count(), 3);
}

#[test]
fn test_serde_json_round_trip() {
    let deque: CenteredDeque<i64> = [-3, 0, 42].into_iter().collect();
    let json = serde_json::to_string(&deque).unwrap();
    assert_eq!(json, "[-3,0,42]");

    let parsed: CenteredDeque<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, deque);

    let stats = serde_json::to_value(deque.stats()).unwrap();
    assert_eq!(stats["grows"], deque.stats().grows);
}

#[test]
fn test_stats_start_at_zero() {
    let deque: CenteredDeque<()> = CenteredDeque::default();
    assert_eq!(deque.stats(), ResizeStats::default());
    assert_eq!(deque.stats().reallocations(), 0);
}
