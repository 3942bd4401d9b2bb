use frontier_graph::data_structures::IndexedHeap;
use frontier_graph::Error;
use ordered_float::OrderedFloat;
use rand::Rng;

#[test]
fn test_insert_then_read_back() {
    let mut heap: IndexedHeap<OrderedFloat<f64>> = IndexedHeap::new();
    heap.insert_or_update(3, OrderedFloat(7.5));
    assert_eq!(heap.current_score(3).unwrap(), OrderedFloat(7.5));

    // Update must be visible immediately as well
    heap.insert_or_update(3, OrderedFloat(2.0));
    assert_eq!(heap.current_score(3).unwrap(), OrderedFloat(2.0));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_pop_returns_minimum() {
    let mut heap: IndexedHeap<OrderedFloat<f64>> = IndexedHeap::with_capacity(4);
    heap.insert_or_update(0, OrderedFloat(10.0));
    heap.insert_or_update(1, OrderedFloat(5.0));
    heap.insert_or_update(2, OrderedFloat(8.0));

    let (score, vertex) = heap.pop_min().unwrap();
    assert_eq!(vertex, 1);
    assert_eq!(score, OrderedFloat(5.0));
    assert!(!heap.contains(1));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_drain_yields_non_decreasing_scores() {
    let mut rng = rand::thread_rng();
    let mut heap: IndexedHeap<OrderedFloat<f64>> = IndexedHeap::with_capacity(200);

    for v in 0..200 {
        heap.insert_or_update(v, OrderedFloat(rng.gen_range(0.0..1000.0)));
    }
    // Decrease some keys after the fact
    for _ in 0..100 {
        let v = rng.gen_range(0..200);
        let current = heap.current_score(v).unwrap();
        heap.insert_or_update(v, current - OrderedFloat(rng.gen_range(0.0..50.0)));
    }

    let mut previous = OrderedFloat(f64::NEG_INFINITY);
    while !heap.is_empty() {
        let (score, _) = heap.pop_min().unwrap();
        assert!(score >= previous, "pop order violated: {score} after {previous}");
        previous = score;
    }
}

#[test]
fn test_decrease_key_reorders() {
    let mut heap: IndexedHeap<OrderedFloat<f64>> = IndexedHeap::new();
    heap.insert_or_update(0, OrderedFloat(1.0));
    heap.insert_or_update(1, OrderedFloat(2.0));
    heap.insert_or_update(2, OrderedFloat(3.0));

    heap.insert_or_update(2, OrderedFloat(0.5));
    assert_eq!(heap.peek_min(), Some((OrderedFloat(0.5), 2)));

    // Increasing a key must also restore heap order
    heap.insert_or_update(2, OrderedFloat(9.0));
    assert_eq!(heap.peek_min(), Some((OrderedFloat(1.0), 0)));
}

#[test]
fn test_pop_empty_fails() {
    let mut heap: IndexedHeap<OrderedFloat<f64>> = IndexedHeap::new();
    assert!(matches!(heap.pop_min(), Err(Error::EmptyQueue)));
}

#[test]
fn test_score_of_untracked_vertex_fails() {
    let mut heap: IndexedHeap<OrderedFloat<f64>> = IndexedHeap::new();
    assert!(matches!(heap.current_score(7), Err(Error::NotTracked(7))));

    heap.insert_or_update(7, OrderedFloat(1.0));
    heap.pop_min().unwrap();
    // Popped vertices are no longer tracked
    assert!(matches!(heap.current_score(7), Err(Error::NotTracked(7))));
}
