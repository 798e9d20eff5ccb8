//! Binary min-heap and disjoint-set integration tests.

use graphcore::prelude::*;

/// Every parent must compare less than or equal to its children.
fn assert_heap_order<T: PartialOrd + std::fmt::Debug>(items: &[T]) {
    for child in 1..items.len() {
        let parent = (child - 1) / 2;
        assert!(
            items[parent] <= items[child],
            "{:?} at {parent} is above {:?} at {child}",
            items[parent],
            items[child]
        );
    }
}

#[test]
fn test_heap_sort_reference_input() {
    assert_eq!(
        heap_sort(vec![9, 25, 86, 3, 29, 5, 55]),
        vec![3, 5, 9, 25, 29, 55, 86]
    );
    assert_eq!(heap_sort(Vec::<i32>::new()), Vec::<i32>::new());
    assert_eq!(heap_sort(vec![7]), vec![7]);
    assert_eq!(heap_sort(vec![2, 2, 1, 2]), vec![1, 2, 2, 2]);
}

#[test]
fn test_heap_order_survives_every_operation() -> Result<()> {
    let mut heap = BinaryMinHeap::new();
    for item in [41, 7, 19, 3, 88, 3, 62, 15, 0, 27] {
        heap.insert(item);
        assert_heap_order(heap.as_slice());
    }
    assert_eq!(heap.get_min()?, &0);

    assert_eq!(heap.replace_min(50)?, 0);
    assert_heap_order(heap.as_slice());

    let mut drained = Vec::new();
    while !heap.is_empty() {
        drained.push(heap.delete_min()?);
        assert_heap_order(heap.as_slice());
    }
    assert_eq!(drained, vec![3, 3, 7, 15, 19, 27, 41, 50, 62, 88]);
    Ok(())
}

#[test]
fn test_heapify_in_place() {
    let mut items = vec![9.5, 2.0, 7.25, -1.0, 4.0, 4.0, 0.5];
    heapify(&mut items);
    assert_heap_order(&items);
    assert_eq!(items[0], -1.0);
}

#[test]
fn test_collect_and_extend() -> Result<()> {
    let mut heap: BinaryMinHeap<u32> = (1..=5).rev().collect();
    assert_heap_order(heap.as_slice());
    assert_eq!(heap.get_min()?, &1);

    heap.extend([0, 9]);
    assert_eq!(heap.len(), 7);
    assert_eq!(heap.delete_min()?, 0);

    let mut rest = heap.into_vec();
    rest.sort_unstable();
    assert_eq!(rest, vec![1, 2, 3, 4, 5, 9]);
    Ok(())
}

#[test]
fn test_empty_heap_errors() {
    let mut heap: BinaryMinHeap<i32> = BinaryMinHeap::with_capacity(4);

    assert_eq!(heap.get_min(), Err(Error::EmptyStructure));
    assert_eq!(heap.delete_min(), Err(Error::EmptyStructure));
    assert_eq!(heap.replace_min(1), Err(Error::EmptyStructure));
    assert!(heap.is_empty());
}

#[test]
fn test_heap_orders_weighted_pairs() -> Result<()> {
    // Equal priorities fall back to the second field, as in Dijkstra's queue
    let mut heap: BinaryMinHeap<(f64, u32)> =
        vec![(2.5, 3), (1.0, 9), (2.5, 1), (0.0, 4)].into();

    assert_eq!(heap.delete_min()?, (0.0, 4));
    assert_eq!(heap.delete_min()?, (1.0, 9));
    assert_eq!(heap.delete_min()?, (2.5, 1));
    assert_eq!(heap.delete_min()?, (2.5, 3));
    Ok(())
}

#[test]
fn test_disjoint_set_groups() {
    let mut sets = DisjointSet::new(6);
    assert_eq!(sets.len(), 6);
    assert_eq!(sets.set_count(), 6);

    assert!(sets.union(0, 1));
    assert!(sets.union(2, 3));
    assert!(sets.union(1, 3));
    assert!(!sets.union(0, 2));

    assert_eq!(sets.set_count(), 3);
    assert!(sets.connected(0, 3));
    assert!(!sets.connected(0, 4));
    assert_eq!(sets.find(2), sets.find(0));
    assert_ne!(sets.find(4), sets.find(5));
}
