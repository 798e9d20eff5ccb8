#![no_main]

use graphcore::heap::{heap_sort, BinaryMinHeap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut heap = BinaryMinHeap::new();
    for &byte in data {
        match byte % 4 {
            0 => {
                let _ = heap.delete_min();
            }
            1 => {
                let _ = heap.replace_min(byte);
            }
            _ => heap.insert(byte),
        }
        let items = heap.as_slice();
        for child in 1..items.len() {
            assert!(items[(child - 1) / 2] <= items[child]);
        }
    }

    let sorted = heap_sort(data.to_vec());
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
});
