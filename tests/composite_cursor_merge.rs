//! Two adjacency cursors yielding `[2,5,7]` and `[3,5,8]` merge into the
//! globally sorted interleaving `2,3,5,5,7,8`; `advance(6)` on the composite
//! returns `7`, the next `next()` returns `8`, and it is then exhausted.

use rust_gds::types::graph::{AdjacencyCursor, CompositeAdjacencyCursor};

#[test]
fn adjacency_merge_matches_the_literal_scenario() {
    let left = vec![2u64, 5, 7];
    let right = vec![3u64, 5, 8];

    let mut composite = CompositeAdjacencyCursor::new(vec![
        AdjacencyCursor::new(&left),
        AdjacencyCursor::new(&right),
    ]);

    let mut merged = Vec::new();
    while composite.has_next() {
        merged.push(composite.next());
    }
    assert_eq!(merged, vec![2, 3, 5, 5, 7, 8]);
}

#[test]
fn advance_on_composite_resumes_merge_correctly() {
    let left = vec![2u64, 5, 7];
    let right = vec![3u64, 5, 8];

    let mut composite = CompositeAdjacencyCursor::new(vec![
        AdjacencyCursor::new(&left),
        AdjacencyCursor::new(&right),
    ]);

    assert_eq!(composite.advance(6), 7);
    assert_eq!(composite.next(), 7);
    assert_eq!(composite.next(), 8);
    assert!(!composite.has_next());
}
