//! Adjacency index proofs
//!
//! These proofs check the breadth-first construction against the closed-form
//! level-order formulas for every index below a symbolic capacity.

#[cfg(kani)]
use indexed_max_heap::AdjacencyIndex;

/// Proof: every linked index has children 2i+1, 2i+2 and parent (i-1)/2
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(20)]
fn verify_links_match_closed_form() {
    let capacity: usize = kani::any();
    kani::assume(capacity >= 1 && capacity <= 8);
    let index = AdjacencyIndex::new(capacity);

    let i: usize = kani::any();
    kani::assume(i < capacity);
    let link = index.get(i).expect("linked index must have an entry");

    assert!(link.left == Some(2 * i + 1));
    assert!(link.right == Some(2 * i + 2));
    if i == 0 {
        assert!(link.parent.is_none());
    } else {
        assert!(link.parent == Some((i - 1) / 2));
    }
    assert!(index.len() == 2 * capacity + 1);
}

/// Proof: extending in two steps yields the same entries as one build
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(20)]
fn verify_extension_matches_fresh_build() {
    let first: usize = kani::any();
    let second: usize = kani::any();
    kani::assume(first >= 1 && first <= 4);
    kani::assume(second >= first && second <= 8);

    let mut grown = AdjacencyIndex::new(first);
    grown.extend_to(second);
    let fresh = AdjacencyIndex::new(second);

    let i: usize = kani::any();
    kani::assume(i < fresh.len());
    assert!(grown.get(i) == fresh.get(i));
}
