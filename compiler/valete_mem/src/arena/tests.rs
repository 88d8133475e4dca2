use proptest::prelude::*;

use super::*;

// === Creation ===

#[test]
fn fresh_arena_is_empty() {
    let arena = Arena::with_capacity(64);
    assert!(arena.is_empty());
    assert_eq!(arena.allocated(), 0);
    assert_eq!(arena.capacity(), 64);
    assert_eq!(arena.block_count(), 1);
}

#[test]
fn zero_capacity_arena() {
    let mut arena = Arena::with_capacity(0);
    assert_eq!(arena.capacity(), 0);

    // First real allocation grows a block sized exactly to the request.
    let region = arena.alloc(5);
    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.capacity(), 5);
    assert_eq!(arena.get(region).len(), 5);
}

// === Bump allocation ===

#[test]
fn bump_advances_through_head_block() {
    let mut arena = Arena::with_capacity(32);
    let a = arena.alloc(8);
    let b = arena.alloc(8);

    assert_eq!((a.block, a.start, a.len), (0, 0, 8));
    assert_eq!((b.block, b.start, b.len), (0, 8, 8));
    assert_eq!(arena.allocated(), 16);
    assert_eq!(arena.block_count(), 1);
}

#[test]
fn regions_start_zeroed() {
    let mut arena = Arena::with_capacity(16);
    let region = arena.alloc(16);
    assert!(arena.get(region).iter().all(|&b| b == 0));
}

#[test]
fn writes_are_visible_and_disjoint() {
    let mut arena = Arena::with_capacity(32);
    let a = arena.alloc(8);
    let b = arena.alloc(8);

    arena.get_mut(a).fill(0xAA);
    arena.get_mut(b).fill(0xBB);

    assert!(arena.get(a).iter().all(|&x| x == 0xAA));
    assert!(arena.get(b).iter().all(|&x| x == 0xBB));
}

// === Overflow growth ===

#[test]
fn overflow_creates_block_no_smaller_than_head() {
    let mut arena = Arena::with_capacity(16);
    let a = arena.alloc(10);
    let b = arena.alloc(10);

    // Second request does not fit the 6 spare bytes; the overflow block is
    // sized max(10, 16) = 16.
    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.capacity(), 32);
    assert_eq!(b.block, 1);

    arena.get_mut(a).fill(1);
    arena.get_mut(b).fill(2);
    assert!(arena.get(a).iter().all(|&x| x == 1));
    assert!(arena.get(b).iter().all(|&x| x == 2));
}

#[test]
fn oversized_request_gets_exact_block() {
    let mut arena = Arena::with_capacity(16);
    let big = arena.alloc(100);

    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.capacity(), 116);
    assert_eq!(arena.get(big).len(), 100);
}

#[test]
fn small_alloc_after_overflow_uses_block_with_room() {
    let mut arena = Arena::with_capacity(16);
    arena.alloc(10);
    arena.alloc(10); // overflows into a second block

    // The head still has 6 spare bytes; this fits there.
    let small = arena.alloc(6);
    assert_eq!(small.block, 0);
    assert_eq!(small.start, 10);
    assert_eq!(arena.block_count(), 2);
}

#[test]
fn existing_overflow_block_is_reused() {
    let mut arena = Arena::with_capacity(16);
    arena.alloc(16); // fills the head
    let a = arena.alloc(4);
    let b = arena.alloc(4);

    // Both served from the one overflow block, no third link.
    assert_eq!(a.block, 1);
    assert_eq!(b.block, 1);
    assert_eq!(arena.block_count(), 2);
}

#[test]
fn growth_is_transitive_when_overflow_fills() {
    let mut arena = Arena::with_capacity(16);
    arena.alloc(20); // overflow block of 20, filled immediately
    arena.alloc(10); // fits the head's 16 spare bytes
    let c = arena.alloc(10); // head has 6, overflow has 0: third block

    assert_eq!(c.block, 2);
    assert_eq!(arena.block_count(), 3);
    // Third block sized max(10, 20) = 20: capacities never shrink.
    assert_eq!(arena.capacity(), 16 + 20 + 20);
}

// === Zero-size allocation ===

#[test]
fn zero_size_alloc_does_not_grow() {
    let mut arena = Arena::with_capacity(4);
    arena.alloc(4); // arena now completely full

    let empty = arena.alloc(0);
    assert!(empty.is_empty());
    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.get(empty), &[] as &[u8]);
}

// === Byte staging ===

#[test]
fn alloc_bytes_round_trips() {
    let mut arena = Arena::with_capacity(8);
    let a = arena.alloc_bytes(b"hello");
    let b = arena.alloc_bytes(b"world, this spills over");

    assert_eq!(arena.get(a), b"hello");
    assert_eq!(arena.get(b), b"world, this spills over");
}

// === Contract violations ===

#[test]
#[should_panic(expected = "beyond block chain")]
fn foreign_chain_position_panics() {
    let arena = Arena::with_capacity(16);
    let forged = ArenaRef {
        block: 3,
        start: 0,
        len: 1,
    };
    let _ = arena.get(forged);
}

#[test]
#[should_panic(expected = "beyond block cursor")]
fn range_past_cursor_panics() {
    let mut arena = Arena::with_capacity(16);
    arena.alloc(4);
    let forged = ArenaRef {
        block: 0,
        start: 2,
        len: 8,
    };
    let _ = arena.get(forged);
}

// === Teardown ===

#[test]
fn long_chain_drops_without_deep_recursion() {
    // Every 1-byte request fills its block, so each one links a fresh block.
    let mut arena = Arena::with_capacity(1);
    for _ in 0..5_000 {
        arena.alloc(1);
    }
    assert_eq!(arena.block_count(), 5_001);
    drop(arena); // iterative unlink; a recursive drop would risk the stack
}

// === Properties ===

proptest! {
    #[test]
    fn allocations_never_overlap(sizes in prop::collection::vec(0usize..64, 1..40)) {
        let mut arena = Arena::with_capacity(16);
        let regions: Vec<ArenaRef> = sizes.iter().map(|&s| arena.alloc(s)).collect();

        // Stamp every region with its own byte pattern, then check that no
        // later write clobbered an earlier region.
        for (i, &region) in regions.iter().enumerate() {
            let fill = (i % 251) as u8;
            arena.get_mut(region).fill(fill);
        }
        for (i, &region) in regions.iter().enumerate() {
            let fill = (i % 251) as u8;
            prop_assert_eq!(arena.get(region).len(), sizes[i]);
            prop_assert!(arena.get(region).iter().all(|&b| b == fill));
        }
    }

    #[test]
    fn allocated_tracks_request_total(sizes in prop::collection::vec(0usize..64, 0..40)) {
        let mut arena = Arena::with_capacity(16);
        for &size in &sizes {
            arena.alloc(size);
        }
        prop_assert_eq!(arena.allocated(), sizes.iter().sum::<usize>());
        prop_assert!(arena.capacity() >= arena.allocated());
    }
}
