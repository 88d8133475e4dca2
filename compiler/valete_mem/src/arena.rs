//! Chained bump allocator for compiler-lifetime data.
//!
//! The arena hands out byte regions by advancing a cursor through a block.
//! When a block cannot satisfy a request, allocation moves to an overflow
//! block that the full block owns, growing the chain one link at a time.
//! Individual allocations are never freed; the whole chain is released when
//! the arena is dropped.
//!
//! # Layout
//!
//! ```text
//! Arena ──► Block { buf, cursor } ──► Block { buf, cursor } ──► ...
//!           head                      overflow (created on demand)
//! ```
//!
//! An overflow block is sized `max(request, capacity of the block that
//! overflowed)`, so capacities never shrink down the chain and a pathological
//! chain of tiny blocks cannot form. Once an overflow block exists it is
//! reused for all later overflow; only when it too runs out does the next
//! link appear.
//!
//! # Handles
//!
//! Allocations are identified by [`ArenaRef`], a copyable (chain position,
//! offset, length) triple. Handles are offsets, not pointers: growing the
//! chain never moves existing blocks, so a handle stays valid until the
//! arena is dropped. Resolving a handle that this arena never produced is a
//! contract violation and panics.

/// Handle to a byte region allocated from an [`Arena`].
///
/// Small and copyable. It does not track which arena produced it; using it
/// with a different arena is a contract violation (panic or garbage bytes,
/// never memory unsafety).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaRef {
    /// Position of the owning block in the chain (0 = head).
    block: u32,
    /// Byte offset within the owning block.
    start: usize,
    /// Length of the region in bytes.
    len: usize,
}

impl ArenaRef {
    /// Length of the referenced region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the referenced region is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Bump allocator over a chain of byte blocks.
///
/// Created with an initial capacity; grows by linking overflow blocks when a
/// request does not fit. Memory exhaustion on create or grow aborts the
/// process; there is no recovery path once the allocator itself cannot
/// allocate.
pub struct Arena {
    head: Box<Block>,
}

/// One link in the chain: an owned byte region, a write cursor, and the
/// overflow block (if this one has ever run out).
struct Block {
    buf: Box<[u8]>,
    cursor: usize,
    next: Option<Box<Block>>,
}

impl Block {
    fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            cursor: 0,
            next: None,
        }
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes still free between cursor and end.
    fn spare(&self) -> usize {
        self.buf.len() - self.cursor
    }
}

impl Arena {
    /// Create an arena whose head block holds `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: Box::new(Block::new(capacity)),
        }
    }

    /// Allocate `size` contiguous bytes and return a handle to them.
    ///
    /// Walks the chain front to back: the first block with `size` spare
    /// bytes serves the request by bumping its cursor. If every block is
    /// too full, a new overflow block sized `max(size, capacity of the last
    /// block)` is linked and serves it. The returned region is zeroed and
    /// stays valid until the arena is dropped.
    ///
    /// `size == 0` is permitted and returns an empty region at the current
    /// cursor without growing the chain.
    pub fn alloc(&mut self, size: usize) -> ArenaRef {
        let mut block = &mut self.head;
        let mut chain = 0u32;
        loop {
            if size <= block.spare() {
                let start = block.cursor;
                block.cursor += size;
                return ArenaRef {
                    block: chain,
                    start,
                    len: size,
                };
            }
            let grown = size.max(block.capacity());
            block = block.next.get_or_insert_with(|| Box::new(Block::new(grown)));
            chain += 1;
        }
    }

    /// Allocate a region the size of `bytes` and copy `bytes` into it.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> ArenaRef {
        let region = self.alloc(bytes.len());
        self.get_mut(region).copy_from_slice(bytes);
        region
    }

    /// Resolve a handle to its byte region.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to an allocated range in this
    /// arena (contract violation).
    pub fn get(&self, region: ArenaRef) -> &[u8] {
        let block = self.block(region.block);
        assert!(
            region.start + region.len <= block.cursor,
            "arena ref {}..{} beyond block cursor {}",
            region.start,
            region.start + region.len,
            block.cursor,
        );
        &block.buf[region.start..region.start + region.len]
    }

    /// Resolve a handle to its byte region, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to an allocated range in this
    /// arena (contract violation).
    pub fn get_mut(&mut self, region: ArenaRef) -> &mut [u8] {
        let block = self.block_mut(region.block);
        assert!(
            region.start + region.len <= block.cursor,
            "arena ref {}..{} beyond block cursor {}",
            region.start,
            region.start + region.len,
            block.cursor,
        );
        &mut block.buf[region.start..region.start + region.len]
    }

    /// Total bytes handed out across the chain.
    pub fn allocated(&self) -> usize {
        self.blocks().map(|b| b.cursor).sum()
    }

    /// Total capacity in bytes across the chain.
    pub fn capacity(&self) -> usize {
        self.blocks().map(Block::capacity).sum()
    }

    /// Number of blocks currently in the chain.
    pub fn block_count(&self) -> usize {
        self.blocks().count()
    }

    /// Returns `true` if nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.allocated() == 0
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> {
        let mut next = Some(&*self.head);
        std::iter::from_fn(move || {
            let block = next?;
            next = block.next.as_deref();
            Some(block)
        })
    }

    fn block(&self, chain: u32) -> &Block {
        let mut block = &*self.head;
        for _ in 0..chain {
            block = match block.next.as_deref() {
                Some(next) => next,
                None => panic!("arena ref beyond block chain"),
            };
        }
        block
    }

    fn block_mut(&mut self, chain: u32) -> &mut Block {
        let mut block = &mut *self.head;
        for _ in 0..chain {
            block = match block.next.as_deref_mut() {
                Some(next) => next,
                None => panic!("arena ref beyond block chain"),
            };
        }
        block
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        // Unlink the chain front to back so teardown stack depth stays O(1)
        // no matter how long the chain grew.
        let mut next = self.head.next.take();
        while let Some(mut block) = next {
            next = block.next.take();
        }
    }
}

#[cfg(test)]
mod tests;
