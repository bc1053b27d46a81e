//! This crate implements a first-fit dynamic memory allocator for a fixed
//! arena of SRAM, indexed by a four-level skip list.
//!
//!  - **All bookkeeping lives inside the arena.** Free blocks carry their
//!    own headers in the bytes they describe; there is no out-of-band
//!    metadata, so the allocator state is two accounting words plus the
//!    four list heads.
//!
//!  - **The memory arena is provided by the application.** Typical sources
//!    are a `static` buffer, or the span between a linker-provided heap
//!    start symbol and the end of SRAM.
//!
//!  - **This crate supports `#![no_std]`.** It can be used in bare-metal
//!    and RTOS-based applications.
//!
//! The allocator is split in two layers. [`SkipList`] is the free-block
//! index: it hands out raw, exactly-sized byte ranges and takes them back
//! ([`reserve`](SkipList::reserve) / [`release`](SkipList::release) /
//! [`resize`](SkipList::resize)), coalescing adjacent free blocks eagerly.
//! [`Heap`] is the sized-header façade on top: every live allocation is
//! prefixed with its total size, so callers only need the pointer to free
//! or reallocate, exactly like `malloc`/`free`.
//!
//! # Examples
//!
//! ```rust
//! use skipfit::Heap;
//! use core::mem::MaybeUninit;
//!
//! let mut arena = [MaybeUninit::uninit(); 4096];
//!
//! // `'arena` ties the heap to the buffer it manages (`arena` here).
//! let mut heap = Heap::INIT;
//! heap.init(&mut arena);
//!
//! let ptr = heap.allocate(40).unwrap();
//! unsafe {
//!     ptr.as_ptr().write_bytes(0x5a, 40);
//!     let ptr = heap.reallocate(96, ptr.as_ptr()).unwrap();
//!     assert_eq!(ptr.as_ptr().read(), 0x5a);
//!     heap.deallocate(ptr.as_ptr());
//! }
//! assert_eq!(heap.free_bytes(), heap.total_bytes());
//! ```
//!
//! # Concurrency
//!
//! The allocator is single-threaded by design: at most one operation may be
//! in progress at a time. A caller that needs concurrent access must wrap
//! every public operation in an external critical section.
#![no_std]

mod heap;
mod skiplist;
mod utils;

// Support for the crate's own randomized tests and benches.
#[doc(hidden)]
pub mod rng;

pub use self::{
    heap::{Heap, HEADER_SIZE},
    skiplist::{SkipList, ALIGNMENT, MIN_ALLOC_SIZE},
};

#[cfg(test)]
extern crate std;
