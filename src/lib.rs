//! Sorting engine for game catalogs.
//!
//! [`catalog`] holds the record type and a synthetic catalog generator,
//! [`sort`] the ordering relations and three interchangeable stable sorts:
//! binary insertion sort, top-down merge sort and a run-and-merge hybrid.

/// Use mimalloc as the global allocator. The merge-based sorts allocate a
/// scratch buffer per call and the generator allocates many small strings.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod catalog;
pub mod common;
pub mod sort;
