//! # Seqbench
//!
//! Wall-clock comparison of two sequential container strategies: a
//! contiguous dynamic array (`Vec`) and a doubly linked list.
//!
//! This library provides:
//! - Random workload generation (entropy-seeded by default, fixed-seed for
//!   deterministic tests)
//! - A single-shot timing harness with sub-millisecond resolution
//! - A doubly linked list with an explicit insertion cursor
//! - A six-category suite: fill, random access, sequential access, and
//!   front/back/middle insertion
//!
//! Categories run cumulatively over one container pair, so the state each
//! category sees includes every mutation before it.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqbench::{ContainerPair, WorkloadConfig};
//!
//! let workload = WorkloadConfig {
//!     dataset_len: 100,
//!     insert_count: 10,
//!     seed: Some(42),
//! }
//! .generate();
//!
//! let mut pair = ContainerPair::new();
//! let timings = pair.run_all(&workload);
//!
//! assert_eq!(timings.len(), 6);
//! // 100 filled + 3 x 10 inserted, on both sides.
//! assert_eq!(pair.vec().len(), 130);
//! assert_eq!(pair.list().len(), 130);
//! ```

// Doubly linked container with cursor support
pub mod list;
pub use list::{CursorList, CursorMut};

// Six-category comparison suite
pub mod suite;
pub use suite::{print_report, run_suite, Category, CategoryTiming, ContainerPair};

// Single-shot wall-clock measurement
pub mod timing;
pub use timing::time_millis;

// Dataset/payload generation
pub mod workload;
pub use workload::{random_sequence, Workload, WorkloadConfig, DATASET_LEN, INSERT_COUNT};
