//! The six-category container comparison suite.
//!
//! One [`ContainerPair`] owns the array and the linked list, applies the same
//! logical operations to both, and reports a wall-clock duration per side.
//! Categories run cumulatively: each starts from whatever state the previous
//! one left behind, so insertion counts compound across the suite.

use std::hint::black_box;

use log::{debug, info};
use serde::Serialize;

use crate::list::CursorList;
use crate::timing::time_millis;
use crate::workload::Workload;

/// Stride between visited positions in the random-access category.
pub const ACCESS_STRIDE: usize = 1_000;

/// The operation categories, in suite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Fill,
    RandomAccess,
    SequentialAccess,
    InsertFront,
    InsertBack,
    InsertMiddle,
}

impl Category {
    /// All categories in the order the suite runs them.
    pub const ALL: [Category; 6] = [
        Category::Fill,
        Category::RandomAccess,
        Category::SequentialAccess,
        Category::InsertFront,
        Category::InsertBack,
        Category::InsertMiddle,
    ];

    /// Human-readable section title for the report.
    pub fn title(self) -> &'static str {
        match self {
            Category::Fill => "Filling containers",
            Category::RandomAccess => "Random access (every 1000th element)",
            Category::SequentialAccess => "Sequential access (full iteration)",
            Category::InsertFront => "Insert at front",
            Category::InsertBack => "Insert at back",
            Category::InsertMiddle => "Insert in middle",
        }
    }
}

/// Timings for one category: the array side and the list side, in
/// fractional milliseconds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryTiming {
    pub category: Category,
    pub vec_ms: f64,
    pub list_ms: f64,
}

/// The array/list pair under measurement, plus the read sink.
///
/// The sink folds every value the access categories read through a wrapping
/// sum that is routed through `black_box`, so the read loops cannot be
/// optimized away; [`checksum`](ContainerPair::checksum) exposes the result.
pub struct ContainerPair {
    vec: Vec<u32>,
    list: CursorList<u32>,
    sink: u64,
}

impl Default for ContainerPair {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerPair {
    /// Two empty containers.
    pub fn new() -> Self {
        Self {
            vec: Vec::new(),
            list: CursorList::new(),
            sink: 0,
        }
    }

    pub fn vec(&self) -> &[u32] {
        &self.vec
    }

    pub fn list(&self) -> &CursorList<u32> {
        &self.list
    }

    /// Accumulated checksum of every value the access categories read.
    pub fn checksum(&self) -> u64 {
        self.sink
    }

    /// Run one category against both containers and return its timings.
    pub fn run(&mut self, category: Category, workload: &Workload) -> CategoryTiming {
        info!(
            "{:?}: vec_len={} list_len={}",
            category,
            self.vec.len(),
            self.list.len()
        );
        let (vec_ms, list_ms) = match category {
            Category::Fill => self.fill(&workload.dataset),
            Category::RandomAccess => self.random_access(),
            Category::SequentialAccess => self.sequential_access(),
            Category::InsertFront => self.insert_front(&workload.payload),
            Category::InsertBack => self.insert_back(&workload.payload),
            Category::InsertMiddle => self.insert_middle(&workload.payload),
        };
        CategoryTiming {
            category,
            vec_ms,
            list_ms,
        }
    }

    /// Run all six categories in suite order.
    pub fn run_all(&mut self, workload: &Workload) -> Vec<CategoryTiming> {
        let timings: Vec<CategoryTiming> = Category::ALL
            .iter()
            .map(|&category| self.run(category, workload))
            .collect();
        debug!("read sink checksum: {:#018x}", self.sink);
        timings
    }

    fn fill(&mut self, data: &[u32]) -> (f64, f64) {
        let vec_ms = time_millis(|| {
            self.vec = data.to_vec();
        });
        let list_ms = time_millis(|| {
            self.list = data.iter().copied().collect();
        });
        (vec_ms, list_ms)
    }

    fn random_access(&mut self) -> (f64, f64) {
        let len = self.vec.len();

        let mut vec_sum = 0u64;
        let vec_ms = time_millis(|| {
            for i in (0..len).step_by(ACCESS_STRIDE) {
                vec_sum = vec_sum.wrapping_add(self.vec[i] as u64);
            }
        });

        // The cursor keeps its position between reads: each step advances
        // from the previous stop rather than re-walking from the head.
        let mut list_sum = 0u64;
        let list_ms = time_millis(|| {
            let mut cursor = self.list.cursor_front_mut();
            for i in (0..len).step_by(ACCESS_STRIDE) {
                if i > 0 {
                    cursor.advance(ACCESS_STRIDE);
                }
                if let Some(&value) = cursor.current() {
                    list_sum = list_sum.wrapping_add(value as u64);
                }
            }
        });

        self.absorb(vec_sum, list_sum);
        (vec_ms, list_ms)
    }

    fn sequential_access(&mut self) -> (f64, f64) {
        let mut vec_sum = 0u64;
        let vec_ms = time_millis(|| {
            for &value in &self.vec {
                vec_sum = vec_sum.wrapping_add(value as u64);
            }
        });

        let mut list_sum = 0u64;
        let list_ms = time_millis(|| {
            for &value in self.list.iter() {
                list_sum = list_sum.wrapping_add(value as u64);
            }
        });

        self.absorb(vec_sum, list_sum);
        (vec_ms, list_ms)
    }

    fn insert_front(&mut self, payload: &[u32]) -> (f64, f64) {
        let vec_ms = time_millis(|| {
            for &value in payload {
                self.vec.insert(0, value);
            }
        });
        let list_ms = time_millis(|| {
            for &value in payload {
                self.list.push_front(value);
            }
        });
        (vec_ms, list_ms)
    }

    fn insert_back(&mut self, payload: &[u32]) -> (f64, f64) {
        let vec_ms = time_millis(|| {
            for &value in payload {
                self.vec.push(value);
            }
        });
        let list_ms = time_millis(|| {
            for &value in payload {
                self.list.push_back(value);
            }
        });
        (vec_ms, list_ms)
    }

    fn insert_middle(&mut self, payload: &[u32]) -> (f64, f64) {
        // Array side: the midpoint is recomputed before every insertion, so
        // it drifts as the array grows.
        let vec_ms = time_millis(|| {
            for &value in payload {
                let mid = self.vec.len() / 2;
                self.vec.insert(mid, value);
            }
        });

        // List side: one cursor, derived before the timed region, receives
        // every insertion without ever being re-derived or advanced.
        let mid = self.list.len() / 2;
        let mut cursor = self.list.cursor_front_mut();
        cursor.advance(mid);
        let list_ms = time_millis(|| {
            for &value in payload {
                cursor.insert_before(value);
            }
        });
        (vec_ms, list_ms)
    }

    fn absorb(&mut self, vec_sum: u64, list_sum: u64) {
        self.sink = self
            .sink
            .wrapping_add(black_box(vec_sum))
            .wrapping_add(black_box(list_sum));
    }
}

/// Run the full suite against a fresh container pair.
pub fn run_suite(workload: &Workload) -> Vec<CategoryTiming> {
    ContainerPair::new().run_all(workload)
}

/// Print the fixed-order report: one numbered section per category, two
/// fixed-point lines each.
pub fn print_report(timings: &[CategoryTiming]) {
    for (index, timing) in timings.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}. {}:", index + 1, timing.category.title());
        println!("Vec : {:.2} ms", timing.vec_ms);
        println!("List: {:.2} ms", timing.list_ms);
    }
}
