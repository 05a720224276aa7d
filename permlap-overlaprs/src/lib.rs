//! Interval overlap queries and counting for genomic region sets.
//!
//! Two layers live here:
//!
//! - [`Bits`] — a Binary Interval Search structure over one chromosome's
//!   intervals, with iterator-based `find_iter` queries and an O(log n)
//!   `count` that never allocates. `count` is the primitive the permutation
//!   test is built on: it returns the number of indexed intervals overlapping
//!   a query range, so summing it over a query set yields the hit-pair count.
//! - [`GenomeIndex`] — one `Bits` per chromosome, built from a
//!   [`RegionSet`](permlap_core::RegionSet), for genome-wide queries. Query
//!   regions on chromosomes absent from the index contribute zero overlaps.
//!
//! ```
//! use permlap_core::{Region, RegionSet};
//! use permlap_overlaprs::GenomeIndex;
//!
//! let catalog = RegionSet::from(vec![
//!     Region { chr: "chr1".to_string(), start: 150, end: 170, rest: None },
//!     Region { chr: "chr1".to_string(), start: 600, end: 620, rest: None },
//! ]);
//! let index = GenomeIndex::from_region_set(&catalog);
//!
//! let peaks = RegionSet::from(vec![
//!     Region { chr: "chr1".to_string(), start: 100, end: 200, rest: None },
//! ]);
//! assert_eq!(index.count_overlaps(&peaks), 1);
//! ```

pub mod bits;
pub mod genome_index;

// re-exports
pub use self::bits::Bits;
pub use self::genome_index::GenomeIndex;
