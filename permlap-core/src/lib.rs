//! Core models for permlap: genomic regions, region sets, and chromosome sizes.
//!
//! Everything downstream (the overlap index, the enrichment test, the CLI)
//! is built on the types in this crate:
//!
//! - [`Region`] / [`RegionSet`] — BED-style genomic intervals and collections
//!   of them, including the `reduce()` operation that collapses overlapping
//!   records into maximal non-overlapping spans
//! - [`ChromSizes`] — per-chromosome sequence lengths, read from a UCSC-style
//!   `chrom.sizes` file, used to bound random repositioning
//! - [`Interval`] — the generic half-open interval the overlap index stores

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{ChromSizesError, RegionSetError};
pub use models::{ChromSizes, Interval, Region, RegionSet};
