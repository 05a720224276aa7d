//! Permutation-based overlap enrichment testing for genomic region sets.
//!
//! Given a fixed set of binding-site regions (e.g. transcription-factor
//! ChIP-seq peaks) and a catalog of annotated regions (e.g. GWAS catalog
//! hits), [`run_enrichment_test`] estimates whether the observed number of
//! peak/catalog overlaps is higher than expected under a null model in which
//! every peak is repositioned to a uniformly random start within its own
//! chromosome, keeping its width.
//!
//! The whole computation is deterministic for a given seed: permutation `i`
//! draws from its own generator seeded with `seed + i`, so the sequential
//! and rayon-parallel paths produce byte-identical sample sequences.
//!
//! ```
//! use std::collections::HashMap;
//! use permlap_core::{ChromSizes, Region, RegionSet};
//! use permlap_enrich::run_enrichment_test;
//!
//! let peaks = RegionSet::from(vec![
//!     Region { chr: "chr1".to_string(), start: 100, end: 200, rest: None },
//! ]);
//! let catalog = RegionSet::from(vec![
//!     Region { chr: "chr1".to_string(), start: 150, end: 160, rest: None },
//!     Region { chr: "chr1".to_string(), start: 150, end: 170, rest: None },
//! ]);
//! let sizes = ChromSizes::from(HashMap::from([("chr1".to_string(), 1000u32)]));
//!
//! let result = run_enrichment_test(&peaks, &catalog, &sizes, 100, 42).unwrap();
//! assert_eq!(result.observed, 1);
//! assert_eq!(result.samples.len(), 100);
//! ```

pub mod enrichment;
pub mod errors;
pub mod phenotypes;
pub mod shuffle;

// re-exports
pub use enrichment::{
    EnrichmentResult, run_enrichment_test, run_enrichment_test_with_observer,
};
pub use errors::EnrichError;
pub use phenotypes::{PhenotypeCount, phenotype_overlap_table};
pub use shuffle::shuffle_regions;
