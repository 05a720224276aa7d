use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use permlap_core::{ChromSizes, RegionSet};
use permlap_overlaprs::GenomeIndex;

use crate::errors::EnrichError;
use crate::shuffle::shuffle_regions;

/// The outcome of one permutation test.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentResult {
    /// Number of (binding site, reduced-catalog span) overlapping pairs on
    /// the real data.
    pub observed: u64,
    /// One overlap count per permutation, in iteration order.
    pub samples: Vec<u64>,
    /// Fraction of samples strictly greater than `observed`.
    pub p_value: f64,
}

/// Run the permutation-based overlap enrichment test.
///
/// The catalog is first reduced (overlapping records merged into maximal
/// non-overlapping spans) so each locus is counted once no matter how many
/// annotation records point to it. The observed statistic is the hit-pair
/// overlap count between `binding_sites` and the reduced catalog; a binding
/// site overlapping two reduced spans counts twice. Each of the `iterations`
/// permutations repositions every binding site uniformly at random within
/// its own chromosome (width preserved) and recomputes the same statistic
/// against the same reduced catalog.
///
/// Permutation `i` draws from `StdRng::seed_from_u64(seed + i)`, so the
/// result is reproducible for fixed inputs and seed regardless of how the
/// iterations are scheduled across threads.
///
/// The empirical p-value is `|{s : s > observed}| / iterations`, so its
/// resolution is `1/iterations`.
///
/// # Errors
///
/// - [`EnrichError::EmptyRegionSet`] when `binding_sites` or `catalog` has
///   no regions
/// - [`EnrichError::InvalidIterations`] when `iterations` is zero
/// - [`EnrichError::InvalidCoordinates`] when a binding site ends at or
///   before its start
/// - [`EnrichError::MissingChromosome`] when a binding-site chromosome is
///   absent from `chrom_sizes`
/// - [`EnrichError::RegionTooLong`] when a binding site is wider than its
///   chromosome
pub fn run_enrichment_test(
    binding_sites: &RegionSet,
    catalog: &RegionSet,
    chrom_sizes: &ChromSizes,
    iterations: u64,
    seed: u64,
) -> Result<EnrichmentResult, EnrichError> {
    run_enrichment_test_with_observer(binding_sites, catalog, chrom_sizes, iterations, seed, |_| {})
}

/// Same as [`run_enrichment_test`], invoking `observer` once per completed
/// permutation with the iteration index.
///
/// Progress reporting stays outside the core contract; the CLI feeds this a
/// progress-bar tick. The observer may be called from multiple threads and
/// out of iteration order.
pub fn run_enrichment_test_with_observer<F>(
    binding_sites: &RegionSet,
    catalog: &RegionSet,
    chrom_sizes: &ChromSizes,
    iterations: u64,
    seed: u64,
    observer: F,
) -> Result<EnrichmentResult, EnrichError>
where
    F: Fn(u64) + Sync,
{
    validate(binding_sites, catalog, chrom_sizes, iterations)?;

    let reduced = catalog.reduce();
    let index = GenomeIndex::from_region_set(&reduced);

    let observed = index.count_overlaps(binding_sites);

    let samples = (0..iterations)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let shuffled = shuffle_regions(binding_sites, chrom_sizes, &mut rng)?;
            let sample = index.count_overlaps(&shuffled);
            observer(i);
            Ok(sample)
        })
        .collect::<Result<Vec<u64>, EnrichError>>()?;

    let greater = samples.iter().filter(|&&sample| sample > observed).count();
    let p_value = greater as f64 / iterations as f64;

    Ok(EnrichmentResult {
        observed,
        samples,
        p_value,
    })
}

fn validate(
    binding_sites: &RegionSet,
    catalog: &RegionSet,
    chrom_sizes: &ChromSizes,
    iterations: u64,
) -> Result<(), EnrichError> {
    if binding_sites.is_empty() {
        return Err(EnrichError::EmptyRegionSet("binding site"));
    }
    if catalog.is_empty() {
        return Err(EnrichError::EmptyRegionSet("catalog"));
    }
    if iterations < 1 {
        return Err(EnrichError::InvalidIterations(iterations));
    }

    // surface geometry problems up front instead of from inside the loop
    for region in binding_sites {
        if region.end <= region.start {
            return Err(EnrichError::InvalidCoordinates(region.as_string()));
        }
        let size = chrom_sizes
            .get(&region.chr)
            .ok_or_else(|| EnrichError::MissingChromosome(region.chr.clone()))?;
        if region.width() > size {
            return Err(EnrichError::RegionTooLong {
                chr: region.chr.clone(),
                width: region.width(),
                size,
            });
        }
    }

    Ok(())
}
