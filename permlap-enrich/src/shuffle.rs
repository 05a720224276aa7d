use rand::Rng;
use rand::rngs::StdRng;

use permlap_core::{ChromSizes, Region, RegionSet};

use crate::errors::EnrichError;

/// Reposition every region to a uniformly random start within its own
/// chromosome.
///
/// Width, chromosome, and trailing columns are preserved; only the position
/// changes. The placement is bounded so the region never runs past the
/// chromosome end: for a region of width `w` on a chromosome of length `L`,
/// the new start is drawn uniformly from `0..=L - w`.
///
/// # Errors
///
/// - [`EnrichError::InvalidCoordinates`] when a region ends at or before its
///   start, so it has no well-defined width.
/// - [`EnrichError::MissingChromosome`] when a region's chromosome is absent
///   from `chrom_sizes`. Regions are never silently dropped.
/// - [`EnrichError::RegionTooLong`] when a region is wider than its
///   chromosome, so no valid placement exists.
pub fn shuffle_regions(
    regions: &RegionSet,
    chrom_sizes: &ChromSizes,
    rng: &mut StdRng,
) -> Result<RegionSet, EnrichError> {
    let mut placed: Vec<Region> = Vec::with_capacity(regions.len());

    for region in regions {
        if region.end <= region.start {
            return Err(EnrichError::InvalidCoordinates(region.as_string()));
        }
        let size = chrom_sizes
            .get(&region.chr)
            .ok_or_else(|| EnrichError::MissingChromosome(region.chr.clone()))?;
        let width = region.width();

        if width > size {
            return Err(EnrichError::RegionTooLong {
                chr: region.chr.clone(),
                width,
                size,
            });
        }

        let start = rng.random_range(0..=size - width);
        placed.push(Region {
            chr: region.chr.clone(),
            start,
            end: start + width,
            rest: region.rest.clone(),
        });
    }

    Ok(RegionSet::from(placed))
}
