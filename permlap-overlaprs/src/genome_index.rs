use std::collections::HashMap;

use permlap_core::models::{Interval, Region, RegionSet};

/// A genome-wide overlap index: one [`Bits`](crate::Bits) per chromosome.
///
/// Built once from a subject [`RegionSet`] (for the enrichment test, the
/// reduced catalog) and then queried with arbitrary query sets. The index is
/// immutable after construction and `Send + Sync`, so the permutation loop
/// can share a single instance across worker threads.
///
/// Query regions on chromosomes the index has never seen simply contribute
/// zero overlaps; cross-chromosome hits are impossible by construction.
///
/// # Examples
///
/// ```
/// use permlap_core::{Region, RegionSet};
/// use permlap_overlaprs::GenomeIndex;
///
/// let catalog = RegionSet::from(vec![
///     Region { chr: "chr1".to_string(), start: 1000, end: 2000, rest: Some("Height".to_string()) },
///     Region { chr: "chr2".to_string(), start: 1000, end: 3000, rest: Some("Asthma".to_string()) },
/// ]);
/// let index = GenomeIndex::from_region_set(&catalog);
///
/// let peaks = RegionSet::from(vec![
///     Region { chr: "chr1".to_string(), start: 1500, end: 2500, rest: None },
///     Region { chr: "chr3".to_string(), start: 1500, end: 2500, rest: None },
/// ]);
/// assert_eq!(index.count_overlaps(&peaks), 1);
/// ```
pub struct GenomeIndex<T>
where
    T: Eq + Clone + Send + Sync,
{
    chroms: HashMap<String, crate::Bits<u32, T>>,
}

impl GenomeIndex<Option<String>> {
    /// Build a genome-wide index from a [`RegionSet`], carrying each
    /// region's trailing columns as the interval payload.
    pub fn from_region_set(region_set: &RegionSet) -> Self {
        let mut intervals: HashMap<String, Vec<Interval<u32, Option<String>>>> = HashMap::new();

        for region in region_set {
            intervals
                .entry(region.chr.clone())
                .or_default()
                .push(Interval {
                    start: region.start,
                    end: region.end,
                    val: region.rest.clone(),
                });
        }

        let chroms = intervals
            .into_iter()
            .map(|(chr, chr_intervals)| (chr, crate::Bits::build(chr_intervals)))
            .collect();

        GenomeIndex { chroms }
    }
}

impl<T> GenomeIndex<T>
where
    T: Eq + Clone + Send + Sync,
{
    /// Number of chromosomes in the index.
    pub fn len(&self) -> usize {
        self.chroms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chroms.is_empty()
    }

    pub fn contains_chr(&self, chr: &str) -> bool {
        self.chroms.contains_key(chr)
    }

    /// Count the indexed intervals overlapping a single query region.
    pub fn count_region(&self, region: &Region) -> u64 {
        match self.chroms.get(&region.chr) {
            Some(bits) => bits.count(region.start, region.end) as u64,
            None => 0,
        }
    }

    /// Count all (query, subject) overlapping pairs between a query set and
    /// the index.
    ///
    /// This is a hit-pair count: a single query region overlapping two
    /// indexed intervals contributes two.
    pub fn count_overlaps(&self, region_set: &RegionSet) -> u64 {
        region_set
            .regions
            .iter()
            .map(|region| self.count_region(region))
            .sum()
    }

    /// Iterate over the indexed intervals overlapping a single query region.
    ///
    /// Empty when the query's chromosome is not in the index.
    pub fn find_region_iter<'a>(
        &'a self,
        region: &Region,
    ) -> Box<dyn Iterator<Item = &'a Interval<u32, T>> + 'a> {
        match self.chroms.get(&region.chr) {
            Some(bits) => Box::new(bits.find_iter(region.start, region.end)),
            None => Box::new(std::iter::empty()),
        }
    }
}
