use std::collections::{HashMap, HashSet};

use permlap_core::{Region, RegionSet};
use permlap_overlaprs::GenomeIndex;

/// One row of the phenotype overlap table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotypeCount {
    pub label: String,
    /// Number of binding-site-hit catalog spans annotated with this label.
    pub hits: u32,
}

/// Tally the phenotype labels associated with the catalog loci that the
/// binding sites hit.
///
/// The catalog is reduced the same way the enrichment test reduces it. For
/// every reduced span overlapped by at least one binding site, the distinct
/// labels of the raw catalog records inside that span are collected, and
/// each label is counted once per hit span. A span carrying records for two
/// phenotypes contributes one hit to each.
///
/// Labels come from [`Region::rest`]; records without one are skipped. The
/// table is sorted by descending hit count, ties broken by label.
pub fn phenotype_overlap_table(
    binding_sites: &RegionSet,
    catalog: &RegionSet,
) -> Vec<PhenotypeCount> {
    let reduced = catalog.reduce();
    let reduced_index = GenomeIndex::from_region_set(&reduced);
    let raw_index = GenomeIndex::from_region_set(catalog);

    // reduced spans hit by at least one binding site, deduplicated across
    // binding sites hitting the same span
    let mut hit_spans: HashSet<Region> = HashSet::new();
    for site in binding_sites {
        for hit in reduced_index.find_region_iter(site) {
            hit_spans.insert(Region {
                chr: site.chr.clone(),
                start: hit.start,
                end: hit.end,
                rest: None,
            });
        }
    }

    let mut tally: HashMap<String, u32> = HashMap::new();
    for span in &hit_spans {
        let labels: HashSet<&String> = raw_index
            .find_region_iter(span)
            .filter_map(|record| record.val.as_ref())
            .collect();
        for label in labels {
            *tally.entry(label.clone()).or_insert(0) += 1;
        }
    }

    let mut table: Vec<PhenotypeCount> = tally
        .into_iter()
        .map(|(label, hits)| PhenotypeCount { label, hits })
        .collect();
    table.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.label.cmp(&b.label)));

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn labeled(chr: &str, start: u32, end: u32, label: &str) -> Region {
        Region {
            chr: chr.to_string(),
            start,
            end,
            rest: Some(label.to_string()),
        }
    }

    fn region(chr: &str, start: u32, end: u32) -> Region {
        Region {
            chr: chr.to_string(),
            start,
            end,
            rest: None,
        }
    }

    #[rstest]
    fn test_labels_counted_once_per_hit_span() {
        let peaks = RegionSet::from(vec![region("chr1", 100, 200)]);
        // two overlapping Height records collapse into one span, so Height
        // gets a single hit
        let catalog = RegionSet::from(vec![
            labeled("chr1", 150, 160, "Height"),
            labeled("chr1", 150, 170, "Height"),
        ]);

        let table = phenotype_overlap_table(&peaks, &catalog);
        assert_eq!(
            table,
            vec![PhenotypeCount {
                label: "Height".to_string(),
                hits: 1
            }]
        );
    }

    #[rstest]
    fn test_span_with_two_phenotypes_counts_both() {
        let peaks = RegionSet::from(vec![region("chr1", 100, 200)]);
        let catalog = RegionSet::from(vec![
            labeled("chr1", 150, 160, "Height"),
            labeled("chr1", 155, 170, "Asthma"),
        ]);

        let table = phenotype_overlap_table(&peaks, &catalog);
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|row| row.hits == 1));
    }

    #[rstest]
    fn test_unhit_spans_are_excluded() {
        let peaks = RegionSet::from(vec![region("chr1", 100, 200)]);
        let catalog = RegionSet::from(vec![
            labeled("chr1", 150, 160, "Height"),
            labeled("chr1", 5000, 5100, "Diabetes"),
            labeled("chr2", 150, 160, "Diabetes"),
        ]);

        let table = phenotype_overlap_table(&peaks, &catalog);
        assert_eq!(
            table,
            vec![PhenotypeCount {
                label: "Height".to_string(),
                hits: 1
            }]
        );
    }

    #[rstest]
    fn test_sorted_by_hits_then_label() {
        let peaks = RegionSet::from(vec![
            region("chr1", 100, 200),
            region("chr1", 900, 1000),
            region("chr2", 100, 200),
        ]);
        let catalog = RegionSet::from(vec![
            labeled("chr1", 150, 160, "Asthma"),
            labeled("chr1", 950, 960, "Asthma"),
            labeled("chr2", 150, 160, "Height"),
        ]);

        let table = phenotype_overlap_table(&peaks, &catalog);
        assert_eq!(table[0].label, "Asthma");
        assert_eq!(table[0].hits, 2);
        assert_eq!(table[1].label, "Height");
        assert_eq!(table[1].hits, 1);
    }

    #[rstest]
    fn test_unlabeled_records_are_skipped() {
        let peaks = RegionSet::from(vec![region("chr1", 100, 200)]);
        let catalog = RegionSet::from(vec![region("chr1", 150, 160)]);

        let table = phenotype_overlap_table(&peaks, &catalog);
        assert!(table.is_empty());
    }

    #[rstest]
    fn test_no_hits_gives_empty_table() {
        let peaks = RegionSet::from(vec![region("chr2", 100, 200)]);
        let catalog = RegionSet::from(vec![labeled("chr1", 150, 160, "Height")]);

        let table = phenotype_overlap_table(&peaks, &catalog);
        assert!(table.is_empty());
    }
}
