//! End-to-end run over the bed / chrom.sizes fixtures shared by the
//! workspace, exercising file ingestion together with the permutation test.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use permlap_core::{ChromSizes, RegionSet};
use permlap_enrich::{phenotype_overlap_table, run_enrichment_test};

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data")
        .join(file_name)
}

#[rstest]
fn test_enrichment_from_files() {
    let peaks = RegionSet::try_from(get_test_path("peaks.bed").as_path()).unwrap();
    let catalog = RegionSet::try_from(get_test_path("catalog.bed").as_path()).unwrap();
    let chrom_sizes = ChromSizes::try_from(get_test_path("dummy.chrom.sizes").as_path()).unwrap();

    let result = run_enrichment_test(&peaks, &catalog, &chrom_sizes, 100, 42).unwrap();

    // peak1 hits the reduced chr1:150-170 span, peak2 hits chr1:600-620;
    // peak3 on chr2 misses the distant chr2 catalog locus
    assert_eq!(result.observed, 2);
    assert_eq!(result.samples.len(), 100);
    assert!(result.p_value >= 0.0 && result.p_value <= 1.0);

    // gzipped catalog parses to the same regions, so the test is identical
    let catalog_gz = RegionSet::try_from(get_test_path("catalog.bed.gz").as_path()).unwrap();
    let result_gz = run_enrichment_test(&peaks, &catalog_gz, &chrom_sizes, 100, 42).unwrap();
    assert_eq!(result, result_gz);
}

#[rstest]
fn test_phenotype_table_from_files() {
    let peaks = RegionSet::try_from(get_test_path("peaks.bed").as_path()).unwrap();
    let catalog = RegionSet::try_from(get_test_path("catalog.bed").as_path()).unwrap();

    let table = phenotype_overlap_table(&peaks, &catalog);

    // one hit span annotated Height, one annotated Asthma; the chr2 Asthma
    // locus is never hit
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|row| row.hits == 1));
    let labels: Vec<&str> = table.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Asthma", "Height"]);
}
