use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use permlap_core::{ChromSizes, RegionSet};
use permlap_enrich::{phenotype_overlap_table, run_enrichment_test_with_observer};

pub fn run_enrich(matches: &ArgMatches) -> Result<()> {
    let peaks_path = matches
        .get_one::<String>("peaks")
        .expect("A path to a peaks bed file is required.");
    let catalog_path = matches
        .get_one::<String>("catalog")
        .expect("A path to a catalog bed file is required.");
    let chrom_sizes_path = matches
        .get_one::<String>("chrom-sizes")
        .expect("A path to a chrom.sizes file is required.");

    let iterations = *matches.get_one::<u64>("iterations").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();

    let peaks = RegionSet::try_from(Path::new(peaks_path))?;
    let catalog = RegionSet::try_from(Path::new(catalog_path))?;
    let chrom_sizes = ChromSizes::try_from(Path::new(chrom_sizes_path))?;

    println!(
        "Testing {} peaks on {} chromosomes against {} catalog regions",
        peaks.len(),
        peaks.iter_chroms().count(),
        catalog.len()
    );

    let pb = ProgressBar::new(iterations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} permutations")?,
    );

    let result = run_enrichment_test_with_observer(
        &peaks,
        &catalog,
        &chrom_sizes,
        iterations,
        seed,
        |_| pb.inc(1),
    )?;
    pb.finish_and_clear();

    println!("Observed overlaps: {}", result.observed);
    println!("Permutations: {}", iterations);
    println!("Empirical p-value: {}", result.p_value);

    if matches.get_flag("phenotypes") {
        let table = phenotype_overlap_table(&peaks, &catalog);
        if table.is_empty() {
            println!("No catalog loci were hit; phenotype table is empty.");
        } else {
            println!("\nPhenotype\tHits");
            for row in &table {
                println!("{}\t{}", row.label, row.hits);
            }
        }
    }

    Ok(())
}
