use clap::{Arg, ArgAction, Command, value_parser};

pub const ENRICH_CMD: &str = "enrich";

pub fn create_enrich_cli() -> Command {
    Command::new(ENRICH_CMD)
        .about("Test whether a set of peaks overlaps a region catalog more than expected by chance")
        .arg_required_else_help(true)
        .arg(
            Arg::new("peaks")
                .long("peaks")
                .short('p')
                .required(true)
                .help("Path to the peaks bed file (binding sites)"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .short('c')
                .required(true)
                .help("Path to the catalog bed file (annotated regions to test against)"),
        )
        .arg(
            Arg::new("chrom-sizes")
                .long("chrom-sizes")
                .short('g')
                .required(true)
                .help("Path to the chrom.sizes file bounding random repositioning"),
        )
        .arg(
            Arg::new("iterations")
                .long("iterations")
                .short('n')
                .default_value("1000")
                .value_parser(value_parser!(u64))
                .help("Number of permutations to draw"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .default_value("42")
                .value_parser(value_parser!(u64))
                .help("Seed for the pseudo-random generator"),
        )
        .arg(
            Arg::new("phenotypes")
                .long("phenotypes")
                .action(ArgAction::SetTrue)
                .help("Also print the phenotype overlap table for the hit catalog loci"),
        )
}
