mod enrich;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "permlap";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Permutation-based overlap enrichment testing for genomic region sets.")
        .subcommand_required(true)
        .subcommand(enrich::cli::create_enrich_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ENRICH
        //
        Some((enrich::cli::ENRICH_CMD, matches)) => {
            enrich::handlers::run_enrich(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
