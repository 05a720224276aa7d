use thiserror::Error;

use permlap_core::RegionSetError;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("{0} region set is empty")]
    EmptyRegionSet(&'static str),

    #[error("iterations must be at least 1, got {0}")]
    InvalidIterations(u64),

    #[error("region '{0}' has an end position at or before its start")]
    InvalidCoordinates(String),

    #[error("chromosome '{0}' is missing from the chrom sizes")]
    MissingChromosome(String),

    #[error("region on {chr} is {width} bp wide but the chromosome is only {size} bp")]
    RegionTooLong { chr: String, width: u32, size: u32 },

    #[error(transparent)]
    Core(#[from] RegionSetError),
}
