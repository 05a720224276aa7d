use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionSetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error("Corrupted file. 0 regions found in the file: {0}")]
    EmptyRegionSet(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ChromSizesError {
    #[error("Error parsing chrom sizes line: {0}")]
    LineParseError(String),

    #[error("Corrupted file. 0 chromosomes found in the file: {0}")]
    EmptyChromSizes(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
