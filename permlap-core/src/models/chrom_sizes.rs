use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::ChromSizesError;

///
/// Per-chromosome sequence lengths, as read from a UCSC-style two-column
/// `chrom.sizes` file.
///
/// Bounds every random repositioning of a region: a region may only be
/// placed so that it lies entirely within `[0, size)` of its chromosome.
///
#[derive(Debug, Clone, Default)]
pub struct ChromSizes {
    sizes: HashMap<String, u32>,
}

impl TryFrom<&Path> for ChromSizes {
    type Error = ChromSizesError;

    ///
    /// Create a new [ChromSizes] from a chrom.sizes file on disk.
    ///
    /// Each non-empty line must hold a chromosome name and its length,
    /// whitespace-separated. A malformed line is an error, never skipped.
    ///
    fn try_from(value: &Path) -> Result<Self, ChromSizesError> {
        let file = File::open(value)?;
        let reader = BufReader::new(file);

        let mut sizes: HashMap<String, u32> = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let chr = parts
                .next()
                .ok_or_else(|| ChromSizesError::LineParseError(line.clone()))?;
            let size = parts
                .next()
                .and_then(|s| s.parse::<u32>().ok())
                .ok_or_else(|| ChromSizesError::LineParseError(line.clone()))?;

            sizes.insert(chr.to_string(), size);
        }

        if sizes.is_empty() {
            return Err(ChromSizesError::EmptyChromSizes(
                value.display().to_string(),
            ));
        }

        Ok(ChromSizes { sizes })
    }
}

impl TryFrom<&str> for ChromSizes {
    type Error = ChromSizesError;

    fn try_from(value: &str) -> Result<Self, ChromSizesError> {
        ChromSizes::try_from(Path::new(value))
    }
}

impl From<HashMap<String, u32>> for ChromSizes {
    fn from(sizes: HashMap<String, u32>) -> Self {
        ChromSizes { sizes }
    }
}

impl ChromSizes {
    ///
    /// Get the length of a chromosome, if known.
    ///
    pub fn get(&self, chr: &str) -> Option<u32> {
        self.sizes.get(chr).copied()
    }

    pub fn contains(&self, chr: &str) -> bool {
        self.sizes.contains_key(chr)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;

    #[rstest]
    fn test_from_hashmap() {
        let sizes = ChromSizes::from(HashMap::from([
            ("chr1".to_string(), 248_956_422u32),
            ("chr2".to_string(), 242_193_529u32),
        ]));

        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.get("chr1"), Some(248_956_422));
        assert!(sizes.contains("chr2"));
        assert_eq!(sizes.get("chrX"), None);
    }

    #[rstest]
    fn test_from_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("dummy.chrom.sizes");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "chr1\t1000").unwrap();
        writeln!(file, "chr2\t500").unwrap();

        let sizes = ChromSizes::try_from(path.as_path()).unwrap();
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.get("chr2"), Some(500));
    }

    #[rstest]
    fn test_malformed_line_is_an_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bad.chrom.sizes");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "chr1\tnot-a-number").unwrap();

        let result = ChromSizes::try_from(path.as_path());
        assert!(matches!(
            result,
            Err(ChromSizesError::LineParseError(_))
        ));
    }

    #[rstest]
    fn test_empty_file_is_an_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.chrom.sizes");
        File::create(&path).unwrap();

        let result = ChromSizes::try_from(path.as_path());
        assert!(matches!(result, Err(ChromSizesError::EmptyChromSizes(_))));
    }
}
