use std::fmt::{self, Display};

///
/// Region struct, representation of one genomic interval in a [RegionSet](crate::models::RegionSet).
///
/// Coordinates are half-open: `[start, end)`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    /// Any trailing BED columns, tab-joined. For catalog files this is where
    /// the phenotype label lives.
    pub rest: Option<String>,
}

impl Region {
    ///
    /// Get width of the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get the BED-file string of this Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }

    /// Check whether this region overlaps a half-open query range on the
    /// same chromosome.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.chr == other.chr && self.start < other.end && self.end > other.start
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn region() -> Region {
        Region {
            chr: "chr1".to_string(),
            start: 100,
            end: 200,
            rest: Some("Height".to_string()),
        }
    }

    #[rstest]
    fn test_width(region: Region) {
        assert_eq!(region.width(), 100);
    }

    #[rstest]
    fn test_as_string(region: Region) {
        assert_eq!(region.as_string(), "chr1\t100\t200\tHeight");
    }

    #[rstest]
    fn test_overlaps(region: Region) {
        let other = Region {
            chr: "chr1".to_string(),
            start: 150,
            end: 250,
            rest: None,
        };
        assert!(region.overlaps(&other));

        // half-open: touching at the boundary is not an overlap
        let touching = Region {
            chr: "chr1".to_string(),
            start: 200,
            end: 300,
            rest: None,
        };
        assert!(!region.overlaps(&touching));

        let other_chrom = Region {
            chr: "chr2".to_string(),
            start: 150,
            end: 250,
            rest: None,
        };
        assert!(!region.overlaps(&other_chrom));
    }
}
