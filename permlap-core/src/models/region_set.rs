use std::collections::HashSet;
use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::Region;
use crate::utils::get_dynamic_reader;

///
/// RegionSet struct, the representation of an interval region set file,
/// such as a bed file.
///
#[derive(Clone, Debug)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub path: Option<PathBuf>,
}

pub struct RegionSetIterator<'a> {
    region_set: &'a RegionSet,
    index: usize,
}

impl TryFrom<&Path> for RegionSet {
    type Error = RegionSetError;

    ///
    /// Create a new [RegionSet] from a bed or bed.gz file.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk.
    fn try_from(value: &Path) -> Result<Self, RegionSetError> {
        let reader = get_dynamic_reader(value)
            .map_err(|_| RegionSetError::FileReadError(value.display().to_string()))?;

        let mut new_regions: Vec<Region> = Vec::new();
        let mut first_line: bool = true;

        for line in reader.lines() {
            let string_line = line?;

            if string_line.starts_with("browser")
                | string_line.starts_with("track")
                | string_line.starts_with("#")
            {
                first_line = false;
                continue;
            }

            let parts: Vec<&str> = string_line.split('\t').collect();

            // Handling column headers like `chr start end etc` without #
            if first_line {
                first_line = false;
                if parts.len() >= 3 && parts[1].parse::<u32>().is_err() {
                    continue;
                }
            }

            if parts.len() < 3 {
                return Err(RegionSetError::RegionParseError(format!(
                    "line has fewer than 3 fields: {:?}",
                    string_line
                )));
            }

            let start: u32 = parts[1].parse().map_err(|_| {
                RegionSetError::RegionParseError(format!(
                    "error in parsing start position: {:?}",
                    parts
                ))
            })?;
            let end: u32 = parts[2].parse().map_err(|_| {
                RegionSetError::RegionParseError(format!(
                    "error in parsing end position: {:?}",
                    parts
                ))
            })?;

            // half-open coordinates: end must lie strictly after start
            if end <= start {
                return Err(RegionSetError::RegionParseError(format!(
                    "end position is not after start position: {:?}",
                    parts
                )));
            }

            new_regions.push(Region {
                chr: parts[0].to_owned(),
                start,
                end,
                rest: Some(parts[3..].join("\t")).filter(|s| !s.is_empty()),
            });
        }

        if new_regions.is_empty() {
            return Err(RegionSetError::EmptyRegionSet(value.display().to_string()));
        }

        let mut rs = RegionSet {
            regions: new_regions,
            path: Some(value.to_owned()),
        };
        rs.sort();

        Ok(rs)
    }
}

impl TryFrom<&str> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, RegionSetError> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: PathBuf) -> Result<Self, RegionSetError> {
        RegionSet::try_from(value.as_path())
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet {
            regions,
            path: None,
        }
    }
}

impl<'a> Iterator for RegionSetIterator<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.region_set.regions.len() {
            let region = &self.region_set.regions[self.index];
            self.index += 1;
            Some(region)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = RegionSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RegionSetIterator {
            region_set: self,
            index: 0,
        }
    }
}

impl RegionSet {
    ///
    /// Sort regions based on the first 3 columns.
    /// Sorting is happening inside the object,
    /// where the original order will be overwritten
    ///
    pub fn sort(&mut self) {
        self.regions
            .sort_by(|a, b| a.chr.cmp(&b.chr).then_with(|| a.start.cmp(&b.start)));
    }

    ///
    /// Is the RegionSet empty?
    ///
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    ///
    /// Get number of regions in RegionSet
    ///
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    ///
    /// Iterate unique chromosomes located in RegionSet
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &String> {
        let unique_chroms: HashSet<&String> = self.regions.iter().map(|r| &r.chr).collect();
        unique_chroms.into_iter()
    }

    ///
    /// Calculate all region widths
    ///
    pub fn region_widths(&self) -> Vec<u32> {
        self.regions.iter().map(|r| r.width()).collect()
    }

    ///
    /// Merge overlapping same-chromosome regions into maximal non-overlapping
    /// spans.
    ///
    /// Duplicate and overlapping records (the same locus reported under
    /// multiple studies or phenotypes) collapse into a single span, so each
    /// genomic locus is represented once. Metadata of merged records is
    /// dropped. With half-open coordinates, abutting spans
    /// (`a.end == b.start`) stay separate.
    ///
    /// Reducing an already-reduced set returns the same set.
    ///
    pub fn reduce(&self) -> RegionSet {
        let mut sorted = self.regions.clone();
        sorted.sort_by(|a, b| a.chr.cmp(&b.chr).then_with(|| a.start.cmp(&b.start)));

        let mut merged: Vec<Region> = Vec::with_capacity(sorted.len());
        for region in sorted {
            match merged.last_mut() {
                Some(last) if last.overlaps(&region) => {
                    last.end = last.end.max(region.end);
                }
                _ => merged.push(Region {
                    rest: None,
                    ..region
                }),
            }
        }

        RegionSet {
            regions: merged,
            path: None,
        }
    }
}

impl Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionSet with {} regions.", self.len())
    }
}
