#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// The two page regions the loader writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Stats,
    Projects,
}

impl Region {
    /// Stable element id of the region on the page.
    pub fn id(self) -> &'static str {
        match self {
            Region::Stats => "github-stats",
            Region::Projects => "projects-container",
        }
    }
}

/// Destination for rendered markup. Each call replaces the region wholesale.
pub trait RegionSink {
    fn replace(&mut self, region: Region, markup: &str) -> Result<()>;
}

/// Writes each region to `<dir>/<region-id>.html`.
pub struct DirectoryRegions {
    dir: PathBuf,
}

impl DirectoryRegions {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, region: Region) -> PathBuf {
        self.dir.join(format!("{}.html", region.id()))
    }
}

impl RegionSink for DirectoryRegions {
    fn replace(&mut self, region: Region, markup: &str) -> Result<()> {
        let path = self.path_for(region);
        fs::write(&path, markup)
            .with_context(|| format!("Failed to write region {}", path.display()))?;
        debug!(region = region.id(), path = %path.display(), "Region replaced");
        Ok(())
    }
}

/// Keeps the current markup per region plus the order of writes.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryRegions {
    current: HashMap<Region, String>,
    writes: Vec<Region>,
}

#[cfg(test)]
impl MemoryRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> Option<&str> {
        self.current.get(&region).map(String::as_str)
    }

    pub fn writes(&self) -> &[Region] {
        &self.writes
    }
}

#[cfg(test)]
impl RegionSink for MemoryRegions {
    fn replace(&mut self, region: Region, markup: &str) -> Result<()> {
        self.current.insert(region, markup.to_string());
        self.writes.push(region);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_regions_replace_rather_than_append() {
        let mut regions = MemoryRegions::new();
        regions.replace(Region::Projects, "first").unwrap();
        regions.replace(Region::Projects, "second").unwrap();

        assert_eq!(regions.get(Region::Projects), Some("second"));
        assert_eq!(regions.get(Region::Stats), None);
        assert_eq!(regions.writes(), [Region::Projects, Region::Projects]);
    }

    #[test]
    fn directory_regions_overwrite_files() {
        let temp = TempDir::new().unwrap();
        let mut regions = DirectoryRegions::new(temp.path()).unwrap();

        regions.replace(Region::Stats, "old content that is longer").unwrap();
        regions.replace(Region::Stats, "new").unwrap();

        let written = fs::read_to_string(temp.path().join("github-stats.html")).unwrap();
        assert_eq!(written, "new");
    }

    #[test]
    fn directory_regions_create_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("site").join("fragments");
        let mut regions = DirectoryRegions::new(&nested).unwrap();

        regions.replace(Region::Projects, "cards").unwrap();

        assert_eq!(
            regions.path_for(Region::Projects),
            nested.join("projects-container.html")
        );
        assert_eq!(
            fs::read_to_string(nested.join("projects-container.html")).unwrap(),
            "cards"
        );
    }

    #[test]
    fn region_ids_are_stable() {
        assert_eq!(Region::Stats.id(), "github-stats");
        assert_eq!(Region::Projects.id(), "projects-container");
    }
}
