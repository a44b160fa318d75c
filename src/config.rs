//! Report configuration

use std::path::{Path, PathBuf};

/// Output file name used when none is given
pub const DEFAULT_OUTPUT: &str = "Super_Bowl_Ultimate_Guide.xlsx";

pub const TROPHY_IMAGE: &str = "superbowl_trophy.png";
pub const ACTION_IMAGE: &str = "superbowl_action.png";
pub const STADIUM_IMAGE: &str = "superbowl_stadium.png";
pub const HALFTIME_IMAGE: &str = "superbowl_halftime.png";

/// Where to write the workbook and where to look for optional artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    /// Directory holding the optional images. Missing files are skipped.
    pub asset_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            asset_dir: PathBuf::from("."),
        }
    }
}

impl ReportConfig {
    pub fn new(output_path: impl Into<PathBuf>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            asset_dir: asset_dir.into(),
        }
    }

    /// Full path of an asset file name
    pub fn asset(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.output_path(), Path::new(DEFAULT_OUTPUT));
        assert_eq!(config.asset(TROPHY_IMAGE), Path::new(".").join(TROPHY_IMAGE));
    }

    #[test]
    fn test_asset_dir() {
        let config = ReportConfig::new("out.xlsx", "/srv/art");
        assert_eq!(
            config.asset(HALFTIME_IMAGE),
            PathBuf::from("/srv/art/superbowl_halftime.png")
        );
    }
}
