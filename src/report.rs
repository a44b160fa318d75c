//! Document assembly: six sheets in fixed tab order, then save

use crate::config::ReportConfig;
use crate::data::{ECONOMIC_FACTS, HALFTIME_SHOWS, SUPER_BOWLS};
use crate::error::Result;
use crate::hook::PostBuildHook;
use crate::sheets::{cover, economy, halftime, history, spotlight, statistics, SHEET_NAMES};
use rust_xlsxwriter::Workbook;
use std::path::PathBuf;
use tracing::{info, warn};

/// What a finished build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub sheets: usize,
    pub images_embedded: usize,
}

/// Build every sheet into a new workbook.
///
/// Returns the workbook and the number of images that were embedded.
pub fn build_workbook(config: &ReportConfig) -> Result<(Workbook, usize)> {
    let mut workbook = Workbook::new();
    let mut images = 0;

    info!("[1/6] {}", cover::NAME);
    images += cover::build(workbook.add_worksheet(), config)?;

    info!("[2/6] {}", history::NAME);
    images += history::build(workbook.add_worksheet(), SUPER_BOWLS)?;

    info!("[3/6] {}", statistics::NAME);
    images += statistics::build(workbook.add_worksheet(), SUPER_BOWLS)?;

    info!("[4/6] {}", spotlight::NAME);
    images += spotlight::build(workbook.add_worksheet(), config)?;

    info!("[5/6] {}", economy::NAME);
    images += economy::build(workbook.add_worksheet(), ECONOMIC_FACTS)?;

    info!("[6/6] {}", halftime::NAME);
    images += halftime::build(workbook.add_worksheet(), HALFTIME_SHOWS, config)?;

    Ok((workbook, images))
}

/// Build the workbook and serialize it to memory
pub fn render_to_buffer(config: &ReportConfig) -> Result<Vec<u8>> {
    let (mut workbook, _) = build_workbook(config)?;
    Ok(workbook.save_to_buffer()?)
}

/// Build the workbook and save it to `config.output_path`
pub fn write_report(config: &ReportConfig) -> Result<ReportSummary> {
    let (mut workbook, images_embedded) = build_workbook(config)?;

    info!(path = %config.output_path.display(), "saving workbook");
    workbook.save(&config.output_path)?;

    Ok(ReportSummary {
        output_path: config.output_path.clone(),
        sheets: SHEET_NAMES.len(),
        images_embedded,
    })
}

/// Save, then hand the file to `hook`. A failing hook is logged and does not
/// turn a successful save into an error.
pub fn write_report_with_hook(
    config: &ReportConfig,
    hook: &dyn PostBuildHook,
) -> Result<ReportSummary> {
    let summary = write_report(config)?;
    if let Err(e) = hook.after_save(&summary.output_path) {
        warn!("{}", e);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use std::cell::RefCell;
    use std::path::Path;

    struct Recorder(RefCell<Vec<PathBuf>>);

    impl PostBuildHook for Recorder {
        fn after_save(&self, path: &Path) -> Result<()> {
            self.0.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct Failing;

    impl PostBuildHook for Failing {
        fn after_save(&self, _path: &Path) -> Result<()> {
            Err(ReportError::Hook("app not installed".to_string()))
        }
    }

    #[test]
    fn test_hook_sees_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path().join("guide.xlsx"), dir.path());
        let recorder = Recorder(RefCell::new(Vec::new()));

        let summary = write_report_with_hook(&config, &recorder).unwrap();
        assert_eq!(recorder.0.borrow().as_slice(), &[summary.output_path.clone()]);
        assert!(summary.output_path.is_file());
    }

    #[test]
    fn test_failing_hook_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path().join("guide.xlsx"), dir.path());
        let summary = write_report_with_hook(&config, &Failing).unwrap();
        assert_eq!(summary.sheets, 6);
    }
}
