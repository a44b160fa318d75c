//! Post-build hooks, run once the workbook is on disk

use crate::error::Result;
use std::path::Path;
use std::time::Duration;
use tracing::info;

#[cfg(target_os = "macos")]
use crate::error::ReportError;
#[cfg(target_os = "macos")]
use std::process::Command;
#[cfg(target_os = "macos")]
use tracing::debug;

/// Spreadsheet application closed and reopened by [`DesktopRelaunch`]
pub const DEFAULT_APP: &str = "Microsoft Excel";

/// Pause between quitting the application and opening the new file
pub const DEFAULT_RELAUNCH_DELAY: Duration = Duration::from_millis(1500);

/// Something to do with the saved report. Hooks never alter the file.
pub trait PostBuildHook {
    fn after_save(&self, path: &Path) -> Result<()>;
}

/// Does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl PostBuildHook for NoopHook {
    fn after_save(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Quit the desktop spreadsheet app without saving, wait, then open the
/// fresh report in it. Only acts on macOS; elsewhere it logs and returns.
#[derive(Debug, Clone)]
pub struct DesktopRelaunch {
    pub app_name: String,
    pub delay: Duration,
}

impl Default for DesktopRelaunch {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP.to_string(),
            delay: DEFAULT_RELAUNCH_DELAY,
        }
    }
}

impl DesktopRelaunch {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    /// AppleScript that quits the app, discarding unsaved changes
    pub fn quit_script(&self) -> String {
        format!(
            "tell application \"{}\" to quit saving no",
            self.app_name.replace('"', "")
        )
    }
}

impl PostBuildHook for DesktopRelaunch {
    #[cfg(target_os = "macos")]
    fn after_save(&self, path: &Path) -> Result<()> {
        // A quit failure usually means the app was not running
        let quit = Command::new("osascript")
            .args(["-e", &self.quit_script()])
            .output()
            .map_err(|e| ReportError::Hook(format!("osascript: {}", e)))?;
        debug!(status = %quit.status, app = %self.app_name, "requested quit");

        std::thread::sleep(self.delay);

        let status = Command::new("open")
            .arg("-a")
            .arg(&self.app_name)
            .arg(path)
            .status()
            .map_err(|e| ReportError::Hook(format!("open: {}", e)))?;
        if !status.success() {
            return Err(ReportError::Hook(format!(
                "open exited with {} for {}",
                status,
                path.display()
            )));
        }
        info!(path = %path.display(), app = %self.app_name, "opened report");
        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    fn after_save(&self, path: &Path) -> Result<()> {
        info!(
            path = %path.display(),
            app = %self.app_name,
            "desktop relaunch is only supported on macOS, skipping"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_hook() {
        assert!(NoopHook.after_save(Path::new("missing.xlsx")).is_ok());
    }

    #[test]
    fn test_quit_script() {
        let hook = DesktopRelaunch::default();
        assert_eq!(
            hook.quit_script(),
            "tell application \"Microsoft Excel\" to quit saving no"
        );
        assert_eq!(
            DesktopRelaunch::new("Num\"bers").quit_script(),
            "tell application \"Numbers\" to quit saving no"
        );
        assert_eq!(hook.delay, Duration::from_millis(1500));
    }
}
