//! superbowl-guide - the Super Bowl Ultimate Guide as a styled Excel workbook
//!
//! The library assembles six worksheets from embedded data tables:
//! - a cover with headline numbers and an optional trophy image
//! - the full game history
//! - statistics tables with column and line charts
//! - a spotlight on the latest game
//! - economic facts
//! - halftime shows with a genre pie chart
//!
//! Everything is fail-fast except image embedding, which skips missing or
//! unreadable files and keeps going.
//!
//! ```no_run
//! use superbowl_guide::{write_report, ReportConfig};
//!
//! let summary = write_report(&ReportConfig::new("guide.xlsx", "assets"))?;
//! println!("{} sheets", summary.sheets);
//! # Ok::<(), superbowl_guide::ReportError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod hook;
pub mod layout;
pub mod media;
pub mod parse;
pub mod report;
pub mod sheets;
pub mod stats;
pub mod style;
pub mod types;

pub use config::ReportConfig;
pub use error::{MediaError, ReportError, Result};
pub use export::export_views;
pub use report::{build_workbook, render_to_buffer, write_report, write_report_with_hook, ReportSummary};
pub use sheets::SHEET_NAMES;
