//! superbowl-guide CLI - renders the Super Bowl Ultimate Guide workbook
//!
//! Usage: superbowl-guide [--output guide.xlsx] [--assets ./art] [--open]

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use superbowl_guide::config::DEFAULT_OUTPUT;
use superbowl_guide::hook::{DesktopRelaunch, NoopHook, PostBuildHook, DEFAULT_APP};
use superbowl_guide::{export_views, write_report_with_hook, ReportConfig, ReportSummary};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "superbowl-guide")]
#[command(version)]
#[command(about = "Render the Super Bowl Ultimate Guide as a styled XLSX workbook")]
#[command(
    long_about = "Writes a six-sheet workbook:\n\
    - SUPER BOWL: cover with headline numbers\n\
    - History: every game since 1967\n\
    - Statistics: championships, scoring by decade, blowouts and nail-biters\n\
    - Super Bowl LIX: spotlight on the latest game\n\
    - Economic Impact: the business side\n\
    - Halftime Shows: performers and a genre breakdown\n\
    Images are picked up from the asset directory when present."
)]
struct Args {
    /// Output XLSX file path
    #[arg(short, long, env = "SUPERBOWL_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory holding the optional superbowl_*.png artwork
    #[arg(short, long, env = "SUPERBOWL_ASSETS", default_value = ".")]
    assets: PathBuf,

    /// Quit and reopen the spreadsheet app on the new file (macOS)
    #[arg(long)]
    open: bool,

    /// Application used by --open
    #[arg(long, default_value = DEFAULT_APP)]
    app: String,

    /// Also export the derived tables as CSV into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Show progress information
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> superbowl_guide::Result<ReportSummary> {
    let config = ReportConfig::new(&args.output, &args.assets);
    let hook: Box<dyn PostBuildHook> = if args.open {
        Box::new(DesktopRelaunch::new(args.app.as_str()))
    } else {
        Box::new(NoopHook)
    };
    let summary = write_report_with_hook(&config, hook.as_ref())?;

    if let Some(dir) = &args.csv_dir {
        let files = export_views(dir)?;
        info!(dir = %dir.display(), files = files.len(), "exported csv views");
    }
    Ok(summary)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let start = Instant::now();

    match run(&args) {
        Ok(summary) => {
            info!(
                sheets = summary.sheets,
                images = summary.images_embedded,
                "built in {:.2}s",
                start.elapsed().as_secs_f64()
            );
            println!("OK {} {}", summary.output_path.display(), summary.sheets);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
