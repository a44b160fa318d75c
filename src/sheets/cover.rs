//! Cover page: full navy band, title block, headline panels and the latest
//! champion.

use super::{kpi_panel, PanelStyle};
use crate::config::{ReportConfig, TROPHY_IMAGE};
use crate::data::{latest_game, spotlight_date, year_span, COVER_KPIS};
use crate::error::Result;
use crate::layout::{
    accent_bar, apply_theme, banner, merge, paint_background, set_column_widths,
    set_row_heights, BannerStyle, PrintSetup,
};
use crate::media::try_embed;
use crate::style::{centered, font, CellStyle};
use crate::types::{ImageSize, EAGLES_GREEN, GOLD, MUTED, NAVY, SLATE, WHITE};
use indexmap::IndexMap;
use rust_xlsxwriter::Worksheet;
use tracing::debug;

pub const NAME: &str = "SUPER BOWL";

/// Columns B..=E carry content, A and F are margins
const COLS: u16 = 6;
const BAND_ROWS: u32 = 41;

/// (first_col, last_col) of each headline panel
const KPI_SPANS: [(u16, u16); 3] = [(1, 1), (2, 2), (3, 4)];

const TROPHY_ANCHOR: &str = "B23";
const TROPHY_SIZE: ImageSize = ImageSize::new(300, 225);

pub fn build(worksheet: &mut Worksheet, config: &ReportConfig) -> Result<usize> {
    apply_theme(worksheet, NAME, NAVY)?;
    set_column_widths(
        worksheet,
        &IndexMap::from([
            ("A", 3.0),
            ("B", 18.0),
            ("C", 18.0),
            ("D", 18.0),
            ("E", 18.0),
            ("F", 3.0),
        ]),
    )?;

    paint_background(worksheet, 0, BAND_ROWS - 1, 0, COLS - 1, NAVY)?;
    set_row_heights(worksheet, 0, BAND_ROWS - 1, 14.0)?;

    accent_bar(worksheet, 0, COLS, GOLD)?;
    set_row_heights(worksheet, 1, 3, 10.0)?;

    // Two-row title
    let title = CellStyle::new()
        .fill(NAVY)
        .font(font(44.0, true, WHITE, false))
        .align(centered());
    merge(worksheet, 4, 1, 5, 4, "SUPER BOWL", &title)?;
    set_row_heights(worksheet, 4, 5, 40.0)?;

    let (first_year, last_year) = year_span();
    banner(
        worksheet,
        6,
        1,
        4,
        &format!("THE ULTIMATE GUIDE  |  {} - {}", first_year, last_year),
        &BannerStyle::new(NAVY, GOLD, 13.0, 26.0).regular(),
    )?;

    accent_bar(worksheet, 7, COLS, GOLD)?;
    worksheet.set_row_height(8, 12.0)?;

    let panel = PanelStyle {
        fill: SLATE,
        rail: GOLD,
        value_size: 28.0,
        label_size: 8.0,
        value_height: 44.0,
        label_height: 22.0,
    };
    for (kpi, (first_col, last_col)) in COVER_KPIS.iter().zip(KPI_SPANS) {
        kpi_panel(worksheet, 9, first_col, last_col, kpi, &panel)?;
    }

    worksheet.set_row_height(11, 14.0)?;
    accent_bar(worksheet, 12, COLS, GOLD)?;
    worksheet.set_row_height(13, 10.0)?;

    let game = latest_game();
    banner(
        worksheet,
        14,
        1,
        4,
        &format!("SUPER BOWL {} CHAMPION", game.id),
        &BannerStyle::new(NAVY, MUTED, 10.0, 20.0),
    )?;
    banner(
        worksheet,
        15,
        1,
        4,
        &format!(
            "{}  {} - {}  {}",
            game.winner.to_uppercase(),
            game.winner_score,
            game.loser_score,
            game.loser.to_uppercase()
        ),
        &BannerStyle::new(NAVY, EAGLES_GREEN, 18.0, 36.0),
    )?;

    let stadium = game.venue.split(',').next().unwrap_or(game.venue).trim();
    banner(
        worksheet,
        16,
        1,
        4,
        &format!(
            "MVP: {}  |  {}  |  {}",
            game.mvp,
            stadium,
            spotlight_date().format("%b %-d, %Y")
        ),
        &BannerStyle::new(NAVY, GOLD, 9.0, 20.0).regular(),
    )?;

    worksheet.set_row_height(17, 10.0)?;
    accent_bar(worksheet, 18, COLS, GOLD)?;
    worksheet.set_row_height(19, 8.0)?;

    banner(
        worksheet,
        20,
        1,
        4,
        &super::SHEET_NAMES[1..].join("  |  "),
        &BannerStyle::new(NAVY, MUTED, 8.0, 16.0).regular(),
    )?;
    worksheet.set_row_height(21, 6.0)?;

    let embedded = try_embed(
        worksheet,
        &config.asset(TROPHY_IMAGE),
        TROPHY_ANCHOR,
        TROPHY_SIZE,
    );

    PrintSetup::portrait().apply(worksheet);
    debug!(sheet = NAME, embedded, "cover built");
    Ok(usize::from(embedded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path().join("out.xlsx"), dir.path());
        let mut worksheet = Worksheet::new();
        assert_eq!(build(&mut worksheet, &config).unwrap(), 0);
        assert_eq!(worksheet.name(), NAME);
    }
}
