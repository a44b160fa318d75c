//! Single-game spotlight for the latest Super Bowl: matchup blocks, MVP bar,
//! game highlights and the line score, on a navy band.

use super::{header_style, section_title};
use crate::config::{ReportConfig, ACTION_IMAGE, STADIUM_IMAGE};
use crate::data::{
    latest_game, spotlight_date, SPOTLIGHT_HIGHLIGHTS, SPOTLIGHT_LINE_SCORE,
    SPOTLIGHT_LOCATION, SPOTLIGHT_MVP_LINE,
};
use crate::error::Result;
use crate::layout::{
    accent_bar, apply_theme, banner, merge, paint_background, set_column_widths,
    set_row_heights, stripe, write_cell, BannerStyle, PrintSetup,
};
use crate::media::try_embed;
use crate::parse::cell_name;
use crate::style::{centered, font, left, CellStyle};
use crate::types::{CellValue, ImageSize, EAGLES_GREEN, GOLD, MUTED, NAVY, SLATE, WHITE};
use indexmap::IndexMap;
use rust_xlsxwriter::Worksheet;
use tracing::debug;

pub const NAME: &str = "Super Bowl LIX";

const COLS: u16 = 7;
const LAST_COL: u16 = COLS - 1;
const BAND_ROWS: u32 = 45;

const MATCHUP_ROW: u32 = 5;
const HIGHLIGHTS_ROW: u32 = 10;

const PHOTO_SIZE: ImageSize = ImageSize::new(340, 220);
/// Rows between the top of the action shot and the stadium shot
const PHOTO_SPACING: u32 = 14;

/// Winner block in B:C, "VS" in D, loser block in E:F
fn matchup(worksheet: &mut Worksheet) -> Result<()> {
    let game = latest_game();
    let [winner_line, loser_line] = SPOTLIGHT_LINE_SCORE;

    let team_style = |color| {
        CellStyle::new()
            .fill(color)
            .font(font(14.0, true, WHITE, false))
            .align(centered())
    };
    merge(
        worksheet,
        MATCHUP_ROW,
        1,
        MATCHUP_ROW,
        2,
        game.winner.to_uppercase(),
        &team_style(winner_line.color),
    )?;
    write_cell(
        worksheet,
        MATCHUP_ROW,
        3,
        "VS",
        &CellStyle::new()
            .fill(NAVY)
            .font(font(10.0, true, GOLD, false))
            .align(centered()),
    )?;
    merge(
        worksheet,
        MATCHUP_ROW,
        4,
        MATCHUP_ROW,
        5,
        game.loser.to_uppercase(),
        &team_style(loser_line.color),
    )?;
    worksheet.set_row_height(MATCHUP_ROW, 34.0)?;

    let score_row = MATCHUP_ROW + 1;
    let score_style = |fill, color| {
        CellStyle::new()
            .fill(fill)
            .font(font(40.0, true, color, false))
            .align(centered())
    };
    merge(
        worksheet,
        score_row,
        1,
        score_row,
        2,
        game.winner_score,
        &score_style(winner_line.color, GOLD),
    )?;
    write_cell(
        worksheet,
        score_row,
        3,
        "\u{2014}",
        &CellStyle::new()
            .fill(NAVY)
            .font(font(24.0, true, MUTED, false))
            .align(centered()),
    )?;
    merge(
        worksheet,
        score_row,
        4,
        score_row,
        5,
        game.loser_score,
        &score_style(loser_line.color, WHITE),
    )?;
    worksheet.set_row_height(score_row, 58.0)?;
    Ok(())
}

/// Quarter-by-quarter table starting at `top`
fn line_score(worksheet: &mut Worksheet, top: u32) -> Result<()> {
    section_title(worksheet, top, 1, 5, "SCORING BY QUARTER", SLATE, 11.0, 26.0)?;

    let headers = ["Team", "Q1", "Q2", "Q3", "Q4", "FINAL"];
    for (col, header) in (1u16..).zip(headers) {
        write_cell(worksheet, top + 1, col, header, &header_style(9.0, centered()))?;
    }
    worksheet.set_row_height(top + 1, 24.0)?;

    for (offset, line) in (2u32..).zip(SPOTLIGHT_LINE_SCORE.iter()) {
        let style = CellStyle::new()
            .fill(line.color)
            .font(font(11.0, true, WHITE, false))
            .align(centered());
        let values = std::iter::once(CellValue::from(line.team))
            .chain(line.quarters.iter().map(|q| CellValue::from(*q)))
            .chain(std::iter::once(CellValue::from(line.total)));
        for (col, value) in (1u16..).zip(values) {
            write_cell(worksheet, top + offset, col, value, &style)?;
        }
        worksheet.set_row_height(top + offset, 28.0)?;
    }
    Ok(())
}

pub fn build(worksheet: &mut Worksheet, config: &ReportConfig) -> Result<usize> {
    apply_theme(worksheet, NAME, EAGLES_GREEN)?;
    set_column_widths(
        worksheet,
        &IndexMap::from([
            ("A", 2.0),
            ("B", 16.0),
            ("C", 16.0),
            ("D", 8.0),
            ("E", 16.0),
            ("F", 16.0),
            ("G", 2.0),
        ]),
    )?;

    paint_background(worksheet, 0, BAND_ROWS - 1, 0, LAST_COL, NAVY)?;
    set_row_heights(worksheet, 0, BAND_ROWS - 1, 14.0)?;

    accent_bar(worksheet, 0, COLS, GOLD)?;
    let game = latest_game();
    banner(
        worksheet,
        1,
        0,
        LAST_COL,
        &format!(
            "SUPER BOWL {}  |  {}",
            game.id,
            spotlight_date().format("%B %-d, %Y").to_string().to_uppercase()
        ),
        &BannerStyle::new(NAVY, WHITE, 20.0, 44.0),
    )?;
    banner(
        worksheet,
        2,
        0,
        LAST_COL,
        SPOTLIGHT_LOCATION,
        &BannerStyle::new(NAVY, GOLD, 10.0, 22.0).regular(),
    )?;
    accent_bar(worksheet, 3, COLS, GOLD)?;
    worksheet.set_row_height(4, 10.0)?;

    matchup(worksheet)?;

    accent_bar(worksheet, MATCHUP_ROW + 2, COLS, GOLD)?;
    banner(
        worksheet,
        MATCHUP_ROW + 3,
        0,
        LAST_COL,
        SPOTLIGHT_MVP_LINE,
        &BannerStyle::new(SLATE, GOLD, 10.0, 28.0),
    )?;
    worksheet.set_row_height(MATCHUP_ROW + 4, 10.0)?;

    section_title(
        worksheet,
        HIGHLIGHTS_ROW,
        1,
        5,
        "GAME HIGHLIGHTS",
        SLATE,
        11.0,
        26.0,
    )?;
    for (idx, highlight) in SPOTLIGHT_HIGHLIGHTS.iter().enumerate() {
        let row = HIGHLIGHTS_ROW + 1 + idx as u32;
        let style = CellStyle::new()
            .fill(stripe(idx, false))
            .font(super::body_font())
            .align(left());
        merge(
            worksheet,
            row,
            1,
            row,
            5,
            format!("  \u{25B8}  {}", highlight),
            &style,
        )?;
        worksheet.set_row_height(row, 22.0)?;
    }

    let quarters_top = HIGHLIGHTS_ROW + 1 + SPOTLIGHT_HIGHLIGHTS.len() as u32 + 1;
    worksheet.set_row_height(quarters_top - 1, 10.0)?;
    line_score(worksheet, quarters_top)?;

    let photo_row = quarters_top + 5;
    worksheet.set_row_height(quarters_top + 4, 10.0)?;
    let mut embedded = 0;
    for (image, row) in [
        (ACTION_IMAGE, photo_row),
        (STADIUM_IMAGE, photo_row + PHOTO_SPACING),
    ] {
        if try_embed(
            worksheet,
            &config.asset(image),
            &cell_name(row, 1),
            PHOTO_SIZE,
        ) {
            embedded += 1;
        }
    }

    PrintSetup::portrait().apply(worksheet);
    debug!(sheet = NAME, embedded, "spotlight built");
    Ok(embedded)
}
