//! Complete results table, one row per game

use super::{body_font, ruled_header_style};
use crate::error::Result;
use crate::layout::{
    apply_theme, banner, set_column_widths, write_cell, BannerStyle, PrintSetup,
};
use crate::style::{centered, font, left, CellStyle};
use crate::types::{CellValue, GameRecord, EAGLES_GREEN, GOLD, NAVY, WHITE};
use indexmap::IndexMap;
use rust_xlsxwriter::Worksheet;
use tracing::debug;

pub const NAME: &str = "History";

const HEADERS: [&str; 9] = [
    "SB #", "Year", "Winner", "W Score", "Loser", "L Score", "Margin", "MVP", "Location",
];
const LAST_COL: u16 = HEADERS.len() as u16 - 1;
const HEADER_ROW: u32 = 3;
const FIRST_DATA_ROW: u32 = HEADER_ROW + 1;

/// Numeric and short columns are centered, names are left aligned
fn is_centered(col: u16) -> bool {
    matches!(col, 0 | 1 | 3 | 5 | 6)
}

fn row_values(game: &GameRecord) -> [CellValue; 9] {
    [
        game.id.into(),
        game.year.into(),
        game.winner.into(),
        game.winner_score.into(),
        game.loser.into(),
        game.loser_score.into(),
        game.margin().into(),
        game.mvp.into(),
        game.venue.into(),
    ]
}

/// Striped body cell; the latest game is picked out in Eagles green
fn body_style(idx: usize, col: u16, latest: bool) -> CellStyle {
    let align = if is_centered(col) { centered() } else { left() };
    let style = CellStyle::striped(idx % 2 == 1, body_font(), align);
    if latest {
        style.fill(EAGLES_GREEN).font(font(9.0, true, WHITE, false))
    } else {
        style
    }
}

pub fn build(worksheet: &mut Worksheet, games: &[GameRecord]) -> Result<usize> {
    apply_theme(worksheet, NAME, GOLD)?;
    set_column_widths(
        worksheet,
        &IndexMap::from([
            ("A", 7.0),
            ("B", 6.0),
            ("C", 20.0),
            ("D", 7.0),
            ("E", 20.0),
            ("F", 7.0),
            ("G", 7.0),
            ("H", 18.0),
            ("I", 28.0),
        ]),
    )?;

    let span = match (games.first(), games.last()) {
        (Some(first), Some(last)) => format!("{}-{}", first.year, last.year),
        _ => String::new(),
    };
    banner(
        worksheet,
        0,
        0,
        LAST_COL,
        &format!("SUPER BOWL HISTORY  |  COMPLETE RESULTS {}", span),
        &BannerStyle::new(NAVY, WHITE, 14.0, 38.0),
    )?;
    banner(
        worksheet,
        1,
        0,
        LAST_COL,
        &format!(
            "{} Championship Games  |  Every Winner, Score, MVP & Location",
            games.len()
        ),
        &BannerStyle::new(GOLD, NAVY, 9.0, 24.0),
    )?;
    worksheet.set_row_height(2, 4.0)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        write_cell(
            worksheet,
            HEADER_ROW,
            col,
            header,
            &ruled_header_style(centered()),
        )?;
    }
    worksheet.set_row_height(HEADER_ROW, 28.0)?;

    let latest = games.len().saturating_sub(1);
    for (idx, game) in games.iter().enumerate() {
        let row = FIRST_DATA_ROW + idx as u32;
        for (col, value) in (0u16..).zip(row_values(game)) {
            write_cell(worksheet, row, col, value, &body_style(idx, col, idx == latest))?;
        }
        worksheet.set_row_height(row, 19.0)?;
    }

    worksheet.set_freeze_panes(FIRST_DATA_ROW, 0)?;
    PrintSetup::landscape().apply(worksheet);
    debug!(sheet = NAME, rows = games.len(), "history built");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SUPER_BOWLS;
    use crate::style::Fill;
    use crate::types::LIGHT_GRAY;

    #[test]
    fn test_row_values() {
        let values = row_values(&SUPER_BOWLS[23]);
        assert_eq!(values[0], CellValue::Text("XXIV".to_string()));
        assert_eq!(values[1], CellValue::Number(1990.0));
        assert_eq!(values[6], CellValue::Number(45.0));
    }

    #[test]
    fn test_alignment_columns() {
        let centered: Vec<u16> = (0..=LAST_COL).filter(|c| is_centered(*c)).collect();
        assert_eq!(centered, vec![0, 1, 3, 5, 6]);
    }

    #[test]
    fn test_latest_row_is_highlighted() {
        let latest = SUPER_BOWLS.len() - 1;
        for col in 0..=LAST_COL {
            let style = body_style(latest, col, true);
            assert_eq!(style.fill, Some(Fill(EAGLES_GREEN)));
            assert_eq!(style.font, Some(font(9.0, true, WHITE, false)));
            assert_eq!(style.align, body_style(0, col, false).align);
        }

        assert_eq!(body_style(0, 2, false).fill, Some(Fill(WHITE)));
        assert_eq!(body_style(1, 2, false).fill, Some(Fill(LIGHT_GRAY)));
        assert_eq!(body_style(1, 2, false).font, Some(body_font()));
    }

    #[test]
    fn test_build() {
        let mut worksheet = Worksheet::new();
        assert_eq!(build(&mut worksheet, SUPER_BOWLS).unwrap(), 0);
    }
}
