//! Aggregated views with their charts: championships by team (column chart),
//! average combined score by decade (line chart), biggest blowouts and
//! closest games.

use super::{body_font, header_style, section_title};
use crate::error::Result;
use crate::layout::{
    apply_theme, banner, set_column_widths, write_cell, BannerStyle, PrintSetup,
};
use crate::stats::{blowouts, closest_games, decade_averages, team_wins, TOP_MARGINS};
use crate::style::{centered, font, left, CellStyle, Font};
use crate::types::{
    CellValue, GameRecord, Margin, BLUE, CHART_COLORS, GOLD, GREEN, NAVY, RED, SLATE, WHITE,
};
use indexmap::IndexMap;
use rust_xlsxwriter::{
    Chart, ChartLine, ChartMarker, ChartMarkerType, ChartPoint, ChartSolidFill, ChartType, Color,
    Worksheet,
};
use tracing::debug;

pub const NAME: &str = "Statistics";

/// Bars shown in the championship chart
const CHART_TEAMS: usize = 10;

const WINS_TITLE_ROW: u32 = 3;
const WINS_HEADER_ROW: u32 = WINS_TITLE_ROW + 1;

/// Charts sit to the right of the tables, starting in column D
const CHART_COL: u16 = 3;

/// Chart sizes in pixels
const BAR_CHART_SIZE: (u32, u32) = (680, 491);
const LINE_CHART_SIZE: (u32, u32) = (680, 416);

/// Row positions of the stacked tables, derived from their lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    teams: u32,
    decades: u32,
    decade_top: u32,
    margin_top: u32,
}

impl Layout {
    fn new(teams: usize, decades: usize) -> Self {
        let teams = teams as u32;
        let decades = decades as u32;
        // title + header + body, then one spacer row before the next title
        let decade_top = WINS_HEADER_ROW + 1 + teams + 2;
        let margin_top = decade_top + 2 + decades + 2;
        Self {
            teams,
            decades,
            decade_top,
            margin_top,
        }
    }

    /// Body rows of the top teams plotted in the column chart
    fn wins_chart_rows(&self) -> Option<(u32, u32)> {
        let charted = self.teams.min(CHART_TEAMS as u32);
        (charted > 0).then_some((WINS_HEADER_ROW + 1, WINS_HEADER_ROW + charted))
    }

    /// Body rows of the decade table
    fn decade_chart_rows(&self) -> Option<(u32, u32)> {
        let first = self.decade_top + 2;
        (self.decades > 0).then(|| (first, first + self.decades - 1))
    }
}

/// Two-column table: section title, header row, striped body rows.
/// Returns the row after the last body row.
#[allow(clippy::too_many_arguments)]
fn write_pair_table(
    worksheet: &mut Worksheet,
    top: u32,
    first_col: u16,
    title: (&str, Color),
    headers: (&str, &str),
    rows: &[(String, CellValue)],
    text_size: f64,
    value_color: Color,
    row_height: Option<f64>,
) -> Result<u32> {
    let (title_text, title_color) = title;
    section_title(
        worksheet,
        top,
        first_col,
        first_col + 1,
        title_text,
        title_color,
        10.0,
        26.0,
    )?;

    let header_size = if text_size < 9.0 { 8.0 } else { 9.0 };
    write_cell(
        worksheet,
        top + 1,
        first_col,
        headers.0,
        &header_style(header_size, left()),
    )?;
    write_cell(
        worksheet,
        top + 1,
        first_col + 1,
        headers.1,
        &header_style(header_size, centered()),
    )?;

    let mut row = top + 2;
    for (idx, (label, value)) in rows.iter().enumerate() {
        let stripe = idx % 2 == 1;
        let label_font = Font {
            size: text_size,
            ..body_font()
        };
        write_cell(
            worksheet,
            row,
            first_col,
            label.as_str(),
            &CellStyle::striped(stripe, label_font, left()),
        )?;
        write_cell(
            worksheet,
            row,
            first_col + 1,
            value.clone(),
            &CellStyle::striped(stripe, font(text_size, true, value_color, false), centered()),
        )?;
        if let Some(height) = row_height {
            worksheet.set_row_height(row, height)?;
        }
        row += 1;
    }
    Ok(row)
}

/// Column chart of the top teams with one color per bar
fn championship_chart(first_row: u32, last_row: u32) -> Chart {
    let bars = (last_row - first_row + 1) as usize;
    let points: Vec<ChartPoint> = (0..bars)
        .map(|i| {
            ChartPoint::new()
                .set_format(ChartSolidFill::new().set_color(CHART_COLORS[i % CHART_COLORS.len()]))
        })
        .collect();

    let mut chart = Chart::new(ChartType::Column);
    chart.title().set_name("Super Bowl Championships by Team");
    chart.legend().set_hidden();
    chart.y_axis().set_major_gridlines(false);
    chart
        .set_style(10)
        .set_width(BAR_CHART_SIZE.0)
        .set_height(BAR_CHART_SIZE.1);
    chart
        .add_series()
        .set_name((NAME, WINS_HEADER_ROW, 1))
        .set_categories((NAME, first_row, 0, last_row, 0))
        .set_values((NAME, first_row, 1, last_row, 1))
        .set_points(&points);
    chart
}

/// Smoothed gold line with navy circle markers
fn decade_chart(header_row: u32, first_row: u32, last_row: u32) -> Chart {
    let mut chart = Chart::new(ChartType::Line);
    chart.title().set_name("Average Combined Score by Decade");
    chart.legend().set_hidden();
    chart
        .set_style(10)
        .set_width(LINE_CHART_SIZE.0)
        .set_height(LINE_CHART_SIZE.1);
    chart
        .add_series()
        .set_name((NAME, header_row, 1))
        .set_categories((NAME, first_row, 0, last_row, 0))
        .set_values((NAME, first_row, 1, last_row, 1))
        .set_format(ChartLine::new().set_color(GOLD).set_width(2.25))
        .set_smooth(true)
        .set_marker(
            ChartMarker::new()
                .set_type(ChartMarkerType::Circle)
                .set_size(7)
                .set_format(ChartSolidFill::new().set_color(NAVY)),
        );
    chart
}

fn margin_rows(margins: &[Margin]) -> Vec<(String, CellValue)> {
    margins
        .iter()
        .map(|m| (m.label(), m.score().into()))
        .collect()
}

pub fn build(worksheet: &mut Worksheet, games: &[GameRecord]) -> Result<usize> {
    apply_theme(worksheet, NAME, BLUE)?;
    set_column_widths(
        worksheet,
        &IndexMap::from([
            ("A", 24.0),
            ("B", 8.0),
            ("C", 3.0),
            ("D", 24.0),
            ("E", 8.0),
            ("F", 3.0),
            ("G", 24.0),
            ("H", 8.0),
        ]),
    )?;

    banner(
        worksheet,
        0,
        0,
        7,
        "SUPER BOWL STATISTICS & ANALYSIS",
        &BannerStyle::new(NAVY, WHITE, 14.0, 38.0),
    )?;
    banner(
        worksheet,
        1,
        0,
        7,
        "Team Championships  |  Scoring Trends  |  Blowouts vs Closest Games",
        &BannerStyle::new(GOLD, NAVY, 9.0, 24.0),
    )?;
    worksheet.set_row_height(2, 4.0)?;

    let wins = team_wins(games);
    let decades = decade_averages(games);
    let rows = Layout::new(wins.len(), decades.len());

    // Championships by team
    let wins_rows: Vec<(String, CellValue)> = wins
        .iter()
        .map(|(team, n)| (team.to_string(), (*n).into()))
        .collect();
    write_pair_table(
        worksheet,
        WINS_TITLE_ROW,
        0,
        ("CHAMPIONSHIPS BY TEAM", SLATE),
        ("Team", "Wins"),
        &wins_rows,
        9.0,
        NAVY,
        Some(18.0),
    )?;
    worksheet.set_row_height(WINS_HEADER_ROW, 24.0)?;

    if let Some((first, last)) = rows.wins_chart_rows() {
        let chart = championship_chart(first, last);
        worksheet.insert_chart(WINS_TITLE_ROW, CHART_COL, &chart)?;
    }

    // Average combined score by decade
    let decade_rows: Vec<(String, CellValue)> = decades
        .iter()
        .map(|(label, avg)| (label.clone(), (*avg).into()))
        .collect();
    write_pair_table(
        worksheet,
        rows.decade_top,
        0,
        ("AVG TOTAL SCORE BY DECADE", SLATE),
        ("Decade", "Avg Pts"),
        &decade_rows,
        9.0,
        NAVY,
        Some(18.0),
    )?;
    worksheet.set_row_height(rows.decade_top + 1, 24.0)?;

    if let Some((first, last)) = rows.decade_chart_rows() {
        let chart = decade_chart(rows.decade_top + 1, first, last);
        worksheet.insert_chart(rows.decade_top, CHART_COL, &chart)?;
    }

    // Blowouts on the left, closest games beside them
    let margin_top = rows.margin_top;
    write_pair_table(
        worksheet,
        margin_top,
        0,
        ("BIGGEST BLOWOUTS", RED),
        ("Game", "Score"),
        &margin_rows(&blowouts(games, TOP_MARGINS)),
        8.0,
        RED,
        Some(17.0),
    )?;
    write_pair_table(
        worksheet,
        margin_top,
        3,
        ("CLOSEST GAMES", GREEN),
        ("Game", "Score"),
        &margin_rows(&closest_games(games, TOP_MARGINS)),
        8.0,
        GREEN,
        None,
    )?;
    worksheet.set_row_height(margin_top + 1, 22.0)?;

    PrintSetup::landscape().apply(worksheet);
    debug!(
        sheet = NAME,
        teams = wins.len(),
        decades = decades.len(),
        "statistics built"
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SUPER_BOWLS;

    #[test]
    fn test_margin_rows() {
        let rows = margin_rows(&blowouts(SUPER_BOWLS, 1));
        assert_eq!(
            rows,
            vec![(
                "SB XXIV: San Francisco 49ers".to_string(),
                CellValue::Text("55-10".to_string())
            )]
        );
    }

    #[test]
    fn test_build() {
        let mut worksheet = Worksheet::new();
        assert_eq!(build(&mut worksheet, SUPER_BOWLS).unwrap(), 0);
    }

    #[test]
    fn test_build_with_no_games() {
        let mut worksheet = Worksheet::new();
        assert_eq!(build(&mut worksheet, &[]).unwrap(), 0);
    }

    #[test]
    fn test_layout_rows() {
        let rows = Layout::new(23, 7);
        assert_eq!(rows.wins_chart_rows(), Some((5, 14)));
        assert_eq!(rows.decade_top, 30);
        assert_eq!(rows.decade_chart_rows(), Some((32, 38)));
        assert_eq!(rows.margin_top, 41);

        let empty = Layout::new(0, 0);
        assert_eq!(empty.wins_chart_rows(), None);
        assert_eq!(empty.decade_chart_rows(), None);
    }

    #[test]
    fn test_chart_rows_cover_table_bodies() {
        let wins = team_wins(SUPER_BOWLS);
        let decades = decade_averages(SUPER_BOWLS);
        let rows = Layout::new(wins.len(), decades.len());
        let mut worksheet = Worksheet::new();

        let body: Vec<(String, CellValue)> = wins
            .iter()
            .map(|(team, n)| (team.to_string(), (*n).into()))
            .collect();
        let after_wins = write_pair_table(
            &mut worksheet,
            WINS_TITLE_ROW,
            0,
            ("CHAMPIONSHIPS BY TEAM", SLATE),
            ("Team", "Wins"),
            &body,
            9.0,
            NAVY,
            None,
        )
        .unwrap();
        assert_eq!(rows.decade_top, after_wins + 2);

        let body: Vec<(String, CellValue)> = decades
            .iter()
            .map(|(label, avg)| (label.clone(), (*avg).into()))
            .collect();
        let after_decades = write_pair_table(
            &mut worksheet,
            rows.decade_top,
            0,
            ("AVG TOTAL SCORE BY DECADE", SLATE),
            ("Decade", "Avg Pts"),
            &body,
            9.0,
            NAVY,
            None,
        )
        .unwrap();
        assert_eq!(rows.decade_chart_rows(), Some((rows.decade_top + 2, after_decades - 1)));
        assert_eq!(rows.margin_top, after_decades + 2);
    }
}
