//! Halftime show history with a genre breakdown pie chart

use super::{body_font, header_style, ruled_header_style, section_title};
use crate::config::{ReportConfig, HALFTIME_IMAGE};
use crate::error::Result;
use crate::layout::{
    apply_theme, banner, set_column_widths, write_cell, BannerStyle, PrintSetup,
};
use crate::media::try_embed;
use crate::parse::cell_name;
use crate::stats::genre_breakdown;
use crate::style::{centered, font, left, CellStyle};
use crate::types::{
    CellValue, HalftimeRecord, ImageSize, CHART_COLORS, GOLD, NAVY, PURPLE, SLATE, WHITE,
};
use indexmap::IndexMap;
use rust_xlsxwriter::{Chart, ChartDataLabel, ChartPoint, ChartSolidFill, ChartType, Worksheet};
use tracing::debug;

pub const NAME: &str = "Halftime Shows";

const HEADERS: [&str; 4] = ["Super Bowl", "Year", "Performer(s)", "Genre"];
const LAST_COL: u16 = HEADERS.len() as u16 - 1;
const PERFORMER_COL: u16 = 2;
const HEADER_ROW: u32 = 3;
const FIRST_DATA_ROW: u32 = HEADER_ROW + 1;

const PIE_SIZE: (u32, u32) = (529, 378);
const PHOTO_SIZE: ImageSize = ImageSize::new(400, 260);

/// Rows of the genre section below a show table of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GenreRows {
    title: u32,
    header: u32,
    genres: u32,
    photo: u32,
}

impl GenreRows {
    fn new(shows: usize, genres: usize) -> Self {
        // two blank rows after the last show
        let title = FIRST_DATA_ROW + shows.max(1) as u32 + 2;
        let header = title + 1;
        let genres = genres as u32;
        Self {
            title,
            header,
            genres,
            photo: header + 1 + genres + 2,
        }
    }

    /// Genre table body, which the pie plots
    fn pie_rows(&self) -> Option<(u32, u32)> {
        (self.genres > 0).then_some((self.header + 1, self.header + self.genres))
    }
}

/// Pie of genre counts; slices labelled with genre name and percentage
fn genre_chart(header_row: u32, first_row: u32, last_row: u32) -> Chart {
    let slices = (last_row - first_row + 1) as usize;
    let points: Vec<ChartPoint> = (0..slices)
        .map(|i| {
            ChartPoint::new()
                .set_format(ChartSolidFill::new().set_color(CHART_COLORS[i % CHART_COLORS.len()]))
        })
        .collect();

    let mut chart = Chart::new(ChartType::Pie);
    chart.title().set_name("Halftime Show Genres");
    chart
        .set_style(10)
        .set_width(PIE_SIZE.0)
        .set_height(PIE_SIZE.1);
    chart
        .add_series()
        .set_name((NAME, header_row, 1))
        .set_categories((NAME, first_row, 0, last_row, 0))
        .set_values((NAME, first_row, 1, last_row, 1))
        .set_points(&points)
        .set_data_label(ChartDataLabel::new().show_category_name().show_percentage());
    chart
}

pub fn build(
    worksheet: &mut Worksheet,
    shows: &[HalftimeRecord],
    config: &ReportConfig,
) -> Result<usize> {
    apply_theme(worksheet, NAME, PURPLE)?;
    set_column_widths(
        worksheet,
        &IndexMap::from([("A", 9.0), ("B", 6.0), ("C", 44.0), ("D", 14.0)]),
    )?;

    banner(
        worksheet,
        0,
        0,
        LAST_COL,
        "SUPER BOWL HALFTIME SHOW HISTORY",
        &BannerStyle::new(NAVY, WHITE, 14.0, 38.0),
    )?;
    banner(
        worksheet,
        1,
        0,
        LAST_COL,
        "The World's Biggest Stage  |  Iconic Performances",
        &BannerStyle::new(GOLD, NAVY, 9.0, 24.0),
    )?;
    worksheet.set_row_height(2, 4.0)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        let align = if col == PERFORMER_COL { left() } else { centered() };
        write_cell(worksheet, HEADER_ROW, col, header, &ruled_header_style(align))?;
    }
    worksheet.set_row_height(HEADER_ROW, 26.0)?;

    let latest = shows.len().saturating_sub(1);
    for (idx, show) in shows.iter().enumerate() {
        let row = FIRST_DATA_ROW + idx as u32;
        let values: [CellValue; 4] = [
            show.game_id.into(),
            show.year.into(),
            show.performers.into(),
            show.genre.into(),
        ];
        for (col, value) in (0u16..).zip(values) {
            let align = if col == PERFORMER_COL { left() } else { centered() };
            let mut style = CellStyle::striped(idx % 2 == 1, body_font(), align);
            if idx == latest {
                style = style.fill(PURPLE).font(font(9.0, true, WHITE, false));
            }
            write_cell(worksheet, row, col, value, &style)?;
        }
        worksheet.set_row_height(row, 19.0)?;
    }

    // Genre breakdown, two rows below the table
    let genres = genre_breakdown(shows);
    let rows = GenreRows::new(shows.len(), genres.len());
    let genre_top = rows.title;
    section_title(
        worksheet,
        genre_top,
        0,
        LAST_COL,
        "HALFTIME SHOW GENRE BREAKDOWN",
        SLATE,
        10.0,
        26.0,
    )?;

    let genre_header = rows.header;
    write_cell(worksheet, genre_header, 0, "Genre", &header_style(9.0, left()))?;
    write_cell(worksheet, genre_header, 1, "Count", &header_style(9.0, centered()))?;
    worksheet.set_row_height(genre_header, 22.0)?;

    for (idx, (genre, count)) in genres.iter().enumerate() {
        let row = genre_header + 1 + idx as u32;
        let stripe = idx % 2 == 1;
        write_cell(
            worksheet,
            row,
            0,
            *genre,
            &CellStyle::striped(stripe, body_font(), left()),
        )?;
        write_cell(
            worksheet,
            row,
            1,
            *count,
            &CellStyle::striped(stripe, font(9.0, true, NAVY, false), centered()),
        )?;
        worksheet.set_row_height(row, 18.0)?;
    }

    if let Some((first, last)) = rows.pie_rows() {
        let chart = genre_chart(genre_header, first, last);
        worksheet.insert_chart(genre_header, PERFORMER_COL, &chart)?;
    }

    let embedded = try_embed(
        worksheet,
        &config.asset(HALFTIME_IMAGE),
        &cell_name(rows.photo, 0),
        PHOTO_SIZE,
    );

    worksheet.set_freeze_panes(FIRST_DATA_ROW, 0)?;
    PrintSetup::portrait().apply(worksheet);
    debug!(
        sheet = NAME,
        shows = shows.len(),
        genres = genres.len(),
        embedded,
        "halftime built"
    );
    Ok(usize::from(embedded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::HALFTIME_SHOWS;

    #[test]
    fn test_genre_rows() {
        let rows = GenreRows::new(HALFTIME_SHOWS.len(), genre_breakdown(HALFTIME_SHOWS).len());
        assert_eq!(rows.title, 41);
        assert_eq!(rows.header, 42);
        assert_eq!(rows.pie_rows(), Some((43, 53)));
        assert_eq!(cell_name(rows.photo, 0), "A57");

        assert_eq!(GenreRows::new(0, 0).pie_rows(), None);
    }

    #[test]
    fn test_build_without_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path().join("out.xlsx"), dir.path());
        let mut worksheet = Worksheet::new();
        assert_eq!(build(&mut worksheet, HALFTIME_SHOWS, &config).unwrap(), 0);
        assert_eq!(worksheet.name(), NAME);
    }
}
