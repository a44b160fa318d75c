//! Layout primitives: styled writes, merged banners, accent bars, painted
//! background bands, column widths and print setup.
//!
//! All rows and columns are 0-based, matching rust_xlsxwriter.

use crate::error::Result;
use crate::parse::parse_column;
use crate::style::{centered, font, CellStyle};
use crate::types::{CellValue, LIGHT_GRAY, WHITE};
use indexmap::IndexMap;
use rust_xlsxwriter::{Color, Worksheet};

/// Height of an accent bar row, in points
pub const ACCENT_BAR_HEIGHT: f64 = 3.0;

/// Page margin on every edge, in inches
pub const PAGE_MARGIN: f64 = 0.4;

/// Write a value with a style. An empty value still receives the style.
pub fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: impl Into<CellValue>,
    style: &CellStyle,
) -> Result<()> {
    let format = style.format();
    match value.into() {
        CellValue::Empty => {
            worksheet.write_blank(row, col, &format)?;
        }
        CellValue::Number(v) => {
            worksheet.write_number_with_format(row, col, v, &format)?;
        }
        CellValue::Text(v) => {
            worksheet.write_string_with_format(row, col, &v, &format)?;
        }
    }
    Ok(())
}

/// Merge a rectangular range and write one value into it.
///
/// A range covering a single cell is written directly, since the writer
/// rejects single-cell merges.
pub fn merge(
    worksheet: &mut Worksheet,
    first_row: u32,
    first_col: u16,
    last_row: u32,
    last_col: u16,
    value: impl Into<CellValue>,
    style: &CellStyle,
) -> Result<()> {
    let value = value.into();
    if first_row == last_row && first_col == last_col {
        return write_cell(worksheet, first_row, first_col, value, style);
    }

    let format = style.format();
    match value {
        CellValue::Text(text) => {
            worksheet.merge_range(first_row, first_col, last_row, last_col, &text, &format)?;
        }
        other => {
            // Merge with an empty string, then overwrite the anchor cell
            worksheet.merge_range(first_row, first_col, last_row, last_col, "", &format)?;
            write_cell(worksheet, first_row, first_col, other, style)?;
        }
    }
    Ok(())
}

/// Banner appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerStyle {
    pub background: Color,
    pub foreground: Color,
    pub size: f64,
    pub height: f64,
    pub bold: bool,
}

impl BannerStyle {
    pub const fn new(background: Color, foreground: Color, size: f64, height: f64) -> Self {
        Self {
            background,
            foreground,
            size,
            height,
            bold: true,
        }
    }

    pub const fn regular(mut self) -> Self {
        self.bold = false;
        self
    }

    fn cell_style(&self) -> CellStyle {
        CellStyle::new()
            .fill(self.background)
            .font(font(self.size, self.bold, self.foreground, false))
            .align(centered())
    }
}

/// Section title merged across `first_col..=last_col` of one row
pub fn banner(
    worksheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    last_col: u16,
    text: &str,
    style: &BannerStyle,
) -> Result<()> {
    merge(
        worksheet,
        row,
        first_col,
        row,
        last_col,
        text,
        &style.cell_style(),
    )?;
    worksheet.set_row_height(row, style.height)?;
    Ok(())
}

/// Thin solid divider across columns `0..ncols`
pub fn accent_bar(worksheet: &mut Worksheet, row: u32, ncols: u16, color: Color) -> Result<()> {
    worksheet.set_row_height(row, ACCENT_BAR_HEIGHT)?;
    let format = CellStyle::new().fill(color).format();
    for col in 0..ncols {
        worksheet.write_blank(row, col, &format)?;
    }
    Ok(())
}

/// Fill every cell in the inclusive block with one color
pub fn paint_background(
    worksheet: &mut Worksheet,
    first_row: u32,
    last_row: u32,
    first_col: u16,
    last_col: u16,
    color: Color,
) -> Result<()> {
    let format = CellStyle::new().fill(color).format();
    for row in first_row..=last_row {
        for col in first_col..=last_col {
            worksheet.write_blank(row, col, &format)?;
        }
    }
    Ok(())
}

/// Apply widths keyed by column letter, in insertion order
pub fn set_column_widths(worksheet: &mut Worksheet, widths: &IndexMap<&str, f64>) -> Result<()> {
    for (letters, width) in widths {
        let col = parse_column(letters)?;
        worksheet.set_column_width(col, *width)?;
    }
    Ok(())
}

/// Same height for every row in `first_row..=last_row`
pub fn set_row_heights(
    worksheet: &mut Worksheet,
    first_row: u32,
    last_row: u32,
    height: f64,
) -> Result<()> {
    for row in first_row..=last_row {
        worksheet.set_row_height(row, height)?;
    }
    Ok(())
}

/// Background for the `index`-th body row of a striped table
pub fn stripe(index: usize, odd_is_gray: bool) -> Color {
    if (index % 2 == 1) == odd_is_gray {
        LIGHT_GRAY
    } else {
        WHITE
    }
}

/// Orientation and fit-to-page scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSetup {
    pub landscape: bool,
    /// Pages wide
    pub fit_width: u16,
    /// Pages tall, 0 for as many as needed
    pub fit_height: u16,
}

impl PrintSetup {
    pub const fn portrait() -> Self {
        Self {
            landscape: false,
            fit_width: 1,
            fit_height: 0,
        }
    }

    pub const fn landscape() -> Self {
        Self {
            landscape: true,
            fit_width: 1,
            fit_height: 0,
        }
    }

    pub fn apply(&self, worksheet: &mut Worksheet) {
        if self.landscape {
            worksheet.set_landscape();
        } else {
            worksheet.set_portrait();
        }
        worksheet.set_print_fit_to_pages(self.fit_width, self.fit_height);
        worksheet.set_margins(PAGE_MARGIN, PAGE_MARGIN, PAGE_MARGIN, PAGE_MARGIN, 0.3, 0.3);
    }
}

/// Name the sheet, color its tab and hide on-screen gridlines
pub fn apply_theme(worksheet: &mut Worksheet, name: &str, tab_color: Color) -> Result<()> {
    worksheet.set_name(name)?;
    worksheet.set_tab_color(tab_color);
    worksheet.set_screen_gridlines(false);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NAVY;

    fn widths() -> IndexMap<&'static str, f64> {
        IndexMap::from([("A", 3.0), ("B", 18.0), ("AA", 9.0)])
    }

    #[test]
    fn test_stripe() {
        assert_eq!(stripe(0, true), WHITE);
        assert_eq!(stripe(1, true), LIGHT_GRAY);
        assert_eq!(stripe(0, false), LIGHT_GRAY);
        assert_eq!(stripe(1, false), WHITE);
    }

    #[test]
    fn test_primitives_accept_valid_input() {
        let mut worksheet = Worksheet::new();
        apply_theme(&mut worksheet, "Cover", NAVY).unwrap();
        paint_background(&mut worksheet, 0, 10, 0, 5, NAVY).unwrap();
        accent_bar(&mut worksheet, 0, 6, crate::types::GOLD).unwrap();
        banner(
            &mut worksheet,
            1,
            0,
            5,
            "TITLE",
            &BannerStyle::new(NAVY, WHITE, 16.0, 42.0),
        )
        .unwrap();
        merge(&mut worksheet, 3, 1, 3, 2, 40u8, &CellStyle::new()).unwrap();
        write_cell(&mut worksheet, 4, 3, CellValue::Empty, &CellStyle::new()).unwrap();
        set_column_widths(&mut worksheet, &widths()).unwrap();
        set_row_heights(&mut worksheet, 5, 8, 14.0).unwrap();
        PrintSetup::landscape().apply(&mut worksheet);
    }

    #[test]
    fn test_single_cell_banner_is_not_merged() {
        let mut worksheet = Worksheet::new();
        let style = BannerStyle::new(NAVY, WHITE, 10.0, 20.0).regular();
        assert!(!style.bold);
        banner(&mut worksheet, 0, 2, 2, "VS", &style).unwrap();
    }

    #[test]
    fn test_bad_column_letter_is_an_error() {
        let mut worksheet = Worksheet::new();
        let widths = IndexMap::from([("7", 3.0)]);
        assert!(set_column_widths(&mut worksheet, &widths).is_err());
    }
}
