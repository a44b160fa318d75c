//! Sheet builders, one module per worksheet.
//!
//! Each builder receives a fresh worksheet and the tables it renders, writes
//! top to bottom in a single pass and returns how many images it placed.
//! No builder reads another sheet's cells except through its own chart ranges.

pub mod cover;
pub mod economy;
pub mod halftime;
pub mod history;
pub mod spotlight;
pub mod statistics;

use crate::error::Result;
use crate::layout::merge;
use crate::style::{centered, font, left, Alignment, Border, CellStyle, Font, Side};
use crate::types::{Kpi, DARK_TEXT, GOLD, NAVY, WHITE};
use rust_xlsxwriter::{Color, Worksheet};

/// Sheet names in tab order
pub const SHEET_NAMES: [&str; 6] = [
    cover::NAME,
    history::NAME,
    statistics::NAME,
    spotlight::NAME,
    economy::NAME,
    halftime::NAME,
];

/// Regular 9pt body text
pub(crate) fn body_font() -> Font {
    font(9.0, false, DARK_TEXT, false)
}

/// Navy header cell with bold gold text
pub(crate) fn header_style(size: f64, align: Alignment) -> CellStyle {
    CellStyle::new()
        .fill(NAVY)
        .font(font(size, true, GOLD, false))
        .align(align)
}

/// Header cell underlined with a medium gold rule
pub(crate) fn ruled_header_style(align: Alignment) -> CellStyle {
    header_style(9.0, align).border(Border::bottom(Side::medium(GOLD)))
}

/// Left-aligned white-on-color section heading merged across a column span
#[allow(clippy::too_many_arguments)]
pub(crate) fn section_title(
    worksheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    last_col: u16,
    text: &str,
    background: Color,
    size: f64,
    height: f64,
) -> Result<()> {
    let style = CellStyle::new()
        .fill(background)
        .font(font(size, true, WHITE, false))
        .align(left());
    merge(worksheet, row, first_col, row, last_col, text, &style)?;
    worksheet.set_row_height(row, height)?;
    Ok(())
}

/// Look of a boxed headline number
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelStyle {
    pub fill: Color,
    pub rail: Color,
    pub value_size: f64,
    pub label_size: f64,
    pub value_height: f64,
    pub label_height: f64,
}

/// Two-row KPI panel: large value over a small caption, boxed by a gold rule
/// on the outer edges and thin rails on the sides
pub(crate) fn kpi_panel(
    worksheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    last_col: u16,
    kpi: &Kpi,
    style: &PanelStyle,
) -> Result<()> {
    let rule = Side::medium(GOLD);
    let rail = Side::thin(style.rail);

    let value_style = CellStyle::new()
        .fill(style.fill)
        .font(font(style.value_size, true, GOLD, false))
        .align(centered())
        .border(Border::panel(rule, rail, true));
    let label_style = CellStyle::new()
        .fill(style.fill)
        .font(font(style.label_size, true, WHITE, false))
        .align(centered())
        .border(Border::panel(rule, rail, false));

    merge(worksheet, row, first_col, row, last_col, kpi.value, &value_style)?;
    merge(
        worksheet,
        row + 1,
        first_col,
        row + 1,
        last_col,
        kpi.label,
        &label_style,
    )?;
    worksheet.set_row_height(row, style.value_height)?;
    worksheet.set_row_height(row + 1, style.label_height)?;
    Ok(())
}
