//! Economic impact: headline panels over the full fact table

use super::{header_style, kpi_panel, section_title, PanelStyle};
use crate::data::ECONOMY_KPIS;
use crate::error::Result;
use crate::layout::{
    accent_bar, apply_theme, banner, set_column_widths, write_cell, BannerStyle, PrintSetup,
};
use crate::style::{centered, font, left, CellStyle};
use crate::types::{CellValue, EconomicFact, DARK_TEXT, GOLD, MUTED, NAVY, SLATE, WHITE};
use indexmap::IndexMap;
use rust_xlsxwriter::Worksheet;
use tracing::debug;

pub const NAME: &str = "Economic Impact";

const COLS: u16 = 5;
const LAST_COL: u16 = COLS - 1;
/// Rows whose outer columns are painted navy
const RAIL_ROWS: u32 = 47;
const FIRST_PANEL_ROW: u32 = 5;

pub fn build(worksheet: &mut Worksheet, facts: &[EconomicFact]) -> Result<usize> {
    apply_theme(worksheet, NAME, GOLD)?;
    set_column_widths(
        worksheet,
        &IndexMap::from([("A", 2.0), ("B", 26.0), ("C", 16.0), ("D", 30.0), ("E", 2.0)]),
    )?;

    // Navy rails down both margins only
    let rail = CellStyle::new().fill(NAVY);
    for row in 0..RAIL_ROWS {
        write_cell(worksheet, row, 0, CellValue::Empty, &rail)?;
        write_cell(worksheet, row, LAST_COL, CellValue::Empty, &rail)?;
        worksheet.set_row_height(row, 14.0)?;
    }

    accent_bar(worksheet, 0, COLS, GOLD)?;
    banner(
        worksheet,
        1,
        0,
        LAST_COL,
        "SUPER BOWL ECONOMIC IMPACT",
        &BannerStyle::new(NAVY, WHITE, 18.0, 42.0),
    )?;
    banner(
        worksheet,
        2,
        0,
        LAST_COL,
        "The Business of America's Biggest Sporting Event  |  SB LIX (2025)",
        &BannerStyle::new(NAVY, GOLD, 9.0, 22.0).regular(),
    )?;
    accent_bar(worksheet, 3, COLS, GOLD)?;
    worksheet.set_row_height(4, 8.0)?;

    let panel = PanelStyle {
        fill: NAVY,
        rail: SLATE,
        value_size: 26.0,
        label_size: 9.0,
        value_height: 42.0,
        label_height: 22.0,
    };
    let mut row = FIRST_PANEL_ROW;
    for kpi in ECONOMY_KPIS {
        kpi_panel(worksheet, row, 1, 3, kpi, &panel)?;
        worksheet.set_row_height(row + 2, 6.0)?;
        row += 3;
    }

    row += 1;
    section_title(
        worksheet,
        row,
        1,
        3,
        "COMPLETE ECONOMIC DATA",
        SLATE,
        11.0,
        28.0,
    )?;

    row += 1;
    for (col, header) in (1u16..).zip(["Category", "Value", "Details"]) {
        write_cell(worksheet, row, col, header, &header_style(9.0, left()))?;
    }
    worksheet.set_row_height(row, 24.0)?;

    for (idx, fact) in facts.iter().enumerate() {
        let r = row + 1 + idx as u32;
        // even rows are gray on this sheet
        let gray = idx % 2 == 0;
        write_cell(
            worksheet,
            r,
            1,
            fact.category,
            &CellStyle::striped(gray, font(9.0, false, DARK_TEXT, false), left()),
        )?;
        write_cell(
            worksheet,
            r,
            2,
            fact.value,
            &CellStyle::striped(gray, font(9.0, true, NAVY, false), centered()),
        )?;
        write_cell(
            worksheet,
            r,
            3,
            fact.detail,
            &CellStyle::striped(gray, font(8.0, false, MUTED, false), left()),
        )?;
        worksheet.set_row_height(r, 20.0)?;
    }

    PrintSetup::portrait().apply(worksheet);
    debug!(sheet = NAME, facts = facts.len(), "economy built");
    Ok(0)
}
