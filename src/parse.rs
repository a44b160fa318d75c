//! Cell reference parsing

use crate::error::ReportError;

/// Convert column letters like "A", "I" or "AA" into a 0-based column index
pub fn parse_column(letters: &str) -> Result<u16, ReportError> {
    let letters = letters.trim().to_uppercase();
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ReportError::CellRef(format!(
            "Invalid column '{}': expected letters A-XFD",
            letters
        )));
    }

    // A=1 .. Z=26, AA=27; widen before checking the Excel limit of 16384 columns
    let col_1based = letters
        .chars()
        .fold(0u32, |acc, c| {
            acc.saturating_mul(26)
                .saturating_add(c as u32 - 'A' as u32 + 1)
        });
    if col_1based > 16_384 {
        return Err(ReportError::CellRef(format!(
            "Invalid column '{}': beyond XFD",
            letters
        )));
    }

    Ok((col_1based - 1) as u16)
}

/// Parse a cell reference like "B23" into (row, col) - 0-based
pub fn parse_cell_ref(cell_ref: &str) -> Result<(u32, u16), ReportError> {
    let cell_ref = cell_ref.trim().to_uppercase();
    if cell_ref.is_empty() {
        return Err(ReportError::CellRef("Empty cell reference".to_string()));
    }

    // Find where letters end and numbers begin
    let col_end = cell_ref
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if col_end == 0 {
        return Err(ReportError::CellRef(format!(
            "Invalid cell reference '{}': no column letters",
            cell_ref
        )));
    }

    let col = parse_column(&cell_ref[..col_end])?;
    let row_str = &cell_ref[col_end..];

    if row_str.is_empty() {
        return Err(ReportError::CellRef(format!(
            "Invalid cell reference '{}': no row number",
            cell_ref
        )));
    }

    // Excel rows are 1-based, so must be >= 1
    let row_1based: u32 = row_str.parse::<u32>().map_err(|_| {
        ReportError::CellRef(format!("Invalid row number in cell reference '{}'", cell_ref))
    })?;

    if row_1based == 0 {
        return Err(ReportError::CellRef(format!(
            "Invalid cell reference '{}': row number must be >= 1",
            cell_ref
        )));
    }

    Ok((row_1based - 1, col))
}

/// Render a 0-based (row, col) as an A1-style reference
pub fn cell_name(row: u32, col: u16) -> String {
    let mut letters = Vec::new();
    let mut n = u32::from(col) + 1;
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect::<String>() + &(row + 1).to_string()
}
