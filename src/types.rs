//! Type definitions for superbowl-guide

use rust_xlsxwriter::Color;

/// Brand palette shared by every sheet
pub const NAVY: Color = Color::RGB(0x0B1D3A);
pub const GOLD: Color = Color::RGB(0xC9A84C);
pub const WHITE: Color = Color::RGB(0xFFFFFF);
pub const LIGHT_GRAY: Color = Color::RGB(0xF1F5F9);
pub const MED_GRAY: Color = Color::RGB(0xE2E8F0);
pub const DARK_TEXT: Color = Color::RGB(0x1E293B);
pub const MUTED: Color = Color::RGB(0x64748B);
pub const SLATE: Color = Color::RGB(0x334155);
pub const RED: Color = Color::RGB(0xDC2626);
pub const GREEN: Color = Color::RGB(0x16A34A);
pub const BLUE: Color = Color::RGB(0x3B82F6);
pub const EAGLES_GREEN: Color = Color::RGB(0x004C54);
pub const CHIEFS_RED: Color = Color::RGB(0xE31837);
pub const PURPLE: Color = Color::RGB(0x6B21A8);

/// Per-bar and per-slice chart colors, cycled when a chart has more points
pub const CHART_COLORS: &[Color] = &[
    Color::RGB(0x1E3A5F),
    Color::RGB(0xB8860B),
    Color::RGB(0xC0392B),
    Color::RGB(0x2E86C1),
    Color::RGB(0x27AE60),
    Color::RGB(0x8E44AD),
    Color::RGB(0xE67E22),
    Color::RGB(0x16A085),
    Color::RGB(0xD4AC0D),
    Color::RGB(0x5D6D7E),
    Color::RGB(0xE74C3C),
];

/// One Super Bowl result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameRecord {
    /// Roman numeral ordinal, except "50"
    pub id: &'static str,
    pub year: u16,
    pub winner: &'static str,
    pub winner_score: u8,
    pub loser: &'static str,
    pub loser_score: u8,
    pub mvp: &'static str,
    pub venue: &'static str,
}

impl GameRecord {
    /// Absolute point differential
    pub fn margin(&self) -> u8 {
        self.winner_score.abs_diff(self.loser_score)
    }

    /// Winner and loser points combined
    pub fn combined_score(&self) -> u16 {
        u16::from(self.winner_score) + u16::from(self.loser_score)
    }
}

/// One halftime show. `game_id` is not checked against the game table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalftimeRecord {
    pub game_id: &'static str,
    pub year: u16,
    pub performers: &'static str,
    pub genre: &'static str,
}

/// Economic statistic with a preformatted value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicFact {
    pub category: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

/// Headline number shown in a boxed panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
}

/// Line score for one team in the spotlight game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterLine {
    pub team: &'static str,
    pub quarters: [u8; 4],
    pub total: u8,
    pub color: Color,
}

/// A game together with its absolute score differential
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub game: GameRecord,
    pub margin: u8,
}

impl Margin {
    /// Label used in the blowout / closest tables, e.g. "SB XXIV: San Francisco 49ers"
    pub fn label(&self) -> String {
        format!("SB {}: {}", self.game.id, self.game.winner)
    }

    /// Final score, e.g. "55-10"
    pub fn score(&self) -> String {
        format!("{}-{}", self.game.winner_score, self.game.loser_score)
    }
}

/// Represents a value written to a single cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<u16> for CellValue {
    fn from(value: u16) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

/// Explicit image size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
