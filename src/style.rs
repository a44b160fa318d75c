//! Style primitives
//!
//! Small descriptors for fill, font, border and alignment. A [`CellStyle`]
//! bundles them and renders to a `rust_xlsxwriter::Format`, so a row can share
//! a base style and override just the fill or font for a highlighted entry.

use crate::types::{DARK_TEXT, LIGHT_GRAY, MED_GRAY, WHITE};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

pub const FONT_NAME: &str = "Calibri";

/// Solid background fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill(pub Color);

/// Text style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 10.0,
            bold: false,
            color: DARK_TEXT,
            italic: false,
        }
    }
}

/// One edge of a cell border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    pub style: FormatBorder,
    pub color: Color,
}

impl Side {
    pub const fn thin(color: Color) -> Self {
        Self {
            style: FormatBorder::Thin,
            color,
        }
    }

    pub const fn medium(color: Color) -> Self {
        Self {
            style: FormatBorder::Medium,
            color,
        }
    }
}

/// Per-edge border, unset edges are left blank
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Border {
    pub top: Option<Side>,
    pub bottom: Option<Side>,
    pub left: Option<Side>,
    pub right: Option<Side>,
}

impl Border {
    /// Same edge on all four sides
    pub const fn uniform(side: Side) -> Self {
        Self {
            top: Some(side),
            bottom: Some(side),
            left: Some(side),
            right: Some(side),
        }
    }

    pub const fn bottom(side: Side) -> Self {
        Self {
            top: None,
            bottom: Some(side),
            left: None,
            right: None,
        }
    }

    /// Boxed panel edge: heavy rule on top or bottom, thin rails left and right
    pub const fn panel(rule: Side, rail: Side, rule_on_top: bool) -> Self {
        let (top, bottom) = if rule_on_top {
            (Some(rule), None)
        } else {
            (None, Some(rule))
        };
        Self {
            top,
            bottom,
            left: Some(rail),
            right: Some(rail),
        }
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
    pub wrap: bool,
}

/// Solid fill of the given color
pub fn fill(color: Color) -> Fill {
    Fill(color)
}

/// Calibri text style
pub fn font(size: f64, bold: bool, color: Color, italic: bool) -> Font {
    Font {
        size,
        bold,
        color,
        italic,
    }
}

/// Thin border on all four sides
pub fn border(color: Color) -> Border {
    Border::uniform(Side::thin(color))
}

pub fn align(horizontal: HAlign, vertical: VAlign, wrap: bool) -> Alignment {
    Alignment {
        horizontal,
        vertical,
        wrap,
    }
}

/// Centered both ways, no wrapping
pub fn centered() -> Alignment {
    Alignment::default()
}

/// Left aligned, vertically centered
pub fn left() -> Alignment {
    align(HAlign::Left, VAlign::Center, false)
}

/// Combined cell style. Every part is optional; unset parts keep the
/// workbook defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    pub fill: Option<Fill>,
    pub font: Option<Font>,
    pub align: Option<Alignment>,
    pub border: Option<Border>,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(fill(color));
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Striped body cell: alternating white / light gray rows with a thin gray grid
    pub fn striped(stripe: bool, font: Font, align: Alignment) -> Self {
        let bg = if stripe { LIGHT_GRAY } else { WHITE };
        Self::new()
            .fill(bg)
            .font(font)
            .align(align)
            .border(border(MED_GRAY))
    }

    /// Render into a writer format
    pub fn format(&self) -> Format {
        let mut format = Format::new().set_font_name(FONT_NAME);

        if let Some(Fill(color)) = self.fill {
            format = format.set_background_color(color);
        }

        if let Some(font) = self.font {
            format = format
                .set_font_size(font.size)
                .set_font_color(font.color);
            if font.bold {
                format = format.set_bold();
            }
            if font.italic {
                format = format.set_italic();
            }
        }

        if let Some(alignment) = self.align {
            format = format.set_align(match alignment.horizontal {
                HAlign::Left => FormatAlign::Left,
                HAlign::Center => FormatAlign::Center,
                HAlign::Right => FormatAlign::Right,
            });
            format = format.set_align(match alignment.vertical {
                VAlign::Top => FormatAlign::Top,
                VAlign::Center => FormatAlign::VerticalCenter,
                VAlign::Bottom => FormatAlign::Bottom,
            });
            if alignment.wrap {
                format = format.set_text_wrap();
            }
        }

        if let Some(edges) = self.border {
            if let Some(side) = edges.top {
                format = format
                    .set_border_top(side.style)
                    .set_border_top_color(side.color);
            }
            if let Some(side) = edges.bottom {
                format = format
                    .set_border_bottom(side.style)
                    .set_border_bottom_color(side.color);
            }
            if let Some(side) = edges.left {
                format = format
                    .set_border_left(side.style)
                    .set_border_left_color(side.color);
            }
            if let Some(side) = edges.right {
                format = format
                    .set_border_right(side.style)
                    .set_border_right_color(side.color);
            }
        }

        format
    }
}
