//! Bordered, titled container for a block of styled lines.
//!
//! The body is centered as a block: lines keep their relative alignment so
//! multi-line art is never skewed. Lines wider than the inner area are
//! cropped, so a panel with a fixed width always renders at that width.

use crossterm::style::{Attribute, Color, ContentStyle};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::font::block_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Rounded,
    Double,
}

struct BorderChars {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderKind {
    fn chars(self) -> BorderChars {
        match self {
            BorderKind::Rounded => BorderChars {
                top_left: "╭",
                top_right: "╮",
                bottom_left: "╰",
                bottom_right: "╯",
                horizontal: "─",
                vertical: "│",
            },
            BorderKind::Double => BorderChars {
                top_left: "╔",
                top_right: "╗",
                bottom_left: "╚",
                bottom_right: "╝",
                horizontal: "═",
                vertical: "║",
            },
        }
    }
}

/// Foreground color with optional bold.
pub fn style(color: Color, bold: bool) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(color);
    if bold {
        style.attributes.set(Attribute::Bold);
    }
    style
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    pub text: String,
    pub style: ContentStyle,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::new("", ContentStyle::new())
    }
}

/// One run of same-styled text within a rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: ContentStyle,
}

pub type Row = Vec<Span>;

#[cfg(test)]
pub fn row_width(row: &[Span]) -> usize {
    row.iter().map(|span| span.text.width()).sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub body: Vec<StyledLine>,
    pub title: String,
    pub border: BorderKind,
    pub border_color: Color,
    /// (vertical, horizontal) blank cells inside the border.
    pub padding: (u16, u16),
    /// Fixed outer width; `None` sizes the panel to its content.
    pub width: Option<u16>,
}

impl Panel {
    /// Outer width once clamped to `max_width` cells.
    pub fn outer_width(&self, max_width: u16) -> u16 {
        let natural = self.width.unwrap_or_else(|| {
            let content = block_width(&self.body_texts()) as u16;
            content.saturating_add(2 + 2 * self.padding.1)
        });
        natural.min(max_width).max(4)
    }

    /// Rows of exactly `outer_width(max_width)` cells each.
    pub fn render(&self, max_width: u16) -> Vec<Row> {
        let chars = self.border.chars();
        let border = style(self.border_color, false);
        let plain = ContentStyle::new();

        let inner = usize::from(self.outer_width(max_width)) - 2;
        let pad_x = usize::from(self.padding.1).min(inner / 2);
        let content = inner - 2 * pad_x;
        let block = block_width(&self.body_texts()).min(content);
        let left = (content - block) / 2;
        let right = content - block - left;

        let mut rows = Vec::with_capacity(self.body.len() + 2 + 2 * usize::from(self.padding.0));
        rows.push(self.title_row(&chars, inner, border));

        let blank_row = || {
            vec![
                span(chars.vertical, border),
                span(&" ".repeat(inner), plain),
                span(chars.vertical, border),
            ]
        };

        for _ in 0..self.padding.0 {
            rows.push(blank_row());
        }
        for line in &self.body {
            rows.push(vec![
                span(chars.vertical, border),
                span(&" ".repeat(pad_x + left), plain),
                span(&fit(&line.text, block), line.style),
                span(&" ".repeat(right + pad_x), plain),
                span(chars.vertical, border),
            ]);
        }
        for _ in 0..self.padding.0 {
            rows.push(blank_row());
        }

        rows.push(vec![span(
            &format!(
                "{}{}{}",
                chars.bottom_left,
                chars.horizontal.repeat(inner),
                chars.bottom_right
            ),
            border,
        )]);
        rows
    }

    fn title_row(&self, chars: &BorderChars, inner: usize, border: ContentStyle) -> Row {
        let title = if self.title.is_empty() {
            String::new()
        } else {
            crop(&format!(" {} ", self.title), inner)
        };
        let remaining = inner - title.width();
        let left = remaining / 2;

        let mut title_style = border;
        title_style.attributes.set(Attribute::Bold);

        vec![
            span(
                &format!("{}{}", chars.top_left, chars.horizontal.repeat(left)),
                border,
            ),
            span(&title, title_style),
            span(
                &format!(
                    "{}{}",
                    chars.horizontal.repeat(remaining - left),
                    chars.top_right
                ),
                border,
            ),
        ]
    }

    fn body_texts(&self) -> Vec<&str> {
        self.body.iter().map(|line| line.text.as_str()).collect()
    }
}

fn span(text: &str, style: ContentStyle) -> Span {
    Span {
        text: text.to_string(),
        style,
    }
}

/// Longest prefix of `text` that fits in `width` cells.
pub fn crop(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Crop `text` to `width` cells, then right-pad to exactly `width`.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = crop(text, width);
    let used = out.width();
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(body: &[&str], width: Option<u16>) -> Panel {
        Panel {
            body: body
                .iter()
                .map(|text| StyledLine::new(*text, style(Color::Cyan, true)))
                .collect(),
            title: "COUNTDOWN".to_string(),
            border: BorderKind::Rounded,
            border_color: Color::Blue,
            padding: (1, 2),
            width,
        }
    }

    fn text(row: &Row) -> String {
        row.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn fixed_width_panel_renders_every_row_at_that_width() {
        let p = panel(&["short", "a considerably longer line than the panel"], Some(20));
        let rows = p.render(200);
        assert_eq!(rows.len(), 2 + 2 + 2);
        assert!(rows.iter().all(|row| row_width(row) == 20));
    }

    #[test]
    fn content_sized_panel_fits_body_plus_padding() {
        let p = panel(&["12345"], None);
        assert_eq!(p.outer_width(200), 5 + 2 + 4);
        let rows = p.render(200);
        assert!(rows.iter().all(|row| row_width(row) == 11));
    }

    #[test]
    fn width_is_clamped_to_terminal() {
        let p = panel(&["x"], Some(120));
        assert_eq!(p.outer_width(80), 80);
        assert!(p.render(80).iter().all(|row| row_width(row) == 80));
    }

    #[test]
    fn title_is_centered_in_top_border() {
        let rows = panel(&["x"], Some(21)).render(200);
        assert_eq!(text(&rows[0]), "╭──── COUNTDOWN ────╮");
        assert_eq!(text(&rows[rows.len() - 1]), format!("╰{}╯", "─".repeat(19)));
    }

    #[test]
    fn body_block_keeps_relative_alignment() {
        let rows = panel(&["ab", "abcd"], Some(14)).render(200);
        assert_eq!(text(&rows[2]), "│    ab      │");
        assert_eq!(text(&rows[3]), "│    abcd    │");
    }

    #[test]
    fn double_border_uses_double_lines() {
        let mut p = panel(&["x"], None);
        p.border = BorderKind::Double;
        p.title = "Time's Up".to_string();
        let rows = p.render(200);
        assert!(text(&rows[0]).starts_with('╔'));
        assert!(text(&rows[1]).starts_with('║'));
    }

    #[test]
    fn fit_crops_and_pads_by_cells() {
        assert_eq!(fit("██:██", 3), "██:");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("", 0), "");
    }
}
