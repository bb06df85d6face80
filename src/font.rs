//! Large-glyph fonts for the clock face and the completion banner.
//!
//! Two families live here. The bitmap fonts (`Colossal`, `Block`) scale a
//! shared 5-row pixel mask with solid block cells. The line-art fonts
//! (`Standard`, `Small`) carry literal rows. Every font covers the digits,
//! `:`, space and the letters of `COMPLETED!`; anything else is an
//! [`FontError::UnsupportedGlyph`] that callers recover from.

use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::error::FontError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Block cells four columns wide, rows doubled.
    Colossal,
    /// Block cells two columns wide.
    Block,
    /// Five-row line art with slashes, pipes and underscores.
    Standard,
    /// Three-row seven-segment style.
    Small,
}

impl Font {
    /// Clock face candidates, largest first.
    pub const PREFERENCE: [Font; 4] = [Font::Colossal, Font::Block, Font::Standard, Font::Small];

    /// Completion banner candidates, largest first.
    pub const BANNER_PREFERENCE: [Font; 3] = [Font::Block, Font::Standard, Font::Small];

    /// The font every selection falls back to.
    pub const SMALLEST: Font = Font::Small;

    pub fn height(self) -> usize {
        match self {
            Font::Colossal => 10,
            Font::Block | Font::Standard => 5,
            Font::Small => 3,
        }
    }

    /// Blank columns between adjacent glyphs.
    fn gap(self) -> usize {
        match self {
            Font::Colossal | Font::Block => 2,
            Font::Standard => 0,
            Font::Small => 1,
        }
    }

    /// Render `text` (case-insensitive) to `height()` lines of equal width.
    pub fn render(self, text: &str) -> Result<Vec<String>, FontError> {
        let mut lines = vec![String::new(); self.height()];
        let spacer = " ".repeat(self.gap());

        for (i, ch) in text.to_uppercase().chars().enumerate() {
            let rows = self.glyph_rows(ch)?;
            for (line, row) in lines.iter_mut().zip(rows) {
                if i > 0 {
                    line.push_str(&spacer);
                }
                line.push_str(&row);
            }
        }

        Ok(lines)
    }

    /// Rendered width of `text` in terminal cells.
    pub fn measure(self, text: &str) -> Result<usize, FontError> {
        self.render(text).map(|lines| block_width(&lines))
    }

    fn glyph_rows(self, ch: char) -> Result<Vec<String>, FontError> {
        let rows = match self {
            Font::Colossal => pixel_glyph(ch).map(|mask| scale(mask, "████", 2)),
            Font::Block => pixel_glyph(ch).map(|mask| scale(mask, "██", 1)),
            Font::Standard => standard_glyph(ch).map(to_owned_rows),
            Font::Small => small_glyph(ch).map(to_owned_rows),
        };
        rows.ok_or(FontError::UnsupportedGlyph { font: self, ch })
    }
}

/// Widest line of a rendered block, in terminal cells.
pub fn block_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| line.as_ref().width())
        .max()
        .unwrap_or(0)
}

/// First candidate whose rendering of `text` fits in `max_width` cells.
///
/// A font that cannot render `text` is skipped, not fatal. `None` means no
/// candidate fits and the caller picks its own fallback.
pub fn select_font(candidates: &[Font], text: &str, max_width: usize) -> Option<Font> {
    candidates.iter().copied().find(|font| match font.measure(text) {
        Ok(width) => width <= max_width,
        Err(err) => {
            warn!(%err, "skipping font");
            false
        }
    })
}

/// Largest width allowed by `ratio` of the terminal width.
pub fn width_budget(terminal_width: u16, ratio: f32) -> usize {
    (f32::from(terminal_width) * ratio).floor() as usize
}

fn scale(mask: &[&str], pixel: &str, row_repeat: usize) -> Vec<String> {
    let blank = " ".repeat(pixel.width());
    mask.iter()
        .map(|row| {
            row.chars()
                .map(|cell| if cell == '#' { pixel } else { blank.as_str() })
                .collect::<String>()
        })
        .flat_map(|row| std::iter::repeat_n(row, row_repeat))
        .collect()
}

fn to_owned_rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|row| (*row).to_string()).collect()
}

/// 3-wide pixel masks shared by the bitmap fonts. `#` is lit.
fn pixel_glyph(ch: char) -> Option<&'static [&'static str]> {
    let rows: &'static [&'static str] = match ch {
        '0' => &["###", "# #", "# #", "# #", "###"],
        '1' => &[" # ", "## ", " # ", " # ", "###"],
        '2' => &["###", "  #", "###", "#  ", "###"],
        '3' => &["###", "  #", " ##", "  #", "###"],
        '4' => &["# #", "# #", "###", "  #", "  #"],
        '5' => &["###", "#  ", "###", "  #", "###"],
        '6' => &["###", "#  ", "###", "# #", "###"],
        '7' => &["###", "  #", "  #", "  #", "  #"],
        '8' => &["###", "# #", "###", "# #", "###"],
        '9' => &["###", "# #", "###", "  #", "###"],
        ':' => &[" ", "#", " ", "#", " "],
        ' ' => &["  ", "  ", "  ", "  ", "  "],
        '!' => &["#", "#", "#", " ", "#"],
        'C' => &["###", "#  ", "#  ", "#  ", "###"],
        'D' => &["## ", "# #", "# #", "# #", "## "],
        'E' => &["###", "#  ", "## ", "#  ", "###"],
        'L' => &["#  ", "#  ", "#  ", "#  ", "###"],
        'M' => &["#   #", "## ##", "# # #", "#   #", "#   #"],
        'O' => &["###", "# #", "# #", "# #", "###"],
        'P' => &["###", "# #", "###", "#  ", "#  "],
        'T' => &["###", " # ", " # ", " # ", " # "],
        _ => return None,
    };
    Some(rows)
}

fn standard_glyph(ch: char) -> Option<&'static [&'static str]> {
    let rows: &'static [&'static str] = match ch {
        '0' => &["  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\___/ "],
        '1' => &[" _ ", "/ |", "| |", "| |", "|_|"],
        '2' => &[" ____  ", "|___ \\ ", "  __) |", " / __/ ", "|_____|"],
        '3' => &[" _____ ", "|___ / ", "  |_ \\ ", " ___) |", "|____/ "],
        '4' => &[" _  _   ", "| || |  ", "| || |_ ", "|__   _|", "   |_|  "],
        '5' => &[" ____  ", "| ___| ", "|___ \\ ", " ___) |", "|____/ "],
        '6' => &["  __   ", " / /_  ", "| '_ \\ ", "| (_) |", " \\___/ "],
        '7' => &[" _____ ", "|___  |", "   / / ", "  / /  ", " /_/   "],
        '8' => &["  ___  ", " ( _ ) ", " / _ \\ ", "| (_) |", " \\___/ "],
        '9' => &["  ___  ", " / _ \\ ", "| (_) |", " \\__, |", "   /_/ "],
        ':' => &["   ", " _ ", "(_)", " _ ", "(_)"],
        ' ' => &["    ", "    ", "    ", "    ", "    "],
        '!' => &[" _ ", "| |", "| |", "|_|", "(_)"],
        'C' => &["  ____ ", " / ___|", "| |    ", "| |___ ", " \\____|"],
        'D' => &[" ____  ", "|  _ \\ ", "| | | |", "| |_| |", "|____/ "],
        'E' => &[" _____ ", "| ____|", "|  _|  ", "| |___ ", "|_____|"],
        'L' => &[" _     ", "| |    ", "| |    ", "| |___ ", "|_____|"],
        'M' => &[" __  __ ", "|  \\/  |", "| |\\/| |", "| |  | |", "|_|  |_|"],
        'O' => &["  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\___/ "],
        'P' => &[" ____  ", "|  _ \\ ", "| |_) |", "|  __/ ", "|_|    "],
        'T' => &[" _____ ", "|_   _|", "  | |  ", "  | |  ", "  |_|  "],
        _ => return None,
    };
    Some(rows)
}

fn small_glyph(ch: char) -> Option<&'static [&'static str]> {
    let rows: &'static [&'static str] = match ch {
        '0' => &[" _ ", "| |", "|_|"],
        '1' => &["   ", "  |", "  |"],
        '2' => &[" _ ", " _|", "|_ "],
        '3' => &[" _ ", " _|", " _|"],
        '4' => &["   ", "|_|", "  |"],
        '5' => &[" _ ", "|_ ", " _|"],
        '6' => &[" _ ", "|_ ", "|_|"],
        '7' => &[" _ ", "  |", "  |"],
        '8' => &[" _ ", "|_|", "|_|"],
        '9' => &[" _ ", "|_|", " _|"],
        ':' => &[" ", ".", "."],
        ' ' => &["  ", "  ", "  "],
        '!' => &[" ", "|", "."],
        'C' => &[" _ ", "|  ", "|_ "],
        'D' => &[" _ ", "| \\", "|_/"],
        'E' => &[" _ ", "|_ ", "|_ "],
        'L' => &["   ", "|  ", "|_ "],
        'M' => &["    ", "|\\/|", "|  |"],
        'O' => &[" _ ", "| |", "|_|"],
        'P' => &[" _ ", "|_|", "|  "],
        'T' => &["___", " | ", " | "],
        _ => return None,
    };
    Some(rows)
}
