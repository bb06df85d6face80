//! Terminal output sink.
//!
//! One `Console` is built at startup and handed to every drawing call. It is
//! generic over the writer so tests can render into a `Vec<u8>`.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, ContentStyle, Print, PrintStyledContent};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use tracing::warn;

use crate::font::block_width;
use crate::panel::{Panel, StyledLine, fit, style};

const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct Console<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl Console<Stdout> {
    /// Console over stdout, sized from the terminal (80x24 if unknown).
    pub fn stdout() -> Self {
        let (width, height) = terminal::size().unwrap_or_else(|err| {
            warn!(%err, "cannot read terminal size, assuming 80x24");
            FALLBACK_SIZE
        });
        let (width, height) = if width == 0 || height == 0 {
            FALLBACK_SIZE
        } else {
            (width, height)
        };
        Self::new(io::stdout(), width, height)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self { out, width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    /// Clears the screen and draws `panel` centered in the viewport.
    pub fn present(&mut self, panel: &Panel) -> io::Result<()> {
        let rows = panel.render(self.width);
        let x = self.width.saturating_sub(panel.outer_width(self.width)) / 2;
        let y = self.top_for(rows.len());

        queue!(self.out, Clear(ClearType::All))?;
        for (i, row) in rows.iter().enumerate() {
            queue!(self.out, MoveTo(x, y.saturating_add(i as u16)))?;
            for span in row {
                queue!(
                    self.out,
                    PrintStyledContent(span.style.apply(span.text.as_str()))
                )?;
            }
        }
        self.park_below(y, rows.len())
    }

    /// Clears the screen and draws borderless lines centered as one block.
    pub fn present_block(&mut self, lines: &[StyledLine]) -> io::Result<()> {
        let width = block_width(&lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>())
            .min(usize::from(self.width));
        let x = (usize::from(self.width) - width) as u16 / 2;
        let y = self.top_for(lines.len());

        queue!(self.out, Clear(ClearType::All))?;
        for (i, line) in lines.iter().enumerate() {
            let text = fit(&line.text, width);
            queue!(
                self.out,
                MoveTo(x, y.saturating_add(i as u16)),
                PrintStyledContent(line.style.apply(text.trim_end()))
            )?;
        }
        self.park_below(y, lines.len())
    }

    /// Writes one line of colored text at the cursor.
    pub fn notice(&mut self, text: &str, color: Color) -> io::Result<()> {
        let styled: ContentStyle = style(color, false);
        queue!(self.out, PrintStyledContent(styled.apply(text)), Print("\r\n"))?;
        self.out.flush()
    }

    /// Emits the audible alert sequence.
    pub fn bell(&mut self, bell: &str) -> io::Result<()> {
        queue!(self.out, Print(bell))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn top_for(&self, rows: usize) -> u16 {
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        self.height.saturating_sub(rows) / 2
    }

    /// Leaves the cursor on the line after the drawing so later output
    /// (the interrupted notice, the shell prompt) lands below it.
    fn park_below(&mut self, top: u16, rows: usize) -> io::Result<()> {
        let below = top.saturating_add(u16::try_from(rows).unwrap_or(u16::MAX));
        queue!(self.out, MoveTo(0, below.min(self.height.saturating_sub(1))))?;
        self.out.flush()
    }
}

/// Hides the terminal cursor until dropped.
pub struct HiddenCursor;

impl HiddenCursor {
    pub fn hide() -> io::Result<Self> {
        execute!(io::stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::BorderKind;

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn present_draws_border_title_and_body() {
        let mut console = Console::new(Vec::new(), 40, 12);
        let panel = Panel {
            body: vec![StyledLine::new("12:34", style(Color::Cyan, true))],
            title: "COUNTDOWN".to_string(),
            border: BorderKind::Rounded,
            border_color: Color::Blue,
            padding: (1, 2),
            width: Some(20),
        };
        console.present(&panel).unwrap();

        let out = output(console);
        assert!(out.contains(" COUNTDOWN "));
        assert!(out.contains("12:34"));
        assert!(out.contains('╭'));
        assert!(out.contains('╯'));
    }

    #[test]
    fn present_block_writes_every_line() {
        let mut console = Console::new(Vec::new(), 40, 12);
        let lines = vec![
            StyledLine::new("  *  *", style(Color::Yellow, false)),
            StyledLine::new(" \\o/", style(Color::Yellow, false)),
        ];
        console.present_block(&lines).unwrap();

        let out = output(console);
        assert!(out.contains("  *  *"));
        assert!(out.contains(" \\o/"));
    }

    #[test]
    fn notice_and_bell_reach_the_writer() {
        let mut console = Console::new(Vec::new(), 40, 12);
        console.notice("Countdown interrupted.", Color::Yellow).unwrap();
        console.bell("\x07").unwrap();

        let out = output(console);
        assert!(out.contains("Countdown interrupted."));
        assert!(out.ends_with('\x07'));
    }

    #[test]
    fn oversized_drawings_do_not_underflow() {
        let mut console = Console::new(Vec::new(), 10, 2);
        let lines: Vec<StyledLine> = (0..5)
            .map(|_| StyledLine::new("a line much wider than ten", ContentStyle::new()))
            .collect();
        console.present_block(&lines).unwrap();
        assert!(output(console).contains("a line muc"));
    }
}
