//! Frame composition for the running clock.

use crossterm::style::{Color, ContentStyle};
use tracing::warn;

use crate::art::{self, Art};
use crate::config::Config;
use crate::font::{Font, select_font, width_budget};
use crate::panel::{BorderKind, Panel, StyledLine, style};
use crate::timer::format_hms;

/// Font and panel width fixed for the whole run so the clock never jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub font: Font,
    pub panel_width: u16,
}

impl Layout {
    pub fn choose(duration_secs: u64, terminal_width: u16, config: &Config) -> Self {
        let widest = widest_clock(duration_secs);
        let budget = width_budget(terminal_width, config.font_width_ratio);

        let font = select_font(&Font::PREFERENCE, &widest, budget).unwrap_or_else(|| {
            warn!(budget, "no font fits the terminal, using the smallest");
            Font::SMALLEST
        });
        let glyph_width = font.measure(&widest).unwrap_or(widest.len());
        let panel_width = u16::try_from(glyph_width)
            .unwrap_or(u16::MAX)
            .saturating_add(config.panel_margin)
            .min(terminal_width);

        Self { font, panel_width }
    }
}

/// The widest clock string this run can ever display. Remaining time only
/// shrinks, so the starting time with every digit zeroed bounds every frame.
pub fn widest_clock(duration_secs: u64) -> String {
    format_hms(duration_secs)
        .chars()
        .map(|ch| if ch.is_ascii_digit() { '0' } else { ch })
        .collect()
}

pub struct FrameComposer<'a> {
    config: &'a Config,
    layout: Layout,
}

impl<'a> FrameComposer<'a> {
    pub fn new(config: &'a Config, layout: Layout) -> Self {
        Self { config, layout }
    }

    /// The bordered panel for one tick.
    pub fn compose(&self, remaining: u64) -> Panel {
        let time = format_hms(remaining);

        if !self.config.is_final(remaining) {
            let body = self.clock_lines(&time, style(Color::DarkCyan, true));
            return self.panel(body, "COUNTDOWN", Color::Blue);
        }

        let color = final_color(remaining, self.config);
        let crowd = crowd_color(remaining, self.config);
        let motif_style = crowd.map_or_else(ContentStyle::new, |c| style(c, false));
        let caption_style = style(crowd.unwrap_or(Color::White), true);

        let mut body = vec![StyledLine::blank()];
        body.extend(
            motif(remaining, self.config)
                .iter()
                .map(|line| StyledLine::new(*line, motif_style)),
        );
        body.push(StyledLine::blank());
        body.push(StyledLine::new(
            format!("      {}", caption(remaining, self.config)),
            caption_style,
        ));
        body.push(StyledLine::blank());
        body.extend(self.clock_lines(&time, style(color, true)));

        self.panel(body, "THE FINAL COUNTDOWN", color)
    }

    fn clock_lines(&self, time: &str, clock_style: ContentStyle) -> Vec<StyledLine> {
        match self.layout.font.render(time) {
            Ok(lines) => lines
                .into_iter()
                .map(|line| StyledLine::new(line, clock_style))
                .collect(),
            Err(err) => {
                warn!(%err, "falling back to plain clock");
                vec![StyledLine::new(time, clock_style)]
            }
        }
    }

    fn panel(&self, body: Vec<StyledLine>, title: &str, border_color: Color) -> Panel {
        Panel {
            body,
            title: title.to_string(),
            border: BorderKind::Rounded,
            border_color,
            padding: (1, 2),
            width: Some(self.layout.panel_width),
        }
    }
}

/// Clock and border color in the final countdown.
pub fn final_color(remaining: u64, config: &Config) -> Color {
    if remaining <= config.intense_secs {
        art::pick(&art::INTENSE_PALETTE, remaining)
    } else {
        art::pick(&art::FINAL_PALETTE, remaining)
    }
}

/// Extra motif and caption color for the last few seconds.
pub fn crowd_color(remaining: u64, config: &Config) -> Option<Color> {
    (remaining <= config.caption_secs).then(|| art::pick(&art::CROWD_PALETTE, remaining))
}

pub fn motif(remaining: u64, config: &Config) -> Art {
    if remaining <= config.intense_secs {
        art::pick(&art::CONCERT_INTENSE, remaining)
    } else {
        art::pick(&art::CONCERT, remaining)
    }
}

pub fn caption(remaining: u64, config: &Config) -> &'static str {
    if remaining <= config.caption_secs {
        art::pick(&art::PHRASES, remaining)
    } else {
        art::STEADY_PHRASE
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use tracing::Level;

    use super::*;
    use crate::panel::row_width;

    fn composer(config: &Config, duration: u64, width: u16) -> FrameComposer<'_> {
        FrameComposer::new(config, Layout::choose(duration, width, config))
    }

    #[test]
    fn layout_prefers_largest_font_that_fits() {
        let config = Config::new();
        assert_eq!(Layout::choose(600, 80, &config).font, Font::Colossal);
        assert_eq!(Layout::choose(7200, 80, &config).font, Font::Block);
        assert_eq!(Layout::choose(7200, 58, &config).font, Font::Standard);
        assert_eq!(Layout::choose(600, 20, &config).font, Font::Small);
    }

    #[test]
    fn layout_falls_back_to_smallest_font_and_clamps_panel() {
        let config = Config::new();
        let layout = Layout::choose(7200, 20, &config);
        assert_eq!(layout.font, Font::Small);
        assert_eq!(layout.panel_width, 20);
    }

    #[test]
    fn layout_panel_adds_margin() {
        let config = Config::new();
        let layout = Layout::choose(7200, 80, &config);
        assert_eq!(layout.font.measure("00:00:00"), Ok(54));
        assert_eq!(layout.panel_width, 64);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn smallest_font_fallback_is_logged_at_warn() {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .without_time()
            .finish();

        let config = Config::new();
        let layout = tracing::subscriber::with_default(subscriber, || {
            Layout::choose(7200, 20, &config)
        });

        assert_eq!(layout.font, Font::SMALLEST);
        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("no font fits the terminal"), "{logged}");
    }

    #[test]
    fn widest_clock_depends_on_hours() {
        assert_eq!(widest_clock(3599), "00:00");
        assert_eq!(widest_clock(3600), "00:00:00");
        assert_eq!(widest_clock(359_999), "00:00:00");
        assert_eq!(widest_clock(360_000), "000:00:00");
        assert_eq!(widest_clock(3_600_000), "0000:00:00");
    }

    #[test]
    fn three_digit_hours_fit_inside_the_panel() {
        let config = Config::new();
        let layout = Layout::choose(360_000, 80, &config);
        let panel = FrameComposer::new(&config, layout).compose(360_000);

        let clock_width = layout.font.measure("100:00:00").unwrap();
        let content_width =
            usize::from(layout.panel_width) - 2 - 2 * usize::from(panel.padding.1);
        assert!(clock_width <= content_width, "{clock_width} > {content_width}");

        let glyphs = layout.font.render("100:00:00").unwrap();
        let rows: Vec<String> = panel
            .render(80)
            .iter()
            .map(|row| row.iter().map(|span| span.text.as_str()).collect())
            .collect();
        for line in &glyphs {
            assert!(rows.iter().any(|row| row.contains(line.as_str())), "cropped: {line:?}");
        }
    }

    #[test]
    fn plain_frame_above_threshold() {
        let config = Config::new();
        let panel = composer(&config, 600, 120).compose(11);
        assert_eq!(panel.title, "COUNTDOWN");
        assert_eq!(panel.border_color, Color::Blue);
        assert_eq!(panel.body.len(), Font::Colossal.height());
    }

    #[test]
    fn final_frame_carries_motif_caption_and_palette_color() {
        let config = Config::new();
        let panel = composer(&config, 600, 120).compose(9);
        assert_eq!(panel.title, "THE FINAL COUNTDOWN");
        assert_eq!(panel.border_color, Color::Blue);

        let texts: Vec<&str> = panel.body.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&art::CONCERT[1][0]));
        assert!(texts.contains(&"      THE FINAL COUNTDOWN"));
    }

    #[test]
    fn final_colors_follow_remaining_modulo() {
        let config = Config::new();
        assert_eq!(final_color(10, &config), Color::Yellow);
        assert_eq!(final_color(9, &config), Color::Blue);
        assert_eq!(final_color(8, &config), Color::Red);
        assert_eq!(final_color(3, &config), Color::Red);
        assert_eq!(final_color(2, &config), Color::Yellow);
        assert_eq!(final_color(1, &config), Color::White);
    }

    #[test]
    fn intense_motif_and_phrases_in_last_seconds() {
        let config = Config::new();
        assert_eq!(motif(4, &config), art::CONCERT[0]);
        assert_eq!(motif(3, &config), art::CONCERT_INTENSE[1]);
        assert_eq!(caption(6, &config), art::STEADY_PHRASE);
        assert_eq!(caption(5, &config), "COUNTDOWN INITIATED");
        assert_eq!(caption(4, &config), "THE MOMENT IS COMING");
        assert_eq!(crowd_color(6, &config), None);
        assert_eq!(crowd_color(2, &config), Some(Color::Green));
    }

    #[test]
    fn unrenderable_clock_falls_back_to_plain_text() {
        let config = Config::new();
        let clock_style = style(Color::Red, true);
        let lines = composer(&config, 600, 120).clock_lines("12?34", clock_style);
        assert_eq!(lines, vec![StyledLine::new("12?34", clock_style)]);
    }

    #[test]
    fn selections_are_pure_in_remaining() {
        let config = Config::new();
        let composer = composer(&config, 120, 100);
        for remaining in 0..=12 {
            assert_eq!(composer.compose(remaining), composer.compose(remaining));
        }
    }

    #[test]
    fn bordered_width_never_changes_during_a_run() {
        let config = Config::new();
        for (duration, width) in [(59, 40), (600, 80), (7200, 80), (7200, 200), (45, 24)] {
            let layout = Layout::choose(duration, width, &config);
            let composer = FrameComposer::new(&config, layout);
            let expected = usize::from(layout.panel_width);
            for remaining in (0..=duration).rev().step_by(7).chain(0..=12) {
                let rows = composer.compose(remaining).render(width);
                assert!(
                    rows.iter().all(|row| row_width(row) == expected),
                    "duration {duration} width {width} remaining {remaining}"
                );
            }
        }
    }
}
