/// Configuration module for countdown pacing and layout
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_interval: Duration,
    pub final_tick_interval: Duration,
    pub final_countdown_secs: u64,
    pub intense_secs: u64,
    pub caption_secs: u64,
    pub font_width_ratio: f32,
    pub panel_margin: u16,
    pub firework_cycles: usize,
    pub firework_frame_delay: Duration,
    pub banner_width_ratio: f32,
    pub flourish_redraws: usize,
    pub flourish_delay: Duration,
    pub bell: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            final_tick_interval: Duration::from_millis(50),
            final_countdown_secs: 10,
            intense_secs: 3,
            caption_secs: 5,
            font_width_ratio: 0.9,
            panel_margin: 10,
            firework_cycles: 3,
            firework_frame_delay: Duration::from_millis(200),
            banner_width_ratio: 0.6,
            flourish_redraws: 5,
            flourish_delay: Duration::from_millis(300),
            bell: "\x07".to_string(), // ASCII bell character
        }
    }

    /// True once the countdown has entered its embellished last stretch.
    pub fn is_final(&self, remaining: u64) -> bool {
        remaining <= self.final_countdown_secs
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
