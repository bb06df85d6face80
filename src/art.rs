//! Fixed art, captions and palettes. Everything is picked by `key % len`.

use crossterm::style::Color;

pub type Art = &'static [&'static str];

pub const CONCERT: [Art; 2] = [
    &[
        r"  \o/ \m/ \o/    THE FINAL    \o/ \m/ \o/",
        r"   |   |   |     COUNTDOWN      |   |   |",
        r"  / \  |  / \                  / \  |  / \",
        r"*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*",
        r"  \o/ \o/ \o/ \o/ \o/ \o/ \o/ \o/ \o/ \o/",
        r"   |   |   |   |   |   |   |   |   |   |",
    ],
    &[
        r"  \o/ \m/ \o/    THE FINAL    \o/ \m/ \o/",
        r"   |   |   |     COUNTDOWN      |   |   |",
        r"  / >  |  / >                  / >  |  / >",
        r"*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*",
        r"  \o/ \o/ \m/ \o/ \o/ \m/ \o/ \o/ \m/ \o/",
        r"   |   |   |   |   |   |   |   |   |   |",
    ],
];

/// Shown for the last few seconds instead of [`CONCERT`].
pub const CONCERT_INTENSE: [Art; 2] = [
    &[
        r"  \m/ \m/ \m/    THE FINAL    \m/ \m/ \m/",
        r"   |   |   |     COUNTDOWN      |   |   |",
        r"  / \  |  / \     * * * *      / \  |  / \",
        r"*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*",
        r"  \o/ \m/ \o/ \m/ \o/ \m/ \o/ \m/ \o/ \m/",
        r" /|\  |  /|\  |  /|\  |  /|\  |  /|\  |",
    ],
    &[
        r"  \m/ \m/ \m/    THE FINAL    \m/ \m/ \m/",
        r" _|_  |  _|_    COUNTDOWN     _|_  |  _|_",
        r"  / \  |  / \     * * * *      / \  |  / \",
        r"*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*·*",
        r"  \m/ \o/ \m/ \o/ \m/ \o/ \m/ \o/ \m/ \o/",
        r"   |  /|\  |  /|\  |  /|\  |  /|\  |  /|\",
    ],
];

pub const FIREWORKS: [Art; 3] = [
    &[
        r"      *    *       *    *      *",
        r"    *   *     *  *    *   *      *",
        r"   *      * *     .    *       *",
        r"  *  *      *     *       *   *",
        r"   *    *    *  *    *   *    *",
        r"      *   *    *   *    *   *",
        r"    *        *      *       *",
        r"       *  *     *      *     *",
    ],
    &[
        r"     \o/     \o/      \o/    \o/",
        r"      |       |        |      |",
        r"     / \     / \      / \    / \",
        r"    *   *   *   *    *   *  *   *",
        r"   *     * *     *  *     **     *",
        r"  *       *       **       *       *",
        r" *         *     *  *     *         *",
        r"*           *   *    *   *           *",
    ],
    &[
        r"     .'.   .'.    .'.    .'.   .'.",
        r"    :   : :   :  :   :  :   : :   :",
        r"     '.'   '.'    '.'    '.'   '.'",
        r"    * * * * * * * * * * * * * * * *",
        r"   *   *   *   *   *   *   *   *   *",
        r"  *     *     *     *     *     *   *",
        r" *       *       *       *       *   *",
        r"*         *         *         *       *",
    ],
];

/// Caption above the caption threshold.
pub const STEADY_PHRASE: &str = "THE FINAL COUNTDOWN";

pub const PHRASES: [&str; 5] = [
    "COUNTDOWN INITIATED",
    "GET READY FOR LIFTOFF",
    "FINAL MOMENTS APPROACHING",
    "PREPARE FOR THE FINALE",
    "THE MOMENT IS COMING",
];

pub const FINAL_PALETTE: [Color; 3] = [Color::Blue, Color::Yellow, Color::Red];
pub const INTENSE_PALETTE: [Color; 3] = [Color::Red, Color::White, Color::Yellow];
pub const CROWD_PALETTE: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
];
pub const FIREWORKS_PALETTE: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Yellow,
];
pub const FLOURISH_PALETTE: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
];

/// `items[key % items.len()]`. Tables here are never empty.
pub fn pick<T: Copy>(items: &[T], key: u64) -> T {
    items[(key % items.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn pick_wraps_by_modulo() {
        assert_eq!(pick(&PHRASES, 0), PHRASES[0]);
        assert_eq!(pick(&PHRASES, 7), PHRASES[2]);
        assert_eq!(pick(&FINAL_PALETTE, 10), Color::Yellow);
        assert_eq!(pick(&INTENSE_PALETTE, 3), Color::Red);
    }

    #[test]
    fn motif_frames_share_shape() {
        for set in [&CONCERT, &CONCERT_INTENSE] {
            for art in set.iter() {
                assert_eq!(art.len(), 6);
                assert!(art.iter().all(|line| line.width() <= 43));
            }
        }
        assert!(FIREWORKS.iter().all(|art| art.len() == 8));
    }
}
