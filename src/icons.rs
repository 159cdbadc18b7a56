//! Condition icons - classification from the free-text condition plus terminal art
//!
//! Art is rendered when the area is tall enough, with an emoji fallback for
//! cramped terminals.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Height of every art variant, in lines
pub const ART_HEIGHT: u16 = 5;

const SUN_LINES: [&str; 5] = [
    r"   \   /   ",
    r"    .-.    ",
    r" - (   ) - ",
    r"    `-'    ",
    r"   /   \   ",
];

const CLOUD_LINES: [&str; 5] = [
    r"           ",
    r"    .--.   ",
    r" .-(    ). ",
    r"(___.__)__)",
    r"           ",
];

const RAIN_CLOUD_LINES: [&str; 3] = [
    r"    .-.    ",
    r"   (   ).  ",
    r"  (___(__) ",
];

const RAIN_DROP_LINES: [&str; 2] = [
    r"  ' ' ' '  ",
    r" ' ' ' '   ",
];

/// Icon chosen from the condition text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Rain,
    Cloud,
    Sun,
}

impl Icon {
    /// Case-insensitive substring match, first match wins: rain beats cloud,
    /// anything else is sun. An empty condition is sun.
    pub fn classify(condition: &str) -> Self {
        let lower = condition.to_lowercase();
        if lower.contains("rain") {
            Icon::Rain
        } else if lower.contains("cloud") {
            Icon::Cloud
        } else {
            Icon::Sun
        }
    }

    /// Emoji representation for when the art doesn't fit
    pub fn emoji(self) -> &'static str {
        match self {
            Icon::Rain => "\u{1f327}\u{fe0f}",
            Icon::Cloud => "\u{2601}\u{fe0f}",
            Icon::Sun => "\u{2600}\u{fe0f}",
        }
    }

    /// Terminal art, [`ART_HEIGHT`] lines tall
    pub fn art(self) -> Text<'static> {
        match self {
            Icon::Sun => tinted(&SUN_LINES, Color::Yellow),
            Icon::Cloud => tinted(&CLOUD_LINES, Color::Rgb(170, 170, 185)),
            Icon::Rain => {
                let mut lines = tinted(&RAIN_CLOUD_LINES, Color::Rgb(160, 160, 175)).lines;
                lines.extend(tinted(&RAIN_DROP_LINES, Color::Rgb(80, 140, 200)).lines);
                Text::from(lines)
            }
        }
    }
}

fn tinted(lines: &[&'static str], color: Color) -> Text<'static> {
    let style = Style::default().fg(color);
    Text::from(
        lines
            .iter()
            .map(|line| Line::from(Span::styled(*line, style)))
            .collect::<Vec<_>>(),
    )
}

/// Art for the given condition, or its emoji when the area is too short
pub fn condition_art(condition: &str, available_height: u16) -> Text<'static> {
    let icon = Icon::classify(condition);
    if available_height >= ART_HEIGHT {
        icon.art()
    } else {
        Text::from(Line::from(icon.emoji()))
    }
}
