//! Theme color resolution.

use ratatui::style::Color;
use std::str::FromStr;

use crate::domain::entities::ColorRef;
use crate::infrastructure::config::ThemeConfig;

/// Terminal colors resolved from theme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Message text.
    pub chat_msg: Color,
    /// Presence notices.
    pub chat_msg_presence: Color,
    /// Error notices.
    pub error: Color,
    /// Timestamps and unresolved tokens.
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Palette {
    /// Resolves every theme token, falling back to built-in colors.
    #[must_use]
    pub fn from_config(theme: &ThemeConfig) -> Self {
        Self {
            chat_msg: parse_color(theme.chat_msg.as_str(), Color::Reset),
            chat_msg_presence: parse_color(theme.chat_msg_presence.as_str(), Color::Gray),
            error: parse_color(theme.error.as_str(), Color::Red),
            muted: parse_color(theme.muted.as_str(), Color::DarkGray),
        }
    }

    /// Resolves a style color token, falling back to the muted color.
    #[must_use]
    pub fn resolve(&self, color: &ColorRef) -> Color {
        parse_color(color.as_str(), self.muted)
    }
}

fn parse_color(s: &str, fallback: Color) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => fallback,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let expand = |c: &str| u8::from_str_radix(&c.repeat(2), 16).map_err(|_| ());
        Ok((expand(&s[0..1])?, expand(&s[1..2])?, expand(&s[2..3])?))
    } else {
        Err(())
    }
}
