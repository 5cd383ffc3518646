use crate::ui::builtin_themes::{find_builtin_theme, ThemeSpec, DEFAULT_THEME_ID};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub id: String,
    // Overall background color to paint the full frame
    pub background_color: Color,
    pub text_style: Style,
    pub muted_style: Style,
    pub accent_style: Style,
    pub heading_style: Style,

    // Chrome
    pub border_style: Style,
    pub focus_border_style: Style,
    pub future_year_style: Style,
    pub error_style: Style,
    /// Foreground for category tags; the background is the accent color.
    pub tag_style: Style,

    // Map canvas
    pub map_outline_color: Color,
    pub map_grid_color: Color,
    pub reticle_style: Style,

    // Search input
    pub input_text_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    pub fn gilded() -> Self {
        if let Some(spec) = find_builtin_theme(DEFAULT_THEME_ID) {
            return Self::from_spec(&spec);
        }
        // Fallback palette-based theme
        Theme {
            id: DEFAULT_THEME_ID.to_string(),
            background_color: Color::Black,
            text_style: Style::default().fg(Color::White),
            muted_style: Style::default().fg(Color::DarkGray),
            accent_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            heading_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            border_style: Style::default().fg(Color::DarkGray),
            focus_border_style: Style::default().fg(Color::Yellow),
            future_year_style: Style::default().fg(Color::DarkGray),
            error_style: Style::default().fg(Color::LightRed),
            tag_style: Style::default().fg(Color::Black),
            map_outline_color: Color::Yellow,
            map_grid_color: Color::DarkGray,
            reticle_style: Style::default().fg(Color::Yellow),
            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Unknown names fall back to the default theme.
    pub fn from_name(name: &str) -> Self {
        match find_builtin_theme(name) {
            Some(spec) => Self::from_spec(&spec),
            None => Self::gilded(),
        }
    }

    pub fn tag_badge_style(&self) -> Style {
        let bg = self.accent_style.fg.unwrap_or(Color::Yellow);
        self.tag_style.bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Black);

        let color_of = |value: &Option<String>, fallback: Color| {
            value
                .as_deref()
                .and_then(|v| v.split(',').next())
                .and_then(parse_color)
                .unwrap_or(fallback)
        };

        Theme {
            id: spec.id.clone(),
            background_color,
            text_style: parse_style(&spec.text),
            muted_style: parse_style(&spec.muted),
            accent_style: parse_style(&spec.accent),
            heading_style: parse_style(&spec.heading),

            border_style: parse_style(&spec.border),
            focus_border_style: parse_style(&spec.focus_border),
            future_year_style: parse_style(&spec.future_year),
            error_style: parse_style(&spec.error),
            tag_style: parse_style(&spec.tag),

            map_outline_color: color_of(&spec.map_outline, Color::Yellow),
            map_grid_color: color_of(&spec.map_grid, Color::DarkGray),
            reticle_style: parse_style(&spec.reticle),

            input_text_style: parse_style(&spec.input_text),
            input_cursor_style: parse_style(&spec.input_cursor_modifiers),
        }
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if let Some(c) = parse_hex_color(&lower) {
        return Some(c);
    }
    match lower.as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark-grey" | "darkgray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "light_red" | "light-red" => Some(Color::LightRed),
        "yellow" => Some(Color::Yellow),
        "light_yellow" | "light-yellow" => Some(Color::LightYellow),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Comma-separated colors and modifiers, e.g. `#f59e0b,bold`.
fn parse_style(s: &Option<String>) -> Style {
    let mut style = Style::default();
    if let Some(ref spec) = s {
        for tok in spec.split(',').map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if let Some(color) = parse_color(tok) {
                style = style.fg(color);
            } else {
                match tok.to_ascii_lowercase().as_str() {
                    "bold" => style = style.add_modifier(Modifier::BOLD),
                    "reversed" => style = style.add_modifier(Modifier::REVERSED),
                    "italic" => style = style.add_modifier(Modifier::ITALIC),
                    "dim" => style = style.add_modifier(Modifier::DIM),
                    _ => {}
                }
            }
        }
    }
    style
}
