use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub heading: Option<String>,
    pub border: Option<String>,
    pub focus_border: Option<String>,
    pub future_year: Option<String>,
    pub error: Option<String>,
    pub tag: Option<String>,
    pub map_outline: Option<String>,
    pub map_grid: Option<String>,
    pub reticle: Option<String>,
    pub input_text: Option<String>,
    pub input_cursor_modifiers: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

pub const DEFAULT_THEME_ID: &str = "gilded";

pub fn load_builtin_themes() -> Vec<ThemeSpec> {
    const CONFIG_CONTENT: &str = include_str!("../builtin_themes.toml");
    let config: BuiltinThemesConfig =
        toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtin_themes.toml");
    config.themes
}

pub fn find_builtin_theme(id: &str) -> Option<ThemeSpec> {
    load_builtin_themes()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id.trim()))
}

pub fn builtin_theme_ids() -> Vec<String> {
    load_builtin_themes().into_iter().map(|t| t.id).collect()
}
