use crate::core::config::data::Config;

fn or_default(value: Option<impl ToString>, effective: impl ToString) -> String {
    match value {
        Some(value) => value.to_string(),
        None => format!("{} (default)", effective.to_string()),
    }
}

impl Config {
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "  model: {}",
                or_default(self.model.as_deref(), self.effective_model())
            ),
            format!(
                "  base-url: {}",
                or_default(self.base_url.as_deref(), self.effective_base_url())
            ),
            format!(
                "  timeout: {}",
                or_default(
                    self.request_timeout_secs.map(|secs| format!("{secs}s")),
                    format!("{}s", self.request_timeout().as_secs())
                )
            ),
            format!(
                "  web-search: {}",
                or_default(
                    self.web_search.map(on_off),
                    on_off(self.web_search_enabled())
                )
            ),
            format!("  theme: {}", or_default(self.theme.as_deref(), "gilded")),
        ];

        let picks = self.effective_quick_picks();
        let suffix = if self.quick_picks.is_empty() {
            " (default)"
        } else {
            ""
        };
        lines.push(format!("  quick-picks: {}{suffix}", picks.join("; ")));
        lines
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        for line in self.describe() {
            println!("{line}");
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
