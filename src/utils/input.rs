//! Input sanitization for the single-line search box.

/// Flatten pasted or programmatic text into one line.
///
/// Tabs and line breaks become single spaces and other control characters
/// are dropped so the search box never grows a second row.
pub fn sanitize_search_input(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    let mut last_was_break = false;

    for c in text.chars() {
        match c {
            '\t' | '\r' | '\n' => {
                if !last_was_break {
                    sanitized.push(' ');
                }
                last_was_break = true;
                continue;
            }
            _ if !c.is_control() => sanitized.push(c),
            _ => {}
        }
        last_was_break = false;
    }

    sanitized
}
