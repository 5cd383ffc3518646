use std::fmt;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationChoice {
    Yes,
    No,
}

#[derive(Debug, Clone)]
pub struct UiError {
    message: String,
}

impl UiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UiError {}

fn read_line(prompt: &str) -> Result<String, UiError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|err| UiError::new(err.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|err| UiError::new(err.to_string()))?;
    Ok(input)
}

pub fn prompt_api_key(existing: bool) -> Result<String, UiError> {
    println!("🔐 Beacon Authentication Setup");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    if existing {
        println!("A Gemini API key is already stored; entering a new one replaces it.");
    }
    println!("Create a key at https://aistudio.google.com/apikey");
    println!();

    let input = read_line("Enter your Gemini API key: ")?;
    parse_api_key(&input)
}

pub fn prompt_confirmation(question: &str) -> Result<ConfirmationChoice, UiError> {
    let input = read_line(&format!("{question} [y/N]: "))?;
    Ok(parse_confirmation(&input))
}

pub fn parse_api_key(input: &str) -> Result<String, UiError> {
    let key = input.trim();
    if key.is_empty() {
        return Err(UiError::new("API key cannot be empty"));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(UiError::new("API key must not contain whitespace"));
    }
    Ok(key.to_string())
}

pub fn parse_confirmation(input: &str) -> ConfirmationChoice {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => ConfirmationChoice::Yes,
        _ => ConfirmationChoice::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_input_is_trimmed_and_validated() {
        assert_eq!(parse_api_key("  AIza-123\n").unwrap(), "AIza-123");
        assert!(parse_api_key("\n").is_err());
        assert!(parse_api_key("two words").is_err());
    }

    #[test]
    fn confirmation_defaults_to_no() {
        assert_eq!(parse_confirmation("y\n"), ConfirmationChoice::Yes);
        assert_eq!(parse_confirmation("YES"), ConfirmationChoice::Yes);
        assert_eq!(parse_confirmation(""), ConfirmationChoice::No);
        assert_eq!(parse_confirmation("nope"), ConfirmationChoice::No);
    }
}
