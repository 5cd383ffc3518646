//! One-shot gateway lookups printed to stdout.

use std::error::Error;

use crate::core::app::{FIRST_YEAR, LAST_YEAR};
use crate::core::gateway::Gateway;
use crate::core::news::{LocationState, NewsItem};
use crate::ui::news::{uncharted_text, EMPTY_TEXT};

pub fn format_location(location: &LocationState) -> Vec<String> {
    vec![location.name.clone(), location.coordinate_label()]
}

pub fn format_dispatch(item: &NewsItem) -> Vec<String> {
    let mut lines = vec![
        format!("[{}] {}", item.category.as_str(), item.title),
        format!("  {} • {}", item.location, item.year),
        format!("  {}", item.summary),
    ];
    for source in &item.sources {
        if source.url.is_empty() {
            lines.push(format!("  Ref: {}", source.publisher));
        } else {
            lines.push(format!("  Ref: {} <{}>", source.publisher, source.url));
        }
    }
    lines
}

pub fn format_dispatches(items: &[NewsItem]) -> Vec<String> {
    if items.is_empty() {
        return vec![EMPTY_TEXT.to_string()];
    }
    let mut lines = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(format_dispatch(item));
    }
    lines
}

pub fn check_year(year: i32) -> Result<(), String> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(format!(
            "Year {year} is outside the explorable range {FIRST_YEAR}-{LAST_YEAR}"
        ))
    }
}

pub async fn print_location(gateway: &dyn Gateway, query: &str) -> Result<(), Box<dyn Error>> {
    let location = gateway.resolve_location(query.trim()).await?;
    for line in format_location(&location) {
        println!("{line}");
    }
    Ok(())
}

pub async fn print_news(
    gateway: &dyn Gateway,
    location: &str,
    year: i32,
    current_year: i32,
) -> Result<(), Box<dyn Error>> {
    check_year(year)?;
    if year > current_year {
        println!("{}", uncharted_text(year));
        return Ok(());
    }
    let items = gateway.fetch_good_news(location.trim(), year).await?;
    for line in format_dispatches(&items) {
        println!("{line}");
    }
    Ok(())
}

pub async fn print_geocode(gateway: &dyn Gateway, lat: f64, lng: f64) -> Result<(), Box<dyn Error>> {
    if !LocationState::new(lat, lng, "").has_valid_coordinates() {
        return Err(format!("Coordinate {lat}, {lng} is outside the globe").into());
    }
    println!("{}", gateway.reverse_geocode(lat, lng).await);
    Ok(())
}
