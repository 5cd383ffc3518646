//! Turning model response text into domain records.

use serde::Deserialize;
use serde_json::Value;

use super::GatewayError;
use crate::api::schema::{location_validation_schema, news_validation_schema, validate};
use crate::core::news::{Category, LocationState, NewsItem, Source};

/// Upper bound on dispatches kept from one reply; the prompt asks for 1-3.
pub const MAX_DISPATCHES: usize = 3;

#[derive(Deserialize)]
struct RawNewsItem {
    title: String,
    summary: String,
    category: String,
    #[serde(default)]
    sources: Vec<Source>,
}

/// Some replies wrap the JSON in a markdown fence despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or(rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

pub fn parse_location(text: &str) -> Result<LocationState, GatewayError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(GatewayError::location("empty response"));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|err| GatewayError::location(format!("invalid JSON: {err}")))?;
    validate(&location_validation_schema(), &value)
        .map_err(|err| GatewayError::location(format!("unexpected shape: {err}")))?;

    let mut location: LocationState = serde_json::from_value(value)
        .map_err(|err| GatewayError::location(format!("unexpected shape: {err}")))?;
    location.name = location.name.trim().to_string();

    if location.name.is_empty() {
        return Err(GatewayError::location("blank place name"));
    }
    if !location.has_valid_coordinates() {
        return Err(GatewayError::location(format!(
            "coordinates out of range: {}, {}",
            location.lat, location.lng
        )));
    }

    Ok(location)
}

pub fn parse_news(text: &str, location: &str, year: i32) -> Result<Vec<NewsItem>, GatewayError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|err| GatewayError::news(format!("invalid JSON: {err}")))?;
    validate(&news_validation_schema(), &value)
        .map_err(|err| GatewayError::news(format!("unexpected shape: {err}")))?;

    let raw: Vec<RawNewsItem> = serde_json::from_value(value)
        .map_err(|err| GatewayError::news(format!("unexpected shape: {err}")))?;

    Ok(raw
        .into_iter()
        .take(MAX_DISPATCHES)
        .enumerate()
        .map(|(index, item)| NewsItem {
            id: NewsItem::make_id(location, year, index),
            title: item.title.trim().to_string(),
            summary: item.summary.trim().to_string(),
            category: Category::from_model_label(&item.category),
            location: location.to_string(),
            year,
            sources: item.sources,
        })
        .collect())
}

/// Reverse-geocode replies are free text; blank means the model had nothing.
pub fn parse_place_name(text: &str) -> String {
    let trimmed = text.trim().trim_matches('"').trim();
    if trimmed.is_empty() {
        super::UNKNOWN_PLACE.to_string()
    } else {
        trimmed.to_string()
    }
}
