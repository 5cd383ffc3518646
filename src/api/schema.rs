//! Response schemas sent with structured requests, and their JSON Schema twins.
//!
//! Gemini accepts an OpenAPI-flavoured subset (`"type": "OBJECT"`) in the
//! request. The model is not bound by it, so the parsed reply is checked again
//! against the equivalent JSON Schema before it reaches the controller.

use serde_json::{json, Value};

pub const CATEGORY_HINT: &str = "One of: Community, Technology, Health, Environment, Culture";

pub fn location_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "lat": { "type": "NUMBER" },
            "lng": { "type": "NUMBER" },
            "name": { "type": "STRING" }
        },
        "required": ["lat", "lng", "name"]
    })
}

pub fn news_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "summary": { "type": "STRING" },
                "category": { "type": "STRING", "description": CATEGORY_HINT },
                "sources": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "publisher": { "type": "STRING" },
                            "url": { "type": "STRING" }
                        },
                        "required": ["publisher", "url"]
                    }
                }
            },
            "required": ["title", "summary", "category", "sources"]
        }
    })
}

pub fn location_validation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "lat": { "type": "number", "minimum": -90, "maximum": 90 },
            "lng": { "type": "number", "minimum": -180, "maximum": 180 },
            "name": { "type": "string", "minLength": 1 }
        },
        "required": ["lat", "lng", "name"]
    })
}

pub fn news_validation_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "summary": { "type": "string" },
                "category": { "type": "string" },
                "sources": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "publisher": { "type": "string" },
                            "url": { "type": "string" }
                        },
                        "required": ["publisher", "url"]
                    }
                }
            },
            "required": ["title", "summary", "category", "sources"]
        }
    })
}

/// Check `instance` against `schema`, reporting the first violation.
pub fn validate(schema: &Value, instance: &Value) -> Result<(), String> {
    let validator = jsonschema::validator_for(schema).map_err(|err| err.to_string())?;
    let first_error = validator.iter_errors(instance).next().map(|err| err.to_string());
    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_schema_accepts_resolved_place() {
        let value = json!({"lat": 25.2048, "lng": 55.2708, "name": "Dubai, UAE"});
        assert!(validate(&location_validation_schema(), &value).is_ok());
    }

    #[test]
    fn location_schema_rejects_missing_and_out_of_range_fields() {
        let missing = json!({"lat": 1.0, "name": "Somewhere"});
        let out_of_range = json!({"lat": 123.0, "lng": 0.0, "name": "Nowhere"});
        let stringly = json!({"lat": "25.2", "lng": 55.2, "name": "Dubai"});

        assert!(validate(&location_validation_schema(), &missing).is_err());
        assert!(validate(&location_validation_schema(), &out_of_range).is_err());
        assert!(validate(&location_validation_schema(), &stringly).is_err());
    }

    #[test]
    fn validate_reports_one_message_for_the_first_violation() {
        let both_bad = json!({"lat": 123.0, "lng": 500.0, "name": "Nowhere"});
        let message = validate(&location_validation_schema(), &both_bad)
            .expect_err("out-of-range coordinates should fail");
        assert!(!message.is_empty());
        assert!(!message.contains('\n'));
    }

    #[test]
    fn validate_rejects_a_malformed_schema() {
        assert!(validate(&json!({"type": 12}), &json!({})).is_err());
    }

    #[test]
    fn news_schema_requires_sources_with_publisher_and_url() {
        let good = json!([{
            "title": "Metro opens",
            "summary": "A new line.",
            "category": "Technology",
            "sources": [{"publisher": "Gulf News", "url": "https://gulfnews.com"}]
        }]);
        let bad = json!([{
            "title": "Metro opens",
            "summary": "A new line.",
            "category": "Technology",
            "sources": [{"publisher": "Gulf News"}]
        }]);

        assert!(validate(&news_validation_schema(), &good).is_ok());
        assert!(validate(&news_validation_schema(), &bad).is_err());
        assert!(validate(&news_validation_schema(), &json!({"title": "x"})).is_err());
    }

    #[test]
    fn request_schemas_carry_required_fields_and_category_hint() {
        assert_eq!(
            location_response_schema()["required"],
            json!(["lat", "lng", "name"])
        );
        let news = news_response_schema();
        assert_eq!(news["type"], "ARRAY");
        assert_eq!(
            news["items"]["properties"]["category"]["description"],
            CATEGORY_HINT
        );
    }
}
