//! Prompt templates for the three gateway operations.

pub fn resolve_location(query: &str) -> String {
    format!(
        "Resolve the location query \"{query}\" into structured data. \
Find the approximate Latitude and Longitude and the clean \"City, Country\" or \"Region, Country\" name. \
Respond with JSON: {{\"lat\": number, \"lng\": number, \"name\": \"string\"}}."
    )
}

pub fn good_news(location: &str, year: i32) -> String {
    format!(
        "Give me 1-3 highly positive, hopeful, or significant \"good news\" events from {location} in the year {year}. \
Focus on achievements in community, technology, health, environment, or culture. \
For each news item, provide a headline, a 2-3 sentence summary, a category, and real article sources (publisher name and URL). \
Ensure the news is factually accurate for that specific year and location."
    )
}

pub fn reverse_geocode(lat: f64, lng: f64) -> String {
    format!(
        "What is the City and Country name for the coordinates Latitude: {lat}, Longitude: {lng}? \
Respond with just \"City, Country\" or \"Region, Country\". \
If it's the middle of the ocean, say \"The High Seas\"."
    )
}
