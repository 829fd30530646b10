use chrono::{DateTime, TimeZone};

/// Format a timestamp the way report headers show it (RFC 1123 style)
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Upper-case the first letter of every whitespace-separated word
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
