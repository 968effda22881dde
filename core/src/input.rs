use std::collections::HashMap;
use anyhow::{anyhow, Result};

use crate::model::practice::MenuItem;

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub text: String,
    pub fields: HashMap<String, String>,
}

/// Splits `key:value` arguments from free text. Times like `18:00` have a
/// numeric key and stay as text.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut text_parts = Vec::new();
    let mut fields = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() && !key.chars().all(|c| c.is_ascii_digit()) {
                fields.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        text_parts.push(arg.as_str());
    }

    ParsedInput {
        text: text_parts.join(" "),
        fields,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Expands every field key against `candidates`. Unknown or ambiguous keys are an error.
pub fn normalize_fields(fields: HashMap<String, String>, candidates: &[&str]) -> Result<HashMap<String, String>> {
    let mut normalized = HashMap::new();
    for (key, value) in fields {
        let full_key = expand_key(&key, candidates)?;
        normalized.insert(full_key, value);
    }
    Ok(normalized)
}

/// "5-3" -> (5, 3)
pub fn parse_score(input: &str) -> Result<(u32, u32)> {
    let (ours, theirs) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Score must look like 5-3, got '{}'", input))?;
    let ours = ours.trim().parse().map_err(|_| anyhow!("Invalid score: {}", input))?;
    let theirs = theirs.trim().parse().map_err(|_| anyhow!("Invalid score: {}", input))?;
    Ok((ours, theirs))
}

/// "Tee batting=100 swings;Sprints=10" -> menu items. The first word of the
/// value is the amount, the rest is the unit.
pub fn parse_menu(input: &str) -> Vec<MenuItem> {
    input
        .split(';')
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            let (name, amount) = item.split_once('=').unwrap_or((item, ""));
            let amount = amount.trim();
            let (value, unit) = amount.split_once(' ').unwrap_or((amount, ""));
            MenuItem {
                name: name.trim().to_string(),
                value: value.trim().to_string(),
                unit: unit.trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let args = vec![
            "Game".to_string(),
            "vs".to_string(),
            "Hawks".to_string(),
            "date:2025-03-10".to_string(),
            "loc:Field".to_string(),
            "18:00".to_string(),
        ];
        let parsed = parse_args(&args);
        assert_eq!(parsed.text, "Game vs Hawks 18:00");
        assert_eq!(parsed.fields.get("date"), Some(&"2025-03-10".to_string()));
        assert_eq!(parsed.fields.get("loc"), Some(&"Field".to_string()));
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["date", "description", "location"];

        assert_eq!(expand_key("da", &candidates).unwrap(), "date");
        assert_eq!(expand_key("date", &candidates).unwrap(), "date");
        assert_eq!(expand_key("loc", &candidates).unwrap(), "location");

        // Ambiguous
        assert!(expand_key("d", &candidates).is_err());

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }

    #[test]
    fn test_normalize_fields() {
        let mut fields = HashMap::new();
        fields.insert("loc".to_string(), "Park".to_string());
        let normalized = normalize_fields(fields, &["location", "date"]).unwrap();
        assert_eq!(normalized.get("location"), Some(&"Park".to_string()));

        let mut fields = HashMap::new();
        fields.insert("zzz".to_string(), "1".to_string());
        assert!(normalize_fields(fields, &["location"]).is_err());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("5-3").unwrap(), (5, 3));
        assert_eq!(parse_score(" 0 - 12 ").unwrap(), (0, 12));
        assert!(parse_score("5:3").is_err());
        assert!(parse_score("a-3").is_err());
    }

    #[test]
    fn test_parse_menu() {
        let menu = parse_menu("Tee batting=100 swings;Sprints=10; ;Stretch");
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0].name, "Tee batting");
        assert_eq!(menu[0].value, "100");
        assert_eq!(menu[0].unit, "swings");
        assert_eq!(menu[1].value, "10");
        assert_eq!(menu[1].unit, "");
        assert_eq!(menu[2].name, "Stretch");
        assert_eq!(menu[2].value, "");
    }
}
