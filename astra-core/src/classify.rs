//! Keyword classification over the static knowledge tables.
//!
//! Matching is case-insensitive substring containment (not tokenized), and
//! tables are scanned in declaration order. The first-match-wins classifiers
//! return the first owning category; topic and strength/weakness detection
//! collect every match, preserving table order.

use crate::knowledge::{
    DEFAULT_MAJOR_CATEGORY, DEFAULT_STRENGTH_CATEGORY, DEFAULT_TOPIC, DEFAULT_UNIVERSITY_TIER,
    MAJOR_CATEGORIES, STRENGTH_KEYWORDS, TOPIC_KEYWORDS, UNIVERSITY_TIERS, WEAKNESS_KEYWORDS,
};

fn any_contains(inputs: &[String], keyword: &str) -> bool {
    inputs.iter().any(|input| input.contains(keyword))
}

fn lowercase_all(inputs: &[String]) -> Vec<String> {
    inputs.iter().map(|input| input.to_lowercase()).collect()
}

/// Maps free-text intended majors to a major-category key. Empty input (or no
/// keyword hit) falls back to `stem_general`.
pub fn detect_major_category(majors: &[String]) -> &'static str {
    let normalized = lowercase_all(majors);
    for (category, data) in MAJOR_CATEGORIES.iter().copied() {
        if data.keywords.iter().any(|k| any_contains(&normalized, k)) {
            return category;
        }
    }
    DEFAULT_MAJOR_CATEGORY
}

/// Maps free-text target universities to a tier key, defaulting to `top30`.
pub fn detect_university_tier(universities: &[String]) -> &'static str {
    let normalized = lowercase_all(universities);
    for (tier, data) in UNIVERSITY_TIERS.iter().copied() {
        if data.keywords.iter().any(|k| any_contains(&normalized, k)) {
            return tier;
        }
    }
    DEFAULT_UNIVERSITY_TIER
}

/// Returns ALL topics whose keywords appear in the message, in table order.
/// Never empty: falls back to `["general"]`.
pub fn detect_topics(message: &str) -> Vec<&'static str> {
    let lower = message.to_lowercase();
    let topics: Vec<&'static str> = TOPIC_KEYWORDS
        .iter()
        .copied()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| topic)
        .collect();

    if topics.is_empty() {
        vec![DEFAULT_TOPIC]
    } else {
        topics
    }
}

/// Returns all strength categories hinted at by the free-text strengths
/// field, defaulting to `["academic"]`.
pub fn detect_strength_categories(strengths: &str) -> Vec<&'static str> {
    let lower = strengths.to_lowercase();
    let categories: Vec<&'static str> = STRENGTH_KEYWORDS
        .iter()
        .copied()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| category)
        .collect();

    if categories.is_empty() {
        vec![DEFAULT_STRENGTH_CATEGORY]
    } else {
        categories
    }
}

/// Returns all weakness categories hinted at by the free-text weaknesses
/// field. May be empty — unlike strengths there is no assumed default.
pub fn detect_weakness_categories(weaknesses: &str) -> Vec<&'static str> {
    let lower = weaknesses.to_lowercase();
    WEAKNESS_KEYWORDS
        .iter()
        .copied()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| category)
        .collect()
}
