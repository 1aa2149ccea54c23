//! Age-group detection from free text.
//!
//! Ordered keyword rules over the lower-cased input; first category with a
//! keyword present wins. Order is part of the contract — children before
//! teens before young adults before adults.

use crate::domain::AgeGroup;

const RULES: [(AgeGroup, &[&str]); 4] = [
    (
        AgeGroup::Children,
        &[
            "children",
            "child",
            "kids",
            "kid",
            "young children",
            "5-12",
            "elementary",
        ],
    ),
    (
        AgeGroup::Teens,
        &[
            "teens",
            "teen",
            "teenagers",
            "teenager",
            "youth",
            "13-17",
            "high school",
            "adolescent",
        ],
    ),
    (
        AgeGroup::YoungAdults,
        &[
            "young adults",
            "young adult",
            "college",
            "18-25",
            "university",
            "emerging adults",
        ],
    ),
    (
        AgeGroup::Adults,
        &[
            "adults",
            "adult",
            "grown-ups",
            "grown up",
            "parents",
            "26+",
            "mature",
        ],
    ),
];

/// Classify free text into an age group. Defaults to adults when no
/// keyword from any set appears.
pub fn classify(text: &str) -> AgeGroup {
    let lower = text.to_lowercase();
    for (group, keywords) in RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return group;
        }
    }
    AgeGroup::Adults
}
