//! Structured-output parsing with canned-devotional substitution.
//!
//! Models wrap JSON in prose or code fences; the widest brace window is
//! decoded and anything unparsable becomes the canonical canned devotional.
//! Nothing fails past this point.

use crate::domain::fallback::canned_devotional;
use crate::domain::{AgeGroup, DevotionalBody};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
enum ParseFailure {
    #[error("no JSON object in completion text")]
    NoJsonObject,

    #[error("JSON decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("decoded devotional has empty fields")]
    EmptyField,
}

/// Decode the model output, or substitute the canned devotional for the
/// requested audience and reference. The degradation reason is logged.
pub fn parse_or_fallback(raw: &str, age_group: AgeGroup, scripture_ref: &str) -> DevotionalBody {
    match try_parse(raw) {
        Ok(body) => {
            debug!(title = %body.title, "parsed devotional from completion");
            body
        }
        Err(reason) => {
            warn!(
                %reason,
                age_group = %age_group,
                "unparsable completion, substituting canned devotional"
            );
            canned_devotional(age_group, scripture_ref)
        }
    }
}

/// Extract the first-`{`-to-last-`}` substring and decode it. Extra fields
/// the model echoes (age_group, scripture_reference) are ignored.
fn try_parse(raw: &str) -> Result<DevotionalBody, ParseFailure> {
    let start = raw.find('{').ok_or(ParseFailure::NoJsonObject)?;
    let end = raw.rfind('}').ok_or(ParseFailure::NoJsonObject)?;
    if end < start {
        return Err(ParseFailure::NoJsonObject);
    }

    let body: DevotionalBody = serde_json::from_str(&raw[start..=end])?;
    if !body.is_complete() {
        return Err(ParseFailure::EmptyField);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "title": "Day 1—FAMILY DEVOTIONS",
        "question_of_day": "Question of the Day: What does trust look like?",
        "listen_scripture": "Proverbs 3:5-6",
        "listen_content": "Pray first.\n\nRead Proverbs 3:5-6.\n\nTrust God fully.",
        "learn_content": "Question\nWhy trust?\nAnswer: God is faithful.",
        "live_content": "Practice trust today.\n\nQuestion\nHow?\nAnswer: Answers will vary.",
        "prayer": "Dear God, help me trust You. I love You, God. Amen.",
        "age_group": "teens",
        "scripture_reference": "Proverbs 3:5-6"
    }"#;

    #[test]
    fn test_parse_well_formed_completion() {
        let body = parse_or_fallback(WELL_FORMED, AgeGroup::Teens, "Proverbs 3:5-6");
        assert_eq!(body.listen_scripture, "Proverbs 3:5-6");
        assert_eq!(
            body.question_of_day,
            "Question of the Day: What does trust look like?"
        );
        assert!(body.listen_content.contains("Read Proverbs 3:5-6."));
    }

    #[test]
    fn test_parse_json_wrapped_in_prose() {
        let wrapped = format!("Here is your devotional:\n```json\n{WELL_FORMED}\n```\nEnjoy!");
        let body = parse_or_fallback(&wrapped, AgeGroup::Teens, "Proverbs 3:5-6");
        assert_eq!(body.listen_scripture, "Proverbs 3:5-6");
    }

    #[test]
    fn test_parse_truncated_output_substitutes_canned() {
        let truncated = &WELL_FORMED[..WELL_FORMED.len() / 2];
        let body = parse_or_fallback(truncated, AgeGroup::Children, "John 3:16");
        assert_eq!(body.listen_scripture, "John 3:16");
        assert!(body.is_complete());
        assert_eq!(body.title, "Family Devotional");
    }

    #[test]
    fn test_parse_non_json_substitutes_canned() {
        let body = parse_or_fallback("Sorry, I cannot do that.", AgeGroup::Adults, "Psalm 23");
        assert_eq!(body.listen_scripture, "Psalm 23");
        assert!(body.is_complete());
    }

    #[test]
    fn test_parse_missing_field_substitutes_canned() {
        let missing_prayer = r#"{"title": "T", "question_of_day": "Q",
            "listen_scripture": "John 3:16", "listen_content": "L",
            "learn_content": "L2", "live_content": "L3"}"#;
        let body = parse_or_fallback(missing_prayer, AgeGroup::Teens, "John 3:16");
        assert_eq!(body.title, "Family Devotional");
    }

    #[test]
    fn test_parse_empty_field_substitutes_canned() {
        let empty_title = r#"{"title": "", "question_of_day": "Q",
            "listen_scripture": "John 3:16", "listen_content": "L",
            "learn_content": "L2", "live_content": "L3", "prayer": "P"}"#;
        let body = parse_or_fallback(empty_title, AgeGroup::Teens, "John 3:16");
        assert_eq!(body.title, "Family Devotional");
    }
}
