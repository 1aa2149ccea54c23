//! Domain entities. Pure value records for the devotional pipeline.
//!
//! No HTTP/provider types here — these are mapped from adapters.
//! Everything is created fresh per request and dropped with the response.

use serde::{Deserialize, Serialize};

/// Audience category. Closed set; controls voice and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Children,
    Teens,
    YoungAdults,
    Adults,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Children,
        AgeGroup::Teens,
        AgeGroup::YoungAdults,
        AgeGroup::Adults,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Children => "children",
            AgeGroup::Teens => "teens",
            AgeGroup::YoungAdults => "young_adults",
            AgeGroup::Adults => "adults",
        }
    }

    /// Parse an explicit age-group value. Unknown values are rejected,
    /// unlike free-text classification which defaults to adults.
    pub fn parse(value: &str) -> Option<AgeGroup> {
        match value {
            "children" => Some(AgeGroup::Children),
            "teens" => Some(AgeGroup::Teens),
            "young_adults" => Some(AgeGroup::YoungAdults),
            "adults" => Some(AgeGroup::Adults),
            _ => None,
        }
    }

    /// Voice guidance prepended to every prompt for this audience.
    pub fn voice_guidance(&self) -> &'static str {
        match self {
            AgeGroup::Children => {
                "You are creating a devotional for children (ages 5-12). Use simple language, \
                 short sentences, concrete examples, and include fun applications. Keep the \
                 devotional short and engaging. Include a simple prayer they can understand \
                 and repeat."
            }
            AgeGroup::Teens => {
                "You are creating a devotional for teenagers (ages 13-17). Use relatable \
                 language, address real-life situations teens face, include practical \
                 applications for school and friendships. Make it relevant to their daily \
                 struggles and victories."
            }
            AgeGroup::YoungAdults => {
                "You are creating a devotional for young adults (ages 18-25). Address themes \
                 of independence, career decisions, relationships, and spiritual growth. Use \
                 mature but accessible language with practical applications for this \
                 transitional life stage."
            }
            AgeGroup::Adults => {
                "You are creating a devotional for adults (ages 26+). Address mature \
                 spiritual concepts, family responsibilities, work-life balance, and deeper \
                 theological insights. Include practical applications for family life and \
                 community involvement."
            }
        }
    }

    /// Word ceiling enforced in the prompt for this audience.
    pub fn max_words(&self) -> usize {
        match self {
            AgeGroup::Children => 300,
            AgeGroup::Teens => 500,
            AgeGroup::YoungAdults => 600,
            AgeGroup::Adults => 700,
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generation request, one per entry point.
#[derive(Debug, Clone)]
pub enum DevotionalRequest {
    /// Free-text request; age group and scripture are inferred from the text.
    Freeform { prompt: String },
    /// Explicit age group with an optional topic focus.
    Structured {
        age_group: AgeGroup,
        topic: Option<String>,
    },
}

/// The five content sections the model must return.
///
/// Decoded strictly: a response missing a section (or the model echoing
/// metadata we ignore) is handled by the parser, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevotionalBody {
    pub title: String,
    pub question_of_day: String,
    pub listen_scripture: String,
    pub listen_content: String,
    pub learn_content: String,
    pub live_content: String,
    pub prayer: String,
}

impl DevotionalBody {
    /// True when every section carries text. The finished devotional
    /// invariant: no empty fields.
    pub fn is_complete(&self) -> bool {
        [
            &self.title,
            &self.question_of_day,
            &self.listen_scripture,
            &self.listen_content,
            &self.learn_content,
            &self.live_content,
            &self.prayer,
        ]
        .iter()
        .all(|s| !s.trim().is_empty())
    }
}

/// Finished devotional: content sections plus echoed request metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Devotional {
    #[serde(flatten)]
    pub body: DevotionalBody,
    pub age_group: AgeGroup,
    /// Never empty: resolved by extraction or drawn from the seed list.
    pub scripture_reference: String,
    pub topic: Option<String>,
}

/// Where retrieved context came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    /// Nearest-neighbor results from the vector index.
    Index,
    /// Static fallback paragraph (index unavailable, empty, or failing).
    Fallback,
}

/// Background text conditioning the completion. Advisory only; never
/// validated for relevance beyond the index's own ranking.
#[derive(Debug, Clone)]
pub struct RetrievedContext {
    pub text: String,
    pub source: ContextSource,
}

/// One ranked candidate from the vector index, text metadata attached.
#[derive(Debug, Clone)]
pub struct ContextChunk {
    pub text: String,
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_parse_roundtrip() {
        for group in AgeGroup::ALL {
            assert_eq!(AgeGroup::parse(group.as_str()), Some(group));
        }
        assert_eq!(AgeGroup::parse("toddlers"), None);
        assert_eq!(AgeGroup::parse(""), None);
    }

    #[test]
    fn test_age_group_serde_uses_snake_case() {
        let json = serde_json::to_string(&AgeGroup::YoungAdults).unwrap();
        assert_eq!(json, "\"young_adults\"");
    }

    #[test]
    fn test_body_completeness() {
        let body = DevotionalBody {
            title: "T".into(),
            question_of_day: "Q".into(),
            listen_scripture: "John 3:16".into(),
            listen_content: "L".into(),
            learn_content: "L2".into(),
            live_content: "L3".into(),
            prayer: "P".into(),
        };
        assert!(body.is_complete());

        let mut incomplete = body.clone();
        incomplete.prayer = "   ".into();
        assert!(!incomplete.is_complete());
    }
}
