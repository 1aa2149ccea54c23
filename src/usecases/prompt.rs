//! Prompt assembly for the completion call.
//!
//! One builder for both entry points, parameterized by request mode. The
//! JSON example at the end is load-bearing: the parser decodes exactly the
//! field names shown to the model here.

use crate::domain::{AgeGroup, DevotionalRequest};

/// Fixed system message for every completion call.
pub const SYSTEM_PROMPT: &str = "You are a Christian devotional writer specializing in \
age-appropriate spiritual content using Assemblies of God format.";

/// An assembled prompt pair, ready for the completion port.
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    pub system: &'static str,
    pub user: String,
}

/// Assemble the user prompt: voice guidance, request line, scripture,
/// retrieved context, the five-section structure, the word ceiling, and
/// the literal output schema.
pub fn build(
    age_group: AgeGroup,
    scripture_ref: &str,
    context_text: &str,
    request: &DevotionalRequest,
) -> BuiltPrompt {
    let request_line = match request {
        DevotionalRequest::Freeform { prompt } => format!("User Request: {prompt}\n"),
        DevotionalRequest::Structured { .. } => String::new(),
    };
    let topic_instruction = match request {
        DevotionalRequest::Structured {
            topic: Some(topic), ..
        } => format!(" Focus on the topic: {topic}."),
        _ => String::new(),
    };

    let user = format!(
        "{guidance}\n\
         \n\
         {request_line}\
         Scripture Reference: {scripture}\n\
         Age Group: {age_group}\n\
         \n\
         Based on the following Assemblies of God devotional content and the scripture \
         reference provided, create an original devotional appropriate for the {age_group} \
         age group.{topic_instruction}\n\
         \n\
         Relevant AOG Content:\n\
         {context}\n\
         \n\
         Create a devotional following the official AOG Family Devotions format:\n\
         \n\
         STRUCTURE:\n\
         - Question of the Day (central theme question)\n\
         - LISTEN to God through His Word (Scripture reading with context)\n\
         - LEARN from God's Word (deeper understanding with Q&A)\n\
         - LIVE God's Word (practical application with Q&A)\n\
         - PRAY about It (closing prayer)\n\
         \n\
         Use the scripture reference: {scripture}\n\
         Keep the content age-appropriate and under {max_words} words total.\n\
         Make it engaging, biblically sound, and interactive with questions.\n\
         \n\
         Return the response in this exact JSON format:\n\
         {{\n\
         \x20   \"title\": \"Day X\u{2014}FAMILY DEVOTIONS\",\n\
         \x20   \"question_of_day\": \"Question of the Day: [your question here]\",\n\
         \x20   \"listen_scripture\": \"{scripture}\",\n\
         \x20   \"listen_content\": \"Pray and ask God to speak to you before you read \
         today's Scripture.\\n\\nRead {scripture}.\\n\\n[Context paragraph]\\n\\nQuestion\\n\
         [Question about passage]\\nAnswer: [Answer]\",\n\
         \x20   \"learn_content\": \"Question\\n[Deeper question]\\nAnswer: [Answer]\\n\\n\
         [Additional explanation if needed]\",\n\
         \x20   \"live_content\": \"[Application paragraph]\\n\\nQuestion\\n[Personal \
         application question]\\nAnswer: Answers will vary.\\n\\nQuestion\\n[Follow-up \
         practical question]\\nAnswer: Answers will vary.\",\n\
         \x20   \"prayer\": \"Dear God, [prayer addressing the day's theme]. I love You, \
         God. Amen.\",\n\
         \x20   \"age_group\": \"{age_group}\",\n\
         \x20   \"scripture_reference\": \"{scripture}\"\n\
         }}",
        guidance = age_group.voice_guidance(),
        request_line = request_line,
        scripture = scripture_ref,
        age_group = age_group,
        topic_instruction = topic_instruction,
        context = context_text,
        max_words = age_group.max_words(),
    );

    BuiltPrompt {
        system: SYSTEM_PROMPT,
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freeform_prompt_carries_all_parts() {
        let request = DevotionalRequest::Freeform {
            prompt: "a devotional for kids about courage".to_string(),
        };
        let built = build(AgeGroup::Children, "Joshua 1:9", "be strong", &request);

        assert_eq!(built.system, SYSTEM_PROMPT);
        assert!(built.user.contains("devotional for children (ages 5-12)"));
        assert!(built.user.contains("User Request: a devotional for kids about courage"));
        assert!(built.user.contains("Scripture Reference: Joshua 1:9"));
        assert!(built.user.contains("Relevant AOG Content:\nbe strong"));
        assert!(built.user.contains("under 300 words"));
        assert!(built.user.contains("\"listen_scripture\": \"Joshua 1:9\""));
        // The schema example shows literal escape sequences, not real newlines.
        assert!(built.user.contains("\\n\\nRead Joshua 1:9.\\n\\n"));
    }

    #[test]
    fn test_structured_prompt_has_topic_focus_and_no_request_line() {
        let request = DevotionalRequest::Structured {
            age_group: AgeGroup::Teens,
            topic: Some("Patience".to_string()),
        };
        let built = build(AgeGroup::Teens, "Romans 8:28", "ctx", &request);

        assert!(built.user.contains(" Focus on the topic: Patience."));
        assert!(!built.user.contains("User Request:"));
        assert!(built.user.contains("under 500 words"));
    }

    #[test]
    fn test_structured_prompt_without_topic() {
        let request = DevotionalRequest::Structured {
            age_group: AgeGroup::Adults,
            topic: None,
        };
        let built = build(AgeGroup::Adults, "Psalm 23:1", "ctx", &request);

        assert!(!built.user.contains("Focus on the topic"));
        assert!(built.user.contains("Age Group: adults"));
    }
}
