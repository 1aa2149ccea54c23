//! Canonical fallback content.
//!
//! One canned devotional per age group (substituted when the model's output
//! cannot be parsed) and one static context paragraph (substituted when
//! retrieval is unavailable). These are the only fallback texts in the
//! crate; every degraded path routes through here.

use crate::domain::{AgeGroup, DevotionalBody};

/// Static background text used when the vector index is unavailable,
/// returns nothing usable, or errors.
pub const FALLBACK_CONTEXT: &str = "The Bible teaches us that faith is the foundation of \
our relationship with God. Through prayer and reading His Word, we can strengthen our \
faith daily. Living by faith means taking steps of obedience even when the path ahead \
seems unclear. God honors those who trust in Him with all their heart. When we face \
challenges in life, our faith becomes our anchor. It keeps us grounded in God's love and \
helps us remember that He has a plan for our lives.";

/// Hand-authored complete devotional for the given audience and reference.
/// Returned whenever the model's output is unparsable; never fails.
pub fn canned_devotional(age_group: AgeGroup, scripture_ref: &str) -> DevotionalBody {
    let listen_content = format!(
        "Pray and ask God to speak to you before you read today's Scripture.\n\n\
         Read {scripture_ref}.\n\n\
         {context}\n\n\
         Question\n{listen_question}\nAnswer: {listen_answer}",
        context = match age_group {
            AgeGroup::Children =>
                "God's Word is like a letter from someone who loves you very much. \
                 This passage shows us how much God cares for us.",
            AgeGroup::Teens =>
                "God's Word speaks into the real situations you face every day. \
                 This passage reminds us that God is faithful even when life feels uncertain.",
            AgeGroup::YoungAdults =>
                "In a season full of decisions and transitions, God's Word gives solid \
                 ground. This passage points to His faithfulness in every step.",
            AgeGroup::Adults =>
                "God's Word is powerful and speaks to our hearts. This passage reminds \
                 us of God's love and faithfulness.",
        },
        listen_question = "What does this scripture teach us about God?",
        listen_answer = "God is loving and faithful to His people.",
    );

    let learn_content = match age_group {
        AgeGroup::Children => {
            "Question\nWhat can we do when we remember God loves us?\n\
             Answer: We can trust Him and obey Him with a happy heart.\n\n\
             When we read the Bible, we learn that God keeps every promise He makes."
        }
        AgeGroup::Teens => {
            "Question\nHow does this truth change the way we handle pressure at school \
             or with friends?\n\
             Answer: We can act with confidence because God is with us.\n\n\
             Studying God's Word shows us who He is and who He made us to be."
        }
        AgeGroup::YoungAdults => {
            "Question\nHow can we apply this teaching while making big life decisions?\n\
             Answer: By seeking God first and trusting His direction over our own plans.\n\n\
             When we study God's Word, we learn more about His character and His plans for us."
        }
        AgeGroup::Adults => {
            "Question\nHow can we apply this teaching in our lives?\n\
             Answer: By trusting in God's goodness and following His ways.\n\n\
             When we study God's Word, we learn more about His character and His plans for us."
        }
    }
    .to_string();

    let live_content = match age_group {
        AgeGroup::Children => {
            "Living God's Word means doing what it says, even in small ways.\n\n\
             Question\nWhat is one kind thing you can do for someone today?\n\
             Answer: Answers will vary.\n\n\
             Question\nWho can you tell about God's love this week?\n\
             Answer: Answers will vary."
        }
        AgeGroup::Teens => {
            "Living out God's Word means letting it shape your choices, online and off.\n\n\
             Question\nWhat is one way you can live out this scripture at school tomorrow?\n\
             Answer: Answers will vary.\n\n\
             Question\nHow can you encourage a friend who is struggling?\n\
             Answer: Answers will vary."
        }
        AgeGroup::YoungAdults => {
            "Living out God's Word means practicing it in work, relationships, and plans.\n\n\
             Question\nWhat is one decision you are facing where you can trust God this week?\n\
             Answer: Answers will vary.\n\n\
             Question\nHow can you serve someone in your community this week?\n\
             Answer: Answers will vary."
        }
        AgeGroup::Adults => {
            "Living out God's Word means putting what we learn into practice in our daily \
             lives.\n\n\
             Question\nWhat is one way you can live out this scripture today?\n\
             Answer: Answers will vary.\n\n\
             Question\nHow can you share God's love with others?\n\
             Answer: Answers will vary."
        }
    }
    .to_string();

    let prayer = match age_group {
        AgeGroup::Children => {
            "Dear God, thank You for loving me. Help me to listen to Your Word and obey \
             You today. I love You, God. Amen."
        }
        AgeGroup::Teens => {
            "Dear God, thank You for Your Word and for being with me in everything I \
             face. Help me to live what I read today. I love You, God. Amen."
        }
        AgeGroup::YoungAdults => {
            "Dear God, thank You for Your faithfulness in this season of change. Guide \
             my steps and help me trust Your plans. I love You, God. Amen."
        }
        AgeGroup::Adults => {
            "Dear God, thank You for Your Word and the lessons it teaches us. Help us to \
             live according to Your will. I love You, God. Amen."
        }
    }
    .to_string();

    DevotionalBody {
        title: "Family Devotional".to_string(),
        question_of_day: "Question of the Day: How can we grow closer to God today?"
            .to_string(),
        listen_scripture: scripture_ref.to_string(),
        listen_content,
        learn_content,
        live_content,
        prayer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_devotional_is_complete_for_every_group() {
        for group in AgeGroup::ALL {
            let body = canned_devotional(group, "John 3:16");
            assert!(body.is_complete(), "incomplete fallback for {group}");
            assert_eq!(body.listen_scripture, "John 3:16");
            assert!(body.listen_content.contains("Read John 3:16."));
        }
    }

    #[test]
    fn test_fallback_context_non_empty() {
        assert!(!FALLBACK_CONTEXT.trim().is_empty());
    }
}
