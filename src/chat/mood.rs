use serde::Serialize;

/// Mood label produced by the keyword classifier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sad,
    Happy,
    Neutral,
}

const SAD_KEYWORDS: &[&str] = &["sad", "depressed", "lonely", "hurt", "cry", "upset"];
const HAPPY_KEYWORDS: &[&str] = &["happy", "joy", "good", "great", "awesome"];

/// Classify a message by keyword containment.
/// Sad keywords are checked first, so a message containing both a sad and a
/// happy keyword classifies as Sad. No stemming or negation handling.
pub fn classify(message: &str) -> Mood {
    let text = message.to_lowercase();
    if SAD_KEYWORDS.iter().any(|k| text.contains(k)) {
        Mood::Sad
    } else if HAPPY_KEYWORDS.iter().any(|k| text.contains(k)) {
        Mood::Happy
    } else {
        Mood::Neutral
    }
}

const SAD_REPLIES: &[&str] = &[
    "I'm really sorry you're feeling this way. You're not alone, and what you're feeling is valid.",
    "\"Tough times never last, but tough people do.\" - Robert H. Schuller",
    "These might help: https://www.mind.org.uk | https://www.7cups.com",
    "If things feel too heavy, the KIRAN helpline 1800-599-0019 is available around the clock.",
    "Would you like to share what's been on your mind?",
];

const HAPPY_REPLIES: &[&str] = &[
    "That's amazing!",
    "Keep that energy going, you earned it!",
    "Days like this are worth remembering.",
];

const NEUTRAL_REPLIES: &[&str] = &[
    "I'm here for you. Tell me more about it.",
    "How has your day been going so far?",
];

/// Canned reply set for a mood, in presentation order.
pub fn replies(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Sad => SAD_REPLIES,
        Mood::Happy => HAPPY_REPLIES,
        Mood::Neutral => NEUTRAL_REPLIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sad_keyword_classifies_sad() {
        assert_eq!(classify("I feel so sad and lonely"), Mood::Sad);
        assert_eq!(classify("I got HURT today"), Mood::Sad);
    }

    #[test]
    fn happy_keyword_classifies_happy() {
        assert_eq!(classify("I got a great job today!"), Mood::Happy);
        assert_eq!(classify("Feeling AWESOME"), Mood::Happy);
    }

    #[test]
    fn no_keyword_classifies_neutral() {
        assert_eq!(classify("what's the weather"), Mood::Neutral);
        assert_eq!(classify(""), Mood::Neutral);
    }

    #[test]
    fn sad_wins_over_happy_when_both_present() {
        assert_eq!(classify("happy on the outside, depressed inside"), Mood::Sad);
    }

    #[test]
    fn sad_replies_open_with_empathy_and_include_helpline() {
        let set = replies(Mood::Sad);
        assert!(set[0].starts_with("I'm really sorry"));
        assert!(set.iter().any(|r| r.contains("1800-599-0019")));
    }

    #[test]
    fn happy_replies_open_with_celebration() {
        assert_eq!(replies(Mood::Happy)[0], "That's amazing!");
    }

    #[test]
    fn neutral_replies_are_two_generic_prompts() {
        assert_eq!(replies(Mood::Neutral).len(), 2);
    }

    #[test]
    fn mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Sad).unwrap(), "\"sad\"");
    }
}
