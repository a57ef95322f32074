use quitpal_core::UserProfile;
use rand::Rng;

/// Replies the bot may greet with.
const BOT_GREETINGS: [&str; 6] = [
    "heyyo",
    "hi! how can i assist you today?",
    "hello",
    "hey",
    "hola",
    "sugeng rawuh",
];

/// Tokens that count as a user greeting.
const USER_GREETINGS: [&str; 6] = ["hey", "hi", "hello", "greetings", "wassup", "halo"];

/// Craving-management tips, picked uniformly at random.
const CRAVING_TIPS: [&str; 5] = [
    "Drinking a glass of water can help reduce cravings.",
    "Distract yourself by going for a walk or doing light exercise.",
    "Try meditation or deep breathing for 5 minutes.",
    "Chew sugar-free gum to replace the habit of smoking.",
    "Remember your reason for quitting. It will help you stay focused.",
];

/// Fixed farewell reply for the exit intent.
pub const FAREWELL: &str =
    "Thank you for using QuitPal. Stay strong and believe in yourself!";

/// Check the fixed intents in priority order against a lowercased
/// utterance.
///
/// Returns the short-circuit reply, or `None` when the similarity engine
/// should handle the turn.
pub fn dispatch(utterance: &str, profile: &UserProfile) -> Option<String> {
    if let Some(reply) = greeting_reply(utterance) {
        return Some(reply);
    }
    if utterance.contains("motivation") {
        return Some(motivation_reply(profile));
    }
    if utterance.contains("craving") {
        return Some(craving_tip());
    }
    if utterance.contains("exit") {
        return Some(FAREWELL.to_string());
    }
    None
}

/// A random bot greeting when any whitespace-delimited token of the
/// lowercased utterance is a greeting word.
pub fn greeting_reply(utterance: &str) -> Option<String> {
    for word in utterance.split_whitespace() {
        if USER_GREETINGS.contains(&word) {
            let pick = rand::thread_rng().gen_range(0..BOT_GREETINGS.len());
            return Some(BOT_GREETINGS[pick].to_string());
        }
    }
    None
}

/// Profile-driven motivational message.
///
/// Craving level above 7 gets the "stay strong" branch, otherwise the
/// "manageable" one; a stressed or bored mood adds a distraction
/// suggestion; the closing line always echoes the stored reason to quit.
pub fn motivation_reply(profile: &UserProfile) -> String {
    let mut lines: Vec<String> = Vec::new();

    if profile.craving_level > 7 {
        lines.push(
            "Stay strong! These intense cravings are temporary. Try deep breathing \
             or distracting yourself with another activity."
                .to_string(),
        );
    } else {
        lines.push("Great! Your cravings seem manageable. Keep up the effort!".to_string());
    }

    if matches!(profile.mood.to_lowercase().as_str(), "stressed" | "bored") {
        lines.push(
            "Feeling stressed or bored? Try light exercise, reading a book, or \
             listening to music to distract yourself."
                .to_string(),
        );
    }

    lines.push(format!(
        "Remember your main reason: '{}'. Stay focused and believe in yourself to \
         reach your goal!",
        profile.reason_to_quit
    ));

    lines.join("\n")
}

/// A random craving-management tip.
pub fn craving_tip() -> String {
    let pick = rand::thread_rng().gen_range(0..CRAVING_TIPS.len());
    CRAVING_TIPS[pick].to_string()
}

/// The fixed bot greeting set, exposed for membership assertions in tests.
pub fn bot_greetings() -> &'static [&'static str] {
    &BOT_GREETINGS
}

/// The fixed craving tip set, exposed for membership assertions in tests.
pub fn craving_tips() -> &'static [&'static str] {
    &CRAVING_TIPS
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use quitpal_core::ProfilePayload;

    fn profile(craving: i64, mood: &str, reason: &str) -> UserProfile {
        UserProfile::from_payload(ProfilePayload {
            smoking_frequency: None,
            craving_level: Some(craving),
            mood: Some(mood.to_string()),
            reason_to_quit: Some(reason.to_string()),
        })
    }

    #[test]
    fn test_greeting_token_match() {
        let reply = greeting_reply("hello there friend").unwrap();
        assert!(bot_greetings().contains(&reply.as_str()));
    }

    #[test]
    fn test_greeting_requires_whole_token() {
        // "hi" embedded inside another word is not a greeting.
        assert!(greeting_reply("this is history").is_none());
    }

    #[test]
    fn test_dispatch_priority_greeting_before_keywords() {
        let p = profile(5, "neutral", "health");
        // Contains both a greeting token and the "craving" keyword; the
        // greeting wins.
        let reply = dispatch("hi i have a craving", &p).unwrap();
        assert!(bot_greetings().contains(&reply.as_str()));
    }

    #[test]
    fn test_dispatch_motivation_keyword() {
        let p = profile(9, "stressed", "family");
        let reply = dispatch("i need some motivation today", &p).unwrap();
        assert!(reply.contains("Stay strong!"));
        assert!(reply.contains("Feeling stressed or bored?"));
        assert!(reply.contains("'family'"));
    }

    #[test]
    fn test_motivation_manageable_branch() {
        let p = profile(3, "neutral", "money");
        let reply = motivation_reply(&p);
        assert!(reply.contains("manageable"));
        assert!(!reply.contains("Stay strong!"));
        assert!(!reply.contains("Feeling stressed or bored?"));
        assert!(reply.ends_with(
            "Remember your main reason: 'money'. Stay focused and believe in \
             yourself to reach your goal!"
        ));
    }

    #[test]
    fn test_motivation_boundary_craving_level() {
        // Exactly 7 is still the manageable branch; 8 crosses over.
        assert!(motivation_reply(&profile(7, "neutral", "health")).contains("manageable"));
        assert!(motivation_reply(&profile(8, "neutral", "health")).contains("Stay strong!"));
    }

    #[test]
    fn test_dispatch_craving_keyword() {
        let p = profile(5, "neutral", "health");
        let reply = dispatch("any tips for a craving", &p).unwrap();
        assert!(craving_tips().contains(&reply.as_str()));
    }

    #[test]
    fn test_dispatch_exit_keyword() {
        let p = profile(5, "neutral", "health");
        assert_eq!(dispatch("exit", &p).unwrap(), FAREWELL);
    }

    #[test]
    fn test_dispatch_none_for_ordinary_utterance() {
        let p = profile(5, "neutral", "health");
        assert!(dispatch("how long do withdrawal symptoms last", &p).is_none());
    }
}
