//! Advice generation from tone, context, and pace.

use cadence_types::{ContextLabel, Pace, ToneLabel};

const FORMAL_TIPS: [&str; 3] = [
    "Speak clearly and avoid unnecessary filler words.",
    "Maintain a steady pace for a professional tone.",
    "Use precise language to avoid misunderstandings.",
];

const INFORMAL_TIPS: [&str; 3] = [
    "Be natural and conversational.",
    "Don't worry too much about minor pauses, they're normal in casual chats.",
    "Smile and keep your tone friendly.",
];

const PERSUASIVE_TIPS: [&str; 3] = [
    "Use strong, persuasive language and avoid hesitation.",
    "Pause strategically to emphasize key points.",
    "Practice speaking confidently to convey authority.",
];

const GENERAL_TIPS: [&str; 3] = [
    "Practice varying your pitch to maintain listener interest.",
    "Use pauses effectively to let your words sink in.",
    "Be mindful of your pacing - neither too fast nor too slow.",
];

/// Tip appended for users who prefer a slow pace.
const SLOW_PACE_TIP: &str = "You may want to speed up slightly for better engagement.";

/// Tip appended for users who prefer a fast pace.
const FAST_PACE_TIP: &str = "Try slowing down to make your message more comprehensible.";

/// Returns a tone-improvement suggestion for a tone/context pair.
///
/// Positive tone earns the same encouragement in every context. Negative
/// and Neutral tones specialize on Formal and Persuasive contexts and
/// share a generic fallback for Informal and General.
pub fn suggest(tone: ToneLabel, context: ContextLabel) -> &'static str {
    match (tone, context) {
        (ToneLabel::Negative, ContextLabel::Formal) => {
            "Reframe negative language to focus on solutions. For example, \
             'problem' can be rephrased as 'challenge to address.'"
        }
        (ToneLabel::Negative, ContextLabel::Persuasive) => {
            "Use positive framing to inspire confidence in your audience. \
             Avoid words like 'fail' or 'difficult.'"
        }
        (ToneLabel::Negative, _) => "Consider rephrasing with more optimistic language.",
        (ToneLabel::Neutral, ContextLabel::Formal) => {
            "Consider making the tone more engaging by adding details or examples."
        }
        (ToneLabel::Neutral, ContextLabel::Persuasive) => {
            "Add enthusiasm to make the statement more compelling."
        }
        (ToneLabel::Neutral, _) => "Neutral tone works, but adding warmth or enthusiasm could help.",
        (ToneLabel::Positive, _) => "Great job! Your tone is positive. Keep it up.",
    }
}

/// Returns the coaching tips for a context, with a pace tip appended when
/// the user's preferred pace is not Normal.
///
/// Every call builds a fresh list; appending the pace tip never leaks
/// into later calls.
pub fn tips(context: ContextLabel, pace: Pace) -> Vec<String> {
    let base: &[&str; 3] = match context {
        ContextLabel::Formal => &FORMAL_TIPS,
        ContextLabel::Informal => &INFORMAL_TIPS,
        ContextLabel::Persuasive => &PERSUASIVE_TIPS,
        ContextLabel::General => &GENERAL_TIPS,
    };
    let mut tips: Vec<String> = base.iter().map(|tip| tip.to_string()).collect();

    match pace {
        Pace::Slow => tips.push(SLOW_PACE_TIP.to_string()),
        Pace::Fast => tips.push(FAST_PACE_TIP.to_string()),
        Pace::Normal => {}
    }

    tips
}
