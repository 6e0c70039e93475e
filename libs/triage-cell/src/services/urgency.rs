use std::sync::OnceLock;

use regex::Regex;

use crate::models::Urgency;

fn high_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            "chest pain|shortness of breath|faint|unconscious|severe bleeding|severe difficulty breathing",
        )
        .expect("static urgency pattern")
    })
}

fn moderate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"fever.*\b(40|104)|uncontrolled vomiting|cannot keep fluids")
            .expect("static urgency pattern")
    })
}

/// Ordered phrase checks over the lowercased input; the first matching tier
/// wins. Inputs with none of the configured phrases are Low.
pub fn classify_urgency(input: &str) -> Urgency {
    let lower = input.to_lowercase();

    if high_pattern().is_match(&lower) {
        Urgency::High
    } else if moderate_pattern().is_match(&lower) {
        Urgency::Moderate
    } else {
        Urgency::Low
    }
}
