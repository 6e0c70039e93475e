use crate::models::{ConditionMatch, Severity};

struct ConditionRule {
    name: &'static str,
    keywords: &'static [&'static str],
    base_probability: u8,
}

const CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        name: "Fever",
        keywords: &["fever", "temperature", "hot"],
        base_probability: 75,
    },
    ConditionRule {
        name: "Cough",
        keywords: &["cough", "coughing"],
        base_probability: 65,
    },
    ConditionRule {
        name: "Headache",
        keywords: &["headache", "head pain", "migraine"],
        base_probability: 70,
    },
    ConditionRule {
        name: "Fatigue",
        keywords: &["tired", "fatigue", "sleep"],
        base_probability: 60,
    },
    ConditionRule {
        name: "Diarrhea",
        keywords: &["diarrhea", "loose stool"],
        base_probability: 55,
    },
];

const MAX_PROBABILITY: u8 = 95;
const HIT_BOOST: u8 = 10;

const FALLBACK_NAME: &str = "Viral or Common Infection";
const FALLBACK_PROBABILITY: u8 = 45;

/// Keyword-hit condition matching. Each extra keyword hit boosts the base
/// probability; severity comes from the base alone. Never fails: inputs with
/// no recognized keyword fall back to a single generic entry.
pub fn match_conditions(input: &str) -> Vec<ConditionMatch> {
    let lower = input.to_lowercase();

    let mut matches = Vec::new();
    for rule in CONDITION_RULES {
        let mut hits: u8 = 0;
        for keyword in rule.keywords {
            if lower.contains(keyword) {
                hits += 1;
            }
        }
        if hits == 0 {
            continue;
        }

        matches.push(ConditionMatch {
            name: rule.name.to_string(),
            probability: MAX_PROBABILITY.min(rule.base_probability + HIT_BOOST * hits),
            severity: if rule.base_probability > 70 {
                Severity::Moderate
            } else {
                Severity::Mild
            },
        });
    }

    if matches.is_empty() {
        matches.push(ConditionMatch {
            name: FALLBACK_NAME.to_string(),
            probability: FALLBACK_PROBABILITY,
            severity: Severity::Mild,
        });
    }

    matches
}
