//! Optional priority ordering for languages and variants
//!
//! Prioritized labels sort first by ascending weight. Everything else keeps
//! its list order, since the sorts used here are stable.

use std::cmp::Ordering;

use crate::track::Track;

/// Language weights (lower sorts first)
pub const LANGUAGE_PRIORITIES: &[(&str, u32)] = &[("English", 1)];

/// Origin weights (lower sorts first)
pub const ORIGIN_PRIORITIES: &[(&str, u32)] = &[("EMBEDDED", 1)];

fn weight(priorities: &[(&str, u32)], label: &str) -> Option<u32> {
    priorities
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, weight)| *weight)
}

/// Compare two labels against a priority table
pub fn compare_with_priorities(priorities: &[(&str, u32)], a: &str, b: &str) -> Ordering {
    match (weight(priorities, a), weight(priorities, b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort language labels by [`LANGUAGE_PRIORITIES`]
pub fn sort_languages(languages: &mut [&str]) {
    languages.sort_by(|a, b| compare_with_priorities(LANGUAGE_PRIORITIES, a, b));
}

/// Sort variants by [`ORIGIN_PRIORITIES`]
pub fn sort_variants(variants: &mut [&Track]) {
    variants.sort_by(|a, b| compare_with_priorities(ORIGIN_PRIORITIES, &a.origin, &b.origin));
}
