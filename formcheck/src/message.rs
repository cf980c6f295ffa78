//! Failure message resolution.

use crate::rule::RuleKind;

/// Built-in English messages by rule kind.
///
/// `{n}` is replaced by the rule's bound and `{s}` by its plural suffix.
const DEFAULT_MESSAGES: &[(RuleKind, &str)] = &[
    (RuleKind::MinLength, "Min length is {n} character{s}"),
    (RuleKind::MaxLength, "Max length is {n} character{s}"),
    (RuleKind::Predicate, "Please enter a valid value."),
    (RuleKind::Match, "Re-enter password is not match."),
];

const FALLBACK_MESSAGE: &str = "Please enter a valid value.";

/// Get the built-in message for a rule kind.
pub fn default_message(kind: RuleKind, bound: Option<usize>) -> String {
    let template = DEFAULT_MESSAGES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, template)| *template)
        .unwrap_or(FALLBACK_MESSAGE);

    match bound {
        Some(n) => template
            .replace("{n}", &n.to_string())
            .replace("{s}", if n == 1 { "" } else { "s" }),
        None => template.to_string(),
    }
}

/// Resolve the message shown for a failed rule.
///
/// A blank `message` falls back to the built-in default. Otherwise the first
/// occurrence of `placeholder` (when set) is replaced by `bound`.
pub fn resolve(
    kind: RuleKind,
    message: &str,
    placeholder: Option<&str>,
    bound: Option<usize>,
) -> String {
    if message.trim().is_empty() {
        return default_message(kind, bound);
    }

    match (placeholder, bound) {
        (Some(token), Some(n)) if !token.is_empty() => message.replacen(token, &n.to_string(), 1),
        _ => message.to_string(),
    }
}
