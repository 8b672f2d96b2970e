//! Incremental matching of user input against the legal action list.
//!
//! The rules service supplies, per board state, a mapping from full action
//! strings to the state they produce. The user builds an action one token at
//! a time (a two-letter hex coordinate from a board click, or a `+`-prefixed
//! piece marker from a hand click); [`ActionInput`] accumulates those tokens
//! and resolves them against the [`ActionSet`] as they arrive.

use serde::{Deserialize, Serialize};

/// The legal actions for one board state, each mapped to the state string
/// it produces.
///
/// Insertion order is preserved, matching the order the rules service
/// listed the actions in. The whole set is replaced wholesale whenever the
/// board state changes; matching a stale set against new input is never
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ActionSet {
    entries: Vec<(String, String)>,
}

impl ActionSet {
    /// An empty action set (no legal actions)
    pub fn new() -> Self {
        Self::default()
    }

    /// The next-state string for an exact action, if present
    pub fn get(&self, action: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == action)
            .map(|(_, next_state)| next_state.as_str())
    }

    /// Whether any action begins with `prefix`
    pub fn has_prefixed(&self, prefix: &str) -> bool {
        self.entries.iter().any(|(key, _)| key.starts_with(prefix))
    }

    /// Number of legal actions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no legal actions at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(action, next_state)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, next_state)| (key.as_str(), next_state.as_str()))
    }
}

impl FromIterator<(String, String)> for ActionSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// What one input token did to the in-progress action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// The buffer now equals a legal action: here is the next state string.
    /// The buffer has been reset.
    Resolved(String),
    /// The buffer is a proper prefix of at least one legal action; echoed
    /// back for display while input continues.
    Partial(String),
    /// No legal action starts with the buffer. The buffer has been reset so
    /// input can never get stuck on an unrecoverable prefix.
    NoMatch,
}

/// The user's in-progress action, one token at a time.
///
/// The only piece of core state that lives across input events. It must be
/// rebuilt (or [`reset`](Self::reset)) whenever the board state — and with
/// it the action set — changes.
#[derive(Debug, Clone, Default)]
pub struct ActionInput {
    buffer: String,
}

impl ActionInput {
    /// Start with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated tokens so far
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Drop any accumulated input
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Append one token and resolve the result against `actions`.
    ///
    /// An exact match is checked against every action before any prefix
    /// check, so a candidate that both equals one action and prefixes
    /// another resolves immediately. On a resolved or failed match the
    /// buffer resets to empty; only a prefix match keeps it.
    pub fn push(&mut self, token: &str, actions: &ActionSet) -> MatchOutcome {
        let candidate = format!("{}{}", self.buffer, token);

        if let Some(next_state) = actions.get(&candidate) {
            let next_state = next_state.to_owned();
            self.buffer.clear();
            return MatchOutcome::Resolved(next_state);
        }

        if actions.has_prefixed(&candidate) {
            self.buffer = candidate.clone();
            return MatchOutcome::Partial(candidate);
        }

        self.buffer.clear();
        MatchOutcome::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn actions(pairs: &[(&str, &str)]) -> ActionSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_then_exact() {
        let actions = actions(&[("ab", "S1"), ("ac", "S2")]);
        let mut input = ActionInput::new();

        assert_eq!(input.push("a", &actions), MatchOutcome::Partial("a".into()));
        assert_eq!(input.buffer(), "a");

        assert_eq!(input.push("b", &actions), MatchOutcome::Resolved("S1".into()));
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn test_exact_wins_over_longer_prefix() {
        // "ab" is both a full action and a prefix of "abcd"; the full match
        // resolves immediately
        let actions = actions(&[("abcd", "LONG"), ("ab", "SHORT")]);
        let mut input = ActionInput::new();

        input.push("a", &actions);
        assert_eq!(
            input.push("b", &actions),
            MatchOutcome::Resolved("SHORT".into())
        );
    }

    #[test]
    fn test_shared_prefix_keeps_both_alive() {
        let actions = actions(&[("aabb", "S1"), ("aacc", "S2")]);
        let mut input = ActionInput::new();

        assert_eq!(input.push("aa", &actions), MatchOutcome::Partial("aa".into()));
        assert_eq!(input.push("cc", &actions), MatchOutcome::Resolved("S2".into()));
    }

    #[test]
    fn test_no_match_resets_buffer() {
        let actions = actions(&[("ab", "S1")]);
        let mut input = ActionInput::new();

        input.push("a", &actions);
        assert_eq!(input.push("z", &actions), MatchOutcome::NoMatch);
        assert_eq!(input.buffer(), "");

        // A fresh attempt after the reset works from scratch
        assert_eq!(input.push("a", &actions), MatchOutcome::Partial("a".into()));
    }

    #[test]
    fn test_hand_marker_token() {
        let actions = actions(&[("+qab", "S1")]);
        let mut input = ActionInput::new();

        assert_eq!(
            input.push("+q", &actions),
            MatchOutcome::Partial("+q".into())
        );
        assert_eq!(
            input.push("ab", &actions),
            MatchOutcome::Resolved("S1".into())
        );
    }

    #[test]
    fn test_empty_action_set() {
        let actions = ActionSet::new();
        let mut input = ActionInput::new();
        assert_eq!(input.push("aa", &actions), MatchOutcome::NoMatch);
    }

    #[test]
    fn test_action_set_from_json() {
        // Shape of the rules service payload: an ordered list of
        // action/next-state pairs
        let payload = r#"[["ab", "S1"], ["ac", "S2"]]"#;
        let actions: ActionSet = serde_json::from_str(payload).unwrap();

        assert_eq!(actions.len(), 2);
        assert_eq!(actions.get("ab"), Some("S1"));
        assert!(actions.has_prefixed("a"));
        assert!(!actions.has_prefixed("b"));

        // Iteration follows the payload's order
        let keys: Vec<&str> = actions.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ab", "ac"]);
    }
}
