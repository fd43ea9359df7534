//! Ordered first-match rule tables.
//!
//! DESIGN
//! ======
//! A table is a list of `(predicate, value)` pairs plus a fallback. Rules are
//! tried in insertion order and the first hit wins, so extending a policy is a
//! matter of adding rules; call sites only ever call `resolve`.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use crate::util::assets;

/// Test applied to a subject string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Case-sensitive substring match.
    Contains(String),
}

impl Predicate {
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Self::Contains(needle) => subject.contains(needle.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<T> {
    pub predicate: Predicate,
    pub value: T,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    fallback: T,
}

impl<T> RuleTable<T> {
    /// Empty table that always resolves to `fallback`.
    pub fn new(fallback: T) -> Self {
        Self { rules: Vec::new(), fallback }
    }

    /// Append a rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, predicate: Predicate, value: T) -> Self {
        self.rules.push(Rule { predicate, value });
        self
    }

    /// Value of the first rule matching `subject`, else the fallback.
    pub fn resolve(&self, subject: &str) -> &T {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(subject))
            .map_or(&self.fallback, |rule| &rule.value)
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }
}

/// Card image chosen from an event title.
///
/// "Picnic" beats "Roundtable"; everything else gets the forum image.
pub fn event_image_rules() -> RuleTable<String> {
    RuleTable::new(assets::EVENT_FORUM.to_owned())
        .with_rule(Predicate::Contains("Picnic".to_owned()), assets::EVENT_PICNIC.to_owned())
        .with_rule(Predicate::Contains("Roundtable".to_owned()), assets::EVENT_ROUNDTABLE.to_owned())
}
