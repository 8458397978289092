//! Deck construction rules.
//!
//! A rule is a named predicate over a [`RuleContext`]: the deck's sorted
//! snapshot, its identity, and the limits read off the identity. Rules
//! never mutate anything.
//!
//! `RuleSet::standard()` registers the built-in rules in a fixed order:
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | `deck_size` | snapshot size >= minimum deck size |
//! | `single_identity` | exactly one identity in the snapshot |
//! | `composition` | every card shares one side |
//! | `influence` | total influence <= influence limit |
//! | `agenda_points` | always (not checked yet) |
//!
//! Extra rules are appended with [`RuleSet::with_rule`] and run after the
//! built-ins, so report order stays stable.

use rustc_hash::FxHashSet;

use crate::cards::{Card, CardRecord};

/// Everything a rule may look at.
///
/// Contexts are only built by [`crate::deck::Deck`] while it validates
/// itself, so rules see the real records of the deck's own cards and
/// nothing else.
///
/// ```compile_fail
/// use ccg_decks::cards::Card;
/// use ccg_decks::deck::RuleContext;
///
/// let card = Card::from_raw(serde_json::json!({"title": "Hostile Takeover"})).unwrap();
/// let ctx = RuleContext {
///     snapshot: std::slice::from_ref(&card),
///     identity: &card,
///     influence_limit: 0,
///     min_deck_size: 0,
/// };
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    snapshot: &'a [Card],
    identity: &'a Card,
    influence_limit: i64,
    min_deck_size: i64,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(
        snapshot: &'a [Card],
        identity: &'a Card,
        influence_limit: i64,
        min_deck_size: i64,
    ) -> Self {
        Self {
            snapshot,
            identity,
            influence_limit,
            min_deck_size,
        }
    }

    /// Number of cards in the deck as built.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.snapshot.len()
    }

    #[must_use]
    pub fn influence_limit(&self) -> i64 {
        self.influence_limit
    }

    #[must_use]
    pub fn min_deck_size(&self) -> i64 {
        self.min_deck_size
    }

    /// Records of the deck's cards sorted by title, regardless of face-up state.
    pub fn records(&self) -> impl Iterator<Item = &'a CardRecord> + 'a {
        self.snapshot.iter().map(Card::record)
    }

    /// Record of the identity card.
    #[must_use]
    pub fn identity_record(&self) -> &'a CardRecord {
        self.identity.record()
    }

    /// Total influence the snapshot spends against the identity.
    #[must_use]
    pub fn influence_spent(&self) -> i64 {
        let identity = self.identity_record();
        self.records().map(|card| card.cost_to(identity)).sum()
    }
}

/// Predicate signature for deck rules.
pub type RuleCheck = fn(&RuleContext<'_>) -> bool;

/// A named deck construction rule.
#[derive(Clone, Copy, Debug)]
pub struct ValidationRule {
    pub name: &'static str,
    pub check: RuleCheck,
}

impl ValidationRule {
    #[must_use]
    pub const fn new(name: &'static str, check: RuleCheck) -> Self {
        Self { name, check }
    }

    /// Run the rule.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> bool {
        (self.check)(ctx)
    }
}

pub const DECK_SIZE: ValidationRule = ValidationRule::new("deck_size", check_deck_size);
pub const SINGLE_IDENTITY: ValidationRule =
    ValidationRule::new("single_identity", check_single_identity);
pub const COMPOSITION: ValidationRule = ValidationRule::new("composition", check_composition);
pub const INFLUENCE: ValidationRule = ValidationRule::new("influence", check_influence);
pub const AGENDA_POINTS: ValidationRule = ValidationRule::new("agenda_points", check_agenda_points);

/// Deck must be at least the identity's minimum size.
pub fn check_deck_size(ctx: &RuleContext<'_>) -> bool {
    ctx.deck_size() as i64 >= ctx.min_deck_size()
}

/// Deck must contain exactly one identity.
pub fn check_single_identity(ctx: &RuleContext<'_>) -> bool {
    ctx.records().filter(|card| card.is_identity()).count() == 1
}

/// Every card must belong to the same side.
pub fn check_composition(ctx: &RuleContext<'_>) -> bool {
    let sides: FxHashSet<Option<&str>> = ctx.records().map(CardRecord::side_code).collect();
    sides.len() == 1
}

/// Influence spent must fit the identity's budget.
pub fn check_influence(ctx: &RuleContext<'_>) -> bool {
    ctx.influence_spent() <= ctx.influence_limit()
}

/// Agenda point totals are not checked yet; always passes.
pub fn check_agenda_points(_ctx: &RuleContext<'_>) -> bool {
    true
}

/// Ordered list of rules a deck is checked against.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<ValidationRule>,
}

impl RuleSet {
    /// An empty rule set. Every deck is valid under it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in construction rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![DECK_SIZE, SINGLE_IDENTITY, COMPOSITION, INFLUENCE, AGENDA_POINTS],
        }
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.iter()
    }

    /// Run every rule in order.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> ValidationReport {
        ValidationReport {
            results: self
                .rules
                .iter()
                .map(|rule| RuleOutcome {
                    name: rule.name,
                    passed: rule.evaluate(ctx),
                })
                .collect(),
        }
    }
}

/// Result of one rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleOutcome {
    pub name: &'static str,
    pub passed: bool,
}

/// Per-rule results, in rule registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<RuleOutcome>,
}

impl ValidationReport {
    /// True when every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|outcome| outcome.passed)
    }

    /// Result of a named rule, if it ran.
    #[must_use]
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.results
            .iter()
            .find(|outcome| outcome.name == name)
            .map(|outcome| outcome.passed)
    }

    /// Names of failed rules, in evaluation order.
    #[must_use]
    pub fn failures(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.name)
            .collect()
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.results
    }
}
