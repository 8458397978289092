//! Card records - the static attributes of a card.
//!
//! A `CardRecord` holds everything validation needs to know about one
//! card: its type, side, faction, influence cost and the limits printed on
//! identities. Records are built from raw JSON mappings and never change
//! afterwards.
//!
//! ## Faux Records
//!
//! A faux record has no attributes at all. It is what observers see when
//! they look at a face-down card. All faux records compare equal to each
//! other and never equal to a real record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::CardError;

/// `type_code` of identity cards.
pub const IDENTITY_TYPE: &str = "identity";

/// `side_code` of corporation cards.
pub const CORP_SIDE: &str = "corp";

/// `side_code` of runner cards.
pub const RUNNER_SIDE: &str = "runner";

/// `side_code` of cards that never cost influence.
pub const NEUTRAL_SIDE: &str = "neutral";

/// Raw attribute set, in the order fields are compared.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct RecordFields {
    code: Option<String>,
    title: Option<String>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    type_code: Option<String>,
    subtype: Option<String>,
    subtype_code: Option<String>,
    text: Option<String>,
    baselink: Option<String>,
    faction: Option<String>,
    faction_code: Option<String>,
    faction_letter: Option<String>,
    flavor: Option<String>,
    illustrator: Option<String>,
    influencelimit: Option<i64>,
    minimumdecksize: Option<i64>,
    setname: Option<String>,
    set_code: Option<String>,
    side: Option<String>,
    side_code: Option<String>,
    uniqueness: Option<bool>,
    limited: Option<bool>,
    cyclenumber: Option<i64>,
    cost: Option<i64>,
}

/// Immutable card attributes.
///
/// ## Example
///
/// ```
/// use ccg_decks::cards::CardRecord;
/// use serde_json::json;
///
/// let gamble = CardRecord::from_raw(json!({
///     "title": "Sure Gamble",
///     "type_code": "event",
///     "side_code": "runner",
/// }))
/// .unwrap();
///
/// assert_eq!(gamble.title(), Some("Sure Gamble"));
/// assert!(gamble.is_runner());
/// assert!(!gamble.is_identity());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct CardRecord {
    #[serde(skip)]
    faux: bool,
    #[serde(flatten)]
    fields: RecordFields,
}

impl CardRecord {
    /// Create the redacted record shown for face-down cards.
    #[must_use]
    pub fn faux() -> Self {
        Self {
            faux: true,
            fields: RecordFields::default(),
        }
    }

    /// Build a record from a raw JSON mapping.
    ///
    /// `null` and `{}` produce a faux record. Missing keys become `None`
    /// and unknown keys are ignored. Anything that is not an object, or an
    /// object with a mistyped field, fails with `UnrecognizedFormat`.
    pub fn from_raw(raw: Value) -> Result<Self, CardError> {
        match raw {
            Value::Null => Ok(Self::faux()),
            Value::Object(ref map) if map.is_empty() => Ok(Self::faux()),
            Value::Object(_) => {
                let fields: RecordFields = serde_json::from_value(raw)
                    .map_err(|e| CardError::unrecognized(format!("invalid card mapping: {e}")))?;
                Ok(Self { faux: false, fields })
            }
            other => Err(CardError::unrecognized(format!(
                "expected a card mapping, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Is this the redacted face-down record?
    #[must_use]
    pub fn is_faux(&self) -> bool {
        self.faux
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.type_code() == Some(IDENTITY_TYPE)
    }

    #[must_use]
    pub fn is_runner(&self) -> bool {
        self.side_code() == Some(RUNNER_SIDE)
    }

    #[must_use]
    pub fn is_corp(&self) -> bool {
        self.side_code() == Some(CORP_SIDE)
    }

    /// Influence this card costs when included in `identity`'s deck.
    ///
    /// Free when the card has no cost, when `identity` is not an identity,
    /// when this card is itself an identity, and when the card is on the
    /// identity's side or neutral.
    #[must_use]
    pub fn cost_to(&self, identity: &CardRecord) -> i64 {
        let cost = match self.fields.cost {
            Some(cost) if cost != 0 => cost,
            _ => return 0,
        };
        if !identity.is_identity() || self.is_identity() {
            return 0;
        }
        if self.side_code() == identity.side_code() || self.side_code() == Some(NEUTRAL_SIDE) {
            return 0;
        }
        cost
    }

    // === Field accessors ===

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.fields.code.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.fields.title.as_deref()
    }

    /// Printed card type ("Identity", "Event", ...).
    #[must_use]
    pub fn card_type(&self) -> Option<&str> {
        self.fields.card_type.as_deref()
    }

    #[must_use]
    pub fn type_code(&self) -> Option<&str> {
        self.fields.type_code.as_deref()
    }

    #[must_use]
    pub fn subtype(&self) -> Option<&str> {
        self.fields.subtype.as_deref()
    }

    #[must_use]
    pub fn subtype_code(&self) -> Option<&str> {
        self.fields.subtype_code.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.fields.text.as_deref()
    }

    /// Base link strength text of runner identities.
    #[must_use]
    pub fn baselink(&self) -> Option<&str> {
        self.fields.baselink.as_deref()
    }

    #[must_use]
    pub fn faction(&self) -> Option<&str> {
        self.fields.faction.as_deref()
    }

    #[must_use]
    pub fn faction_code(&self) -> Option<&str> {
        self.fields.faction_code.as_deref()
    }

    #[must_use]
    pub fn faction_letter(&self) -> Option<&str> {
        self.fields.faction_letter.as_deref()
    }

    #[must_use]
    pub fn flavor(&self) -> Option<&str> {
        self.fields.flavor.as_deref()
    }

    #[must_use]
    pub fn illustrator(&self) -> Option<&str> {
        self.fields.illustrator.as_deref()
    }

    /// Influence budget printed on an identity.
    #[must_use]
    pub fn influence_limit(&self) -> Option<i64> {
        self.fields.influencelimit
    }

    /// Minimum deck size printed on an identity.
    #[must_use]
    pub fn minimum_deck_size(&self) -> Option<i64> {
        self.fields.minimumdecksize
    }

    #[must_use]
    pub fn set_name(&self) -> Option<&str> {
        self.fields.setname.as_deref()
    }

    #[must_use]
    pub fn set_code(&self) -> Option<&str> {
        self.fields.set_code.as_deref()
    }

    #[must_use]
    pub fn side(&self) -> Option<&str> {
        self.fields.side.as_deref()
    }

    #[must_use]
    pub fn side_code(&self) -> Option<&str> {
        self.fields.side_code.as_deref()
    }

    #[must_use]
    pub fn uniqueness(&self) -> Option<bool> {
        self.fields.uniqueness
    }

    #[must_use]
    pub fn limited(&self) -> Option<bool> {
        self.fields.limited
    }

    #[must_use]
    pub fn cycle_number(&self) -> Option<i64> {
        self.fields.cyclenumber
    }

    /// Influence cost printed on the card.
    #[must_use]
    pub fn cost(&self) -> Option<i64> {
        self.fields.cost
    }
}

impl PartialEq for CardRecord {
    fn eq(&self, other: &Self) -> bool {
        match (self.faux, other.faux) {
            (true, true) => true,
            (false, false) => self.fields == other.fields,
            _ => false,
        }
    }
}

impl Eq for CardRecord {}

impl std::fmt::Display for CardRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title().unwrap_or(""))
    }
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
