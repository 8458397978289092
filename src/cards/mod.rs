//! Card system: records, visibility, and card sources.
//!
//! ## Key Types
//!
//! - `CardRecord`: Immutable card attributes (title, side, influence, ...)
//! - `Card`: A record plus a face-up flag; face-down cards show a faux record
//! - `CardSource`: Where raw card mappings come from (file or parsed JSON)
//!
//! ## Hidden Information
//!
//! `Card::view` is the only public way to read a card's attributes. A
//! face-down card always answers with a faux record.

pub mod card;
pub mod record;
pub mod source;

pub use card::Card;
pub use record::{CardRecord, CORP_SIDE, IDENTITY_TYPE, NEUTRAL_SIDE, RUNNER_SIDE};
pub use source::{parse_source, CardSource};
