//! Prediction for predictive parsers: FIRST and FOLLOW sets.

mod first;
mod follow;

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::Symbol;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;

/// The representation of FIRST and FOLLOW sets.
///
/// In a FIRST set, `None` stands for ε; in a FOLLOW set, `None` is the
/// end-of-input marker.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Option<Symbol>>>;
