//! Editor-facing queries over the rules.
//!
//! Nothing here affects parsing. Completion hints are metadata an editor
//! reads to decide which symbol categories to offer.

mod completion;

pub use completion::{CompletionHint, completion_symbols};
