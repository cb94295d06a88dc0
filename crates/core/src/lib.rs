//! Core types for herdcats.
//!
//! - [`ReunionEvent`]: notification emitted when a pair meets
//! - [`ChoiceSource`]: the single source of randomness for a run
//! - [`TurnStep`]: what the termination controller drives, turn by turn

mod choice;
mod event;
mod traits;

pub use choice::{ChoiceSource, RngChoices};
pub use event::ReunionEvent;
pub use traits::TurnStep;
