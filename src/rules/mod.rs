//! Game controller contract shared by the rule sets.
//!
//! - `ControllerCore`: players, turn sequencer, skip slot, status, observer
//! - `GameController`: trait each rule set implements on top of the core
//!
//! ## Lifecycle
//!
//! `NotStarted -> InProgress -> Finished`. Only the linear rules reach
//! `Finished`; in the cyclic rules players complete individually and the
//! session stays in progress.

mod controller;
pub mod engine;

pub use controller::{ControllerCore, GameStatus};
pub use engine::{GameController, TurnOutcome};
