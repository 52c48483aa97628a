//! Background workers feeding the UI loop

pub mod core;
pub mod poller;
pub mod staff_action;

pub use self::core::{EventSender, SequenceGuard, Sequencer};
pub use poller::{Poller, PollerHandle};
pub use staff_action::{ActionOutcome, change_table_status};
