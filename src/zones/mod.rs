//! Piles and the table that holds them.
//!
//! ## Key Types
//!
//! - `Pile`: read access shared by every pile variant
//! - `Stock`: circular draw pile, revealed one card at a time
//! - `TableauColumn`: cascading column with a face-up suffix
//! - `Foundation`: ascending same-suit stack
//! - `Table`: all piles of one game, card locations and invariant checks

pub mod pile;
pub mod stock;
pub mod tableau;
pub mod foundation;
pub mod table;

pub use pile::Pile;
pub use stock::Stock;
pub use tableau::{Run, TableauColumn};
pub use foundation::Foundation;
pub use table::{InvariantViolation, Table, Transfer};
