//! Domain types
//!
//! Records exchanged with the person API and the list view state.

pub mod list_state;
pub mod person;

pub use list_state::ListState;
pub use person::{format_date, NewPerson, Person};
