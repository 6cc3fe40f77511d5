//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod layout;
pub mod records;
pub mod table;

pub use layout::{calculate_page_layout, PageLayout};
pub use records::RecordsComponent;
