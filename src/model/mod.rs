//! Model layer - the renter roster data

pub mod renter;

pub use renter::RenterRecord;
