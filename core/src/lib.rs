pub mod overview;
pub mod requests;
pub mod session;
pub mod vault;

pub mod error;
