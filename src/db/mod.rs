pub mod connection;
pub mod drivers;
pub mod trucks;

pub use connection::{init_db, Database};
