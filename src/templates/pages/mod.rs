pub mod drivers;
pub mod financing;
pub mod home;
pub mod inventory;
pub mod register;

pub use drivers::drivers_page;
pub use financing::financing_page;
pub use home::{home_page, HomeVm};
pub use inventory::inventory_page;
pub use register::{register_page, FormOutcome};
