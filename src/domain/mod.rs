pub mod applicant;
pub mod carousel;
pub(crate) mod lenient;
pub mod listing;
pub mod money;
pub mod screen;

pub use applicant::{Applicant, NewApplicant};
pub use listing::{Listing, NewListing, PaymentMethod, PaymentPlan};
