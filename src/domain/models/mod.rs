pub mod donation;
pub mod file;
pub mod user;

pub use donation::{Donation, DonationStatus, NewDonation};
pub use file::StoredFile;
pub use user::User;
