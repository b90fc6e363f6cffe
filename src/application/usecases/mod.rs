pub mod create_donation;
pub mod login_user;
pub mod register_user;
pub mod upload_files;
