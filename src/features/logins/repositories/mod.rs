mod login_repository;

pub use login_repository::{LoginRepository, PgLoginRepository};
