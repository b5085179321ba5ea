pub mod logins;
pub mod reports;
