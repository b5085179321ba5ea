mod login_handler;

pub use login_handler::*;
