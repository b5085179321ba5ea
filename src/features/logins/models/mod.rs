mod login_event;

pub use login_event::LoginEvent;
