//! Guard check-ins.
//!
//! Every call records one login event; usernames are not deduplicated and
//! nothing else is checked.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/login` | No | Record a login event |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{LoginRepository, PgLoginRepository};
pub use services::LoginService;
