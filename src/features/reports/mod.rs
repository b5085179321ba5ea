//! Incident reports.
//!
//! A submitted report is persisted first and then mailed to the
//! administrator. The two steps fail independently: a report that was saved
//! stays saved even when the mail cannot be delivered.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/report` | No | Submit a report |
//! | GET | `/api/reports` | No | List all reports, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgReportRepository, ReportRepository};
pub use services::{NotificationService, ReportService};
