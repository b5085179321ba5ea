mod notification_service;
mod report_service;

pub use notification_service::NotificationService;
pub use report_service::ReportService;
