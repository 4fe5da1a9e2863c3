//! REST API endpoint implementations.

mod alerts;
mod request;

pub use alerts::{get_alert, get_alert_status, list_alerts_page, update_alert};
pub use request::send_request;
