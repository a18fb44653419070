//! Page components, one per routed view.

pub mod admin_users;
pub mod dashboard;
pub mod import;
pub mod login;
pub mod notifications;
pub mod reports;
pub mod transactions;
pub mod verify_email;
