//! Page components, one per routed view.

pub mod dashboard;
pub mod login;
pub mod profile;
