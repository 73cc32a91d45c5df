// Small shared helpers
pub mod app_time;
