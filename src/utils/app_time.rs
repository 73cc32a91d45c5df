// src/utils/app_time.rs

pub type AppInstant = std::time::Instant;

pub fn now() -> AppInstant {
    std::time::Instant::now()
}
