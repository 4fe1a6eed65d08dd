use std::env;

pub const TARGET_YEAR: i32 = 2024;

pub const DEFAULT_PORT: u16 = 8080;

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
