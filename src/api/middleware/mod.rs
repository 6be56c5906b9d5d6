// src/api/middleware/mod.rs
pub mod rate_limit;
