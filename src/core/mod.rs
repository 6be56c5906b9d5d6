// src/core/mod.rs
pub mod analyzer;
pub mod breach;
pub mod config;
pub mod dictionary;
pub mod entropy;
pub mod patterns;
pub mod rate_limit;
