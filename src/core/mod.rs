// src/core/mod.rs

pub mod dates;
pub mod rating;
pub mod sanitize;

pub use rating::Rating;
