// src/core.rs
pub mod annotation;
pub mod binary;
pub mod scanner;
