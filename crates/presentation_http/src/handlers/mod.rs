//! HTTP request handlers

pub mod climate;
pub mod meta;
