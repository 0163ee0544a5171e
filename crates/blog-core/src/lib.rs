//! # Blog Core
//!
//! The domain layer of the blog API: the blog post document model, its
//! validation rules and the ports the infrastructure crate implements.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, FieldError, ValidationErrors};
