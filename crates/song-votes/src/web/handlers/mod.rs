//! Web handlers module
//!
//! HTTP request handlers organized by domain. Handlers only map requests to
//! service calls and results to responses.

pub mod e2e;
pub mod health;
pub mod recommendations;
