//! # Blog Shared
//!
//! Wire types exchanged with HTTP clients.

pub mod dto;
pub mod response;

pub use dto::PostPayload;
pub use response::ErrorResponse;
