//! Use-case services sitting between the HTTP layer and the repositories.

mod post_service;

pub use post_service::PostService;
