//! Blog operations written against the storage interface.

pub mod blog;

pub use blog::{ArticleDraft, BlogService, Registration};
