pub use db::*;

pub mod blog_drafts;
pub mod blog_posts;
pub mod event_drafts;
pub mod event_posts;
pub mod project_drafts;
pub mod project_posts;
pub mod roles;

mod db;
