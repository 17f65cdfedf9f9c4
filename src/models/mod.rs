pub use blog::*;
pub use event::*;
pub use project::*;
pub use role::*;

mod blog;
mod event;
mod project;
mod role;
