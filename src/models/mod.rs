//! Data models for the Creator Platform application.
//!
//! These models match the frontend interfaces exactly for seamless interoperability.

mod analytics;
mod comment;
mod community;
mod course;
mod idea;
mod modal;
mod notification;
mod snapshot;
mod user;
mod webinar;

pub use analytics::*;
pub use comment::*;
pub use community::*;
pub use course::*;
pub use idea::*;
pub use modal::*;
pub use notification::*;
pub use snapshot::*;
pub use user::*;
pub use webinar::*;
