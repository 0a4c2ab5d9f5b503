pub mod access;
pub mod conversation;
pub mod date_serde;
pub mod document;
pub mod permissions;
pub mod scoring;
pub mod template;

pub use conversation::{ConversationTurn, Role};
pub use document::Document;
pub use permissions::UserPermissions;
pub use template::{Confidence, ResponseTemplate};
