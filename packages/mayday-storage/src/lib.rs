pub mod documents;
pub mod roster;
pub mod source;
pub mod templates;

mod error;

pub use documents::DocumentStore;
pub use error::Error;
pub use roster::{UserProfile, UserRoster};
pub use source::{JsonFile, RecordSource};
pub use templates::TemplateStore;

pub type Result<T, E = Error> = std::result::Result<T, E>;
