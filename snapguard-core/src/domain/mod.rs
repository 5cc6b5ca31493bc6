pub mod error;
pub mod resources;
pub mod retention;
pub mod tags;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use resources::{Snapshot, Volume};
pub use retention::RetentionWindow;
pub use tags::TagSet;
