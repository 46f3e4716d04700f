//! Application layer - Use cases and orchestration

pub mod compose;
pub mod report;
pub mod session;

pub use compose::ComposeService;
pub use report::{JourneyReport, WeeklyChain};
pub use session::Session;
