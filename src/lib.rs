pub mod models;
pub mod error;
pub mod normalizer;
pub mod matchers;
pub mod dispatcher;
pub mod rules;
pub mod input;
pub mod output;
pub mod runner;
pub mod logging;

// Re-export commonly used items
pub use models::*;
pub use error::*;
pub use normalizer::*;
pub use matchers::*;
pub use dispatcher::*;
pub use rules::*;
pub use input::*;
pub use output::*;
pub use runner::*;
pub use logging::*;
