pub mod channel;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod ipc;
pub mod resolver;

pub use dispatch::Dispatcher;
pub use engine::{Engine, ProcessEngine};
pub use resolver::RootResolver;

use std::path::PathBuf;

/// Resolve the development root by walking up from the running executable
/// with the default marker. `None` when no marker exists in the
/// executable's ancestry.
pub fn dev_root() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    RootResolver::default().resolve(&exe)
}
