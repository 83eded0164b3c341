pub mod config;
pub mod output;
pub mod scanner;
pub mod workspace_state;

// Re-export main types for easy access
pub use config::Config;
pub use scanner::{scan_checkouts, Acknowledgement};
pub use workspace_state::{WorkspaceState, WorkspaceStateParser};
