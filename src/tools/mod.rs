//! External tool discovery and subprocess execution.
//!
//! - [`path`] - PATH parsing and executable lookup
//! - [`capabilities`] - Which optional tools this run may use
//! - [`process`] - The [`ProcessRunner`] seam and its implementations
//! - `signal` - SIGINT suppression while something else owns the terminal

pub mod capabilities;
pub mod path;
pub mod process;
pub(crate) mod signal;

pub use capabilities::{Capabilities, Tool};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use process::{
    Captured, ExitInfo, Invocation, MockResponse, MockRunner, ProcessRunner, SystemRunner,
};
