//! Discovery of the commands a user can look up.

pub mod enumerator;
pub mod set;

pub use enumerator::{enumerate, parse_lines, scan_path};
pub use set::CommandSet;
