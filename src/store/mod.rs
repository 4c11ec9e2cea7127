//! Ephemeral in-memory stores backing the demo.
//!
//! Everything here stands in for the presentation's pretend database:
//! populated at startup, mutated by the simulated admin actions, and
//! discarded when the process exits.

pub mod logs;
pub mod users;

pub use logs::LogStore;
pub use users::{User, UserStore};
