//! Interactive demo surface
//!
//! Components:
//! - Input: readline prompts and confirmation gates
//! - Display: colored, presentation-oriented terminal output
//! - Session: the scripted demo flow itself

pub mod display;
pub mod input;
pub mod session;

pub use display::Display;
pub use input::PromptReader;
pub use session::{build_demo_pipeline, DemoSession};
