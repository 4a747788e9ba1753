//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod banner;
#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use banner::{celebrate, rainbow_frame};
#[cfg(feature = "tui")]
pub use prompts::{finish, run};
