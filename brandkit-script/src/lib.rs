//! Emits the PowerShell script that applies a palette to a Microsoft 365
//! tenant, plus the README shipped next to it.

pub mod emitter;

pub use emitter::{emit_script, ScriptEmitter, ScriptError};

/// Static instructions bundled as `README.txt`.
pub const README: &str = include_str!("../templates/README.txt");
