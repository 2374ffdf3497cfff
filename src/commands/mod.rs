//! From raw utterance to reply: normalization, parsing, execution, rendering.

pub mod command;
pub mod format;
pub mod interpreter;
pub mod normalizer;

pub use command::Command;
pub use interpreter::{InterpretError, Interpreter};
pub use normalizer::normalize;
