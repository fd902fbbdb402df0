//! # urscript-gen
//!
//! An engine-agnostic compiler that translates Cartesian target frames into
//! URScript motion commands for Universal Robots controllers.
//!
//! It decouples the *geometry* (oriented [`Frame`]s in the robot base
//! coordinate system) from the *protocol* (line-oriented script text),
//! producing [`ScriptCommand`] lines that can be buffered into a program or
//! streamed to a controller session by the caller. The crate owns the text
//! it emits, not its delivery: transport, acknowledgment and session
//! lifecycle belong to the driver layer.

pub mod emitter;
pub mod frame;
pub mod script;

pub use emitter::*;
pub use frame::*;
pub use script::*;
