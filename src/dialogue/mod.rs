//! Dialogue module: the hidden/visible toggle for the single NPC line.
pub mod state;
