//! The pit and the scripted fall it triggers.
pub mod fall;
pub mod systems;
