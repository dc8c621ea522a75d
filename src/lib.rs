pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod prompt;
pub mod render;
pub mod roster;
pub mod session;

pub use crate::roster::{Draft, Field, FormMode, Roster, Submitted, TeacherId, TeacherRecord};
