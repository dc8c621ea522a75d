mod controller;
mod error;
mod record;

pub use controller::{FormMode, Roster, Submitted};
pub use error::{Error, Result};
pub use record::{Draft, Field, TeacherId, TeacherRecord};
