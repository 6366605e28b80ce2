mod conversation;
mod message;
mod profile;

pub use conversation::Conversation;
pub use message::{ChatTurn, Message, Role};
pub use profile::{GradeLevel, NewStudentProfile, StudentProfile};
