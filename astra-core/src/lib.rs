pub mod classify;
pub mod compose;
pub mod config;
pub mod error;
pub mod generate;
pub mod knowledge;
pub mod models;
pub mod store;

pub use config::AstraConfig;
pub use error::AstraError;
pub use generate::{
    create_generator, GenerateError, OpenAiGenerator, ResponseGenerator, TemplateGenerator,
};
pub use models::{
    ChatTurn, Conversation, GradeLevel, Message, NewStudentProfile, Role, StudentProfile,
};
pub use store::{ConversationStore, StoreError};
