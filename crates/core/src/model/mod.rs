mod category;
mod chat;
mod question;
mod session;
mod tally;

pub use category::Category;
pub use chat::{ChatMessage, ChatRole};
pub use question::{AnswerOption, QUESTION_COUNT, Question, QuestionId, question_bank};
pub use session::{
    COMPLETED_SENTINEL, DIAGNOSTIC_TITLE, KEY_COMPLETED, KEY_RESULT, KEY_TITLE, SessionRecord,
};
pub use tally::ScoreTally;
