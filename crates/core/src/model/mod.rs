mod batch;
mod category;
mod display_mode;
mod question;

pub use batch::{BATCH_SIZE, BatchError, QuestionBatch};
pub use category::Category;
pub use display_mode::DisplayMode;
pub use question::{ANSWER_COUNT, DISTRACTOR_COUNT, Question, QuestionError};
