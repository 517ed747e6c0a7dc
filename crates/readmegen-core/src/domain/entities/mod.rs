pub mod answers;
pub mod document;
pub mod question;
pub mod target_path;

pub use answers::AnswerSet;
pub use document::{RenderContext, RenderDocument};
pub use question::{DEFAULT_TARGET_DIR, Question, overwrite_question, readme_questions};
pub use target_path::{README_FILE_NAME, TargetPath};
