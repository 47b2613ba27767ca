pub mod choice;
pub mod grading;
pub mod question;
pub use choice::Choice;
pub use grading::{GradedSelection, SelectionResult};
pub use question::Question;
