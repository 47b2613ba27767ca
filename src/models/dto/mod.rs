pub mod request;
pub use request::{CreateChoiceRequest, CreateQuestionRequest};
