pub mod quiz_flow;
pub mod quiz_task;

pub use quiz_flow::QuizFlow;
pub use quiz_task::QuizTask;
