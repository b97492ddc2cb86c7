mod markdown_vm;
mod question_vm;
mod results_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use question_vm::{FeedbackPane, QuestionVm, map_question};
pub use results_vm::{OverallVm, ResultsVm, ReviewItemVm, map_results};
pub use time_fmt::format_duration;
