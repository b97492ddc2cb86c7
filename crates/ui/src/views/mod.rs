mod desktop;
mod landing;
mod question;
mod results;
mod state;
mod window;

pub use desktop::{Desktop, Taskbar};
pub use landing::LandingView;
pub use question::QuestionView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState};
pub use window::Window;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
