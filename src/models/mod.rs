mod app_state;
mod best_practice;
mod question;

pub use app_state::AppState;
pub use best_practice::BestPractice;
pub use question::Question;
