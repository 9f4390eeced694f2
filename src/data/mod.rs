mod loader;

pub use loader::{
    DEFAULT_BEST_PRACTICES_PATH, DEFAULT_QUESTIONS_PATH, load_best_practices_from_path,
    load_questions_from_path,
};
