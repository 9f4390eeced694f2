use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::models::{BestPractice, Question};

pub const DEFAULT_QUESTIONS_PATH: &str = "data/questions.json";
pub const DEFAULT_BEST_PRACTICES_PATH: &str = "data/best_practices.json";

pub fn load_questions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    load_records(path.as_ref())
}

pub fn load_best_practices_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<BestPractice>, LoadError> {
    load_records(path.as_ref())
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}
