//! CLI error type: everything the front end can fail with.

use lf_analysis::AnalysisError;
use thiserror::Error;

use crate::loader::LoadError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub type AppResult<T> = Result<T, AppError>;
