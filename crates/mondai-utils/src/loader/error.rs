use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Invalid Path: {0}")]
    InvalidPath(PathBuf),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
}

impl From<serde_yml::Error> for LoadingError {
    fn from(e: serde_yml::Error) -> Self {
        ParseError::Yaml(e).into()
    }
}
