use crate::loader::error::LoadingError;
use crate::loader::file::File;
use std::path::Path;

pub mod error;
pub mod file;
pub mod file_system;

pub trait LoaderTrait {
    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
}
