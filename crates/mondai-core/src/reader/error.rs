use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Wrong file extension `{extension}`. Allowed extensions: {allowed:?}")]
    UnsupportedFileType { extension: String, allowed: Vec<String> },
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Pdf(#[from] pdf_extract::OutputError),
    #[error(transparent)]
    Docx(#[from] docx_rs::ReaderError),
    #[error("The document does not contain any text")]
    EmptyDocument,
}
