use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use mondai_config::quiz::{ChunkingConfig, QuizConfig};
use mondai_utils::loader::file::File;
use unicode_segmentation::UnicodeSegmentation;

use crate::reader::error::ReaderError;

pub mod error;

/// Extracts the plain text of an uploaded document.
pub fn read_document(file: &File, config: &QuizConfig) -> Result<String, ReaderError> {
    let extension = file.extension().unwrap_or_default();
    if !config.allows_file_type(&extension) {
        return Err(ReaderError::UnsupportedFileType {
            extension,
            allowed: config.file_types.clone(),
        });
    }

    match extension.as_str() {
        "txt" => Ok(String::from_utf8(file.content.clone())?),
        "pdf" => {
            tracing::debug!(key = %file.metadata.key, "Extracting text from PDF");
            let pages = pdf_extract::extract_text_from_mem_by_pages(&file.content)?;
            Ok(pages.iter().map(|page| clean_pdf_page(page)).collect())
        }
        "docx" => {
            tracing::debug!(key = %file.metadata.key, "Extracting text from DOCX");
            let docx = docx_rs::read_docx(&file.content)?;
            let paragraphs: Vec<String> = docx
                .document
                .children
                .iter()
                .filter_map(|child| match child {
                    DocumentChild::Paragraph(paragraph) => Some(paragraph_text(&paragraph.children)),
                    _ => None,
                })
                .collect();
            Ok(paragraphs.join("\n"))
        }
        _ => Err(ReaderError::UnsupportedFileType {
            extension,
            allowed: vec!["txt".to_owned(), "pdf".to_owned(), "docx".to_owned()],
        }),
    }
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(run.children.iter()),
            _ => None,
        })
        .flatten()
        .filter_map(|child| match child {
            RunChild::Text(text) => Some(text.text.as_str()),
            RunChild::Tab(_) => Some("\t"),
            _ => None,
        })
        .collect()
}

/// Undoes the line wrapping left behind by PDF text extraction.
fn clean_pdf_page(page: &str) -> String {
    page.replace(" \n", " ")
        .replace('\u{a0}', " ")
        .replace(".\n", ".\n\n")
        .replace("?\n", "?\n\n")
        .replace("!\n", "!\n\n")
        .replace('\u{2013}', "-")
        .replace(" -\n", "")
        .replace("-\n", "-")
        .replace("/\n", "/")
}

/// Reads and chunks a document in one go.
pub fn read_chunks(file: &File, config: &QuizConfig) -> Result<Vec<String>, ReaderError> {
    let text = read_document(file, config)?;
    let chunks = chunk_text(&text, config.chunking);
    if chunks.is_empty() {
        return Err(ReaderError::EmptyDocument);
    }
    tracing::debug!(chunks = chunks.len(), "Split document into chunks");
    Ok(chunks)
}

/// Splits `text` on sentence boundaries into chunks of at most `size` characters.
/// Trailing sentences of up to `overlap` characters are repeated at the start of
/// the next chunk. Whitespace-only chunks are dropped.
#[must_use]
pub fn chunk_text(text: &str, chunking: ChunkingConfig) -> Vec<String> {
    let size = chunking.size.max(1);

    let pieces: Vec<&str> = text
        .split_sentence_bounds()
        .flat_map(|sentence| hard_split(sentence, size))
        .collect();

    let mut chunks = Vec::new();
    let mut current: Vec<(&str, usize)> = Vec::new();
    let mut current_len = 0;

    for piece in pieces {
        let piece_len = piece.chars().count();

        if current_len + piece_len > size && !current.is_empty() {
            push_chunk(&mut chunks, &current);

            while !current.is_empty() && (current_len > chunking.overlap || current_len + piece_len > size) {
                let (_, len) = current.remove(0);
                current_len -= len;
            }
        }

        current.push((piece, piece_len));
        current_len += piece_len;
    }
    push_chunk(&mut chunks, &current);

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, pieces: &[(&str, usize)]) {
    let chunk: String = pieces.iter().map(|(piece, _)| *piece).collect();
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        chunks.push(chunk.to_owned());
    }
}

fn hard_split(sentence: &str, size: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = sentence;
    while let Some((offset, _)) = rest.char_indices().nth(size) {
        let (head, tail) = rest.split_at(offset);
        pieces.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}
