use thiserror::Error;

/// Longest accepted quote, in characters
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Longest accepted author name, in characters
pub const MAX_AUTHOR_CHARS: usize = 50;

/// Author recorded when the field is left empty
pub const ANONYMOUS_AUTHOR: &str = "匿名";

/// Why a submission was refused before it was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Enter the quote text")]
    EmptyContent,

    #[error("Quote is {chars} characters, the limit is {}", MAX_CONTENT_CHARS)]
    ContentTooLong { chars: usize },

    #[error("Author is {chars} characters, the limit is {}", MAX_AUTHOR_CHARS)]
    AuthorTooLong { chars: usize },
}

/// A quote ready to post to `/submit`.
///
/// Only constructed through [`Submission::new`], so a value always satisfies
/// the form rules the service enforces. Lengths count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    content: String,
    author: String,
}

impl Submission {
    pub fn new(content: &str, author: &str) -> Result<Self, SubmissionError> {
        let content = content.trim();
        let author = author.trim();

        if content.is_empty() {
            return Err(SubmissionError::EmptyContent);
        }
        let content_chars = content.chars().count();
        if content_chars > MAX_CONTENT_CHARS {
            return Err(SubmissionError::ContentTooLong {
                chars: content_chars,
            });
        }
        let author_chars = author.chars().count();
        if author_chars > MAX_AUTHOR_CHARS {
            return Err(SubmissionError::AuthorTooLong {
                chars: author_chars,
            });
        }

        Ok(Self {
            content: content.to_string(),
            author: if author.is_empty() {
                ANONYMOUS_AUTHOR.to_string()
            } else {
                author.to_string()
            },
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}
