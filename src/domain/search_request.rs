use thiserror::Error;

pub const RESULT_CAP_CHOICES: [usize; 4] = [10, 20, 30, 50];

pub const DEFAULT_RESULT_CAP: usize = 20;

// Term is trimmed and non-empty, cap is one of RESULT_CAP_CHOICES
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    term: String,
    cap: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSearchRequest {
    #[error("search term is empty")]
    EmptyTerm,
    #[error("unsupported result cap {0}, expected one of 10, 20, 30 or 50")]
    UnsupportedCap(usize),
}

impl SearchRequest {
    pub fn new(term: &str, cap: usize) -> Result<Self, InvalidSearchRequest> {
        let term = term.trim();
        if term.is_empty() {
            return Err(InvalidSearchRequest::EmptyTerm);
        }
        if !RESULT_CAP_CHOICES.contains(&cap) {
            return Err(InvalidSearchRequest::UnsupportedCap(cap));
        }

        Ok(Self {
            term: term.to_string(),
            cap,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}
