use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("record has no msgid to translate")]
    NotAMessage,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("paragraph {0} does not exist")]
    ParagraphOutOfRange(usize),
    #[error("message {0} does not exist")]
    MessageOutOfRange(usize),
    #[error("no paragraph is selected")]
    NoParagraphSelected,
    #[error("no message is selected")]
    NoMessageSelected,
    #[error("message {index}")]
    Pairing {
        index: usize,
        #[source]
        source: PairingError,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no file: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}
