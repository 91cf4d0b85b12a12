use crate::part_of_speech::PartOfSpeech;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no {part_of_speech} word starting with '{letter}'")]
    NoMatch {
        part_of_speech: PartOfSpeech,
        letter: char,
    },

    #[error("no word source registered for '{0}'")]
    MissingWordSource(PartOfSpeech),

    #[error("failed to read dictionary file {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no dictionary configured: pass --dictionary, set {env}, or add `dictionary` to the config file", env = crate::config::DICTIONARY_ENV)]
    DictionaryNotConfigured,

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error. Rendering failures (a letter no
    /// source can satisfy, or a part of speech with no source) exit with 2;
    /// configuration and dictionary failures exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoMatch { .. } | Error::MissingWordSource(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
