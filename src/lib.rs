//! # Mnemonic
//!
//! Generate a mnemonic phrase from a string of characters: every letter
//! becomes a word starting with that letter, arranged into short
//! adjective noun verb adverb sentences.
//!
//! ## Usage
//!
//! ```bash
//! mnemonic generate demo --dictionary /usr/share/wordnet
//! ```
//!
//! ## Modules
//!
//! - `config` - Dictionary path configuration (config file and environment)
//! - `error` - Crate-wide error type and exit code mapping
//! - `part_of_speech` - The closed adjective/noun/verb/adverb set
//! - `template` - Template builder and renderer
//! - `wordnet` - WordNet index file dictionary adapter
//! - `words` - The `WordSource` trait, registry, and implementations
pub mod config;
pub mod error;
pub mod part_of_speech;
pub mod template;
pub mod wordnet;
pub mod words;
