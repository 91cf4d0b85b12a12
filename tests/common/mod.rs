//! Common test utilities and helpers

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a WordNet-style dictionary directory backed by a temp dir.
///
/// Index files carry a license-style header line (leading whitespace) and
/// one entry line per lemma, so tests exercise the same parsing the real
/// database needs.
pub struct DictionaryBuilder {
    temp_dir: TempDir,
}

impl DictionaryBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write `index.<pos>` containing `lemmas`. `pos` is one of the file
    /// suffixes: "adj", "noun", "verb", "adv".
    pub fn with_index(self, pos: &str, lemmas: &[&str]) -> Result<Self> {
        let marker = match pos {
            "noun" => "n",
            "verb" => "v",
            "adj" => "a",
            "adv" => "r",
            other => other,
        };
        let mut content =
            String::from("  1 This software and database is being provided for testing.\n");
        for lemma in lemmas {
            content.push_str(&format!("{lemma} {marker} 1 1 @ 1 0 00000000  \n"));
        }
        fs::write(self.temp_dir.path().join(format!("index.{pos}")), content)?;
        Ok(self)
    }

    /// Write all four index files in one call.
    pub fn with_all_indexes(
        self,
        adj: &[&str],
        noun: &[&str],
        verb: &[&str],
        adv: &[&str],
    ) -> Result<Self> {
        self.with_index("adj", adj)?
            .with_index("noun", noun)?
            .with_index("verb", verb)?
            .with_index("adv", adv)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// A dictionary with exactly one candidate per part of speech for the
/// letters of "demo", yielding a deterministic phrase.
pub fn demo_dictionary() -> Result<DictionaryBuilder> {
    DictionaryBuilder::new()?.with_all_indexes(
        &["dancing"],
        &["eggs"],
        &["move"],
        &["outward"],
    )
}

/// An empty directory to point `XDG_CONFIG_HOME` at, keeping tests away
/// from any real user configuration.
pub fn empty_config_home() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Write `<config_home>/mnemonic/config.toml` naming `dictionary`.
pub fn write_config_file(config_home: &Path, dictionary: &Path) -> Result<PathBuf> {
    let dir = config_home.join("mnemonic");
    fs::create_dir_all(&dir)?;
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!("dictionary = \"{}\"\n", dictionary.display()),
    )?;
    Ok(path)
}
