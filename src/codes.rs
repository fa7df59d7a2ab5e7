//! Starter code shipped with a problem page, keyed by language.

use crate::{fsutil, render, Error, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use strum::{Display, EnumString};

const CODE_DEFINITION_MARKER: &str = "codeDefinition";

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[strum(to_string = "go", serialize = "golang")]
    #[serde(alias = "golang")]
    Go,
    #[strum(to_string = "rust", serialize = "rs")]
    #[serde(alias = "rs")]
    Rust,
}

impl Language {
    /// Key the remote code table uses for this language.
    pub fn remote_key(self) -> &'static str {
        match self {
            Language::Go => "golang",
            Language::Rust => "rust",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }

    fn from_remote_key(key: &str) -> Option<Self> {
        [Language::Go, Language::Rust]
            .into_iter()
            .find(|lang| lang.remote_key() == key)
    }
}

/// Source of per-language starter code for a problem.
///
/// `parse_document` runs before anything else is read from a page; a failure
/// there aborts the extraction.
pub trait CodeIndex {
    fn parse_document(&mut self, document: &Html) -> Result<()>;

    fn code(&self, language: Language) -> Result<CodeSample<'_>>;
}

/// Starter code for one language, ready to be written next to a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample<'a> {
    pub language: Language,
    pub code: &'a str,
}

impl CodeSample<'_> {
    pub fn solution_path(&self, dir: &Path, module: &str) -> PathBuf {
        dir.join(format!("{module}.{}", self.language.extension()))
    }

    pub fn test_path(&self, dir: &Path, module: &str) -> PathBuf {
        dir.join(format!("{module}_test.{}", self.language.extension()))
    }

    pub fn write_solution_file(&self, dir: &Path, module: &str) -> Result<PathBuf> {
        let path = self.solution_path(dir, module);
        let source = render::solution_source(self.language, module, self.code)?;
        fsutil::overwrite_file(&path, &[source.as_str()])?;
        Ok(path)
    }

    pub fn write_test_file(&self, dir: &Path, module: &str) -> Result<PathBuf> {
        let path = self.test_path(dir, module);
        let source = render::test_source(self.language, module, self.code)?;
        fsutil::overwrite_file(&path, &[source.as_str()])?;
        Ok(path)
    }
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    value: String,
    #[serde(rename = "defaultCode")]
    default_code: String,
}

/// Code table read from the `codeDefinition: [...]` array embedded in a page script.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CodeDefinitions {
    codes: BTreeMap<Language, String>,
}

impl CodeDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: Language, code: impl Into<String>) {
        self.codes.insert(language, code.into());
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.codes.keys().copied()
    }
}

impl CodeIndex for CodeDefinitions {
    fn parse_document(&mut self, document: &Html) -> Result<()> {
        self.codes.clear();
        let scripts = Selector::parse("script").unwrap();
        for script in document.select(&scripts) {
            let text = script.text().collect::<String>();
            let Some(definitions) = parse_definitions(&text)? else {
                continue;
            };
            for def in definitions {
                if let Some(language) = Language::from_remote_key(&def.value) {
                    self.codes.insert(language, def.default_code);
                }
            }
            break;
        }
        Ok(())
    }

    fn code(&self, language: Language) -> Result<CodeSample<'_>> {
        self.codes
            .get(&language)
            .map(|code| CodeSample {
                language,
                code: code.as_str(),
            })
            .ok_or_else(|| {
                Error::RenderPrecondition(format!("no {language} code sample for this problem"))
            })
    }
}

fn parse_definitions(script: &str) -> Result<Option<Vec<RawDefinition>>> {
    let Some(idx) = script.find(CODE_DEFINITION_MARKER) else {
        return Ok(None);
    };
    let rest = script[idx + CODE_DEFINITION_MARKER.len()..]
        .trim_start()
        .trim_start_matches(|c: char| c == ':' || c == '=')
        .trim_start();
    if !rest.starts_with('[') {
        return Err(Error::DelegatedParse(
            format!("{CODE_DEFINITION_MARKER} is not followed by an array").into(),
        ));
    }

    // the array is followed by the rest of the script, so only read one value
    serde_json::Deserializer::from_str(rest)
        .into_iter::<Vec<RawDefinition>>()
        .next()
        .transpose()
        .map_err(|e| Error::DelegatedParse(Box::new(e)))
}
