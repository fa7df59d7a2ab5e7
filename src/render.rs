use crate::{codes::Language, Result};
use askama::Template;
use regex::Regex;
use std::sync::LazyLock;

static GO_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"func\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)\s*\(").expect("go func regex is valid")
});
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("comment regex is valid"));
static RUST_FN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fn\s+([a-z_][a-z0-9_]*)").expect("rust fn regex is valid"));

#[derive(Debug, Template)]
#[template(path = "readme.md.j2", escape = "none")]
pub struct Readme<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub discuss_url: String,
    pub solution_url: String,
    pub difficulty: &'a str,
    pub body: String,
}

#[derive(Debug, Template)]
#[template(path = "solution.go.j2", escape = "none")]
struct GoSolution<'a> {
    module: &'a str,
    code: &'a str,
}

#[derive(Debug, Template)]
#[template(path = "test.go.j2", escape = "none")]
struct GoTest<'a> {
    module: &'a str,
    name: String,
}

#[derive(Debug, Template)]
#[template(path = "solution.rs.j2", escape = "none")]
struct RustSolution<'a> {
    module: &'a str,
    code: &'a str,
}

#[derive(Debug, Template)]
#[template(path = "test.rs.j2", escape = "none")]
struct RustTest {
    name: String,
}

pub fn solution_source(language: Language, module: &str, code: &str) -> Result<String> {
    let code = code.trim_end();
    let source = match language {
        Language::Go => GoSolution { module, code }.render()?,
        Language::Rust => RustSolution { module, code }.render()?,
    };
    Ok(source)
}

pub fn test_source(language: Language, module: &str, code: &str) -> Result<String> {
    let source = match language {
        Language::Go => GoTest {
            module,
            name: capitalize(&entry_point(language, code).unwrap_or_else(|| module.to_string())),
        }
        .render()?,
        Language::Rust => RustTest {
            name: entry_point(language, code).unwrap_or_else(|| module.to_string()),
        }
        .render()?,
    };
    Ok(source)
}

/// Name of the first function declared in the starter code, outside comments.
fn entry_point(language: Language, code: &str) -> Option<String> {
    let re = match language {
        Language::Go => &GO_FUNC,
        Language::Rust => &RUST_FN,
    };
    let code = COMMENT.replace_all(code, "");
    re.captures(&code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
