use crate::{
    codes::CodeIndex,
    fsutil, markdown, names,
    render::Readme,
    slug::ProblemRef,
    Error, Result,
};
use askama::Template;
use serde::Serialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Identifier and title read from the page heading. Both are present or neither is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Heading {
    Unresolved,
    Resolved { id: String, title: String },
}

/// Everything known about one problem after its page has been extracted.
/// Read-only from here on; rendering never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    #[serde(flatten)]
    reference: ProblemRef,
    heading: Heading,
    description: String,
    difficulty: String,
}

impl Problem {
    pub fn new(
        reference: ProblemRef,
        heading: Heading,
        description: String,
        difficulty: String,
    ) -> Self {
        Self {
            reference,
            heading,
            description,
            difficulty,
        }
    }

    pub fn reference(&self) -> &ProblemRef {
        &self.reference
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.heading, Heading::Resolved { .. })
    }

    pub fn id(&self) -> Option<&str> {
        match &self.heading {
            Heading::Resolved { id, .. } => Some(id),
            Heading::Unresolved => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.heading {
            Heading::Resolved { title, .. } => Some(title),
            Heading::Unresolved => None,
        }
    }

    /// Raw description markup as found on the page.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn read_me(&self) -> String {
        markdown::convert(&self.description)
    }

    pub fn directory_name(&self) -> String {
        names::directory_name(self.reference.title_slug().as_str())
    }

    pub fn module_name(&self) -> String {
        names::module_name(self.reference.title_slug().as_str())
    }

    pub fn directory(&self, root: &Path) -> PathBuf {
        root.join(self.directory_name())
    }

    pub fn render_readme(&self) -> Result<String> {
        let Heading::Resolved { id, title } = &self.heading else {
            return Err(Error::RenderPrecondition(format!(
                "no description found for {}",
                self.reference.title_slug()
            )));
        };

        let readme = Readme {
            id,
            title,
            url: self.reference.url(),
            discuss_url: self.reference.discuss_url(),
            solution_url: self.reference.solution_url(),
            difficulty: &self.difficulty,
            body: self.read_me(),
        };
        Ok(readme.render()?)
    }

    /// Write `<root>/<dir>/README.md`.
    pub fn write_readme(&self, root: &Path) -> Result<PathBuf> {
        let readme = self.render_readme()?;
        let dir = self.ensure_dir(root)?;
        let path = dir.join("README.md");
        fsutil::overwrite_file(&path, &[readme.as_str()])?;
        Ok(path)
    }

    pub fn write_code(&self, root: &Path, codes: &impl CodeIndex) -> Result<PathBuf> {
        let sample = codes.code(self.reference.language())?;
        let dir = self.ensure_dir(root)?;
        sample.write_solution_file(&dir, &self.module_name())
    }

    pub fn write_test_code(&self, root: &Path, codes: &impl CodeIndex) -> Result<PathBuf> {
        let sample = codes.code(self.reference.language())?;
        let dir = self.ensure_dir(root)?;
        sample.write_test_file(&dir, &self.module_name())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn ensure_dir(&self, root: &Path) -> Result<PathBuf> {
        let dir = self.directory(root);
        fsutil::ensure_dir(&dir, true)?;
        Ok(dir)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        codes::{CodeDefinitions, Language},
        extract::parse_problem,
        slug::ProblemQuery,
    };

    fn fixture(language: Language) -> (Problem, CodeDefinitions) {
        let content = fs::read_to_string("fixtures/two-sum.html").unwrap();
        let reference = ProblemQuery::from_url(
            language,
            "https://leetcode.com/problems/two-sum/description/",
        )
        .resolve()
        .unwrap();
        let mut codes = CodeDefinitions::new();
        let problem = parse_problem(reference, &content, &mut codes).unwrap();
        (problem, codes)
    }

    fn unresolved() -> Problem {
        let reference = ProblemQuery::from_slug(Language::Go, "two-sum")
            .resolve()
            .unwrap();
        Problem::new(
            reference,
            Heading::Unresolved,
            "<p>x</p>".into(),
            String::new(),
        )
    }

    #[test]
    fn readme_should_work() {
        let (problem, _) = fixture(Language::Go);
        let root = tempfile::tempdir().unwrap();

        let path = problem.write_readme(root.path()).unwrap();
        assert_eq!(path, root.path().join("two_sum").join("README.md"));

        let readme = fs::read_to_string(&path).unwrap();
        assert!(readme.contains("# 1. Two Sum"));
        assert!(readme.contains(
            "[Description](https://leetcode.com/problems/two-sum/description/) | \
             [Discuss](https://leetcode.com/problems/two-sum/discuss/) | \
             [Solution](https://leetcode.com/problems/two-sum/solution/)"
        ));
        assert!(readme.contains("Difficulty: **Easy**"));
        assert!(readme.contains("## Description"));
        assert!(readme.contains("return **indices** of the two numbers"));
        assert!(readme.contains("Constraints"));
    }

    #[test]
    fn reused_code_table_follows_the_latest_page() {
        let (_, mut codes) = fixture(Language::Go);
        let reference = ProblemQuery::from_slug(Language::Go, "add-two-numbers")
            .resolve()
            .unwrap();
        let html = r#"<div class="question-title"><div class="row"><h3>2. Add Two Numbers</h3></div></div>
            <div class="question-description"><p>linked lists</p></div>"#;
        let problem = parse_problem(reference, html, &mut codes).unwrap();
        let root = tempfile::tempdir().unwrap();

        let err = problem.write_code(root.path(), &codes).unwrap_err();
        assert!(matches!(err, Error::RenderPrecondition(_)));
        assert!(!root.path().join("add_two_numbers").exists());
    }

    #[test]
    fn readme_requires_heading() {
        let problem = unresolved();
        let root = tempfile::tempdir().unwrap();

        let err = problem.write_readme(root.path()).unwrap_err();
        assert!(matches!(err, Error::RenderPrecondition(_)));
        assert!(!root.path().join("two_sum").exists());
    }

    #[test]
    fn renders_are_idempotent() {
        let (problem, codes) = fixture(Language::Go);
        let before = problem.clone();
        let root = tempfile::tempdir().unwrap();

        let paths = [
            problem.write_readme(root.path()).unwrap(),
            problem.write_code(root.path(), &codes).unwrap(),
            problem.write_test_code(root.path(), &codes).unwrap(),
        ];
        let first = paths
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect::<Vec<_>>();

        problem.write_readme(root.path()).unwrap();
        problem.write_code(root.path(), &codes).unwrap();
        problem.write_test_code(root.path(), &codes).unwrap();
        let second = paths
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(problem, before);
    }

    #[test]
    fn go_code_files() {
        let (problem, codes) = fixture(Language::Go);
        let root = tempfile::tempdir().unwrap();

        let code = problem.write_code(root.path(), &codes).unwrap();
        let test = problem.write_test_code(root.path(), &codes).unwrap();

        assert_eq!(code, root.path().join("two_sum").join("twosum.go"));
        assert_eq!(test, root.path().join("two_sum").join("twosum_test.go"));
        assert!(fs::read_to_string(code)
            .unwrap()
            .starts_with("package twosum\n\nfunc twoSum(nums []int, target int) []int {"));
        assert!(fs::read_to_string(test)
            .unwrap()
            .contains("func TestTwoSum(t *testing.T)"));
    }

    #[test]
    fn rust_code_files() {
        let (problem, codes) = fixture(Language::Rust);
        let root = tempfile::tempdir().unwrap();

        let code = problem.write_code(root.path(), &codes).unwrap();
        assert_eq!(code, root.path().join("two_sum").join("twosum.rs"));
        assert!(fs::read_to_string(code)
            .unwrap()
            .contains("pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32>"));
    }

    #[test]
    fn unregistered_language_writes_nothing() {
        let problem = unresolved();
        let root = tempfile::tempdir().unwrap();
        let codes = CodeDefinitions::new();

        let err = problem.write_code(root.path(), &codes).unwrap_err();
        assert!(matches!(err, Error::RenderPrecondition(_)));
        let err = problem.write_test_code(root.path(), &codes).unwrap_err();
        assert!(matches!(err, Error::RenderPrecondition(_)));
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn json_dump() {
        let (problem, _) = fixture(Language::Go);
        let value: serde_json::Value = serde_json::from_str(&problem.to_string()).unwrap();

        assert_eq!(value["title_slug"], "two-sum");
        assert_eq!(value["language"], "go");
        assert_eq!(value["heading"]["status"], "resolved");
        assert_eq!(value["heading"]["id"], "1");
        assert_eq!(value["difficulty"], "Easy");
    }
}
