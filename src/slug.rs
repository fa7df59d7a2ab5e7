//! Turning whatever the user typed into a canonical title slug and page URL.
//!
//! A problem can be requested three ways: by its page URL (any shape that
//! contains `problems/<slug>`), by a free-text title, or by an already-known
//! slug. All of them collapse into a [`ProblemRef`], whose URL is always
//! rebuilt from the slug and never copied from the caller.

use crate::{codes::Language, Error, Result};
use derive_builder::Builder;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};

pub const DEFAULT_BASE_URL: &str = "https://leetcode.com/problems/";

static PROBLEM_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"problems/([^/?#]+)").expect("problem path regex is valid"));

/// Hyphenated lowercase identifier used in the remote URL scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleSlug(String);

impl TitleSlug {
    /// Accepts ASCII letters, digits and hyphens only; the result is lowercased.
    pub fn new(slug: impl AsRef<str>) -> Result<Self> {
        let slug = slug.as_ref().trim();
        if slug.is_empty() {
            return Err(Error::IdentityMissing("empty title slug".into()));
        }
        if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::IdentityMissing(format!("malformed title slug {slug:?}")));
        }
        Ok(Self(slug.to_ascii_lowercase()))
    }

    /// Best-effort slug for a human title: lowercased, punctuation dropped, runs of
    /// whitespace and hyphens become single hyphens. No lookup is made against
    /// the remote site.
    pub fn from_title(title: &str) -> Result<Self> {
        Self::new(hyphenate(title))
    }

    /// First `problems/<slug>` segment found anywhere in `url`.
    pub fn from_url(url: &str) -> Result<Self> {
        PROBLEM_PATH
            .captures(url)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| Error::IdentityMissing(format!("no problem path in {url:?}")))
            .and_then(|m| Self::new(m.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TitleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TitleSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A request for a problem before its identity has been settled.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(default)]
pub struct ProblemQuery {
    #[builder(setter(into, strip_option))]
    url: Option<String>,
    #[builder(setter(into, strip_option))]
    title_slug: Option<String>,
    language: Language,
}

impl ProblemQuery {
    /// Query from a free-form URL. When no `problems/<slug>` segment is present
    /// the query keeps only the raw URL, and [`ProblemQuery::resolve`] reports it.
    pub fn from_url(language: Language, url: &str) -> Self {
        let title_slug = TitleSlug::from_url(url).ok().map(|s| s.0);
        Self {
            url: Some(url.to_string()),
            title_slug,
            language,
        }
    }

    pub fn from_title(language: Language, title: &str) -> Self {
        Self {
            url: None,
            title_slug: Some(hyphenate(title)),
            language,
        }
    }

    pub fn from_slug(language: Language, slug: &str) -> Self {
        Self {
            url: None,
            title_slug: Some(slug.to_string()),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resolve(&self) -> Result<ProblemRef> {
        self.resolve_with_base(DEFAULT_BASE_URL)
    }

    /// Settle the slug, preferring an explicit slug over the URL. The URL must
    /// start with `base_url`; the slug is the path segment right after it.
    pub fn resolve_with_base(&self, base_url: &str) -> Result<ProblemRef> {
        let slug = match (self.title_slug.as_deref(), self.url.as_deref()) {
            (Some(slug), _) if !slug.trim().is_empty() => TitleSlug::new(slug)?,
            (_, Some(url)) if !url.trim().is_empty() => slug_after_prefix(url.trim(), base_url)?,
            _ => return Err(Error::IdentityMissing("missing identity".into())),
        };
        Ok(ProblemRef::new(slug, self.language, base_url))
    }
}

fn hyphenate(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn slug_after_prefix(url: &str, base_url: &str) -> Result<TitleSlug> {
    let prefix = normalized_base(base_url);
    let rest = url
        .strip_prefix(prefix.as_str())
        .ok_or_else(|| Error::IdentityMissing(format!("{url:?} is not under {prefix}")))?;
    let segment = rest.split(['/', '?', '#']).next().unwrap_or_default();
    TitleSlug::new(segment)
}

fn normalized_base(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

/// A problem whose slug is known; every URL is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemRef {
    title_slug: TitleSlug,
    url: String,
    language: Language,
    #[serde(skip)]
    base_url: String,
}

impl ProblemRef {
    pub fn new(title_slug: TitleSlug, language: Language, base_url: &str) -> Self {
        let base_url = normalized_base(base_url);
        let url = format!("{base_url}{title_slug}/description/");
        Self {
            title_slug,
            url,
            language,
            base_url,
        }
    }

    pub fn title_slug(&self) -> &TitleSlug {
        &self.title_slug
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn discuss_url(&self) -> String {
        format!("{}{}/discuss/", self.base_url, self.title_slug)
    }

    pub fn solution_url(&self) -> String {
        format!("{}{}/solution/", self.base_url, self.title_slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_from_canonical_url() {
        let query = ProblemQueryBuilder::default()
            .url("https://leetcode.com/problems/two-sum/description/")
            .build()
            .unwrap();
        let problem = query.resolve().unwrap();

        assert_eq!(problem.title_slug().as_str(), "two-sum");
        assert_eq!(
            problem.url(),
            "https://leetcode.com/problems/two-sum/description/"
        );
    }

    #[test]
    fn resolve_rewrites_other_url_shapes() {
        let query = ProblemQueryBuilder::default()
            .url("https://leetcode.com/problems/add-two-numbers/submissions/")
            .build()
            .unwrap();
        let problem = query.resolve().unwrap();

        assert_eq!(
            problem.url(),
            "https://leetcode.com/problems/add-two-numbers/description/"
        );
        assert_eq!(
            problem.discuss_url(),
            "https://leetcode.com/problems/add-two-numbers/discuss/"
        );
        assert_eq!(
            problem.solution_url(),
            "https://leetcode.com/problems/add-two-numbers/solution/"
        );
    }

    #[test]
    fn resolve_url_without_trailing_path() {
        let query = ProblemQueryBuilder::default()
            .url("https://leetcode.com/problems/two-sum")
            .build()
            .unwrap();
        assert_eq!(query.resolve().unwrap().title_slug().as_str(), "two-sum");
    }

    #[test]
    fn slug_wins_over_url() {
        let query = ProblemQueryBuilder::default()
            .url("https://example.com/whatever")
            .title_slug("two-sum")
            .build()
            .unwrap();
        let problem = query.resolve().unwrap();

        assert_eq!(problem.title_slug().as_str(), "two-sum");
        assert_eq!(
            problem.url(),
            "https://leetcode.com/problems/two-sum/description/"
        );
    }

    #[test]
    fn resolve_from_title() {
        let problem = ProblemQuery::from_title(Language::Go, "  Two   Sum ")
            .resolve()
            .unwrap();
        assert_eq!(problem.title_slug().as_str(), "two-sum");
        assert_eq!(
            TitleSlug::from_title("Two Sum").unwrap().as_str(),
            "two-sum"
        );
    }

    #[test]
    fn query_and_fragment_are_not_part_of_the_slug() {
        for url in [
            "https://leetcode.com/problems/two-sum?envType=daily-question",
            "https://leetcode.com/problems/two-sum/?envType=daily-question&envId=2024-01-01",
            "https://leetcode.com/problems/two-sum#comments",
        ] {
            let problem = ProblemQuery::from_url(Language::Go, url).resolve().unwrap();
            assert_eq!(problem.title_slug().as_str(), "two-sum", "{url}");
            assert_eq!(
                problem.url(),
                "https://leetcode.com/problems/two-sum/description/"
            );

            let problem = ProblemQueryBuilder::default()
                .url(url)
                .build()
                .unwrap()
                .resolve()
                .unwrap();
            assert_eq!(problem.title_slug().as_str(), "two-sum", "{url}");
        }
    }

    #[test]
    fn slug_rejects_non_slug_characters() {
        for bad in ["two-sum?x=1", "two-sum#a", "two sum", "two/sum", "two_sum", "%20"] {
            assert!(
                matches!(TitleSlug::new(bad), Err(Error::IdentityMissing(_))),
                "{bad}"
            );
        }
        assert_eq!(TitleSlug::new("Two-Sum").unwrap().as_str(), "two-sum");
    }

    #[test]
    fn title_punctuation_is_dropped() {
        assert_eq!(TitleSlug::from_title("Pow(x, n)").unwrap().as_str(), "powx-n");
        assert_eq!(
            TitleSlug::from_title("Two Sum II - Input Array Is Sorted")
                .unwrap()
                .as_str(),
            "two-sum-ii-input-array-is-sorted"
        );
    }

    #[test]
    fn resolve_without_identity_fails() {
        let err = ProblemQuery::default().resolve().unwrap_err();
        assert!(matches!(err, Error::IdentityMissing(_)));

        let err = ProblemQuery::from_title(Language::Go, "   ")
            .resolve()
            .unwrap_err();
        assert!(matches!(err, Error::IdentityMissing(_)));
    }

    #[test]
    fn foreign_url_fails_before_fetch() {
        let err = ProblemQueryBuilder::default()
            .url("https://example.com/two-sum/")
            .build()
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(matches!(err, Error::IdentityMissing(_)));

        let err = ProblemQuery::from_url(Language::Go, "not a url at all")
            .resolve()
            .unwrap_err();
        assert!(matches!(err, Error::IdentityMissing(_)));
    }

    #[test]
    fn free_form_url_extracts_first_problem_segment() {
        let query = ProblemQuery::from_url(
            Language::Rust,
            "see leetcode.com/problems/valid-parentheses/ and problems/other/",
        );
        let problem = query.resolve().unwrap();

        assert_eq!(problem.title_slug().as_str(), "valid-parentheses");
        assert_eq!(problem.language(), Language::Rust);
    }

    #[test]
    fn custom_base_url() {
        let problem = ProblemQuery::from_url(Language::Go, "https://leetcode.cn/problems/two-sum/")
            .resolve_with_base("https://leetcode.cn/problems")
            .unwrap();
        assert_eq!(
            problem.url(),
            "https://leetcode.cn/problems/two-sum/description/"
        );
    }
}
