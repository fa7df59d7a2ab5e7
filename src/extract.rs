//! Reading problem fields out of a fetched description page.

use crate::{
    codes::CodeIndex,
    problem::{Heading, Problem},
    slug::ProblemRef,
    Error, Result,
};
use scraper::{Html, Selector};

const TITLE: &str = ".question-title .row h3";
const DESCRIPTION: &str = "div.question-description";
const DIFFICULTY: &str = "span.difficulty-label";

pub fn parse_problem(
    reference: ProblemRef,
    html: &str,
    codes: &mut impl CodeIndex,
) -> Result<Problem> {
    let document = Html::parse_document(html);
    extract(reference, &document, codes)
}

/// Build a [`Problem`] from `document`. The code table parses the page first and
/// its failure aborts the extraction. A page without a usable title heading still
/// yields a problem, with an unresolved heading.
pub fn extract(
    reference: ProblemRef,
    document: &Html,
    codes: &mut impl CodeIndex,
) -> Result<Problem> {
    codes.parse_document(document)?;

    let heading = document
        .select(&Selector::parse(TITLE).unwrap())
        .next()
        .map(|node| heading_from_text(&node.text().collect::<String>()))
        .unwrap_or(Heading::Unresolved);

    let description = document
        .select(&Selector::parse(DESCRIPTION).unwrap())
        .next()
        .ok_or_else(|| Error::Extraction(format!("no {DESCRIPTION} in {}", reference.url())))?
        .inner_html()
        .trim()
        .to_string();

    let difficulty = document
        .select(&Selector::parse(DIFFICULTY).unwrap())
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    Ok(Problem::new(reference, heading, description, difficulty))
}

/// `"1. Two Sum"` -> id `1`, title `Two Sum`; split on the first dot.
pub fn heading_from_text(text: &str) -> Heading {
    let Some((id, title)) = text.trim().split_once('.') else {
        return Heading::Unresolved;
    };
    let (id, title) = (id.trim(), title.trim());
    if id.is_empty() || title.is_empty() {
        return Heading::Unresolved;
    }
    Heading::Resolved {
        id: id.to_string(),
        title: title.to_string(),
    }
}
