use crate::{
    codes::{CodeDefinitions, CodeIndex},
    config::Config,
    extract,
    fetch::Fetch,
    problem::Problem,
    slug::ProblemQuery,
    Result,
};
use derive_builder::Builder;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Which artifacts to write for each problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct Outputs {
    pub readme: bool,
    pub code: bool,
    pub test: bool,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            readme: true,
            code: true,
            test: true,
        }
    }
}

#[derive(Debug)]
pub struct Scaffolded {
    pub problem: Problem,
    pub files: Vec<PathBuf>,
}

/// Drives resolve, fetch, extract and render for one problem at a time.
#[derive(Debug)]
pub struct Scaffolder<F> {
    fetcher: F,
    base_url: String,
    root: PathBuf,
    outputs: Outputs,
}

impl<F: Fetch> Scaffolder<F> {
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.clone(),
            root: config.output_dir.clone(),
            outputs: Outputs::default(),
        }
    }

    pub fn with_outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }

    /// Resolve `query`, fetch its canonical page and extract it. Nothing is written.
    pub async fn fetch_problem(
        &self,
        query: &ProblemQuery,
        codes: &mut impl CodeIndex,
    ) -> Result<Problem> {
        let reference = query.resolve_with_base(&self.base_url)?;
        debug!(url = reference.url(), "fetching problem page");
        let html = self.fetcher.fetch(reference.url()).await?;
        let problem = extract::parse_problem(reference, &html, codes)?;
        debug!(
            id = problem.id().unwrap_or_default(),
            title = problem.title().unwrap_or_default(),
            difficulty = problem.difficulty(),
            "extracted problem"
        );
        Ok(problem)
    }

    pub async fn scaffold(&self, query: &ProblemQuery) -> Result<Scaffolded> {
        self.scaffold_with(query, &mut CodeDefinitions::new()).await
    }

    #[instrument(skip_all, fields(language = %query.language()))]
    pub async fn scaffold_with(
        &self,
        query: &ProblemQuery,
        codes: &mut impl CodeIndex,
    ) -> Result<Scaffolded> {
        let problem = self.fetch_problem(query, codes).await?;
        let files = self.write(&problem, &*codes)?;
        info!(
            slug = %problem.reference().title_slug(),
            files = files.len(),
            "scaffolded problem"
        );
        Ok(Scaffolded { problem, files })
    }

    /// Render the selected artifacts for an already extracted problem.
    pub fn write(&self, problem: &Problem, codes: &impl CodeIndex) -> Result<Vec<PathBuf>> {
        let mut files = vec![];
        if self.outputs.readme {
            files.push(problem.write_readme(&self.root)?);
        }
        if self.outputs.code {
            files.push(problem.write_code(&self.root, codes)?);
        }
        if self.outputs.test {
            files.push(problem.write_test_code(&self.root, codes)?);
        }
        Ok(files)
    }

    /// Process every query in order. A failure only affects its own entry.
    pub async fn scaffold_all(&self, queries: &[ProblemQuery]) -> Vec<Result<Scaffolded>> {
        let mut results = Vec::with_capacity(queries.len());
        for query in queries {
            results.push(self.scaffold(query).await);
        }
        results
    }
}
