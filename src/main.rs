use anyhow::{bail, Context, Result};
use clap::Parser;
use leetcode_scaffold::{
    codes::Language,
    config::Config,
    fetch::HttpFetcher,
    pipeline::{OutputsBuilder, Scaffolder},
    slug::ProblemQuery,
    telemetry,
};
use std::path::PathBuf;

/// Fetch LeetCode problems and lay out a README plus solution and test stubs for each.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Problem URLs or slugs (or titles with --title)
    #[arg(required = true)]
    problems: Vec<String>,

    /// Treat every input as a free-text problem title
    #[arg(long)]
    title: bool,

    #[arg(short, long)]
    lang: Option<Language>,

    /// Directory the problem folders are created in
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_readme: bool,

    #[arg(long)]
    no_code: bool,

    #[arg(long)]
    no_test: bool,

    /// Print each extracted problem as JSON
    #[arg(long)]
    dump: bool,
}

impl Args {
    fn query(&self, language: Language, input: &str) -> ProblemQuery {
        if self.title {
            ProblemQuery::from_title(language, input)
        } else if input.contains("problems/") {
            ProblemQuery::from_url(language, input)
        } else {
            ProblemQuery::from_slug(language, input)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(out) = &args.out {
        config.output_dir = out.clone();
    }
    let language = args.lang.unwrap_or(config.language);

    let outputs = OutputsBuilder::default()
        .readme(!args.no_readme)
        .code(!args.no_code)
        .test(!args.no_test)
        .build()?;
    let fetcher = HttpFetcher::new(&config).context("failed to build http client")?;
    let scaffolder = Scaffolder::new(fetcher, &config).with_outputs(outputs);

    let queries = args
        .problems
        .iter()
        .map(|input| args.query(language, input))
        .collect::<Vec<_>>();

    let mut failed = 0;
    for (input, result) in args
        .problems
        .iter()
        .zip(scaffolder.scaffold_all(&queries).await)
    {
        match result {
            Ok(done) => {
                if args.dump {
                    println!("{}", done.problem);
                }
                for file in &done.files {
                    tracing::info!(path = %file.display(), "wrote");
                }
            }
            Err(e) => {
                failed += 1;
                tracing::error!(%input, error = ?anyhow::Error::from(e), "failed to scaffold");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} problems failed", queries.len());
    }
    Ok(())
}
