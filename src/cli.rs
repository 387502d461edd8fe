// src/cli.rs
use crate::{
    application::{
        import,
        queries::report::{ReportRow, build_report},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::article::Article,
    infrastructure::repositories::InMemoryArticleRepository,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{io::Write, path::PathBuf, sync::Arc};

#[derive(Debug, Parser)]
#[command(name = "article_desk")]
#[command(about = "In-memory article catalogue with slug-unique storage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save the sample articles, print them, then show a rejected duplicate
    Demo,

    /// Check that a JSON file holds an array of articles with title and slug
    Validate {
        /// Input file; defaults to `ARTICLES_INPUT_PATH` or articles.input.json
        path: Option<PathBuf>,
    },

    /// Print views, authors, categories and tags for the published rows of a JSON file
    Report {
        /// Input file; defaults to `ARTICLES_INPUT_PATH` or articles.input.json
        path: Option<PathBuf>,

        /// Number of entries in the top list (overrides `REPORT_TOP_N`)
        #[arg(long)]
        top: Option<usize>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Runs one subcommand, writing its normal output to `out`.
///
/// Only `report` consults `REPORT_TOP_N`, and only when `--top` is absent.
///
/// # Errors
///
/// Returns the first failure of the command: unreadable or invalid input, a
/// bad `REPORT_TOP_N`, or an article the demo could not build.
pub fn run(command: Command, config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Demo => run_demo(out),
        Command::Validate { path } => {
            let path = path.unwrap_or_else(|| config.input_path().to_path_buf());
            let count = import::validate_file(&path)?;
            writeln!(out, "[OK] {}: {count} article(s) valides.", path.display())?;
            Ok(())
        }
        Command::Report { path, top, json } => {
            let top_n = top.map_or_else(|| config.report_top_n(), Ok)?;
            let path = path.unwrap_or_else(|| config.input_path().to_path_buf());
            let rows: Vec<ReportRow> = import::load_json(&path)?
                .iter()
                .map(ReportRow::from_value)
                .collect();
            let report = build_report(&rows, top_n);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                writeln!(out, "{report}")?;
            }
            Ok(())
        }
    }
}

fn run_demo(out: &mut dyn Write) -> Result<()> {
    let services = ApplicationServices::new(Arc::new(InMemoryArticleRepository::new()));

    let first = Article::from_title(1, "Encapsulation & visibilité en PHP")?;
    let mut second = Article::featured_from_title(2, "Lire moins, comprendre plus")?;
    let mut third = Article::from_title(3, "Programmation orientée objet")?;
    second.add_tag("best")?;
    third.add_tag("oop")?;

    for article in [first, second, third] {
        services.article_commands.save_article(article)?;
    }

    let listed = services.article_queries.list_articles();
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&listed).context("serializing articles")?
    )?;
    writeln!(out, "Total articles : {}", services.article_queries.count())?;

    let duplicate = Article::from_title(4, "ENCAPSULATION & visibilite en PHP")?;
    match services.article_commands.save_article(duplicate) {
        Err(err) if err.is_duplicate() => writeln!(out, "Rejected: {err}")?,
        Err(err) => return Err(err.into()),
        Ok(dto) => anyhow::bail!("duplicate slug {} was accepted", dto.slug),
    }

    Ok(())
}
