//! Zenx CLI - content quality checks for blog drafts.

mod audit;
mod config;
mod source;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zenx_analysis::{extract_metrics, ContentClassifier};
use zenx_branding::{inject, strip, ComplianceFixer, InjectOptions};
use zenx_core::PostDraft;
use zenx_quality::{format_report, ContentValidator};

use crate::audit::{AuditSummary, Auditor};
use crate::config::ZenxConfig;
use crate::source::{read_draft, DirectorySource, PostSource};

#[derive(Parser)]
#[command(name = "zenx")]
#[command(about = "Content quality checks for blog drafts", long_about = None)]
struct Cli {
    /// Config file (defaults to ./zenx.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Standalone validation rules file, overrides the config rules
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print extracted metrics and the content analysis as JSON
    Analyze {
        /// Draft JSON file
        draft: PathBuf,
    },
    /// Validate a draft against the rules
    Validate {
        /// Draft JSON file
        draft: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Exit with an error when the draft is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Print the chosen layout as JSON
    Layout {
        /// Draft JSON file
        draft: PathBuf,
    },
    /// Add the editorial blocks to a draft's content
    Brand(BrandArgs),
    /// Remove the editorial blocks from a draft's content
    Strip {
        /// Draft JSON file
        draft: PathBuf,
    },
    /// Append missing disclosure and internal links
    Fix {
        /// Draft JSON file
        draft: PathBuf,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Audit every draft in a directory
    Audit {
        /// Directory of draft JSON files
        dir: PathBuf,
        /// Print the audits as JSON
        #[arg(long)]
        json: bool,
        /// Exit with an error when any draft is invalid or unreadable
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args)]
struct BrandArgs {
    /// Draft JSON file
    draft: PathBuf,
    /// AI summary shown above the content
    #[arg(long)]
    summary: Option<String>,
    /// Editor's note shown below the content
    #[arg(long)]
    note: Option<String>,
    /// Key takeaway (repeatable)
    #[arg(long = "takeaway")]
    takeaways: Vec<String>,
    /// Suggested image description (repeatable)
    #[arg(long = "image")]
    images: Vec<String>,
    /// Leave out the disclosure footer
    #[arg(long)]
    skip_disclosure: bool,
    /// Replace existing branding
    #[arg(long)]
    rebrand: bool,
}

impl From<BrandArgs> for InjectOptions {
    fn from(args: BrandArgs) -> Self {
        InjectOptions {
            ai_summary: args.summary,
            editors_note: args.note,
            key_takeaways: args.takeaways,
            images: args.images,
            skip_disclosure: args.skip_disclosure,
            rebrand: args.rebrand,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ZenxConfig::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    if let Some(rules) = &cli.rules {
        config
            .override_rules(rules)
            .await
            .context("Failed to load rules")?;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = cli.output.as_deref();
    let auditor = Auditor::new(&config);

    match cli.command {
        Commands::Analyze { draft } => {
            let draft = load_draft(&draft).await?;
            let category = auditor.category_for(&draft);
            let metrics = extract_metrics(&draft.content);
            let analysis = ContentClassifier::new().classify(&metrics, &draft.title, &category);
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "metrics": metrics,
                "analysis": analysis,
            }))?;
            emit(output, &json).await?;
        }
        Commands::Validate { draft, json, strict } => {
            let draft = load_draft(&draft).await?;
            let validator = ContentValidator::new(config.rules.clone());
            tracing::debug!(
                min_words = validator.rules().min_word_count,
                min_links = validator.rules().min_internal_links,
                "Validating draft"
            );
            let result = validator.validate_post(&draft);
            let text = if json {
                serde_json::to_string_pretty(&result)?
            } else {
                format_report(&result)
            };
            emit(output, &text).await?;
            if strict && !result.is_valid {
                bail!("Validation failed with {} error(s)", result.errors.len());
            }
        }
        Commands::Layout { draft } => {
            let draft = load_draft(&draft).await?;
            let audit = auditor.audit(&draft);
            emit(output, &serde_json::to_string_pretty(&audit.layout)?).await?;
        }
        Commands::Brand(args) => {
            let draft = load_draft(&args.draft).await?;
            let options = InjectOptions::from(args);
            emit(output, &inject(&draft.content, &options)).await?;
        }
        Commands::Strip { draft } => {
            let draft = load_draft(&draft).await?;
            emit(output, &strip(&draft.content)).await?;
        }
        Commands::Fix { draft, json } => {
            let draft = load_draft(&draft).await?;
            let outcome = ComplianceFixer::new().fix(&draft.content, &config.rules);
            for action in &outcome.applied {
                info!("Fix: {}", action);
            }
            if !outcome.changed() {
                info!("No fixes needed");
            }
            let text = if json {
                serde_json::to_string_pretty(&outcome)?
            } else {
                outcome.content
            };
            emit(output, &text).await?;
        }
        Commands::Audit { dir, json, strict } => {
            let source = DirectorySource::new(&dir);
            let batch = source
                .load_all()
                .await
                .with_context(|| format!("Failed to read drafts from {}", dir.display()))?;
            info!("Auditing {} draft(s) from {}", batch.posts.len(), source.root().display());

            let unreadable = batch.failures.len();
            let entries = Arc::new(auditor)
                .audit_batch(batch.posts, config.concurrency)
                .await?;
            let summary = AuditSummary::from_entries(&entries, unreadable);

            let text = if json {
                serde_json::to_string_pretty(&entries)?
            } else {
                let mut lines: Vec<String> = entries.iter().map(|e| e.summary_line()).collect();
                for failure in &batch.failures {
                    lines.push(format!("SKIP {} | {}", failure.origin.display(), failure.error));
                }
                lines.push(format!(
                    "\n{} audited, {} valid, {} invalid, {} unreadable",
                    summary.audited, summary.valid, summary.invalid, summary.unreadable
                ));
                lines.join("\n")
            };
            emit(output, &text).await?;

            if strict && !summary.all_passed() {
                bail!(
                    "{} invalid and {} unreadable draft(s)",
                    summary.invalid,
                    summary.unreadable
                );
            }
        }
    }

    Ok(())
}

async fn load_draft(path: &Path) -> Result<PostDraft> {
    read_draft(path)
        .await
        .with_context(|| format!("Failed to read draft {}", path.display()))
}

async fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
