#![deny(missing_docs)]
//! StackCheck command-line interface.
//!
//! Grades the monitoring-stack configuration files of a project directory and
//! starts or stops the stack itself.

mod orchestrator;
mod render;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stackcheck_core::{
    ArtifactId, ArtifactLayout, OverallReport, StdFileSystem, grade, load_contents,
};
use std::path::PathBuf;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "stackcheck",
    version,
    about = "Monitoring stack configuration checker",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Args, Clone, Debug)]
struct RootArgs {
    /// Project directory containing the stack configuration.
    #[arg(long, env = "STACKCHECK_ROOT", default_value = ".")]
    root: PathBuf,
}

#[derive(Args, Clone, Debug)]
struct OutputArgs {
    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Args, Clone, Debug)]
struct CheckArgs {
    #[command(flatten)]
    root: RootArgs,
    /// Override the path of one artifact, e.g. `alert-rules=rules/alerts.yml`.
    #[arg(long = "artifact-path", value_parser = parse_artifact_path)]
    artifact_paths: Vec<(ArtifactId, PathBuf)>,
    /// Also grade the demo service's metrics instrumentation.
    #[arg(
        long,
        env = "STACKCHECK_INCLUDE_APP",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    include_app: bool,
    /// Exit with status 1 unless every check passes.
    #[arg(long)]
    strict: bool,
    #[command(flatten)]
    report: OutputArgs,
}

#[derive(Args, Clone, Debug)]
struct StackArgs {
    #[command(flatten)]
    root: RootArgs,
    /// Compose executable used to manage the stack.
    #[arg(long = "compose-bin", env = "STACKCHECK_COMPOSE", default_value = "docker-compose")]
    compose_bin: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade the configuration files (default).
    Check(CheckArgs),
    /// Start the monitoring stack.
    Start(StackArgs),
    /// Stop the monitoring stack.
    Stop(StackArgs),
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Check(cli.check)) {
        Commands::Check(args) => {
            let report = run_check(&args).await?;
            if args.strict && !report.complete() {
                std::process::exit(1);
            }
        }
        Commands::Start(args) => {
            orchestrator::start_stack(&args.root.root, &args.compose_bin).await?;
            print!("{}", render::render_stack_started());
        }
        Commands::Stop(args) => {
            orchestrator::stop_stack(&args.root.root, &args.compose_bin).await?;
            print!("{}", render::render_stack_stopped());
        }
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

async fn run_check(args: &CheckArgs) -> CliResult<OverallReport> {
    let layout = build_layout(args);
    let ids = selected_artifacts(args.include_app);
    let contents = load_contents(&StdFileSystem::new(), &layout, &ids);
    let report = grade(&contents)?;
    emit_report(&report, &args.report).await?;
    Ok(report)
}

fn build_layout(args: &CheckArgs) -> ArtifactLayout {
    args.artifact_paths.iter().fold(
        ArtifactLayout::new(args.root.root.clone()),
        |layout, (id, path)| layout.with_override(*id, path.clone()),
    )
}

fn selected_artifacts(include_app: bool) -> Vec<ArtifactId> {
    let mut ids = ArtifactId::CONFIGS.to_vec();
    if include_app {
        ids.push(ArtifactId::AppInstrumentation);
    }
    ids
}

fn parse_artifact_path(value: &str) -> Result<(ArtifactId, PathBuf), String> {
    let Some((id, path)) = value.split_once('=') else {
        return Err(format!("expected ID=PATH, got '{value}'"));
    };
    let id: ArtifactId = id.parse().map_err(|err| format!("{err}"))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("empty path for {id}"));
    }
    Ok((id, PathBuf::from(path)))
}

async fn emit_report(report: &OverallReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render::render_text(report),
        OutputFormat::Markdown => render::render_markdown(report),
        OutputFormat::Json => render::render_json(report)?,
    };
    emit_output(output, contents).await
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
    } else {
        print!("{contents}");
    }
    Ok(())
}
