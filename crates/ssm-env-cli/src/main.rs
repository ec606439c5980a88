// crates/ssm-env-cli/src/main.rs
// ============================================================================
// Module: SSM Env CLI Entry Point
// Description: Command dispatcher for parameter export and config checks.
// Purpose: Export parameter store values as job environment variables.
// Dependencies: clap, ssm-env-core, ssm-env-config, ssm-env-providers, tokio.
// ============================================================================

//! ## Overview
//! `ssm-env` loads layered configuration (file, action inputs, flags), fetches
//! every configured path from AWS Systems Manager, and exports the merged
//! variables to the job environment. Running without a subcommand is the same
//! as `ssm-env run`. All user-facing strings are routed through the i18n
//! catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use ssm_env_broker::FanoutRegistry;
use ssm_env_broker::GITHUB_ENV_VAR;
use ssm_env_broker::SecretLedger;
use ssm_env_broker::WorkflowCommandMasker;
use ssm_env_cli::export::ExportTarget;
use ssm_env_cli::export::error_command;
use ssm_env_cli::export::export_parameters;
use ssm_env_cli::logging::init_logging;
use ssm_env_cli::t;
use ssm_env_config::ActionInputs;
use ssm_env_config::SsmEnvConfig;
use ssm_env_core::Pipeline;
use ssm_env_providers::SsmParameterFetcher;
use thiserror::Error;
use tracing::info;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable set to `true` by the GitHub Actions runner.
const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "ssm-env",
    disable_help_subcommand = true,
    disable_version_flag = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Export arguments used when no subcommand is given.
    #[command(flatten)]
    run: RunCommand,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch parameters and export them as environment variables.
    Run(RunCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the layered configuration.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Path to the config file (defaults to `SSM_ENV_CONFIG` or `ssm-env.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `run`. Flags override the config file and action inputs.
#[derive(Args, Debug, Default, Clone)]
struct RunCommand {
    /// Path to the config file (defaults to `SSM_ENV_CONFIG` or `ssm-env.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Parameter path prefix; repeat for several paths (later wins).
    #[arg(long = "path", value_name = "PATH")]
    paths: Vec<String>,
    /// Include nested sub-hierarchies.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    recursive: Option<bool>,
    /// Decrypt secure string values.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    with_decryption: Option<bool>,
    /// Keep only the last path segment of each name.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    split_env: Option<bool>,
    /// Uppercase every variable name.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    upper_case: Option<bool>,
    /// Prefix prepended to every variable name.
    #[arg(long, value_name = "PREFIX")]
    env_prefix: Option<String>,
    /// Export destination type (`env`).
    #[arg(long, value_name = "TYPE")]
    output_type: Option<String>,
    /// Env file to append to instead of `GITHUB_ENV`.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
    /// AWS region override.
    #[arg(long, value_name = "REGION")]
    region: Option<String>,
    /// Parameter store endpoint override.
    #[arg(long, value_name = "URL")]
    endpoint_url: Option<String>,
    /// Page size requested per store call (1-10).
    #[arg(long, value_name = "N")]
    max_results: Option<i32>,
    /// Log filter directive (overrides `SSM_ENV_LOG`).
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
    /// Print the variable names that would be exported, without exporting.
    #[arg(long, action = ArgAction::SetTrue)]
    dry_run: bool,
}

impl RunCommand {
    /// Overlays explicitly given flags onto `config`.
    fn apply(&self, config: &mut SsmEnvConfig) {
        if !self.paths.is_empty() {
            config.paths.clone_from(&self.paths);
        }
        if let Some(recursive) = self.recursive {
            config.recursive = recursive;
        }
        if let Some(with_decryption) = self.with_decryption {
            config.with_decryption = with_decryption;
        }
        if let Some(split_env) = self.split_env {
            config.naming.split_env = split_env;
        }
        if let Some(upper_case) = self.upper_case {
            config.naming.upper_case = upper_case;
        }
        if let Some(prefix) = &self.env_prefix {
            config.naming.env_prefix.clone_from(prefix);
        }
        if let Some(label) = &self.output_type {
            config.output.set_type_label(label);
        }
        if let Some(env_file) = &self.env_file {
            config.output.env_file = Some(env_file.clone());
        }
        if let Some(region) = &self.region {
            config.store.region = Some(region.clone());
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            config.store.endpoint_url = Some(endpoint_url.clone());
        }
        if let Some(max_results) = self.max_results {
            config.store.max_results = Some(max_results);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = Some(level.clone());
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command.unwrap_or(Commands::Run(cli.run)) {
        Commands::Run(command) => command_run(command).await,
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Run Command
// ============================================================================

/// Loads the config file named by `command` (or the default resolution).
fn load_file_config(command: &RunCommand) -> CliResult<SsmEnvConfig> {
    SsmEnvConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Overlays action inputs and then flags onto `config` and validates it.
fn finish_config(
    mut config: SsmEnvConfig,
    command: &RunCommand,
    inputs: &ActionInputs,
) -> CliResult<SsmEnvConfig> {
    config.apply_inputs(inputs);
    command.apply(&mut config);
    config.validate().map_err(|err| CliError::new(t!("config.invalid", error = err)))?;
    Ok(config)
}

/// Executes the `run` command.
async fn command_run(command: RunCommand) -> CliResult<ExitCode> {
    let file_config = load_file_config(&command)?;
    let level = command.log_level.as_deref().or(file_config.logging.level.as_deref());
    init_logging(level).map_err(|err| CliError::new(t!("logging.init_failed", error = err)))?;
    let config = finish_config(file_config, &command, &ActionInputs::from_env())?;

    let ledger = Arc::new(SecretLedger::new());
    let secrets = FanoutRegistry::new()
        .with(ledger.clone())
        .with(Arc::new(WorkflowCommandMasker::new(std::io::stdout())));
    let fetcher = SsmParameterFetcher::from_config(&config.store).await;
    let pipeline = Pipeline::new(Arc::new(fetcher), Arc::new(secrets), config.naming.clone());
    let github_env = env::var(GITHUB_ENV_VAR).ok();
    let target = ExportTarget::resolve(&config.output, github_env.as_deref(), command.dry_run);

    let merged = export_parameters(&pipeline, &config.run_request(), &target, std::io::stdout())
        .await
        .map_err(|err| CliError::new(ledger.redact(&t!("run.failed", error = err))))?;
    info!("{}", t!("run.exported", count = merged.len(), target = target.describe()));
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let run = RunCommand {
        config: command.config.clone(),
        ..RunCommand::default()
    };
    let _config = finish_config(load_file_config(&run)?, &run, &ActionInputs::from_env())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message and returns a failure exit code.
///
/// Inside a GitHub Actions job the message is also emitted as an `::error::`
/// command so the runner marks the step as failed with it.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    if env::var(GITHUB_ACTIONS_ENV).is_ok_and(|value| value == "true") {
        let _ = write_stdout_line(&error_command(message));
    }
    ExitCode::FAILURE
}
