// crates/channel-schema-cli/src/main.rs
// ============================================================================
// Module: Channel Schema CLI Entry Point
// Description: Command dispatcher for offline schema validation workflows.
// Purpose: Validate settings, messages, and restrictions from JSON documents.
// Dependencies: channel-schema-core, clap, serde, serde_json
// ============================================================================

//! ## Overview
//! The channel schema CLI loads schema, settings, and message documents from
//! disk and runs the core validation engine against them, printing a JSON
//! report on stdout. Validation failures are report content, not process
//! errors: the process exits with failure only when the report is non-empty
//! or an input cannot be loaded. Security posture: inputs are untrusted and
//! every file read is size-bounded before parsing.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use channel_schema_core::AuthenticationType;
use channel_schema_core::CapabilitySet;
use channel_schema_core::ChannelMessage;
use channel_schema_core::ChannelSchema;
use channel_schema_core::ConnectionSettings;
use channel_schema_core::ContentKind;
use channel_schema_core::ValidationError;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use serde::Serialize;
use serde::de::DeserializeOwned;

// ============================================================================
// SECTION: Input Limits
// ============================================================================

/// Maximum accepted size for a schema document.
const MAX_SCHEMA_BYTES: usize = 1024 * 1024;
/// Maximum accepted size for a settings document.
const MAX_SETTINGS_BYTES: usize = 1024 * 1024;
/// Maximum accepted size for a message document.
const MAX_MESSAGE_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Offline validation tool for channel connector schemas.
#[derive(Debug, Parser)]
#[command(name = "channel-schema", version, about = "Validate channel connector schemas, settings, and messages")]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate connection settings against a schema.
    Settings(SettingsCommand),
    /// Validate a message against a schema.
    Message(MessageCommand),
    /// Check that one schema is a restriction of another.
    Restriction(RestrictionCommand),
    /// Print a schema's logical identity and declared surface.
    Identity(IdentityCommand),
}

/// Arguments for the `settings` command.
#[derive(Debug, Args)]
struct SettingsCommand {
    /// Path to the schema JSON document.
    #[arg(long)]
    schema: PathBuf,
    /// Path to the connection-settings JSON document.
    #[arg(long)]
    settings: PathBuf,
}

/// Arguments for the `message` command.
#[derive(Debug, Args)]
struct MessageCommand {
    /// Path to the schema JSON document.
    #[arg(long)]
    schema: PathBuf,
    /// Path to the message JSON document.
    #[arg(long)]
    message: PathBuf,
}

/// Arguments for the `restriction` command.
#[derive(Debug, Args)]
struct RestrictionCommand {
    /// Path to the candidate child schema JSON document.
    #[arg(long)]
    child: PathBuf,
    /// Path to the parent schema JSON document.
    #[arg(long)]
    parent: PathBuf,
}

/// Arguments for the `identity` command.
#[derive(Debug, Args)]
struct IdentityCommand {
    /// Path to the schema JSON document.
    #[arg(long)]
    schema: PathBuf,
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Validation outcome rendered on stdout as pretty JSON.
#[derive(Debug, Serialize)]
struct ValidationReport {
    /// Subject the validation ran against, as a logical identity.
    subject: String,
    /// True when no violations were found.
    valid: bool,
    /// Accumulated violations, empty on success.
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Builds a report from an engine result.
    fn new(subject: String, errors: Vec<ValidationError>) -> Self {
        Self {
            subject,
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Exit code matching the report outcome.
    fn exit_code(&self) -> ExitCode {
        if self.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Schema summary rendered by the `identity` command.
#[derive(Debug, Serialize)]
struct IdentityReport {
    /// Verbatim logical identity, `provider/type/version`.
    identity: String,
    /// Human-readable connector label, when declared.
    display_name: Option<String>,
    /// Declared capability tags.
    capabilities: CapabilitySet,
    /// Declared content kinds.
    content_types: Vec<ContentKind>,
    /// Distinct declared authentication types.
    authentication_types: Vec<AuthenticationType>,
    /// Whether undeclared fields are violations.
    strict: bool,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Settings(command) => command_settings(&command),
        Commands::Message(command) => command_message(&command),
        Commands::Restriction(command) => command_restriction(&command),
        Commands::Identity(command) => command_identity(&command),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `settings` command.
fn command_settings(command: &SettingsCommand) -> CliResult<ExitCode> {
    let schema = load_schema(&command.schema)?;
    let settings: ConnectionSettings =
        load_json(&command.settings, MAX_SETTINGS_BYTES, "settings")?;
    let report = ValidationReport::new(
        schema.logical_identity(),
        schema.validate_connection_settings(&settings),
    );
    print_report(&report)?;
    Ok(report.exit_code())
}

/// Executes the `message` command.
fn command_message(command: &MessageCommand) -> CliResult<ExitCode> {
    let schema = load_schema(&command.schema)?;
    let message: ChannelMessage = load_json(&command.message, MAX_MESSAGE_BYTES, "message")?;
    let report = ValidationReport::new(
        schema.logical_identity(),
        schema.validate_message(&message),
    );
    print_report(&report)?;
    Ok(report.exit_code())
}

/// Executes the `restriction` command.
fn command_restriction(command: &RestrictionCommand) -> CliResult<ExitCode> {
    let child = load_schema(&command.child)?;
    let parent = load_schema(&command.parent)?;
    let subject = format!("{} -> {}", child.logical_identity(), parent.logical_identity());
    let report = ValidationReport::new(subject, child.validate_as_restriction_of(&parent));
    print_report(&report)?;
    Ok(report.exit_code())
}

/// Executes the `identity` command.
fn command_identity(command: &IdentityCommand) -> CliResult<ExitCode> {
    let schema = load_schema(&command.schema)?;
    let report = IdentityReport {
        identity: schema.logical_identity(),
        display_name: schema.display_name.clone(),
        capabilities: schema.capabilities,
        content_types: schema.content_types.clone(),
        authentication_types: schema.authentication_types(),
        strict: schema.strict,
    };
    let rendered = render_pretty(&report)?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Loading
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Loads and parses one JSON document with a size bound.
fn load_json<T: DeserializeOwned>(path: &Path, max_bytes: usize, label: &str) -> CliResult<T> {
    let bytes = read_bytes_with_limit(path, max_bytes).map_err(|err| match err {
        ReadLimitError::Io(io) => CliError::new(format!(
            "failed to read {label} {}: {io}",
            path.display(),
        )),
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(format!(
            "{label} {} exceeds size limit: {size} > {limit} bytes",
            path.display(),
        )),
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(format!("failed to parse {label} {}: {err}", path.display()))
    })
}

/// Loads a schema document and checks its structural invariants.
fn load_schema(path: &Path) -> CliResult<ChannelSchema> {
    let schema: ChannelSchema = load_json(path, MAX_SCHEMA_BYTES, "schema")?;
    schema.validate().map_err(|err| {
        CliError::new(format!("invalid schema {}: {err}", path.display()))
    })?;
    Ok(schema)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Renders a report as pretty JSON.
fn render_pretty<T: Serialize>(report: &T) -> CliResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|err| CliError::new(format!("failed to render report: {err}")))
}

/// Prints a validation report to stdout.
fn print_report(report: &ValidationReport) -> CliResult<()> {
    let rendered = render_pretty(report)?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes one line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes one line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output-stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits a fatal error to stderr and returns the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fatal CLI failure carrying one rendered message.
#[derive(Debug)]
struct CliError {
    /// Message shown on stderr.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;
