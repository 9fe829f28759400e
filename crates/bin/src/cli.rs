//! CLI argument definitions for the tracker binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracker::{OwnerMode, account::PasswordScheme};

use crate::output::OutputFormat;

/// Whether records are kept for one implicit owner or per account
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One shared record file, no accounts
    Single,
    /// Username/password accounts, one record file each
    Multi,
}

impl From<Mode> for OwnerMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => OwnerMode::Single,
            Mode::Multi => OwnerMode::Multi,
        }
    }
}

/// Hash scheme for new passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Salted Argon2id (default)
    Argon2,
    /// Unsalted SHA-256, compatible with older account files
    Sha256,
}

impl From<Scheme> for PasswordScheme {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Argon2 => PasswordScheme::Argon2,
            Scheme::Sha256 => PasswordScheme::Sha256,
        }
    }
}

/// Internship application tracker
#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(about = "Track internship applications from the command line or a web page")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account (multi-user mode)
    Signup(SignupArgs),
    /// Record a new application
    Add(AddArgs),
    /// Show all applications
    List(RecordArgs),
    /// Delete an application by row number
    Delete(DeleteArgs),
    /// Write applications as CSV
    Export(ExportArgs),
    /// Count applications per mode
    Summary(RecordArgs),
    /// Show data directory and store statistics
    Info(InfoArgs),
    /// Run the web interface
    Serve(ServeArgs),
    /// Check health of a running tracker server
    Health(HealthArgs),
}

/// Where data lives and how accounts work
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    /// Directory holding accounts.json and the record files
    #[arg(short = 'D', long, default_value = ".", env = "TRACKER_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Owner mode
    #[arg(short, long, value_enum, default_value_t = Mode::Single, env = "TRACKER_MODE")]
    pub mode: Mode,

    /// Hash scheme for newly created accounts
    #[arg(long, value_enum, default_value_t = Scheme::Argon2, env = "TRACKER_PASSWORD_SCHEME")]
    pub password_scheme: Scheme,
}

/// Login for record commands in multi-user mode
#[derive(clap::Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Username
    #[arg(short, long, env = "TRACKER_USER")]
    pub user: Option<String>,

    /// Password
    #[arg(short, long, env = "TRACKER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments shared by commands that read one owner's records
#[derive(clap::Args, Debug)]
pub struct RecordArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Arguments for the signup command
#[derive(clap::Args, Debug)]
pub struct SignupArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Username: letters, numbers, underscores and hyphens
    #[arg(short, long, env = "TRACKER_USER")]
    pub user: String,

    /// Password, at least 6 characters
    #[arg(short, long, env = "TRACKER_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Password confirmation; defaults to the password
    #[arg(long)]
    pub confirm_password: Option<String>,

    /// Contact email
    #[arg(short, long, default_value = "")]
    pub email: String,
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Company name
    #[arg(long)]
    pub company: String,

    /// Role applied for
    #[arg(long)]
    pub role: String,

    /// US state, or "Remote"
    #[arg(long)]
    pub location: String,

    /// Application date, YYYY-MM-DD; defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Applied, Interview, Offer, Rejected or Pending
    #[arg(long, default_value = "Applied")]
    pub status: String,

    /// Online, Hybrid or In-Person
    #[arg(long = "work-mode", default_value = "Online")]
    pub work_mode: String,

    /// Link to the posting
    #[arg(long, default_value = "")]
    pub link: String,
}

/// Arguments for the delete command
#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Row number as shown by `list`
    pub row: usize,
}

/// Arguments for the export command
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Output file, or `-` for stdout; defaults to the record file name
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Port to listen on
    #[arg(long, default_value_t = 8501, env = "TRACKER_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "TRACKER_HOST")]
    pub host: String,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:8501")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}
