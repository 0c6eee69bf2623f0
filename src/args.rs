use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rekord")]
#[command(about = "Record store with pluggable backends and a file vault", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a record from field=value pairs
    #[command(alias = "c")]
    Create {
        /// Fields, e.g. name=Ann email=ann@x.com age=30
        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Show one record by id or key-field value
    Get { key: String },

    /// Merge field=value pairs into a record
    Update {
        /// Id or key-field value of the record
        key: String,

        /// Fields to change, e.g. age=31
        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// Delete one record by id or key-field value
    #[command(alias = "rm")]
    Delete { key: String },

    /// Delete ALL records (irreversible)
    Purge {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the record count
    #[command(alias = "stats")]
    Count,

    /// File vault operations
    #[command(subcommand)]
    File(FileCommands),

    /// Interactive numbered menu
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Store a file in the vault
    Add {
        /// Path of the file to store
        path: PathBuf,

        /// Display name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List stored files
    #[command(alias = "ls")]
    List,

    /// Show one stored file's metadata
    Get { id: String },

    /// Copy a stored file out of the vault
    Download {
        id: String,

        /// Destination path (defaults to downloads/<original name>)
        dest: Option<PathBuf>,
    },

    /// Merge field=value pairs into a file's metadata
    Update {
        id: String,

        /// Fields to change, e.g. description="final cut"
        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// Delete one stored file
    #[command(alias = "rm")]
    Delete { id: String },

    /// Delete ALL stored files (irreversible)
    Purge {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the stored file count
    Count,
}
