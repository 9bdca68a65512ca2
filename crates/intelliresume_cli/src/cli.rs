//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// IntelliResume - keep one profile and many tailored resume variants.
#[derive(Parser, Debug)]
#[command(name = "intelliresume")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// SQLite database file (default: INTELLIRESUME_DB_PATH or a temp file)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shared profile and the active role as JSON
    Show,

    /// List roles, marking the active one
    Roles,

    /// Make a role active
    Select {
        /// Role identifier
        id: String,
    },

    /// Create a role and make it active
    AddRole {
        /// Display name of the new role
        name: String,

        /// Copy content from this existing role
        #[arg(long)]
        copy_from: Option<String>,
    },

    /// Delete a role
    DeleteRole {
        /// Role identifier
        id: String,
    },

    /// Edit a shared profile field (name|email|phone|github|linkedin)
    SetProfile { field: String, value: String },

    /// Edit a text field of the active role (summary|hobbies)
    SetRole { field: String, value: String },

    /// Skill categories of the active role
    Skill {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Projects of the active role
    Project {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Education entries of the shared profile
    Education {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Certifications of the active role
    Cert {
        #[command(subcommand)]
        action: CertAction,
    },

    /// Discard all data and restore the demo resume
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Display version information
    Version,
}

/// List actions for structured items.
#[derive(Subcommand, Debug)]
pub enum ItemAction {
    /// Append an item with placeholder content
    Add,
    /// Edit one field of the item at INDEX (0-based)
    Edit(ItemEdit),
    /// Delete the item at INDEX (0-based)
    Delete { index: usize },
}

#[derive(Args, Debug)]
pub struct ItemEdit {
    pub index: usize,
    pub field: String,
    pub value: String,
}

#[derive(Subcommand, Debug)]
pub enum CertAction {
    /// Append a certification
    Add {
        /// Certification text
        #[arg(default_value = "New Certification")]
        text: String,
    },
    /// Replace the certification at INDEX; an empty value removes it
    Edit { index: usize, value: String },
    /// Delete the certification at INDEX (0-based)
    Delete { index: usize },
}
