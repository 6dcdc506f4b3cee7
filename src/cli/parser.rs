use crate::core::drill::ALL_CATEGORIES;
use crate::core::persist::SaveTarget;
use crate::db::tables::DEFAULT_DROP_PATTERN;
use crate::models::realm::Realm;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for bjjdb
#[derive(Parser)]
#[command(
    name = "bjjdb",
    version = env!("CARGO_PKG_VERSION"),
    about = "Catalogue BJJ positions, moves and drills in JSON lines or SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (wins over BJJDB_DATABASE and the config file)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database tables
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record or list positions
    Position {
        #[command(subcommand)]
        action: PositionAction,
    },

    /// Record or list moves
    Move {
        #[command(subcommand)]
        action: MoveAction,
    },

    /// Random drills by category
    Drill {
        #[command(subcommand)]
        action: DrillAction,
    },

    /// Direct table operations on the database
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Interactive session with the home (forms) and drills pages
    Session {
        /// Seconds to hold a drill on screen
        #[arg(long = "hold")]
        hold: Option<u64>,
    },
}

/// Where to persist and which file to use for file saves.
#[derive(Args, Clone)]
pub struct SaveArgs {
    #[arg(long, value_enum, default_value = "file")]
    pub target: SaveTarget,

    /// JSON-lines file (defaults to the configured one)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,
}

#[derive(Args, Clone)]
pub struct PositionFields {
    #[arg(long, value_enum, default_value = "standing")]
    pub realm: Realm,
    #[arg(long, default_value = "")]
    pub class: String,
    #[arg(long, default_value = "")]
    pub family: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub id: String,
    #[arg(long, default_value = "")]
    pub code: String,
    #[arg(long = "btg-top", default_value = "")]
    pub btg_top: String,
    #[arg(long = "btg-pass", default_value = "")]
    pub btg_pass: String,
    #[arg(long = "btg-dom", default_value = "")]
    pub btg_dom: String,
    #[arg(long, default_value = "")]
    pub variant: String,
    #[arg(long, default_value = "")]
    pub specifics: String,
    #[arg(long, default_value = "")]
    pub level: String,
    #[arg(long = "alt-names", default_value = "")]
    pub alt_names: String,
}

#[derive(Args, Clone)]
pub struct MoveFields {
    #[arg(long = "from-pos", default_value = "")]
    pub from_pos: String,
    #[arg(long = "from-tb", default_value = "")]
    pub from_tb: String,
    #[arg(long = "to-pos", default_value = "")]
    pub to_pos: String,
    #[arg(long = "to-tb", default_value = "")]
    pub to_tb: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub code: String,
    #[arg(long, default_value = "")]
    pub infos: String,
    #[arg(long, default_value = "")]
    pub step1: String,
    #[arg(long, default_value = "")]
    pub step2: String,
    #[arg(long, default_value = "")]
    pub step3: String,
    #[arg(long, default_value = "")]
    pub counter1: String,
    #[arg(long, default_value = "")]
    pub counter2: String,
    #[arg(long, default_value = "")]
    pub counter3: String,
    #[arg(long, default_value = "")]
    pub family: String,
    #[arg(long, default_value = "")]
    pub level: String,
}

#[derive(Subcommand)]
pub enum PositionAction {
    /// Save a new position
    Add {
        #[command(flatten)]
        fields: PositionFields,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// List positions saved in a JSON-lines file
    List {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MoveAction {
    /// Save a new move
    Add {
        #[command(flatten)]
        fields: MoveFields,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// List moves saved in a JSON-lines file
    List {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DrillAction {
    /// Show the category selector values
    Categories,

    /// Pick one drill at random
    Random {
        #[arg(long, short, default_value = ALL_CATEGORIES)]
        category: String,

        /// Seconds to hold the drill on screen (defaults to the config value)
        #[arg(long = "hold")]
        hold: Option<u64>,
    },

    /// Insert a drill row
    Add {
        #[arg(long, default_value = "")]
        class: String,
        #[arg(long = "from", default_value = "")]
        from: String,
        #[arg(long = "to", default_value = "")]
        to: String,
        #[arg(long = "do", default_value = "")]
        instruction: String,
    },
}

#[derive(Subcommand)]
pub enum DbAction {
    /// Create a table if it does not exist (columns as NAME:TYPE)
    Create {
        #[arg(long)]
        table: String,

        #[arg(long = "column", value_name = "NAME:TYPE", required = true)]
        columns: Vec<String>,
    },

    /// Insert a row (values as NAME=VALUE, stored as text)
    Insert {
        #[arg(long)]
        table: String,

        #[arg(long = "set", value_name = "NAME=VALUE")]
        values: Vec<String>,
    },

    /// Select rows matching a raw SQL condition
    Select {
        #[arg(long)]
        table: String,

        #[arg(long = "where", value_name = "CONDITION")]
        condition: Option<String>,

        /// Print raw tuples instead of a table
        #[arg(long)]
        raw: bool,
    },

    /// Delete rows where COLUMN = VALUE
    Delete {
        #[arg(long)]
        table: String,

        #[arg(long)]
        column: String,

        #[arg(long)]
        value: String,
    },

    /// Drop every table whose name contains PATTERN
    Drop {
        #[arg(long, default_value = DEFAULT_DROP_PATTERN)]
        pattern: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Show database information
    Info,
}
