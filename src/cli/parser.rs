use clap::{Parser, Subcommand};

/// Command-line interface definition for TimeLayer
/// Time tracking where the latest entry always wins overlapping time
#[derive(Parser)]
#[command(
    name = "timelayer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time entries in SQLite; newer entries overwrite the time they overlap",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Verbose diagnostics on stderr (same as RUST_LOG=debug)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a time entry; overlapping entries are trimmed, split or removed
    Add {
        /// Day the entry starts on (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM or HH:MM:SS)
        #[arg(long = "from")]
        start: String,

        /// End time (HH:MM or HH:MM:SS)
        #[arg(long = "to")]
        end: String,

        /// Day the entry ends on, when it runs past midnight (defaults to DATE)
        #[arg(long = "end-date")]
        end_date: Option<String>,

        #[arg(long, short = 'p')]
        project: String,

        #[arg(long = "task", short = 't')]
        task_type: String,

        #[arg(long, short = 'm', default_value = "")]
        memo: String,
    },

    /// Delete an entry by ID
    Del {
        /// Entry ID (see `list`)
        id: i64,
    },

    /// Copy one entry onto another day
    Clone {
        /// Entry ID to copy
        id: i64,

        /// Target day (YYYY-MM-DD)
        target: String,
    },

    /// Copy all entries of one day onto another day
    CloneDay {
        /// Source day (YYYY-MM-DD)
        #[arg(required_unless_present = "yesterday")]
        source: Option<String>,

        /// Target day (YYYY-MM-DD)
        #[arg(required_unless_present = "yesterday")]
        target: Option<String>,

        #[arg(
            long = "yesterday",
            conflicts_with_all = ["source", "target"],
            help = "Copy yesterday's entries onto today"
        )]
        yesterday: bool,
    },

    /// List entries of a day, or the most recent ones
    List {
        /// Day to list (YYYY-MM-DD); defaults to today
        date: Option<String>,

        #[arg(long = "today", conflicts_with = "date", help = "List today's entries")]
        today: bool,

        #[arg(
            long = "recent",
            conflicts_with_all = ["date", "today"],
            num_args = 0..=1,
            help = "List the N most recent entries (default from config)"
        )]
        recent: Option<Option<usize>>,

        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Show the project and task labels used so far
    Tags {
        #[arg(long = "json", help = "Print JSON instead of a list")]
        json: bool,
    },

    /// Totals per project, task type and day
    Summary {
        #[arg(long, help = "First day (YYYY-MM-DD)", requires = "to")]
        from: Option<String>,

        #[arg(long, help = "Last day (YYYY-MM-DD)", requires = "from")]
        to: Option<String>,

        #[arg(
            long,
            short = 'p',
            conflicts_with_all = ["from", "to"],
            help = "Period: YYYY, YYYY-MM, YYYY-MM-DD or FROM:TO (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "json", help = "Print JSON instead of tables")]
        json: bool,
    },
}
