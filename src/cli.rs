use clap::{Parser, Subcommand};

/// Carhub — REST backend for the car catalog dashboard
#[derive(Parser)]
#[command(name = "carhub", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Port to bind (overrides CARHUB_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run pending database migrations and exit
    Migrate,

    /// Manage dashboard users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a dashboard user (password is bcrypt-hashed before storage)
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}
