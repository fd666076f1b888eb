use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartsplit")]
#[command(about = "Split shared expenses equally and plan who pays whom", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Ledger snapshot file (overrides SMARTSPLIT_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Add a participant to the roster
    AddParticipant { name: String },

    /// Remove a participant and every expense they paid
    RemoveParticipant { name: String },

    /// Record an expense paid by one participant for the whole group
    AddExpense {
        payer: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(required = true, trailing_var_arg = true)]
        description: Vec<String>,
    },

    /// Remove an expense by its number in `list`
    RemoveExpense { number: usize },

    /// Show participants and expenses
    List,

    /// Show balances and the transfers that settle them
    Settle,

    /// Write the settlement as plain text
    Export {
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove every participant and expense
    Reset,
}
