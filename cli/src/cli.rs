use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "ymbank")]
#[command(about = "Terminal front end for YM Bank", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the banking API (without the /v1 suffix)
    #[arg(long, global = true, env = "YMBANK_API_URL")]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long, short = 'n')]
        name: Option<String>,
        #[arg(long, short = 'e')]
        email: Option<String>,
    },
    /// Sign in with email and password
    Login {
        #[arg(long, short = 'e')]
        email: Option<String>,
    },
    /// Sign out and invalidate the session token
    Logout,
    /// Show API availability and the local session
    Status,
    /// Activate an account with the token sent by email
    Activate {
        /// Activation token
        token: Option<String>,
    },
    /// Show account details
    Profile,
    /// List your transfers
    Transfers,
    /// List your loans
    Loans,
    /// List your loan requests
    LoanRequests,
    /// List your transactions
    Transactions,
    /// Send money to another account
    Transfer {
        /// Recipient email
        #[arg(long, short = 't')]
        to: Option<String>,
        #[arg(long, short = 'a')]
        amount: Option<f64>,
    },
    /// Ask for a loan
    RequestLoan {
        #[arg(long, short = 'a')]
        amount: Option<f64>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
