//! FacePay CLI - drive the wallet engine from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show session flags and where the app would land at launch
//! facepay status
//!
//! # Run the mock face-enrollment scan
//! facepay scan
//!
//! # Complete the onboarding wizard in one shot
//! facepay onboard --first-name Aisyah --last-name Rahman \
//!     --email aisyah@example.com --phone +60123456789 \
//!     --address "12 Jalan Ampang" --city "Kuala Lumpur" \
//!     --state "Kuala Lumpur" --zip 50450 \
//!     --card-number "4111 1111 1111 1111" --card-name "AISYAH RAHMAN" \
//!     --expiry 12/27 --cvv 123
//!
//! # Cards and account
//! facepay cards list
//! facepay cards add --number 5555444433332222 --name "AISYAH RAHMAN" --expiry 06/28 --cvv 456
//! facepay account show
//! facepay account edit phoneNumber +60198765432
//!
//! # Run the mock payment prompt
//! facepay pay
//! facepay pay --decline
//!
//! # Clear the session flags (data stays on disk)
//! facepay logout
//! ```
//!
//! # Commands
//!
//! - `status` - Session flags and launch routing
//! - `scan` - Mock face-enrollment scan
//! - `onboard` - Five-step onboarding wizard
//! - `cards` - List/add cards on file
//! - `account` - Show/edit the profile
//! - `pay` - Mock payment prompt
//! - `logout` - Clear session flags

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "facepay")]
#[command(author, version, about = "FacePay wallet CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show session flags and where the app would land at launch
    Status,
    /// Run the mock face-enrollment scan
    Scan,
    /// Complete the onboarding wizard in one shot
    Onboard(commands::onboard::OnboardArgs),
    /// Manage cards on file
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },
    /// Show or edit the profile
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Run the mock payment prompt against the selected card
    Pay {
        /// Decline the payment instead of confirming
        #[arg(long)]
        decline: bool,
    },
    /// Clear the session flags; profile and cards stay on disk
    Logout,
}

#[derive(Subcommand)]
enum CardsAction {
    /// List cards on file
    List,
    /// Add a card to the list
    Add {
        /// Card number (16 digits, spaces allowed)
        #[arg(long)]
        number: String,

        /// Name on card
        #[arg(long)]
        name: String,

        /// Expiry date (`MM/YY` or `MMYY`)
        #[arg(long)]
        expiry: String,

        /// 3- or 4-digit CVV
        #[arg(long)]
        cvv: String,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Print every profile field
    Show,
    /// Overwrite one profile field
    Edit {
        /// Field name as persisted (`firstName`, `lastName`, `email`,
        /// `phoneNumber`, `address`, `city`, `state`, `zipCode`, `country`)
        field: String,

        /// New value, stored verbatim
        value: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Status => commands::status::show().await?,
        Commands::Scan => commands::scan::run().await?,
        Commands::Onboard(args) => commands::onboard::run(args).await?,
        Commands::Cards { action } => match action {
            CardsAction::List => commands::cards::list().await?,
            CardsAction::Add {
                number,
                name,
                expiry,
                cvv,
            } => commands::cards::add(&number, &name, &expiry, &cvv).await?,
        },
        Commands::Account { action } => match action {
            AccountAction::Show => commands::account::show().await?,
            AccountAction::Edit { field, value } => {
                commands::account::edit(&field, &value).await?;
            }
        },
        Commands::Pay { decline } => commands::pay::run(decline).await?,
        Commands::Logout => commands::status::logout().await?,
    }
    Ok(())
}
