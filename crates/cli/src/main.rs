//! AdStore CLI - command-line storefront surface.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! adstore catalog --category social --search реклама
//!
//! # Sign in (demo: any credentials work)
//! adstore login -e ivan@example.com -p secret1
//!
//! # Build a cart and check out
//! adstore cart add 1
//! adstore cart add 2
//! adstore checkout --budget 50000 -m "Нужна контекстная реклама"
//!
//! # Pay by bank transfer
//! adstore pay <order-id>                 # show transfer details + QR link
//! adstore pay <order-id> --proof op-991  # confirm the transfer
//! ```
//!
//! State persists between invocations in the file named by
//! `ADSTORE_DATA_PATH` (default `adstore.json`).

#![cfg_attr(not(test), forbid(unsafe_code))]
// The CLI is a terminal program; its user-facing output goes through println.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "adstore")]
#[command(author, version, about = "AdStore storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the service catalog
    Catalog {
        /// Category id (all, contextual, social, display, video)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive search over title and description
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (minimum 6 characters)
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm: String,

        /// Company name
        #[arg(long)]
        company: Option<String>,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },
    /// Sign in (demo: any credentials are accepted)
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show or update the signed-in profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Convert the cart into a pending order
    Checkout {
        /// Monthly budget tier
        #[arg(short, long)]
        budget: Option<String>,

        /// Free-text message to the agency
        #[arg(short, long)]
        message: Option<String>,
    },
    /// List the signed-in user's orders
    Orders,
    /// Show bank-transfer details for an order, or confirm the transfer
    Pay {
        /// Order id
        order_id: String,

        /// Proof of payment (operation number or receipt note);
        /// confirms the transfer when provided
        #[arg(long)]
        proof: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Update profile fields
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New company
        #[arg(long)]
        company: Option<String>,

        /// New contact phone
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a catalog service to the cart
    Add {
        /// Catalog service id
        service_id: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Catalog service id
        service_id: u32,
    },
    /// Overwrite a line's quantity (0 removes the line)
    SetQty {
        /// Catalog service id
        service_id: u32,

        /// New quantity
        quantity: u32,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
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
        Commands::Catalog { category, search } => commands::catalog::browse(&category, &search),
        Commands::Register {
            name,
            email,
            password,
            confirm,
            company,
            phone,
        } => {
            commands::account::register(&name, &email, &password, &confirm, company, phone).await
        }
        Commands::Login { email, password } => commands::account::login(&email, &password).await,
        Commands::Logout => commands::account::logout(),
        Commands::Profile { action } => match action {
            None => commands::account::show_profile(),
            Some(ProfileAction::Update {
                name,
                email,
                company,
                phone,
            }) => commands::account::update_profile(name, email, company, phone),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(),
            CartAction::Add { service_id } => commands::cart::add(service_id),
            CartAction::Remove { service_id } => commands::cart::remove(service_id),
            CartAction::SetQty {
                service_id,
                quantity,
            } => commands::cart::set_quantity(service_id, quantity),
        },
        Commands::Checkout { budget, message } => commands::orders::checkout(budget, message),
        Commands::Orders => commands::orders::list(),
        Commands::Pay { order_id, proof } => commands::orders::pay(&order_id, proof.as_deref()),
    }
}
