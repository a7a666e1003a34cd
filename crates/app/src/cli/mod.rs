use berecons_app::{config::AppConfig, context::AppContext, toasts::Toasts};
use clap::{Parser, Subcommand};

mod admin;
mod catalog;
mod links;
mod requests;

#[derive(Debug, Parser)]
#[command(name = "berecons", about = "Berecons storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the public catalog
    Catalog(catalog::CatalogArgs),

    /// Build chat and call links without contacting the API
    Links(links::LinksCommand),

    /// Request a viewing appointment
    Book(requests::BookArgs),

    /// Send a wish list
    Wish(requests::WishArgs),

    /// Manage products, bookings and wish lists
    Admin(admin::AdminCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let ctx = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to initialise: {error}"))?;

        let result = match self.command {
            Commands::Catalog(args) => catalog::run(&ctx, args).await,
            Commands::Links(command) => links::run(command),
            Commands::Book(args) => requests::book(&ctx, args).await,
            Commands::Wish(args) => requests::wish(&ctx, args).await,
            Commands::Admin(command) => admin::run(&ctx, command).await,
        };

        print_toasts(&ctx.toasts);

        result
    }
}

fn print_toasts(toasts: &Toasts) {
    for toast in toasts.drain() {
        eprintln!("[{}] {}", toast.kind.label(), toast.message);
    }
}
