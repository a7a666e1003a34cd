use std::sync::Arc;

use berecons_app::{
    context::AppContext,
    interaction::TerminalInteraction,
    views::AdminConsole,
};
use clap::{Args, Subcommand};

mod listings;
mod manage;
mod session;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Log in and remember the session
    Login(session::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Replace the admin credentials with a reset key
    Reset(session::ResetArgs),

    /// List every product
    Products,

    /// List viewing bookings
    Bookings,

    /// List wish lists
    Wishlists(listings::WishlistsArgs),

    /// Change a product's status
    ProductStatus(manage::ProductStatusArgs),

    /// Change a booking's status
    BookingStatus(manage::BookingStatusArgs),

    /// Change a wish list's status
    WishlistStatus(manage::WishlistStatusArgs),

    /// Delete a product
    DeleteProduct(manage::DeleteProductArgs),

    /// Create a product
    CreateProduct(manage::CreateProductArgs),

    /// Upload an image and print its URL
    UploadImage(manage::UploadImageArgs),
}

pub(crate) async fn run(ctx: &AppContext, command: AdminCommand) -> Result<(), String> {
    let reason = match &command.command {
        AdminSubcommand::BookingStatus(args) => args.reason.clone(),
        _ => None,
    };

    let console = ctx.admin(Arc::new(TerminalInteraction::new(command.yes, reason)));

    console
        .restore_session()
        .map_err(|error| format!("failed to read session: {error}"))?;

    match command.command {
        AdminSubcommand::Login(args) => session::login(&console, args).await,
        AdminSubcommand::Logout => {
            console.logout();
            println!("logged out");
            Ok(())
        }
        AdminSubcommand::Reset(args) => session::reset(&console, args).await,
        AdminSubcommand::Products => listings::products(&*require_login(console)?).await,
        AdminSubcommand::Bookings => listings::bookings(&*require_login(console)?).await,
        AdminSubcommand::Wishlists(args) => {
            listings::wishlists(&*require_login(console)?, args).await
        }
        AdminSubcommand::ProductStatus(args) => {
            manage::product_status(&*require_login(console)?, args).await
        }
        AdminSubcommand::BookingStatus(args) => {
            manage::booking_status(&*require_login(console)?, args).await
        }
        AdminSubcommand::WishlistStatus(args) => {
            manage::wishlist_status(&*require_login(console)?, args).await
        }
        AdminSubcommand::DeleteProduct(args) => {
            manage::delete_product(&*require_login(console)?, args).await
        }
        AdminSubcommand::CreateProduct(args) => {
            manage::create_product(&*require_login(console)?, args).await
        }
        AdminSubcommand::UploadImage(args) => manage::upload_image(&console, args).await,
    }
}

fn require_login(console: Arc<AdminConsole>) -> Result<Arc<AdminConsole>, String> {
    if console.is_logged_in() {
        Ok(console)
    } else {
        Err("not logged in; run `berecons admin login` first".to_string())
    }
}
