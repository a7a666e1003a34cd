use berecons::prelude::*;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub(crate) struct LinksCommand {
    #[command(subcommand)]
    command: LinksSubcommand,
}

#[derive(Debug, Subcommand)]
enum LinksSubcommand {
    /// Chat link updating a customer on their viewing booking
    Booking(BookingLinkArgs),

    /// Chat link updating a customer on their wish list
    Wishlist(WishlistLinkArgs),

    /// Dialer link for a phone number
    Call(CallLinkArgs),
}

#[derive(Debug, Args)]
struct ContactArgs {
    /// Customer name
    #[arg(long)]
    name: Option<String>,

    /// Customer phone number
    #[arg(long)]
    phone: Option<String>,

    /// WhatsApp number, when different from the phone
    #[arg(long)]
    whatsapp: Option<String>,
}

#[derive(Debug, Args)]
struct BookingLinkArgs {
    #[command(flatten)]
    contact: ContactArgs,

    /// Item being viewed
    #[arg(long)]
    item: Option<String>,

    /// Preferred date
    #[arg(long)]
    date: Option<String>,

    /// Preferred time
    #[arg(long)]
    time: Option<String>,

    /// Booking status
    #[arg(long, default_value = "PENDING")]
    status: BookingStatus,

    /// Reason given when declining
    #[arg(long)]
    reason: Option<String>,
}

#[derive(Debug, Args)]
struct WishlistLinkArgs {
    #[command(flatten)]
    contact: ContactArgs,

    /// Items the customer asked for
    #[arg(long)]
    items: Option<String>,

    /// Customer notes
    #[arg(long)]
    notes: Option<String>,

    /// Wish list status
    #[arg(long, default_value = "NEW")]
    status: WishlistStatus,
}

#[derive(Debug, Args)]
struct CallLinkArgs {
    /// Phone number to dial
    phone: String,
}

pub(crate) fn run(command: LinksCommand) -> Result<(), String> {
    let link = match command.command {
        LinksSubcommand::Booking(args) => booking_link(&Booking {
            id: BookingId::new(0),
            customer_name: args.contact.name,
            customer_phone: args.contact.phone,
            whatsapp_number: args.contact.whatsapp,
            product_id: None,
            product_name: args.item,
            preferred_date: args.date,
            preferred_time: args.time,
            notes: None,
            status: args.status,
            status_reason: args.reason,
        }),
        LinksSubcommand::Wishlist(args) => wishlist_link(&Wishlist {
            id: WishlistId::new(0),
            customer_name: args.contact.name,
            customer_phone: args.contact.phone,
            whatsapp_number: args.contact.whatsapp,
            desired_items: args.items,
            notes: args.notes,
            status: args.status,
        }),
        LinksSubcommand::Call(args) => call_link(&args.phone),
    };

    if link.is_empty() {
        return Err("phone number has no digits".to_string());
    }

    println!("{link}");

    Ok(())
}
