use berecons::prelude::*;
use berecons_app::views::AdminConsole;
use clap::Args;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct WishlistsArgs {
    /// Only show wish lists with this status
    #[arg(long)]
    status: Option<WishlistStatus>,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Product")]
    title: String,

    #[tabled(rename = "Status")]
    status: ProductStatus,

    #[tabled(rename = "Images")]
    images: usize,
}

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: BookingId,

    #[tabled(rename = "Customer")]
    customer: String,

    #[tabled(rename = "Item")]
    item: String,

    #[tabled(rename = "When")]
    when: String,

    #[tabled(rename = "Status")]
    status: BookingStatus,

    #[tabled(rename = "WhatsApp")]
    chat: String,

    #[tabled(rename = "Call")]
    call: String,
}

#[derive(Tabled)]
struct WishlistRow {
    #[tabled(rename = "ID")]
    id: WishlistId,

    #[tabled(rename = "Customer")]
    customer: String,

    #[tabled(rename = "Items")]
    items: String,

    #[tabled(rename = "Status")]
    status: WishlistStatus,

    #[tabled(rename = "WhatsApp")]
    chat: String,

    #[tabled(rename = "Call")]
    call: String,
}

fn customer<R: ContactRecord>(record: &R) -> String {
    let name = record
        .customer_name()
        .filter(|name| !name.is_empty())
        .unwrap_or("-");

    match record.customer_phone() {
        Some(phone) if !phone.is_empty() => format!("{name} ({phone})"),
        _ => name.to_string(),
    }
}

pub(crate) async fn products(console: &AdminConsole) -> Result<(), String> {
    console.load_products().await;

    let error = console.products_error();
    if !error.is_empty() {
        return Err(error);
    }

    let rows = console.products().into_iter().map(|product| ProductRow {
        id: product.id.map(|id| id.to_string()).unwrap_or_default(),
        title: product_title(&product),
        status: product.status,
        images: product.image_urls.len(),
    });

    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}

pub(crate) async fn bookings(console: &AdminConsole) -> Result<(), String> {
    console.load_bookings().await;

    let error = console.bookings_error();
    if !error.is_empty() {
        return Err(error);
    }

    let rows = console.bookings().into_iter().map(|booking| BookingRow {
        id: booking.id,
        customer: customer(&booking),
        item: booking.item_name().to_string(),
        when: [&booking.preferred_date, &booking.preferred_time]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        status: booking.status.clone(),
        chat: booking_link(&booking),
        call: call_link(booking.chat_number()),
    });

    println!("{}", Table::new(rows).with(Style::rounded()));
    println!("pending: {}", console.booking_counter());

    Ok(())
}

pub(crate) async fn wishlists(console: &AdminConsole, args: WishlistsArgs) -> Result<(), String> {
    console.load_wishlists_by_status(args.status).await;

    let error = console.wishlists_error();
    if !error.is_empty() {
        return Err(error);
    }

    let rows = console.wishlists().into_iter().map(|wishlist| WishlistRow {
        id: wishlist.id,
        customer: customer(&wishlist),
        items: wishlist.desired_items.clone().unwrap_or_default(),
        status: wishlist.status.clone(),
        chat: wishlist_link(&wishlist),
        call: call_link(wishlist.chat_number()),
    });

    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}
