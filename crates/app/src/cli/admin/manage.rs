use std::path::PathBuf;

use berecons::prelude::*;
use berecons_app::{uploads::ImageFile, views::AdminConsole};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct ProductStatusArgs {
    /// Product id
    id: ProductId,

    /// New status (AVAILABLE, RESERVED, SOLD)
    status: ProductStatus,
}

#[derive(Debug, Args)]
pub(crate) struct BookingStatusArgs {
    /// Booking id
    id: BookingId,

    /// New status (PENDING, APPROVED, DECLINED)
    status: BookingStatus,

    /// Reason sent with a decline; prompted for when omitted
    #[arg(long)]
    pub(super) reason: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct WishlistStatusArgs {
    /// Wish list id
    id: WishlistId,

    /// New status (NEW, CONTACTED, CLOSED)
    status: WishlistStatus,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product id
    id: ProductId,
}

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Brand
    #[arg(long, default_value = "")]
    brand: String,

    /// Category
    #[arg(long, default_value = "")]
    category: String,

    /// Condition note (`New` or `Used`)
    #[arg(long, default_value = "New")]
    condition: String,

    /// Asking price
    #[arg(long)]
    price: Option<Decimal>,

    /// Three-letter currency code
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Initial status
    #[arg(long, default_value = "AVAILABLE")]
    status: ProductStatus,

    /// Description
    #[arg(long, default_value = "")]
    description: String,

    /// Image URL or CDN identifier; repeat for more
    #[arg(long = "image")]
    images: Vec<String>,

    /// Local image file to upload first; repeat for more
    #[arg(long = "upload")]
    uploads: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct UploadImageArgs {
    /// Image file to upload
    path: PathBuf,
}

async fn find_product(console: &AdminConsole, id: ProductId) -> Result<Product, String> {
    console.load_products().await;

    console
        .products()
        .into_iter()
        .find(|product| product.id == Some(id))
        .ok_or_else(|| format!("product {id} not found"))
}

pub(crate) async fn product_status(
    console: &AdminConsole,
    args: ProductStatusArgs,
) -> Result<(), String> {
    let product = find_product(console, args.id).await?;

    if !console.update_product_status(&product, args.status).await {
        return Err(console.products_error());
    }

    println!("product {} is now {}", args.id, args.status);

    Ok(())
}

pub(crate) async fn booking_status(
    console: &AdminConsole,
    args: BookingStatusArgs,
) -> Result<(), String> {
    console.load_bookings().await;

    let booking = console
        .bookings()
        .into_iter()
        .find(|booking| booking.id == args.id)
        .ok_or_else(|| format!("booking {} not found", args.id))?;

    if !console
        .update_booking_status(&booking, args.status.clone())
        .await
    {
        return Err("Could not update booking.".to_string());
    }

    let updated = console
        .bookings()
        .into_iter()
        .find(|booking| booking.id == args.id)
        .unwrap_or(booking);

    println!("booking {} is now {}", args.id, updated.status);

    let link = booking_link(&updated);
    if !link.is_empty() {
        println!("notify: {link}");
    }

    Ok(())
}

pub(crate) async fn wishlist_status(
    console: &AdminConsole,
    args: WishlistStatusArgs,
) -> Result<(), String> {
    console.load_wishlists().await;

    let wishlist = console
        .wishlists()
        .into_iter()
        .find(|wishlist| wishlist.id == args.id)
        .ok_or_else(|| format!("wish list {} not found", args.id))?;

    if !console
        .update_wishlist_status(&wishlist, args.status.clone())
        .await
    {
        return Err("Could not update wishlist.".to_string());
    }

    let updated = console
        .wishlists()
        .into_iter()
        .find(|wishlist| wishlist.id == args.id)
        .unwrap_or(wishlist);

    println!("wish list {} is now {}", args.id, updated.status);

    let link = wishlist_link(&updated);
    if !link.is_empty() {
        println!("notify: {link}");
    }

    Ok(())
}

pub(crate) async fn delete_product(
    console: &AdminConsole,
    args: DeleteProductArgs,
) -> Result<(), String> {
    let product = find_product(console, args.id).await?;

    if !console.delete_product(&product).await {
        let message = console.products_message();

        return if message.is_empty() {
            Err("delete cancelled".to_string())
        } else {
            Err(message)
        };
    }

    println!("{}", console.products_message());

    Ok(())
}

pub(crate) async fn create_product(
    console: &AdminConsole,
    args: CreateProductArgs,
) -> Result<(), String> {
    for path in &args.uploads {
        let file = ImageFile::read(path)
            .await
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

        if !console.upload_image(file).await {
            return Err(console.image_upload_message());
        }
    }

    console.edit_form(|form| {
        form.name = args.name;
        form.brand = args.brand;
        form.category = args.category;
        form.condition_note = args.condition;
        form.price = args.price;
        form.currency = args.currency;
        form.status = args.status;
        form.description = args.description;
        for image in args.images {
            form.add_image(image);
        }
    });

    if !console.save_product().await {
        return Err(console.admin_message());
    }

    println!("{}", console.admin_message());

    Ok(())
}

pub(crate) async fn upload_image(
    console: &AdminConsole,
    args: UploadImageArgs,
) -> Result<(), String> {
    let file = ImageFile::read(&args.path)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.path.display()))?;

    if !console.upload_image(file).await {
        return Err(console.image_upload_message());
    }

    if let Some(url) = console.form().image_urls.last() {
        println!("{url}");
    }

    Ok(())
}
