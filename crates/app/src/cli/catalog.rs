use berecons::prelude::*;
use berecons_app::context::AppContext;
use clap::Args;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Free-text search over name, brand and category
    #[arg(long, default_value = "")]
    search: String,

    /// Status filter (ALL, AVAILABLE, RESERVED, SOLD)
    #[arg(long, default_value = "ALL")]
    status: StatusFilter,

    /// Category filter (ALL or an exact category)
    #[arg(long, default_value = "ALL")]
    category: CategoryFilter,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Product")]
    title: String,

    #[tabled(rename = "Status")]
    status: ProductStatus,

    #[tabled(rename = "Image")]
    image: String,

    #[tabled(rename = "Ask on WhatsApp")]
    inquiry: String,
}

pub(crate) async fn run(ctx: &AppContext, args: CatalogArgs) -> Result<(), String> {
    let view = ctx.inventory();

    view.load().await;

    let error = view.error();
    if !error.is_empty() {
        return Err(error);
    }

    view.set_search(args.search);
    view.set_status(args.status);
    view.set_category(args.category);

    let products = view.filtered();

    if products.is_empty() {
        println!("no products match (categories: {})", view.categories().join(", "));
        return Ok(());
    }

    let rows = products.iter().map(|product| ProductRow {
        id: product.id.map(|id| id.to_string()).unwrap_or_default(),
        title: product_title(product),
        status: product.status,
        image: product
            .cover_image()
            .map(|reference| view.thumbnail(reference))
            .unwrap_or_default(),
        inquiry: if product.is_reserved() {
            "reserved".to_string()
        } else {
            view.inquiry_link(product).unwrap_or_default()
        },
    });

    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}
