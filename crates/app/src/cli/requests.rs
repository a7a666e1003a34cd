use berecons_app::context::AppContext;
use clap::Args;

#[derive(Debug, Args)]
struct ContactArgs {
    /// Your name
    #[arg(long)]
    name: String,

    /// Your phone number
    #[arg(long)]
    phone: String,

    /// WhatsApp number, when different from the phone
    #[arg(long)]
    whatsapp: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct BookArgs {
    #[command(flatten)]
    contact: ContactArgs,

    /// Catalog id of the item to view
    #[arg(long)]
    product_id: Option<String>,

    /// Name of the item to view
    #[arg(long)]
    product_name: Option<String>,

    /// Preferred date
    #[arg(long, default_value = "")]
    date: String,

    /// Preferred time
    #[arg(long, default_value = "")]
    time: String,

    /// Anything else we should know
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Debug, Args)]
pub(crate) struct WishArgs {
    #[command(flatten)]
    contact: ContactArgs,

    /// Items you are looking for
    #[arg(long)]
    items: String,

    /// Anything else we should know
    #[arg(long, default_value = "")]
    notes: String,
}

pub(crate) async fn book(ctx: &AppContext, args: BookArgs) -> Result<(), String> {
    let view = ctx.booking();

    view.apply_query(args.product_id.as_deref(), args.product_name.as_deref());
    view.edit(|form| {
        form.contact.customer_name = args.contact.name;
        form.contact.set_phone(args.contact.phone);
        if let Some(number) = args.contact.whatsapp {
            form.contact.override_whatsapp(number);
        }
        form.preferred_date = args.date;
        form.preferred_time = args.time;
        form.notes = args.notes;
    });

    if !view.submit().await {
        return Err(view.message());
    }

    println!("{}", view.message());

    Ok(())
}

pub(crate) async fn wish(ctx: &AppContext, args: WishArgs) -> Result<(), String> {
    let view = ctx.wishlist();

    view.edit(|form| {
        form.contact.customer_name = args.contact.name;
        form.contact.set_phone(args.contact.phone);
        if let Some(number) = args.contact.whatsapp {
            form.contact.override_whatsapp(number);
        }
        form.desired_items = args.items;
        form.notes = args.notes;
    });

    if !view.submit().await {
        return Err(view.message());
    }

    println!("{}", view.message());

    Ok(())
}
