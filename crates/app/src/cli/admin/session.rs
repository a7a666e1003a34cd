use std::sync::Arc;

use berecons_app::views::AdminConsole;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Admin username
    #[arg(long)]
    username: String,

    /// Admin password
    #[arg(long, env = "BERECONS_ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct ResetArgs {
    /// Reset key issued with the deployment
    #[arg(long, env = "BERECONS_RESET_KEY", hide_env_values = true)]
    reset_key: String,

    /// New admin username
    #[arg(long)]
    new_username: String,

    /// New admin password
    #[arg(long, env = "BERECONS_NEW_PASSWORD", hide_env_values = true)]
    new_password: String,
}

pub(crate) async fn login(console: &Arc<AdminConsole>, args: LoginArgs) -> Result<(), String> {
    // The CLI exits right after login, so the background prefetch is not awaited.
    let _prefetch = console.login(&args.username, &args.password).await;

    if !console.is_logged_in() {
        return Err(console.login_message());
    }

    println!(
        "{} as {}",
        console.login_message(),
        console.username().unwrap_or_default()
    );

    Ok(())
}

pub(crate) async fn reset(console: &AdminConsole, args: ResetArgs) -> Result<(), String> {
    if !console
        .reset_credentials(&args.reset_key, &args.new_username, &args.new_password)
        .await
    {
        return Err(console.reset_message());
    }

    println!("{}", console.reset_message());

    Ok(())
}
