use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use ramen_api::MenuClient;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let matches = build_cli().get_matches();

    let client = match matches.get_one::<String>("base-url") {
        Some(base_url) => MenuClient::new_with_base_url(base_url.clone()),
        None => MenuClient::new_from_env(),
    }
    .context("configure menu client")?;

    ramen_tui::run(client).await
}

fn build_cli() -> Command {
    Command::new("ramen")
        .about("Browse a local ramen menu from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .action(ArgAction::Set)
                .help(format!(
                    "Menu service base URL (also via {}; default {})",
                    ramen_api::BASE_URL_ENV_VAR,
                    ramen_api::DEFAULT_BASE_URL
                )),
        )
}

fn init_tracing() {
    // Logs go to stderr so they never interleave with the alternate screen.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
