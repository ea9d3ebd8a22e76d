use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use covscraper::{
    cli::Cli,
    config::SOURCE_URL,
    fetch,
    output::{self, export, OutputFormat},
    pipeline,
};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) parse args (sort column is validated here, before any fetch) ───
    let cli = Cli::parse();

    // ─── 2) init logging ─────────────────────────────────────────────
    let env =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 3) fetch the page ───────────────────────────────────────────
    let url =
        Url::parse(SOURCE_URL).with_context(|| format!("parsing source URL {}", SOURCE_URL))?;
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")?;
    let markup = fetch::fetch_page(&client, &url).await?;

    if cli.list_tables {
        for t in pipeline::list_tables(&markup)? {
            println!("{}\t{}\t{} rows\t{} headers", t.index, t.id, t.rows, t.headers);
        }
        return Ok(());
    }

    // ─── 4) parse, type, sort ────────────────────────────────────────
    let table = pipeline::run(&markup, &cli.pipeline_options())?;

    // ─── 5) render / export ──────────────────────────────────────────
    let now = Utc::now();
    println!("{}", output::render(&table, cli.format, now)?);

    if cli.export {
        let path = export::export_table(&table, &cli.out_dir, now)?;
        if cli.format == OutputFormat::Table {
            println!("\nExported to {}", path.display());
        } else {
            eprintln!("Exported to {}", path.display());
        }
    }

    info!("all done");
    Ok(())
}
