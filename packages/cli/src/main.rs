mod commands;

use clap::{Parser, Subcommand};
use commands::{export_html, export_json, pages, ExportHtmlArgs, ExportJsonArgs, PagesArgs};

/// Sitecraft CLI - inspect and export config-driven sites
#[derive(Parser, Debug)]
#[command(name = "sitecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all routable pages of a site config
    Pages(PagesArgs),

    /// Export one page as standalone HTML
    ExportHtml(ExportHtmlArgs),

    /// Export the whole site config as normalized JSON
    ExportJson(ExportJsonArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Pages(args) => pages::run(args),
        Command::ExportHtml(args) => export_html::run(args),
        Command::ExportJson(args) => export_json::run(args),
    }
}
