use anyhow::bail;
use clap::Args;
use colored::Colorize;
use sitecraft_renderer::export_html;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportHtmlArgs {
    /// Page id to export
    pub page_id: String,

    /// Site config JSON file
    #[arg(short, long, default_value = "site.json")]
    pub config: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportHtmlArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.config);

    let Some(html) = export_html(&config, &args.page_id) else {
        bail!("no page with id \"{}\"", args.page_id);
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
