use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportJsonArgs {
    /// Site config JSON file
    #[arg(short, long, default_value = "site.json")]
    pub config: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportJsonArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.config);
    let json = serde_json::to_string_pretty(&config)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
