use clap::Args;
use colored::Colorize;
use sitecraft_config::flatten_pages;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Site config JSON file
    #[arg(short, long, default_value = "site.json")]
    pub config: PathBuf,
}

pub fn run(args: PagesArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.config);
    let routes = flatten_pages(&config);

    println!(
        "{} {} ({} pages)",
        "Site:".bold(),
        config.site.global.brand,
        routes.len()
    );

    for route in routes {
        let sections = route.page.sections.len();
        println!(
            "  {} {} {}",
            route.path.green(),
            route.id.dimmed(),
            format!("[{} sections]", sections).dimmed()
        );
    }

    Ok(())
}
