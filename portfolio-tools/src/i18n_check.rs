use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

/// Check that the locale files have the same keys and that the site config is valid
#[derive(Parser)]
#[command(name = "portfolio-i18n-check")]
#[command(version)]
#[command(about = "Check the portfolio content files", long_about = None)]
struct Cli {
    /// Directory holding `en.toml` and `id.toml`
    #[arg(long, default_value = "portfolio-content/i18n")]
    dir: PathBuf,

    /// Site config to validate as well
    #[arg(long)]
    site: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<bool, portfolio_tools::Error> {
    let mut ok = true;
    for (lang, diff) in portfolio_tools::check_locales(&cli.dir)? {
        for key in diff.missing.iter() {
            println!("{}: missing `{}`", lang.code(), key);
        }
        for key in diff.extra.iter() {
            println!("{}: extra `{}`", lang.code(), key);
        }
        if !diff.is_empty() {
            ok = false;
        }
    }
    if let Some(site) = cli.site.as_ref() {
        let config = portfolio_tools::check_site(site)?;
        log::info!("{} is valid ({})", site.display(), config.profile.name);
    }
    Ok(ok)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {
            log::info!("Locale files match");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::from(2)
        }
    }
}
