use clap::Parser;
use fractal_viewer::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if !cli.commands.is_empty() {
        log::warn!("--commands is only replayed by the headless runner, ignoring it");
    }

    fractal_viewer::run_gui(&cli.config())?;

    Ok(())
}
