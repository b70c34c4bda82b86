use clap::Parser;
use fractal_viewer::{Cli, Explorer, ScriptedPresenter, run_frame_loop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut explorer = Explorer::from_config(&cli.config())?;
    let mut presenter = ScriptedPresenter::new(cli.commands.iter().copied());

    let frames = run_frame_loop(&mut explorer, &mut presenter)?;

    log::info!(
        "rendered {frames} frames in {} ms",
        presenter.total_render_time().as_millis()
    );

    Ok(())
}
