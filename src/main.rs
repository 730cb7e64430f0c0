use colored::Colorize;
use std::error::Error;
use std::io;
use subnet_calculator::config::Config;
use subnet_calculator::run_session;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "{} logging disabled, could not load {}: {e}",
            "NOTE".on_red(),
            config.log_config
        );
    }
    log::info!("#Start main()");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(stdin.lock(), stdout.lock(), &config) {
        log::error!("ERR {e}");
        return Err(e.into());
    }

    log::info!("#End main()");
    Ok(())
}
