use std::io::{self, Write};
use std::process::ExitCode;

use jsonbench::{Config, SerdeValue};

fn main() -> ExitCode {
    env_logger::init();

    let mut config = Config::default();
    if let Some(data_dir) = std::env::args_os().nth(1) {
        config = config.with_data_dir(data_dir);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match jsonbench::run(&config, &SerdeValue, &mut out) {
        Ok(summary) => {
            log::info!("geometric mean over {} sources", summary.results.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = out.flush();
            log::debug!("{:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
