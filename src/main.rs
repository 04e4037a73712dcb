mod cli;
mod console;
mod domain;
mod errors;
mod prelude;
mod store;

use std::process::exit;

use clap::Parser;
use dotenv::dotenv;
use env_logger::{Builder, Env};
use log::error;

use crate::prelude::{Cli, Console, FileStore};

fn init_logger() {
    // Level comes from RUST_LOG, defaulting to info.
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

fn main() {
    dotenv().ok();
    init_logger();

    let cli = Cli::parse();

    let store = match FileStore::new(&cli.file) {
        Ok(store) => store,
        Err(e) => {
            error!("cannot open contact store at {}: {}", cli.file.display(), e);
            exit(1);
        }
    };

    let mut console = Console::stdio();

    if let Err(e) = cli::run::run_app(&store, &mut console) {
        error!("{}", e);
        exit(1);
    }
}
