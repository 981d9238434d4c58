use std::{env, process};

use kitchen_stations::{
    constants::{DEFAULT_KITCHEN_FILE, DEFAULT_LOG_LEVEL},
    kitchen::Kitchen,
};
use log::error;
use simple_logger::SimpleLogger;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(DEFAULT_LOG_LEVEL).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_KITCHEN_FILE.to_string());

    let result = Kitchen::from_file(&path).and_then(|mut kitchen| kitchen.manage_orders());
    if let Err(err) = result {
        error!("[KITCHEN] {}", err);
        process::exit(1);
    }
}
