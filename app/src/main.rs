
use std::process::exit;

use failure::Fail;
use log::debug;

use logo_png::emitter::{emit, LOGO_HEIGHT, LOGO_PATH, LOGO_WIDTH};

mod errors;

use crate::errors::AppResult;



fn main() {
    env_logger::init();

    if let Err(err) = app() {
        let mut fail: &dyn Fail = &err;
        let mut message = err.to_string();

        while let Some(cause) = fail.cause() {
            message.push_str(&format!("\n\tcaused by: {}", cause));
            fail = cause;
        }

        eprintln!("Error: {}", message);

        exit(1);
    }
}

fn app() -> AppResult<()> {
    debug!("Emitting {} ({}x{})", LOGO_PATH, LOGO_WIDTH, LOGO_HEIGHT);
    emit(LOGO_WIDTH, LOGO_HEIGHT, None)?;
    Ok(())
}
