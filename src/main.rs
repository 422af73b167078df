// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::process::ExitCode;

use log::error;

fn main() -> ExitCode {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = fizzvec::run(&mut out).and_then(|_| out.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fizzvec: {}", e);
            ExitCode::FAILURE
        }
    }
}
