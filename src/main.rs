//! TimeLayer main entrypoint.

use timelayer::run;
use timelayer::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
