//! ivcal main entrypoint.

use ivcal::run;
use ivcal::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
