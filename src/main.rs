//! rcorridas main entrypoint.

use rcorridas::run;
use rcorridas::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
