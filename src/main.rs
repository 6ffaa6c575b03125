//! mg - dependency gating and step ordering for molecules

fn main() {
    if let Err(err) = molgate::cli::run() {
        molgate::ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
