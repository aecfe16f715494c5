use colored::Colorize;

fn main() {
    if let Err(e) = hw::run() {
        eprintln!("{} {}", "error:".bright_red(), e);
        std::process::exit(e.exit_code());
    }
}
