fn main() {
    if let Err(err) = oraq::run() {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}
