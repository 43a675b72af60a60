fn main() {
    if let Err(err) = clipshelf_lib::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
