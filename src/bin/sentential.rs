fn main() {
    sentential::cli::run();
}
