fn main() {
    mlpush::app::cli::run();
}
