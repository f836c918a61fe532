fn main() {
    exportgen::app::cli::run();
}
