fn main() {
    wolfedit_launcher::app::cli::run();
}
