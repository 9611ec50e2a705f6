fn main() {
    create_ps_app::app::cli::run();
}
