fn main() {
    kl_manifest::app::cli::run();
}
