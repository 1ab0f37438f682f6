fn main() -> Result<(), Box<dyn std::error::Error>> {
    bindscope_cli::run()
}
