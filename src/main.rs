fn main() -> Result<(), Box<dyn std::error::Error>> {
    beacon::cli::main()
}
