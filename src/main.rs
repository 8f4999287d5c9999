fn main() -> anyhow::Result<()> {
    funserver::cli::run_cli()
}
