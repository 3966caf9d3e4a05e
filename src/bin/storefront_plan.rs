fn main() -> anyhow::Result<()> {
    storefront_load::cli::run_cli()
}
