use anyhow::Result;

fn main() -> Result<()> {
    wordbox::cli::run_cli()
}
