//! Benchrelay binary entry point.

fn main() -> anyhow::Result<()> {
    benchrelay_cli::run()
}
