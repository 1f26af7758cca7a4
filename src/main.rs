use anyhow::Result;
use clap::Parser;
use decldoc::cli::{Command, RootArgs};
use decldoc::workflow::{run_check, run_generate};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = RootArgs::parse();
    match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Check(args) => run_check(&args),
    }
}
