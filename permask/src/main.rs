use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, registry::Registry, EnvFilter};
use tracing_tree;

mod cli;
mod commands;
mod render;
mod shell;

fn init_logger() {
    let filter = EnvFilter::from_default_env();

    let layer = tracing_tree::HierarchicalLayer::default()
        .with_writer(std::io::stderr)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_verbose_entry(false)
        .with_verbose_exit(false)
        .with_targets(true);

    let subscriber = Registry::default().with(layer).with(filter);

    tracing::subscriber::set_global_default(subscriber).unwrap();
}

fn main() -> ExitCode {
    init_logger();

    info!("parsing command line arguments");
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Show(flags) => commands::show(flags),
        cli::Commands::Grant(flags) => commands::grant(flags),
        cli::Commands::Revoke(flags) => commands::revoke(flags),
        cli::Commands::Check(flags) => commands::check(flags),
        cli::Commands::Toggle(flags) => commands::toggle(flags),
        cli::Commands::Pow2(flags) => commands::pow2(flags),
        cli::Commands::Shell(flags) => commands::shell(flags),
    }
}
