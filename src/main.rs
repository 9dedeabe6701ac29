use std::path::PathBuf;

use clap::Parser;
use dayplan::constants::SETTINGS_FILENAME;
use dayplan::{Cli, Command, Settings, Vault};

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let vault = Vault::new(dayplan::vault_path(cli.vault.as_deref()));
    let config_path = cli
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| vault.root().join(SETTINGS_FILENAME));

    if let Command::Init { force } = cli.command {
        return cmd::init::run(&vault, &config_path, force);
    }

    let settings = Settings::load_or_default(&config_path)?;

    match cli.command {
        Command::Path => cmd::path::run(&vault, &settings),
        Command::Status => cmd::status::run(&vault, &settings, cli.json),
        Command::Prepare => cmd::prepare::run(&vault, &settings),
        Command::Show => cmd::show::run(&vault, &settings),
        Command::Write { content } => cmd::write::run(&vault, &settings, content),
        Command::Init { .. } => unreachable!("handled before settings load"),
    }
}

mod cmd {
    pub mod init;
    pub mod path;
    pub mod prepare;
    pub mod show;
    pub mod status;
    pub mod write;
}
