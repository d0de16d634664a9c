//! note-placer - command-line host for the placement engine.
//!
//! Loads the placement settings from `--settings-dir`, then either resolves
//! document paths against a directory-backed vault or edits the settings.
//! Every settings edit is saved immediately.

mod cli;

use anyhow::{Context, Result};
use cli::{Cli, Command, ResolveArgs, RulesCommand};
use note_placer::services::format_rules;
use note_placer::vault::TracingNotifier;
use note_placer::{APP_NAME, ConfigManager, FsVault, SettingsManager, VERSION};
use std::io::Read;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let _guard =
        note_placer::logging::setup_logging_with_console(&cli.log_dir, APP_NAME, cli.debug, cli.debug)?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let store = Arc::new(ConfigManager::new(&cli.settings_dir)?);
    let settings = SettingsManager::load_from(store)?;

    match cli.command {
        Command::Resolve(args) => resolve(&settings, args)?,
        Command::Mode { mode } => {
            settings.set_mode(mode)?;
            println!("mode: {}", mode);
        }
        Command::Folder { expression } => {
            settings.set_fixed_folder(&expression)?;
            println!("folder: {}", settings.read(|c| c.fixed_folder.to_string()));
        }
        Command::Rules(RulesCommand::Show) => {
            print!("{}", settings.read(|c| format_rules(&c.rules)));
        }
        Command::Rules(RulesCommand::Set { file }) => {
            let text = read_rule_text(&file)?;
            settings.set_rules_text(&text)?;
            print!("{}", settings.read(|c| format_rules(&c.rules)));
        }
        Command::Locale { locale } => {
            settings.set_locale(locale)?;
        }
        Command::Show => {
            let yaml = serde_yaml_ng::to_string(&settings.snapshot())
                .context("Failed to serialize settings to YAML")?;
            print!("{}", yaml);
        }
    }

    Ok(())
}

fn resolve(settings: &SettingsManager, args: ResolveArgs) -> Result<()> {
    let vault = FsVault::open(&args.vault)?;
    let policy = settings.policy(vault, TracingNotifier);

    for doc_path in &args.doc_paths {
        let folder = policy.resolve(doc_path);
        println!("{} -> {}", doc_path, folder);
    }

    policy.metrics().log_summary();
    Ok(())
}

fn read_rule_text(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read rules from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read rules file: {}", file))
    }
}
