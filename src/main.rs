use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chatfmt::application::MessageFormatter;
use chatfmt::application::dto::TranscriptEntry;
use chatfmt::infrastructure::{AppConfig, CliArgs, StorageManager, StringTable, read_transcript};
use chatfmt::presentation::{MessageView, Palette, TerminalPrinter};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = match args.config.as_deref().and_then(Path::parent) {
        Some(dir) => StorageManager::with_dir(dir.to_path_buf()),
        None => StorageManager::new()?,
    };
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn load_entries(args: &CliArgs) -> Result<Vec<TranscriptEntry>> {
    let entries = match &args.transcript {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open {}", path.display()))?;
            read_transcript(BufReader::new(file))?
        }
        None => read_transcript(io::stdin().lock())?,
    };
    Ok(entries)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = chatfmt::VERSION, "Starting {}", chatfmt::NAME);

    let strings = StringTable::default().with_overrides(&config.strings);
    let formatter = MessageFormatter::new(Arc::new(strings), config.theme.muted.clone());
    let view = MessageView::new(formatter, Palette::from_config(&config.theme));

    let entries = load_entries(&args)?;
    let context = config.display_context();
    let mut printer = TerminalPrinter::new(io::stdout().lock(), args.show_ranges);

    for entry in &entries {
        match view.bind_entry(entry, context, config.group_chat)? {
            Some(row) => printer.print(&row)?,
            None => warn!(kind = entry.kind_name(), "entry has nothing to render"),
        }
    }

    info!(count = entries.len(), "Transcript rendered");
    Ok(())
}
