use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use assistant::cli::{
    handle_backup_command, handle_birthdays_command, handle_contact_command,
    handle_export_command, handle_history_command, handle_note_command, BackupCommands,
    ContactCommands, ExportFormat, NoteCommands,
};
use assistant::config::{paths::AssistantPaths, settings::Settings};
use assistant::export::ExportCollection;
use assistant::shell::Shell;
use assistant::storage::Storage;

#[derive(Parser)]
#[command(
    name = "assistant",
    version,
    about = "Terminal personal assistant for contacts, notes and birthdays",
    long_about = "Keeps an address book and a tagged notebook in plain JSON files. \
                  Run without a command to open the interactive menu."
)]
struct Cli {
    /// Base directory for settings, data and backups
    #[arg(long, global = true, env = "ASSISTANT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Shell,

    /// Contact management commands
    #[command(subcommand)]
    Contact(ContactCommands),

    /// Note management commands
    #[command(subcommand)]
    Note(NoteCommands),

    /// Show contacts with a birthday in the next N days
    Birthdays {
        /// Days to look ahead (default from settings)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export contacts and notes
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Collections to export
        #[arg(short, long, value_enum, default_value = "all")]
        collection: ExportCollection,
    },

    /// Show recent changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = AssistantPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone(), settings.storage_layout)?;
    storage.load_all()?;

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            Shell::new(&storage, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Contact(cmd)) => handle_contact_command(&storage, &settings, cmd)?,
        Some(Commands::Note(cmd)) => handle_note_command(&storage, cmd)?,
        Some(Commands::Birthdays { days }) => handle_birthdays_command(&storage, &settings, days)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, &settings, cmd)?,
        Some(Commands::Export {
            output,
            format,
            collection,
        }) => handle_export_command(&storage, output, format, collection)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Personal Assistant Configuration");
            println!("================================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Contacts:         {}", storage.contacts.location().path().display());
            println!("Notes:            {}", storage.notes.location().path().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Storage layout:       {:?}", settings.storage_layout);
            println!("  Birthday window:      {} day(s)", settings.birthday_window_days);
            println!("  Window bound:         {:?}", settings.window_bound);
            println!("  Leap day policy:      {:?}", settings.leap_day_policy);
            println!("  Contact search scope: {:?}", settings.contact_search_scope);
            println!("  Date format:          {}", settings.date_format);
            println!(
                "  Backup retention:     {} daily, {} monthly",
                settings.backup_retention.daily_count, settings.backup_retention.monthly_count
            );
        }
    }

    Ok(())
}
