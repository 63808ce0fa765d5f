use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studywell-cli", version, about = "Studywell CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nutrition profile wizard and metrics
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Academic subject management
    Subjects {
        #[command(subcommand)]
        action: commands::subjects::SubjectsAction,
    },
    /// Habit management
    Habits {
        #[command(subcommand)]
        action: commands::habits::HabitsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Subjects { action } => commands::subjects::run(action),
        Commands::Habits { action } => commands::habits::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "studywell-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
