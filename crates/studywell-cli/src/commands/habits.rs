use clap::Subcommand;
use studywell_core::api::{Habit, HabitFrequency, HabitsClient};
use studywell_core::Config;

#[derive(Subcommand)]
pub enum HabitsAction {
    /// List habits
    List,
    /// Add a habit
    Add {
        name: String,
        /// Daily or Weekly
        #[arg(long, default_value = "Daily")]
        frequency: String,
    },
    /// Update a habit
    Update {
        id: i64,
        name: String,
        /// Daily or Weekly
        #[arg(long, default_value = "Daily")]
        frequency: String,
        /// Completion percentage, 0-100
        #[arg(long, default_value = "0")]
        progress: u32,
    },
    /// Delete a habit
    Delete { id: i64 },
}

pub fn run(action: HabitsAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = HabitsClient::from_config(&Config::load())?;
    match action {
        HabitsAction::List => {
            let habits = client.list()?;
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitsAction::Add { name, frequency } => {
            let habit = Habit {
                id: None,
                name,
                frequency: frequency.parse::<HabitFrequency>()?,
                progress: 0,
            };
            client.add(&habit)?;
            println!("ok");
        }
        HabitsAction::Update {
            id,
            name,
            frequency,
            progress,
        } => {
            let habit = Habit {
                id: Some(id),
                name,
                frequency: frequency.parse::<HabitFrequency>()?,
                progress,
            };
            client.update(id, &habit)?;
            println!("ok");
        }
        HabitsAction::Delete { id } => {
            client.delete(id)?;
            println!("ok");
        }
    }
    Ok(())
}
