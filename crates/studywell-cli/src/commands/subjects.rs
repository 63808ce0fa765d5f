use clap::Subcommand;
use studywell_core::api::{Subject, SubjectDifficulty, SubjectsClient};
use studywell_core::Config;

#[derive(Subcommand)]
pub enum SubjectsAction {
    /// List subjects
    List,
    /// Add a subject
    Add {
        name: String,
        /// Easy, Medium, or Hard
        #[arg(long, default_value = "Easy")]
        difficulty: String,
    },
    /// Update a subject
    Update {
        id: i64,
        name: String,
        /// Easy, Medium, or Hard
        #[arg(long, default_value = "Easy")]
        difficulty: String,
    },
    /// Delete a subject
    Delete { id: i64 },
}

pub fn run(action: SubjectsAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = SubjectsClient::from_config(&Config::load())?;
    match action {
        SubjectsAction::List => {
            let subjects = client.list()?;
            println!("{}", serde_json::to_string_pretty(&subjects)?);
        }
        SubjectsAction::Add { name, difficulty } => {
            let subject = Subject {
                id: None,
                name,
                difficulty: difficulty.parse::<SubjectDifficulty>()?,
            };
            client.add(&subject)?;
            println!("ok");
        }
        SubjectsAction::Update {
            id,
            name,
            difficulty,
        } => {
            let subject = Subject {
                id: Some(id),
                name,
                difficulty: difficulty.parse::<SubjectDifficulty>()?,
            };
            client.update(id, &subject)?;
            println!("ok");
        }
        SubjectsAction::Delete { id } => {
            client.delete(id)?;
            println!("ok");
        }
    }
    Ok(())
}
