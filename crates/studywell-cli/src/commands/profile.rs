//! The nutrition-profile wizard, driven over stdin.

use std::io::{self, BufRead, Write};

use clap::Subcommand;
use studywell_core::api::{ProfileClient, ProfileSubmission};
use studywell_core::{
    Answer, Config, DerivedMetrics, Event, Profile, ProfileWizard, QuestionKind, WizardPhase,
};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Run the interactive nutrition-profile wizard
    Setup {
        /// Submit the finished profile to the backend
        #[arg(long)]
        submit: bool,
    },
    /// Print derived metrics for a (possibly partial) profile
    Preview {
        #[arg(long)]
        age: Option<f64>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        /// Male, Female, or Other
        #[arg(long)]
        gender: Option<String>,
        /// One of the activity labels, e.g. "Moderately Active"
        #[arg(long)]
        activity: Option<String>,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Setup { submit } => run_wizard(submit),
        ProfileAction::Preview {
            age,
            weight,
            height,
            gender,
            activity,
        } => {
            let mut profile = Profile::new();
            if let Some(age) = age {
                profile.set("age", Answer::Number(age));
            }
            if let Some(weight) = weight {
                profile.set("weight", Answer::Number(weight));
            }
            if let Some(height) = height {
                profile.set("height", Answer::Number(height));
            }
            if let Some(gender) = gender {
                profile.set("gender", Answer::Text(gender));
            }
            if let Some(activity) = activity {
                profile.set("activity_level", Answer::Text(activity));
            }

            let metrics = DerivedMetrics::from_profile(&profile);
            println!("{}", serde_json::to_string_pretty(&metrics)?);
            Ok(())
        }
    }
}

fn run_wizard(submit: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = ProfileWizard::nutrition();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Build your nutrition profile ('b' steps back).");

    while wizard.phase() == WizardPhase::Answering {
        let Some(question) = wizard.current_question().cloned() else {
            break;
        };

        println!();
        println!(
            "[{:.0}%] {}{}",
            wizard.progress_pct(),
            question.prompt,
            if question.required { " *" } else { "" }
        );
        match question.kind {
            QuestionKind::Number => {
                let unit = question.unit.as_deref().unwrap_or_default();
                let hint = question.placeholder.as_deref().unwrap_or_default();
                println!("  ({hint} {unit})");
            }
            QuestionKind::SingleSelect => {
                for (index, option) in question.options.iter().enumerate() {
                    println!("  {}) {option}", index + 1);
                }
            }
            QuestionKind::MultiSelect => {
                for (index, option) in question.options.iter().enumerate() {
                    println!("  {}) {option}", index + 1);
                }
                println!("  (comma-separated numbers, empty to skip)");
            }
            QuestionKind::FreeText => {}
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Err("unexpected end of input before the wizard finished".into());
        };
        let line = line?;
        let input = line.trim();

        if input == "b" {
            wizard.previous();
            continue;
        }

        match question.kind {
            QuestionKind::Number => {
                // Unparseable input is stored as raw text so validation
                // reports it against the question instead of being lost.
                match input.parse::<f64>() {
                    Ok(n) => wizard.set_answer(question.id.clone(), Answer::Number(n)),
                    Err(_) => wizard.set_answer(question.id.clone(), Answer::Text(input.to_string())),
                }
            }
            QuestionKind::SingleSelect => match parse_choice(input, &question.options) {
                Some(option) => wizard.set_answer(question.id.clone(), Answer::Text(option)),
                None => {
                    if !input.is_empty() {
                        println!("invalid choice");
                        continue;
                    }
                }
            },
            QuestionKind::MultiSelect => {
                for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    match parse_choice(part, &question.options) {
                        Some(option) => wizard.toggle_option(&option),
                        None => println!("skipping invalid choice: {part}"),
                    }
                }
            }
            QuestionKind::FreeText => {
                wizard.set_answer(question.id.clone(), Answer::Text(input.to_string()));
            }
        }

        if let Some(Event::ValidationFailed { message, .. }) = wizard.next() {
            println!("{message}");
        }
    }

    let profile = wizard
        .finished_profile()
        .cloned()
        .ok_or("wizard ended before review")?;
    let metrics = wizard.metrics();

    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "profile": profile,
            "metrics": metrics,
        }))?
    );

    if submit {
        let config = Config::load();
        let client = ProfileClient::from_config(&config)?;
        client.submit(&ProfileSubmission::new(profile, &metrics))?;
        println!("profile submitted");
    }

    Ok(())
}

/// A 1-based option number typed by the user.
fn parse_choice(input: &str, options: &[String]) -> Option<String> {
    let index: usize = input.parse().ok()?;
    if (1..=options.len()).contains(&index) {
        Some(options[index - 1].clone())
    } else {
        None
    }
}
