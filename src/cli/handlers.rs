// src/cli/handlers.rs
use std::error::Error;

use clap::ValueEnum;
use console::style;
use serde_json::json;

use rust_passgen::api::{self, types::{AssessmentResponse, GenerationResponse}};
use rust_passgen::core::Config;
use rust_passgen::models::{StrengthAssessment, StrengthDetails, StrengthLabel};

use crate::cli::{Args, CliCommand};

// Handlers for CLI commands
pub fn run(args: Args, config: &Config) -> Result<(), Box<dyn Error>> {
    let json = args.json;

    match args.command {
        CliCommand::Random { options, count } => {
            let options = options.apply(config.random_options());

            let validation = api::validate_random_options(&options);
            if !validation.is_valid {
                return Err(validation.errors.join("\n").into());
            }

            match count {
                Some(count) => {
                    let passwords = api::generate_random_batch(&options, count)?;
                    if json {
                        println!("{}", serde_json::to_string(&GenerationResponse::batch(passwords))?);
                    } else {
                        for password in &passwords {
                            println!("{}", password);
                        }
                    }
                }
                None => {
                    let password = api::generate_random_password(&options)?;
                    let strength = api::assess_random_strength(&password);
                    print_generated(json, password, strength)?;
                }
            }
        }

        CliCommand::Memorable(memorable) => {
            let options = memorable.apply(config.memorable_options());
            let password = api::generate_memorable_password(&options)?;
            let strength = api::assess_memorable_strength(&password);
            print_generated(json, password, strength)?;
        }

        CliCommand::Passphrase { pattern } => {
            let password = api::generate_passphrase(pattern)?;
            let strength = api::assess_memorable_strength(&password);
            print_generated(json, password, strength)?;
        }

        CliCommand::Pin { length } => {
            let length = length.map(usize::from).unwrap_or(config.pin_options().length);
            let pin = api::generate_pin(length)?;
            let strength = api::assess_pin_strength(length);
            print_generated(json, pin, strength)?;
        }

        CliCommand::Assess { mode, password } => {
            let strength = api::assess_strength(mode, &password);
            if json {
                let response = AssessmentResponse { success: true, strength };
                println!("{}", serde_json::to_string(&response)?);
            } else {
                print_strength(&strength);
            }
        }

        CliCommand::SymbolSets => {
            let catalog = api::list_symbol_sets();
            if json {
                println!("{}", json!({ "success": true, "symbol_sets": catalog }));
            } else {
                for (key, info) in catalog {
                    let key = key
                        .to_possible_value()
                        .map(|value| value.get_name().to_string())
                        .unwrap_or_else(|| info.name.to_lowercase());
                    println!(
                        "{:<12} {:<14} {}",
                        style(key).bold(),
                        info.symbols,
                        style(info.description).dim()
                    );
                }
            }
        }

        CliCommand::Validate(options) => {
            let options = options.apply(config.random_options());
            let validation = api::validate_random_options(&options);
            if json {
                println!("{}", serde_json::to_string(&validation)?);
            } else if validation.is_valid {
                println!("✅ Options are valid");
            } else {
                for error in &validation.errors {
                    println!("❌ {}", error);
                }
            }
        }
    }

    Ok(())
}

fn print_generated(json: bool, password: String, strength: StrengthAssessment) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(&GenerationResponse::single(password, strength))?);
    } else {
        println!("{}", style(password).bold());
        print_strength(&strength);
    }
    Ok(())
}

fn print_strength(strength: &StrengthAssessment) {
    let label = match strength.label {
        StrengthLabel::None => style(strength.label).dim(),
        StrengthLabel::VeryWeak | StrengthLabel::Weak => style(strength.label).red(),
        StrengthLabel::Fair => style(strength.label).yellow(),
        StrengthLabel::Good | StrengthLabel::Strong => style(strength.label).green(),
    };

    println!(
        "Strength: {} ({}/5, {:.0} bits of entropy)",
        label, strength.score, strength.entropy_bits
    );

    if let StrengthDetails::Random { estimated_crack_time, .. } = &strength.details {
        println!("Time to crack: {}", estimated_crack_time);
    }
}
