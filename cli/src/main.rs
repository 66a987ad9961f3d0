mod files;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use souschef_core::{ConversationTurn, OptimizationRequest, OptimizeOutcome, Recipe, RecipeAgent};
use std::path::PathBuf;

use crate::files::{load_json, print_json, read_bytes};

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Generate and refine recipes from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from a free-text description
    Generate {
        /// Ingredients, time limit, cuisine and so on, in your own words
        description: String,
    },
    /// Refine an existing recipe
    Optimize {
        /// Recipe JSON file, as printed by `generate`
        #[arg(long)]
        recipe: PathBuf,
        /// JSON array of earlier turns ({"role", "content"})
        #[arg(long)]
        history: Option<PathBuf>,
        /// What to change
        request: String,
    },
    /// Check whether a message asks for cooking help
    Classify { message: String },
    /// Recognize the ingredients in a photo
    Analyze { image: PathBuf },
    /// Generate a photo of a finished dish
    Image {
        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let agent = RecipeAgent::from_env().context("Failed to configure the generative backend")?;

    match cli.command {
        Commands::Generate { description } => {
            let recipe = agent.generate_recipe(&description).await?;
            print_json(&recipe)?;
        }
        Commands::Optimize {
            recipe,
            history,
            request,
        } => {
            let current_recipe: Recipe = load_json(&recipe)?;
            let conversation_history: Vec<ConversationTurn> = match history {
                Some(path) => load_json(&path)?,
                None => vec![],
            };
            tracing::debug!(
                dish_name = %current_recipe.dish_name,
                turns = conversation_history.len(),
                "Loaded recipe"
            );
            let outcome = agent
                .optimize_recipe(&OptimizationRequest {
                    current_recipe,
                    user_request: request,
                    conversation_history,
                })
                .await?;
            if let OptimizeOutcome::OffTopic(reminder) = &outcome {
                eprintln!("{}", reminder.message);
            }
            print_json(&outcome)?;
        }
        Commands::Classify { message } => {
            let is_recipe_request = agent.classify_intent(&message).await;
            print_json(&serde_json::json!({ "is_recipe_request": is_recipe_request }))?;
        }
        Commands::Analyze { image } => {
            let data = read_bytes(&image)?;
            let analysis = agent
                .analyze_ingredients(data)
                .await
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Cannot analyze {}", image.display()))?;
            print_json(&analysis)?;
        }
        Commands::Image { recipe } => {
            let recipe: Recipe = load_json(&recipe)?;
            let image_url = agent.generate_image(&recipe).await;
            print_json(&serde_json::json!({ "image_url": image_url }))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_optimize_args() {
        let cli = Cli::try_parse_from([
            "souschef",
            "optimize",
            "--recipe",
            "stew.json",
            "--history",
            "turns.json",
            "make it spicier",
        ])
        .unwrap();
        match cli.command {
            Commands::Optimize {
                recipe,
                history,
                request,
            } => {
                assert_eq!(recipe, PathBuf::from("stew.json"));
                assert_eq!(history, Some(PathBuf::from("turns.json")));
                assert_eq!(request, "make it spicier");
            }
            _ => panic!("expected optimize"),
        }
    }
}
