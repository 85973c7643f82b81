mod browse;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use larder_core::{
    load_catalog, load_recipes, map_recipes_to_matches, IngredientRecord, MatchResult,
    MatcherIndex, Vocabulary,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Match recipe ingredient lines against an ingredient catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full match result as JSON
    Match {
        #[command(flatten)]
        inputs: Inputs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List catalog slugs that no recipe uses
    Unused {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// List recipes that use every given ingredient
    Filter {
        #[command(flatten)]
        inputs: Inputs,
        /// Catalog slug a recipe must contain (repeatable)
        #[arg(long = "require", required = true)]
        required: Vec<String>,
    },
    /// Show used catalog entries grouped by aisle
    Browse {
        #[command(flatten)]
        inputs: Inputs,
        /// Include entries no recipe uses
        #[arg(long)]
        show_unused: bool,
    },
    /// Show how text normalizes and tokenizes
    Tokens {
        /// JSON file with extra descriptor words (array of strings)
        #[arg(long)]
        extra_descriptors: Option<PathBuf>,
        /// Text to tokenize, one argument per line
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[derive(Args)]
struct Inputs {
    /// Ingredient catalog JSON file
    #[arg(long, env = "LARDER_CATALOG")]
    catalog: PathBuf,
    /// Recipes JSON file
    #[arg(long, env = "LARDER_RECIPES")]
    recipes: PathBuf,
    /// JSON file with extra descriptor words (array of strings)
    #[arg(long)]
    extra_descriptors: Option<PathBuf>,
}

/// Loaded inputs plus the computed result.
struct Matched {
    catalog: Vec<IngredientRecord>,
    result: MatchResult,
}

impl Inputs {
    fn run(&self) -> Result<Matched> {
        let vocabulary = load_vocabulary(self.extra_descriptors.as_deref())?;
        let catalog = load_catalog(&self.catalog)
            .with_context(|| format!("Failed to load catalog {}", self.catalog.display()))?;
        let recipes = load_recipes(&self.recipes)
            .with_context(|| format!("Failed to load recipes {}", self.recipes.display()))?;

        let index = MatcherIndex::build_with(&catalog, vocabulary);
        let result = map_recipes_to_matches(&recipes, &index);
        Ok(Matched { catalog, result })
    }
}

fn load_vocabulary(extra: Option<&Path>) -> Result<Vocabulary> {
    let Some(path) = extra else {
        return Ok(Vocabulary::standard().clone());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let words: Vec<String> = serde_json::from_str(&content)
        .with_context(|| format!("{} must be a JSON array of strings", path.display()))?;
    tracing::info!("Adding {} descriptor words from {}", words.len(), path.display());
    Ok(Vocabulary::standard().with_extra_words(&words))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match { inputs, pretty } => {
            let matched = inputs.run()?;
            let json = if pretty {
                serde_json::to_string_pretty(&matched.result)?
            } else {
                serde_json::to_string(&matched.result)?
            };
            println!("{}", json);
        }
        Commands::Unused { inputs } => {
            let matched = inputs.run()?;
            for slug in matched.result.unused_slugs() {
                println!("{}", slug);
            }
        }
        Commands::Filter { inputs, required } => {
            let matched = inputs.run()?;
            for id in matched.result.recipes_with_all(&required) {
                println!("{}", id);
            }
        }
        Commands::Browse {
            inputs,
            show_unused,
        } => {
            let matched = inputs.run()?;
            browse::print(&matched.catalog, &matched.result, show_unused);
        }
        Commands::Tokens {
            extra_descriptors,
            text,
        } => {
            let vocabulary = load_vocabulary(extra_descriptors.as_deref())?;
            for line in &text {
                let tokens = vocabulary.tokenize(line);
                println!("{}", larder_core::normalize(line));
                println!("  tokens: {}", tokens.joined());
            }
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
    fn test_filter_requires_slugs() {
        let args = ["larder", "filter", "--catalog", "c.json", "--recipes", "r.json"];
        assert!(Cli::try_parse_from(args).is_err());

        let cli = Cli::try_parse_from([
            "larder",
            "filter",
            "--catalog",
            "c.json",
            "--recipes",
            "r.json",
            "--require",
            "oil-olive",
            "--require",
            "veg-sweet-potato",
        ])
        .unwrap();
        match cli.command {
            Commands::Filter { required, .. } => {
                assert_eq!(required, vec!["oil-olive", "veg-sweet-potato"]);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_standard_vocabulary_without_extra_file() {
        let vocabulary = load_vocabulary(None).unwrap();
        assert_eq!(&vocabulary, Vocabulary::standard());
    }
}
