use log::error;
use recipe_suggest::{ingredients, RecipeSuggester, RunOutcome};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Ingredients may be given as separate arguments or one comma-separated list
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Err("Usage: recipe-suggest <ingredient>[, <ingredient>...]".into());
    }

    let query = ingredients::to_query(args.as_slice())?;
    let mut suggester = RecipeSuggester::builder().build()?;

    match suggester.run(&query).await {
        Ok(RunOutcome::Ready(batch)) => {
            if let Some(warning) = &batch.degraded {
                eprintln!("Warning: {}", warning);
            }
            println!("{}", serde_json::to_string_pretty(&batch.recipes)?);
        }
        Ok(RunOutcome::Empty) => {
            println!("The chef couldn't find any recipes for these ingredients.");
        }
        Err(e) => {
            error!("Error generating recipes: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
