use std::path::PathBuf;

use betterrest_core::{Config, LinearModel, ModelPredictor};
use betterrest_core::error::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ModelAction {
    /// Print the effective model coefficients as TOML
    Show {
        /// Model file to inspect instead of the configured one
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

pub fn run(action: ModelAction) -> Result<()> {
    match action {
        ModelAction::Show { model } => {
            let config = Config::load_or_default();
            let (source, coefficients) = match model.or_else(|| config.model_path()) {
                Some(path) => {
                    let predictor = ModelPredictor::new(&path);
                    let coefficients = *predictor.model()?;
                    (path.display().to_string(), coefficients)
                }
                None => ("built-in".to_string(), LinearModel::default()),
            };
            println!("# source: {source}");
            print!("{}", coefficients.to_toml()?);
        }
    }
    Ok(())
}
