use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::FEATURE_COUNT;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact '{section}' expects {expected} values, found {found}")]
    Shape { section: &'static str, expected: usize, found: usize },
}

#[derive(Debug, Clone, Deserialize)]
struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Fitted scaler + linear regression pipeline, loaded once at startup and
/// immutable for the process lifetime.
///
/// Shapes are validated at load time, so `predict` is infallible.
#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    scaler: StandardScaler,
    model: LinearModel,
}

impl Pipeline {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let raw = fs::read_to_string(path)?;
        let pipeline: Pipeline = serde_json::from_str(&raw)?;
        pipeline.check_shapes()?;
        Ok(pipeline)
    }

    /// Build a pipeline directly from its fitted parameters. Lets tests
    /// inject a known predictor instead of loading an artifact from disk.
    pub fn from_parts(
        mean: Vec<f64>,
        scale: Vec<f64>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, PipelineError> {
        let pipeline = Pipeline {
            scaler: StandardScaler { mean, scale },
            model: LinearModel { coefficients, intercept },
        };
        pipeline.check_shapes()?;
        Ok(pipeline)
    }

    fn check_shapes(&self) -> Result<(), PipelineError> {
        for (section, found) in [
            ("scaler.mean", self.scaler.mean.len()),
            ("scaler.scale", self.scaler.scale.len()),
            ("model.coefficients", self.model.coefficients.len()),
        ] {
            if found != FEATURE_COUNT {
                return Err(PipelineError::Shape { section, expected: FEATURE_COUNT, found });
            }
        }
        Ok(())
    }

    /// Standardize the inputs and apply the linear model.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        features
            .iter()
            .zip(&self.scaler.mean)
            .zip(&self.scaler.scale)
            .zip(&self.model.coefficients)
            .map(|(((x, mean), scale), coef)| (x - mean) / scale * coef)
            .sum::<f64>()
            + self.model.intercept
    }
}
