use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::{average, stdev, variance};

/// Descriptive statistics for a single sequence of values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub computed_at: DateTime<Utc>,
    pub source: Option<String>,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub stdev: f64,
}

impl Summary {
    /// Computes all statistics for `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty.
    pub fn compute(values: &[f64]) -> Result<Summary> {
        let mean = average(values)?;
        let var = variance(values)?;
        let sd = stdev(values)?;

        // the stats calls above guarantee a non-empty slice
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Summary {
            computed_at: Utc::now(),
            source: None,
            count: values.len(),
            min,
            max,
            mean,
            variance: var,
            stdev: sd,
        })
    }

    /// Attaches a label describing where the values came from.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
