use crate::error::AnalyzeError;

/// All knobs for one analysis run, collected into a single value passed
/// down the pipeline. One invocation, one config; nothing ambient.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Explicit column selection; None analyzes every numeric column in
    /// table order.
    pub columns: Option<Vec<String>>,
    /// Number of histogram bins.
    pub bins: usize,
    /// Row count cap; larger tables are randomly sampled down to this.
    pub sample_size: Option<usize>,
    /// RNG seed for sampling. None means OS-seeded, varying run to run.
    pub seed: Option<u64>,
    /// Bar width in characters for the detailed histograms.
    pub histogram_width: usize,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        AnalyzeConfig {
            columns: None,
            bins: 10,
            sample_size: None,
            seed: None,
            histogram_width: 20,
        }
    }
}

impl AnalyzeConfig {
    /// Reject out-of-range parameters before any processing starts. The
    /// CLI enforces the same bounds at parse time; this covers library
    /// callers building a config by hand.
    pub fn validate(&self) -> Result<(), AnalyzeError> {
        if self.bins == 0 {
            return Err(AnalyzeError::InvalidBins { value: self.bins });
        }
        if self.sample_size == Some(0) {
            return Err(AnalyzeError::InvalidSampleSize { value: 0 });
        }
        if self.histogram_width == 0 {
            return Err(AnalyzeError::InvalidWidth {
                value: self.histogram_width,
            });
        }
        Ok(())
    }
}
