use datelex_analysis::FilterStats;
use datelex_model::NormalizerConfig;

#[derive(Debug)]
pub struct NormalizeResult {
    pub source: String,
    pub config: NormalizerConfig,
    pub stats: FilterStats,
}
