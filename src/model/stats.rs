use serde::Deserialize;

/// Input of the archive/validation view: descriptive statistics per feature.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsModel {
    pub symbol: String,
    #[serde(default)]
    pub plot: Option<String>,
    pub features: Vec<FeatureStats>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStats {
    pub name: String,
    #[serde(default)]
    pub plot: Option<String>,
    pub nil_ratio: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}
