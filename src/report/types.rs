use crate::analysis::frequency::RankedFeature;
use crate::model::Side;
use serde::Serialize;

// ── Cells & rows ──

/// One formatted value. The variant tells the presentation layer how to
/// style it; the text is final.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Cell {
    Text(String),
    Numeric(String),
    Side(Side),
    /// Value the reader should notice, e.g. a high missing-value ratio.
    Warning(String),
    /// Padding that keeps row counts equal across layouts.
    Blank,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn numeric(value: impl Into<String>) -> Self {
        Self::Numeric(value.into())
    }

    /// Display text as it appears on screen.
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) | Self::Numeric(s) | Self::Warning(s) => s.clone(),
            Self::Side(side) => side.to_string(),
            Self::Blank => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: Cell,
}

impl Row {
    #[inline]
    pub fn new(label: &'static str, value: Cell) -> Self {
        Self { label, value }
    }

    #[inline]
    pub fn blank() -> Self {
        Self {
            label: "",
            value: Cell::Blank,
        }
    }
}

// ── Strategy row groups ──

/// Click-target binding: which strategy a detail view should open for.
/// Indices are 0-based positions in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailTarget {
    pub asset: usize,
    pub strategy: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowGroup {
    /// `"<symbol> Strategy #<n>"`
    pub title: String,
    pub primary: Vec<Row>,
    pub secondary: Vec<Row>,
    pub equity_curve: String,
    pub detail: DetailTarget,
}

impl RowGroup {
    /// Looks a row up by label in either column.
    pub fn row(&self, label: &str) -> Option<&Row> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .find(|r| r.label == label)
    }
}

// ── Sections ──

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSection {
    pub symbol: String,
    /// `"<symbol> (<n> Strategies)"`
    pub header: String,
    pub plot: Option<String>,
    pub groups: Vec<RowGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSection {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    /// Same shape as `matrix`, percentage text per cell.
    pub cells: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub feature: RankedFeature,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub slot: usize,
    pub title: String,
    pub entries: Vec<RankedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSection {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    Parameters(ParameterSection),
    Heatmap(HeatmapSection),
    FrequencyTable(FrequencyTable),
    Asset(AssetSection),
}

/// Output of one render: sections in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn asset_sections(&self) -> impl Iterator<Item = &AssetSection> {
        self.sections.iter().filter_map(|s| match s {
            Section::Asset(asset) => Some(asset),
            _ => None,
        })
    }

    pub fn row_groups(&self) -> impl Iterator<Item = &RowGroup> {
        self.asset_sections().flat_map(|a| a.groups.iter())
    }
}
