use crate::palette::Color;
use rust_decimal::Decimal;
use serde::Serialize;

/// How a chart is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
}

/// One labelled value of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub border_color: Color,
    pub background_color: Color,
    pub border_width: u8,
    /// Curve smoothing for line charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// An ordered sequence of labelled points (line and bar charts).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub kind: ChartKind,
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub points: Vec<Point>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One slice of a category distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub label: String,
    pub value: Decimal,
    pub color: Color,
}

/// Labelled values for pie and doughnut charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub kind: ChartKind,
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub categories: Vec<Category>,
    pub border_width: u8,
}

impl Distribution {
    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.categories.iter().map(|c| c.value).collect()
    }

    pub fn colors(&self) -> Vec<Color> {
        self.categories.iter().map(|c| c.color).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Every chart of the dashboard, derived from one aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub revenue: Series,
    pub weekly_revenue: Series,
    pub monthly_revenue: Series,
    pub orders: Series,
    pub new_users: Series,
    pub products: Distribution,
    pub customers: Distribution,
    pub conversion: Distribution,
}
