use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Metric Library ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    Dora,
    Space,
}

impl Framework {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dora => "dora",
            Self::Space => "space",
        }
    }

    /// Upper-case label shown in the tooltip header badge.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Dora => "DORA",
            Self::Space => "SPACE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkLevel {
    Elite,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub level: BenchmarkLevel,
    pub label: String,
    pub value: String,
}

/// Glyph shown next to a metric title. The webview owns the actual SVG paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricIcon {
    BarChart,
    Clock,
    AlertTriangle,
    RotateCcw,
    Smile,
    Pulse,
    Activity,
    Users,
    Stopwatch,
    Globe,
    Zap,
    Loader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    pub id: String,
    pub framework: Framework,
    pub title: String,
    pub subtitle: String,
    pub icon: MetricIcon,
    pub calculation_description: String,
    pub formula: String,
    pub significance: String,
    pub history: String,
    pub benchmarks: Vec<Benchmark>,
    pub benefits: Vec<String>,
    pub origin: String,
}

// ─── Geometry ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Where the tooltip goes. The flip flags only drive styling (arrow direction).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub position: Position,
    pub flipped_horizontal: bool,
    pub flipped_vertical: bool,
}

// ─── Info triggers ──────────────────────────────────────────────────────────

/// A labeled element the webview found while mounting a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDescriptor {
    pub trigger_id: String,
    pub label: String,
    pub framework: Framework,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoTrigger {
    pub trigger_id: String,
    pub label: String,
    pub framework: Framework,
    pub metric_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseReason {
    Explicit,
    OutsideClick,
    Scroll,
    Toggle,
    PageSwitch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoActionPayload {
    pub trigger_id: String,
    pub trigger_rect: Rect,
    pub viewport: Size,
    pub measured_height: Option<f64>,
}

// ─── Responses ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastMessage {
    pub id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ToastMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnMoreResponse {
    pub metric_id: String,
    pub url: String,
}
