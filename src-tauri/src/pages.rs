use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Cockpit,
    Team,
    Investment,
    WorkBreakdown,
    CodingBreakdown,
    ProcessFlow,
    PullRequests,
    PerformanceInsights,
    TeamPulse,
    Alerts,
    Settings,
}

impl PageId {
    pub const ALL: [PageId; 11] = [
        Self::Cockpit,
        Self::Team,
        Self::Investment,
        Self::WorkBreakdown,
        Self::CodingBreakdown,
        Self::ProcessFlow,
        Self::PullRequests,
        Self::PerformanceInsights,
        Self::TeamPulse,
        Self::Alerts,
        Self::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cockpit => "cockpit",
            Self::Team => "team",
            Self::Investment => "investment",
            Self::WorkBreakdown => "work-breakdown",
            Self::CodingBreakdown => "coding-breakdown",
            Self::ProcessFlow => "process-flow",
            Self::PullRequests => "pull-requests",
            Self::PerformanceInsights => "performance-insights",
            Self::TeamPulse => "team-pulse",
            Self::Alerts => "alerts",
            Self::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Cockpit => "Cockpit",
            Self::Team => "Team",
            Self::Investment => "Investment",
            Self::WorkBreakdown => "Work Breakdown",
            Self::CodingBreakdown => "Coding Breakdown",
            Self::ProcessFlow => "Process Flow",
            Self::PullRequests => "Pull Requests",
            Self::PerformanceInsights => "Performance Insights",
            Self::TeamPulse => "Team Pulse",
            Self::Alerts => "Alerts",
            Self::Settings => "Settings",
        }
    }

    /// DOM id of the page container.
    pub fn element_id(self) -> String {
        format!("page-{}", self.as_str())
    }

    pub fn charts(self) -> &'static [ChartSpec] {
        match self {
            Self::Investment => INVESTMENT_CHARTS,
            Self::WorkBreakdown => WORK_BREAKDOWN_CHARTS,
            Self::CodingBreakdown => CODING_BREAKDOWN_CHARTS,
            Self::ProcessFlow => PROCESS_FLOW_CHARTS,
            Self::PullRequests => PULL_REQUEST_CHARTS,
            Self::PerformanceInsights => PERFORMANCE_INSIGHT_CHARTS,
            Self::TeamPulse => TEAM_PULSE_CHARTS,
            Self::Cockpit | Self::Team | Self::Alerts | Self::Settings => &[],
        }
    }

    pub fn effects(self) -> &'static [PageEffect] {
        match self {
            Self::Cockpit => &[PageEffect::AnimateHealthScores],
            Self::Team => &[PageEffect::TeamMindmap],
            Self::CodingBreakdown => &[PageEffect::CommitHeatmap],
            _ => &[],
        }
    }
}

impl FromStr for PageId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == value)
            .ok_or_else(|| AppError::NotFound(format!("page {}", value)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Doughnut,
    Line,
    Bar,
}

/// A chart the webview should build on a given canvas. Series data stays on the webview side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub canvas_id: &'static str,
    pub kind: ChartKind,
}

impl ChartSpec {
    pub const fn new(canvas_id: &'static str, kind: ChartKind) -> Self {
        Self { canvas_id, kind }
    }
}

const INVESTMENT_CHARTS: &[ChartSpec] = &[
    ChartSpec::new("investmentPieChart", ChartKind::Doughnut),
    ChartSpec::new("investmentTrendChart", ChartKind::Line),
];
const WORK_BREAKDOWN_CHARTS: &[ChartSpec] = &[
    ChartSpec::new("workTypeChart", ChartKind::Doughnut),
    ChartSpec::new("workFlowChart", ChartKind::Line),
];
const CODING_BREAKDOWN_CHARTS: &[ChartSpec] = &[ChartSpec::new("codingActivityChart", ChartKind::Doughnut)];
const PROCESS_FLOW_CHARTS: &[ChartSpec] = &[
    ChartSpec::new("leadTimeChart", ChartKind::Bar),
    ChartSpec::new("flowEfficiencyChart", ChartKind::Line),
];
const PULL_REQUEST_CHARTS: &[ChartSpec] = &[
    ChartSpec::new("prSizeChart", ChartKind::Doughnut),
    ChartSpec::new("prTrendChart", ChartKind::Line),
];
const PERFORMANCE_INSIGHT_CHARTS: &[ChartSpec] = &[ChartSpec::new("performanceTrendChart", ChartKind::Line)];
const TEAM_PULSE_CHARTS: &[ChartSpec] = &[
    ChartSpec::new("satisfactionTrendChart", ChartKind::Line),
    ChartSpec::new("workLifeChart", ChartKind::Bar),
];

/// Non-chart work a page needs once it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageEffect {
    AnimateHealthScores,
    TeamMindmap,
    CommitHeatmap,
}

/// The charting collaborator: creates charts and tears all of them down on page switch.
pub trait ChartHost {
    fn destroy_all(&mut self) -> AppResult<()>;
    fn create(&mut self, chart: &ChartSpec) -> AppResult<()>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSwitch {
    pub page: PageId,
    pub element_id: String,
    pub title: String,
    pub charts: Vec<ChartSpec>,
    pub skipped_canvases: Vec<String>,
    pub effects: Vec<PageEffect>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageRouter;

impl PageRouter {
    pub fn new() -> Self {
        Self
    }

    /// Destroys existing charts, then builds the page's charts on the canvases that exist.
    pub fn switch(
        &self,
        page: PageId,
        available_canvases: &BTreeSet<String>,
        host: &mut dyn ChartHost,
    ) -> AppResult<PageSwitch> {
        host.destroy_all()?;

        let mut charts = Vec::new();
        let mut skipped_canvases = Vec::new();
        for chart in page.charts() {
            if !available_canvases.contains(chart.canvas_id) {
                tracing::debug!(page = page.as_str(), canvas_id = chart.canvas_id, "canvas not mounted, skipping chart");
                skipped_canvases.push(chart.canvas_id.to_string());
                continue;
            }
            host.create(chart)?;
            charts.push(*chart);
        }

        Ok(PageSwitch {
            page,
            element_id: page.element_id(),
            title: page.title().to_string(),
            charts,
            skipped_canvases,
            effects: page.effects().to_vec(),
        })
    }
}
