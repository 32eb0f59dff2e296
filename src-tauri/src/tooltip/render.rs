use crate::models::{Benchmark, Framework, MetricDefinition, MetricIcon};
use crate::registry::MetricRegistry;
use serde::{Deserialize, Serialize};

pub const LEARN_MORE_LABEL: &str = "Learn more";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Significance,
    Calculation,
    Benchmarks,
    Benefits,
    History,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Significance => "What is it?",
            Self::Calculation => "How it's calculated",
            Self::Benchmarks => "Performance benchmarks",
            Self::Benefits => "How it helps your team",
            Self::History => "History & Origin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionBody {
    Text { text: String },
    Calculation { description: String, formula: String },
    Benchmarks { items: Vec<Benchmark> },
    Benefits { items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSection {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipHeader {
    pub icon: MetricIcon,
    pub title: String,
    pub subtitle: String,
    pub framework: Framework,
    pub framework_badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnMoreAction {
    pub label: String,
    pub metric_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipFooter {
    pub origin: String,
    pub attribution: String,
    pub learn_more: LearnMoreAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipContent {
    pub metric_id: String,
    pub header: TooltipHeader,
    pub sections: Vec<TooltipSection>,
    pub footer: TooltipFooter,
}

impl TooltipContent {
    pub fn section(&self, kind: SectionKind) -> Option<&TooltipSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn formula(&self) -> Option<&str> {
        match self.section(SectionKind::Calculation).map(|section| &section.body) {
            Some(SectionBody::Calculation { formula, .. }) => Some(formula.as_str()),
            _ => None,
        }
    }
}

pub fn render(metric: &MetricDefinition) -> TooltipContent {
    let section = |kind: SectionKind, body: SectionBody| TooltipSection {
        kind,
        title: kind.title().to_string(),
        body,
    };

    TooltipContent {
        metric_id: metric.id.clone(),
        header: TooltipHeader {
            icon: metric.icon,
            title: metric.title.clone(),
            subtitle: metric.subtitle.clone(),
            framework: metric.framework,
            framework_badge: metric.framework.badge().to_string(),
        },
        sections: vec![
            section(
                SectionKind::Significance,
                SectionBody::Text {
                    text: metric.significance.clone(),
                },
            ),
            section(
                SectionKind::Calculation,
                SectionBody::Calculation {
                    description: metric.calculation_description.clone(),
                    formula: metric.formula.clone(),
                },
            ),
            section(
                SectionKind::Benchmarks,
                SectionBody::Benchmarks {
                    items: metric.benchmarks.clone(),
                },
            ),
            section(
                SectionKind::Benefits,
                SectionBody::Benefits {
                    items: metric.benefits.clone(),
                },
            ),
            section(
                SectionKind::History,
                SectionBody::Text {
                    text: metric.history.clone(),
                },
            ),
        ],
        footer: TooltipFooter {
            origin: metric.origin.clone(),
            attribution: format!("Source: {}", metric.origin),
            learn_more: LearnMoreAction {
                label: LEARN_MORE_LABEL.to_string(),
                metric_id: metric.id.clone(),
            },
        },
    }
}

/// Renders by id, substituting the framework default for ids the registry does not know.
pub fn render_for(registry: &MetricRegistry, metric_id: &str, framework: Framework) -> TooltipContent {
    render(registry.lookup_or_default(metric_id, framework))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(content: &TooltipContent) -> String {
        serde_json::to_string(content).expect("serialize tooltip")
    }

    #[test]
    fn renders_every_registry_entry_verbatim() {
        let registry = MetricRegistry::builtin();
        for metric in registry.all() {
            let content = render(metric);
            let text = rendered_text(&content);
            assert_eq!(content.header.title, metric.title);
            for benchmark in &metric.benchmarks {
                assert!(text.contains(&serde_json::to_string(&benchmark.label).expect("label")));
            }
            match &content.section(SectionKind::Benefits).expect("benefits").body {
                SectionBody::Benefits { items } => assert_eq!(items, &metric.benefits),
                other => panic!("unexpected benefits body {other:?}"),
            }
        }
    }

    #[test]
    fn sections_follow_display_order() {
        let content = render(MetricRegistry::builtin().lookup("mttr").expect("mttr"));
        let kinds = content.sections.iter().map(|section| section.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Significance,
                SectionKind::Calculation,
                SectionKind::Benchmarks,
                SectionKind::Benefits,
                SectionKind::History
            ]
        );
        assert_eq!(content.sections[1].title, "How it's calculated");
    }

    #[test]
    fn lead_time_formula_and_footer() {
        let content = render_for(MetricRegistry::builtin(), "lead-time", Framework::Dora);
        assert_eq!(content.formula(), Some("LT = Deploy Time - Commit Time"));
        assert_eq!(content.header.framework_badge, "DORA");
        assert_eq!(content.footer.attribution, "Source: DORA Research, 2014");
        assert_eq!(content.footer.learn_more.metric_id, "lead-time");
    }

    #[test]
    fn benchmarks_keep_registry_order() {
        let metric = MetricRegistry::builtin().lookup("satisfaction").expect("satisfaction");
        let content = render(metric);
        match &content.section(SectionKind::Benchmarks).expect("benchmarks").body {
            SectionBody::Benchmarks { items } => {
                let labels = items.iter().map(|item| item.label.as_str()).collect::<Vec<_>>();
                assert_eq!(labels, vec!["Thriving", "Engaged", "Neutral", "At Risk"]);
            }
            other => panic!("unexpected benchmarks body {other:?}"),
        }
    }

    #[test]
    fn unknown_metric_renders_framework_default() {
        let content = render_for(MetricRegistry::builtin(), "no-such-metric", Framework::Space);
        assert_eq!(content.metric_id, "satisfaction");
        assert_eq!(content.header.title, "Satisfaction & Well-Being");
    }

    #[test]
    fn rendering_is_deterministic() {
        let metric = MetricRegistry::builtin().lookup("efficiency").expect("efficiency");
        assert_eq!(render(metric), render(metric));
    }
}
