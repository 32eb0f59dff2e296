use crate::errors::{AppError, AppResult};
use crate::filters::{DashboardFilters, FilterKey, FilterUpdate};
use crate::models::{CloseReason, Framework, InfoActionPayload, InfoTrigger, LearnMoreResponse, TriggerDescriptor};
use crate::pages::{ChartHost, PageId, PageRouter, PageSwitch};
use crate::registry::MetricRegistry;
use crate::resolver;
use crate::settings::AppSettings;
use crate::tooltip::{self, TooltipContent, TooltipState, TooltipUpdate, Transition};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Info triggers resolved when a page's content mounted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountedPage {
    pub page: Option<PageId>,
    pub triggers: Vec<InfoTrigger>,
}

impl MountedPage {
    fn trigger(&self, trigger_id: &str) -> Option<&InfoTrigger> {
        self.triggers.iter().find(|trigger| trigger.trigger_id == trigger_id)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSessionState {
    pub tooltip: TooltipState,
    pub filters: DashboardFilters,
    pub current_page: PageId,
    pub mounted: MountedPage,
}

impl UiSessionState {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            tooltip: TooltipState::default(),
            filters: settings.default_filters.clone(),
            current_page: settings.default_page,
            mounted: MountedPage::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTransition {
    #[serde(flatten)]
    pub switch: PageSwitch,
    pub tooltip: TooltipUpdate,
}

/// Owns the UI session state; every webview event goes through here and runs under one lock.
#[derive(Clone)]
pub struct DashboardController {
    registry: &'static MetricRegistry,
    router: PageRouter,
    settings: Arc<RwLock<AppSettings>>,
    state: Arc<Mutex<UiSessionState>>,
}

impl DashboardController {
    pub fn new(registry: &'static MetricRegistry, settings: AppSettings) -> Self {
        let state = UiSessionState::new(&settings);
        Self {
            registry,
            router: PageRouter::new(),
            settings: Arc::new(RwLock::new(settings)),
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn registry(&self) -> &'static MetricRegistry {
        self.registry
    }

    pub async fn settings(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    pub async fn apply_settings(&self, settings: AppSettings) {
        let mut writer = self.settings.write().await;
        *writer = settings;
    }

    pub async fn snapshot(&self) -> UiSessionState {
        self.state.lock().await.clone()
    }

    pub fn resolve_trigger(&self, descriptor: TriggerDescriptor) -> InfoTrigger {
        let metric_id = resolver::resolve(&descriptor.label, descriptor.framework);
        InfoTrigger {
            trigger_id: descriptor.trigger_id,
            label: descriptor.label,
            framework: descriptor.framework,
            metric_id: metric_id.to_string(),
        }
    }

    pub fn render_tooltip(&self, metric_id: &str, framework: Framework) -> TooltipContent {
        tooltip::render_for(self.registry, metric_id, framework)
    }

    /// Builds the view-model of the page on screen. Remounting it only adds unseen triggers.
    pub async fn mount_page(&self, page: PageId, triggers: Vec<TriggerDescriptor>) -> AppResult<Vec<InfoTrigger>> {
        let mut state = self.state.lock().await;
        if page != state.current_page {
            return Err(AppError::Invalid(format!(
                "page {} is not the current page {}",
                page.as_str(),
                state.current_page.as_str()
            )));
        }
        if state.mounted.page != Some(page) {
            state.mounted = MountedPage {
                page: Some(page),
                triggers: Vec::new(),
            };
        }

        let mut seen = state
            .mounted
            .triggers
            .iter()
            .map(|trigger| trigger.trigger_id.clone())
            .collect::<HashSet<_>>();
        for descriptor in triggers {
            if !seen.insert(descriptor.trigger_id.clone()) {
                continue;
            }
            let trigger = self.resolve_trigger(descriptor);
            state.mounted.triggers.push(trigger);
        }

        tracing::debug!(page = page.as_str(), triggers = state.mounted.triggers.len(), "page triggers mounted");
        Ok(state.mounted.triggers.clone())
    }

    pub async fn info_action(&self, payload: InfoActionPayload) -> AppResult<TooltipUpdate> {
        let settings = self.settings().await;
        let mut state = self.state.lock().await;

        let Some(trigger) = state.mounted.trigger(&payload.trigger_id).cloned() else {
            return Err(AppError::NotFound(format!("No info trigger {}", payload.trigger_id)));
        };

        let replaced = match state.tooltip.info_action(&trigger.trigger_id) {
            Transition::Opened { .. } => None,
            Transition::Replaced { previous, .. } => Some(previous),
            closed => return Ok(TooltipUpdate::from_close(closed)),
        };

        let content = self.render_tooltip(&trigger.metric_id, trigger.framework);
        let placement = tooltip::place(
            payload.trigger_rect,
            settings.tooltip_size(payload.measured_height),
            payload.viewport,
            settings.placement_config(),
        );

        Ok(TooltipUpdate::Shown {
            trigger_id: trigger.trigger_id,
            replaced,
            content,
            placement,
        })
    }

    pub async fn close_tooltip(&self) -> TooltipUpdate {
        let mut state = self.state.lock().await;
        TooltipUpdate::from_close(state.tooltip.close(CloseReason::Explicit))
    }

    pub async fn outside_click(&self, inside_tooltip: bool) -> TooltipUpdate {
        let mut state = self.state.lock().await;
        TooltipUpdate::from_close(state.tooltip.outside_click(inside_tooltip))
    }

    pub async fn scroll(&self) -> TooltipUpdate {
        let mut state = self.state.lock().await;
        TooltipUpdate::from_close(state.tooltip.close(CloseReason::Scroll))
    }

    pub async fn switch_page(
        &self,
        page: PageId,
        available_canvases: &BTreeSet<String>,
        host: &mut (dyn ChartHost + Send),
    ) -> AppResult<PageTransition> {
        let mut state = self.state.lock().await;
        let switch = self.router.switch(page, available_canvases, host)?;

        let tooltip = TooltipUpdate::from_close(state.tooltip.close(CloseReason::PageSwitch));
        state.current_page = page;
        state.mounted = MountedPage::default();

        tracing::info!(page = page.as_str(), charts = switch.charts.len(), "switched page");
        Ok(PageTransition { switch, tooltip })
    }

    pub async fn set_filter(&self, key: FilterKey, value: String) -> AppResult<FilterUpdate> {
        let mut state = self.state.lock().await;
        state.filters.set(key, value)?;
        let summary = state.filters.summary();
        tracing::info!(filter = key.as_str(), summary = %summary, "applying filters");
        Ok(FilterUpdate {
            filters: state.filters.clone(),
            summary,
        })
    }

    pub async fn filters(&self) -> DashboardFilters {
        self.state.lock().await.filters.clone()
    }

    pub async fn learn_more(&self, metric_id: &str) -> AppResult<LearnMoreResponse> {
        let links = self.settings.read().await.reference_links()?;
        Ok(LearnMoreResponse {
            metric_id: metric_id.to_string(),
            url: links.reference_url(metric_id).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rect, Size};
    use crate::pages::tests::RecordingHost;

    fn controller() -> DashboardController {
        DashboardController::new(MetricRegistry::builtin(), AppSettings::default())
    }

    fn descriptor(trigger_id: &str, label: &str, framework: Framework) -> TriggerDescriptor {
        TriggerDescriptor {
            trigger_id: trigger_id.to_string(),
            label: label.to_string(),
            framework,
        }
    }

    fn click(trigger_id: &str) -> InfoActionPayload {
        InfoActionPayload {
            trigger_id: trigger_id.to_string(),
            trigger_rect: Rect::new(100.0, 100.0, 24.0, 24.0),
            viewport: Size::new(1440.0, 900.0),
            measured_height: None,
        }
    }

    #[tokio::test]
    async fn mount_resolves_each_trigger_once() {
        let controller = controller();
        let mounted = controller
            .mount_page(
                PageId::Cockpit,
                vec![
                    descriptor("lt", "Lead Time for Changes", Framework::Dora),
                    descriptor("lt", "Throughput", Framework::Dora),
                    descriptor("custom", "Unknown Custom Metric", Framework::Space),
                ],
            )
            .await
            .expect("mount");
        assert_eq!(mounted.len(), 2);
        assert_eq!(mounted[0].metric_id, "lead-time");
        assert_eq!(mounted[1].metric_id, "satisfaction");

        let remounted = controller
            .mount_page(PageId::Cockpit, vec![descriptor("mttr", "MTTR", Framework::Dora)])
            .await
            .expect("remount");
        assert_eq!(remounted.len(), 3);
    }

    #[tokio::test]
    async fn mount_from_page_no_longer_shown_is_rejected() {
        let controller = controller();
        controller
            .mount_page(PageId::Cockpit, vec![descriptor("a", "Activity", Framework::Space)])
            .await
            .expect("mount");

        let stale = controller
            .mount_page(PageId::TeamPulse, vec![descriptor("x", "MTTR", Framework::Dora)])
            .await;
        assert!(matches!(stale, Err(AppError::Invalid(_))));

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.mounted.page, Some(PageId::Cockpit));
        assert_eq!(snapshot.mounted.triggers.len(), 1);
        assert!(matches!(controller.info_action(click("x")).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn opening_second_trigger_replaces_first() {
        let controller = controller();
        controller
            .mount_page(
                PageId::Cockpit,
                vec![
                    descriptor("a", "Deployment Frequency", Framework::Dora),
                    descriptor("b", "Change Failure Rate", Framework::Dora),
                ],
            )
            .await
            .expect("mount");

        let first = controller.info_action(click("a")).await.expect("open a");
        assert!(matches!(first, TooltipUpdate::Shown { ref trigger_id, replaced: None, .. } if trigger_id == "a"));

        let second = controller.info_action(click("b")).await.expect("open b");
        match second {
            TooltipUpdate::Shown {
                trigger_id,
                replaced,
                content,
                ..
            } => {
                assert_eq!(trigger_id, "b");
                assert_eq!(replaced.as_deref(), Some("a"));
                assert_eq!(content.metric_id, "change-failure-rate");
            }
            other => panic!("expected tooltip for b, got {other:?}"),
        }
        assert_eq!(controller.snapshot().await.tooltip.active_trigger(), Some("b"));
    }

    #[tokio::test]
    async fn repeated_action_toggles_off() {
        let controller = controller();
        controller
            .mount_page(PageId::Cockpit, vec![descriptor("a", "MTTR", Framework::Dora)])
            .await
            .expect("mount");
        controller.info_action(click("a")).await.expect("open");
        let update = controller.info_action(click("a")).await.expect("toggle");
        assert_eq!(
            update,
            TooltipUpdate::Hidden {
                trigger_id: "a".to_string(),
                reason: CloseReason::Toggle
            }
        );
        assert!(!controller.snapshot().await.tooltip.is_visible());
    }

    #[tokio::test]
    async fn scroll_outside_click_and_close_hide_tooltip() {
        let controller = controller();
        controller
            .mount_page(PageId::Cockpit, vec![descriptor("a", "Activity", Framework::Space)])
            .await
            .expect("mount");

        controller.info_action(click("a")).await.expect("open");
        assert_eq!(controller.outside_click(true).await, TooltipUpdate::Unchanged);
        assert!(matches!(controller.scroll().await, TooltipUpdate::Hidden { reason: CloseReason::Scroll, .. }));

        controller.info_action(click("a")).await.expect("reopen");
        assert!(matches!(
            controller.outside_click(false).await,
            TooltipUpdate::Hidden {
                reason: CloseReason::OutsideClick,
                ..
            }
        ));
        assert_eq!(controller.close_tooltip().await, TooltipUpdate::Unchanged);
    }

    #[tokio::test]
    async fn unknown_trigger_is_not_found() {
        let controller = controller();
        let error = controller.info_action(click("ghost")).await.expect_err("unknown");
        assert!(error.to_string().starts_with("NOT_FOUND"));
    }

    #[tokio::test]
    async fn placement_uses_configured_tooltip_size() {
        let controller = controller();
        controller
            .mount_page(PageId::Cockpit, vec![descriptor("a", "MTTR", Framework::Dora)])
            .await
            .expect("mount");
        let payload = InfoActionPayload {
            trigger_id: "a".to_string(),
            trigger_rect: Rect::new(900.0, 100.0, 24.0, 24.0),
            viewport: Size::new(1000.0, 900.0),
            measured_height: Some(300.0),
        };
        match controller.info_action(payload).await.expect("open") {
            TooltipUpdate::Shown { placement, .. } => {
                assert_eq!(placement.position.left, 600.0);
                assert!(placement.flipped_horizontal);
            }
            other => panic!("expected tooltip, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn page_switch_closes_tooltip_and_clears_triggers() {
        let controller = controller();
        controller
            .mount_page(PageId::Cockpit, vec![descriptor("a", "MTTR", Framework::Dora)])
            .await
            .expect("mount");
        controller.info_action(click("a")).await.expect("open");

        let mut host = RecordingHost::default();
        let canvases = ["prSizeChart".to_string()].into_iter().collect();
        let transition = controller
            .switch_page(PageId::PullRequests, &canvases, &mut host)
            .await
            .expect("switch");
        assert!(matches!(
            transition.tooltip,
            TooltipUpdate::Hidden {
                reason: CloseReason::PageSwitch,
                ..
            }
        ));
        assert_eq!(transition.switch.skipped_canvases, vec!["prTrendChart"]);

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.current_page, PageId::PullRequests);
        assert!(snapshot.mounted.triggers.is_empty());
        assert!(controller.info_action(click("a")).await.is_err());
    }

    #[tokio::test]
    async fn filters_start_from_settings_and_summarize() {
        let mut settings = AppSettings::default();
        settings.default_filters.date = "90".to_string();
        let controller = DashboardController::new(MetricRegistry::builtin(), settings);

        let update = controller
            .set_filter(FilterKey::Department, "engineering".to_string())
            .await
            .expect("set filter");
        assert_eq!(
            update.summary,
            "Filters applied: department=engineering, team=all, individual=all, date=90"
        );
        assert_eq!(controller.filters().await.department, "engineering");
    }

    #[tokio::test]
    async fn learn_more_honors_settings_overrides() {
        let controller = controller();
        assert_eq!(
            controller.learn_more("lead-time").await.expect("url").url,
            "https://dora.dev/guides/dora-metrics-four-keys/"
        );

        let mut settings = AppSettings::default();
        settings
            .learn_more_overrides
            .insert("code-churn".to_string(), "https://example.com/churn".to_string());
        controller.apply_settings(settings).await;
        assert_eq!(
            controller.learn_more("code-churn").await.expect("url").url,
            "https://example.com/churn"
        );
    }
}
