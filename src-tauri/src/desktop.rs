use crate::errors::{AppError, AppResult};
use crate::filters::{DashboardFilters, FilterKey, FilterUpdate};
use crate::heatmap::{generate_heatmap, CommitHeatmap};
use crate::logging::init_tracing;
use crate::models::{
    Framework, InfoActionPayload, InfoTrigger, LearnMoreResponse, MetricDefinition, ToastMessage, TriggerDescriptor,
};
use crate::pages::{ChartHost, ChartSpec, PageId};
use crate::registry::MetricRegistry;
use crate::resolver;
use crate::session::{DashboardController, PageTransition, UiSessionState};
use crate::settings::{AppSettings, SettingsStore};
use crate::thresholds::{DoraThresholds, DORA_RESET_MESSAGE};
use crate::tooltip::{TooltipContent, TooltipUpdate};
use std::collections::BTreeSet;
use std::sync::Arc;
use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_shell::ShellExt;

#[derive(Clone)]
struct AppState {
    controller: DashboardController,
    settings: Arc<SettingsStore>,
}

/// Forwards chart lifecycle requests to the webview's charting library.
struct WebviewChartHost {
    app: AppHandle,
}

impl ChartHost for WebviewChartHost {
    fn destroy_all(&mut self) -> AppResult<()> {
        self.app
            .emit("charts:destroy-all", ())
            .map_err(|error| AppError::Internal(error.to_string()))
    }

    fn create(&mut self, chart: &ChartSpec) -> AppResult<()> {
        self.app
            .emit("charts:create", chart)
            .map_err(|error| AppError::Internal(error.to_string()))
    }
}

fn show_toast(app: &AppHandle, message: impl Into<String>) {
    if let Err(error) = app.emit("toast", ToastMessage::new(message)) {
        tracing::warn!(error = %error, "failed to emit toast");
    }
}

#[tauri::command]
fn list_metrics(state: tauri::State<'_, AppState>) -> Result<Vec<MetricDefinition>, String> {
    Ok(state.controller.registry().all().to_vec())
}

#[tauri::command]
fn get_metric(
    state: tauri::State<'_, AppState>,
    metric_id: String,
    framework: Framework,
) -> Result<MetricDefinition, String> {
    Ok(state
        .controller
        .registry()
        .lookup_or_default(&metric_id, framework)
        .clone())
}

#[tauri::command]
fn resolve_metric(label: String, framework: Framework) -> Result<String, String> {
    Ok(resolver::resolve(&label, framework).to_string())
}

#[tauri::command]
fn render_tooltip(
    state: tauri::State<'_, AppState>,
    metric_id: String,
    framework: Framework,
) -> Result<TooltipContent, String> {
    Ok(state.controller.render_tooltip(&metric_id, framework))
}

#[tauri::command]
async fn mount_page(
    state: tauri::State<'_, AppState>,
    page: String,
    triggers: Vec<TriggerDescriptor>,
) -> Result<Vec<InfoTrigger>, String> {
    let page = page.parse::<PageId>().map_err(to_client_error)?;
    state.controller.mount_page(page, triggers).await.map_err(to_client_error)
}

#[tauri::command]
async fn info_action(
    state: tauri::State<'_, AppState>,
    payload: InfoActionPayload,
) -> Result<TooltipUpdate, String> {
    state.controller.info_action(payload).await.map_err(to_client_error)
}

#[tauri::command]
async fn close_tooltip(state: tauri::State<'_, AppState>) -> Result<TooltipUpdate, String> {
    Ok(state.controller.close_tooltip().await)
}

#[tauri::command]
async fn outside_click(state: tauri::State<'_, AppState>, inside_tooltip: bool) -> Result<TooltipUpdate, String> {
    Ok(state.controller.outside_click(inside_tooltip).await)
}

#[tauri::command]
async fn scroll_event(state: tauri::State<'_, AppState>) -> Result<TooltipUpdate, String> {
    Ok(state.controller.scroll().await)
}

#[tauri::command]
async fn switch_page(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
    page: String,
    canvases: Vec<String>,
) -> Result<PageTransition, String> {
    let page = page.parse::<PageId>().map_err(to_client_error)?;
    let canvases = canvases.into_iter().collect::<BTreeSet<_>>();
    let mut host = WebviewChartHost { app };
    state
        .controller
        .switch_page(page, &canvases, &mut host)
        .await
        .map_err(to_client_error)
}

#[tauri::command]
async fn set_filter(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
    key: String,
    value: String,
) -> Result<FilterUpdate, String> {
    let key = key.parse::<FilterKey>().map_err(to_client_error)?;
    let update = state.controller.set_filter(key, value).await.map_err(to_client_error)?;
    show_toast(&app, update.summary.clone());
    Ok(update)
}

#[tauri::command]
async fn get_filters(state: tauri::State<'_, AppState>) -> Result<DashboardFilters, String> {
    Ok(state.controller.filters().await)
}

#[tauri::command]
async fn learn_more(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
    metric_id: String,
) -> Result<LearnMoreResponse, String> {
    let response = state.controller.learn_more(&metric_id).await.map_err(to_client_error)?;
    #[allow(deprecated)]
    app.shell()
        .open(response.url.clone(), None)
        .map_err(to_client_error)?;
    tracing::info!(metric_id = %metric_id, url = %response.url, "opened metric reference");
    Ok(response)
}

#[tauri::command]
fn commit_heatmap() -> Result<CommitHeatmap, String> {
    Ok(generate_heatmap(&mut rand::rng()))
}

#[tauri::command]
fn reset_dora_thresholds(app: AppHandle) -> Result<DoraThresholds, String> {
    show_toast(&app, DORA_RESET_MESSAGE);
    Ok(DoraThresholds::research_defaults())
}

#[tauri::command]
async fn get_settings(state: tauri::State<'_, AppState>) -> Result<AppSettings, String> {
    Ok(state.controller.settings().await)
}

#[tauri::command]
async fn update_settings(
    state: tauri::State<'_, AppState>,
    settings: serde_json::Value,
) -> Result<AppSettings, String> {
    let updated = state.settings.update(settings).map_err(to_client_error)?;
    state.controller.apply_settings(updated.clone()).await;
    Ok(updated)
}

#[tauri::command]
async fn session_snapshot(state: tauri::State<'_, AppState>) -> Result<UiSessionState, String> {
    Ok(state.controller.snapshot().await)
}

pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir().map_err(|error| error.to_string())?;
            std::fs::create_dir_all(&app_data_dir).map_err(|error| error.to_string())?;

            let store = SettingsStore::new(&app_data_dir);
            let settings = store.load().map_err(|error| error.to_string())?;
            init_tracing(&app_data_dir.join("logs"), &settings.log_filter)?;

            let registry = MetricRegistry::builtin();
            tracing::info!(
                metrics = registry.len(),
                default_page = settings.default_page.as_str(),
                "engineering metrics dashboard initialized"
            );

            app.manage(AppState {
                controller: DashboardController::new(registry, settings),
                settings: Arc::new(store),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            list_metrics,
            get_metric,
            resolve_metric,
            render_tooltip,
            mount_page,
            info_action,
            close_tooltip,
            outside_click,
            scroll_event,
            switch_page,
            set_filter,
            get_filters,
            learn_more,
            commit_heatmap,
            reset_dora_thresholds,
            get_settings,
            update_settings,
            session_snapshot
        ])
        .run(tauri::generate_context!())
        .expect("failed to run tauri app");
}

fn to_client_error(error: impl std::fmt::Display) -> String {
    error.to_string()
}
