use crate::config::AppConfig;
use crate::render::{Page, PageRenderer, RenderError};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info, warn};
use unbored_core::{Activity, ActivityClient, NO_MATCH_MESSAGE};

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Arc<ActivityClient>,
    pub renderer: Arc<PageRenderer>,
}

/// Query model for the filtered lookup. Values are forwarded to the remote
/// API verbatim; absent parameters become empty strings.
#[derive(Debug, Deserialize)]
pub struct FindParams {
    #[serde(rename = "type", default)]
    activity_type: String,
    #[serde(default)]
    participants: String,
}

/// Error type for HTTP handlers
#[derive(Debug)]
pub enum PageError {
    RenderFailed(RenderError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::RenderFailed(e) => {
                error!(error = %e, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {}", e),
                )
                    .into_response()
            }
        }
    }
}

/// Build the application router: the two page routes, with static assets
/// served from the public directory for everything else.
pub fn router(state: AppState) -> Router {
    let no_store = state.config.mode.is_development();
    let public_dir = state.config.public_dir.clone();

    let app = Router::new()
        .route("/", get(random_activity))
        .route("/find-activity", get(find_activity))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state);

    if no_store {
        // Keep browsers from caching pages and assets between edits.
        app.layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
    } else {
        app
    }
}

/// Start the HTTP server
pub async fn run_server(
    config: AppConfig,
    client: ActivityClient,
    renderer: PageRenderer,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    info!("Starting HTTP server on {}", addr);

    // Create shared state
    let state = AppState {
        config: Arc::new(config),
        client: Arc::new(client),
        renderer: Arc::new(renderer),
    };

    let app = router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start HTTP server: {}", e))
}

/// Handler for the front page: one random suggestion.
async fn random_activity(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let page = match state.client.random().await {
        Ok(activity) => Page::Activity(activity),
        Err(e) => {
            let message = e.user_message();
            warn!(error = %message, "Failed to fetch a random activity");
            Page::Error(message)
        }
    };

    render_page(&state, &page)
}

/// Handler for the filtered lookup: every match is fetched, one is
/// picked at random.
async fn find_activity(
    State(state): State<AppState>,
    Query(params): Query<FindParams>,
) -> Result<Html<String>, PageError> {
    let page = match state
        .client
        .filter(&params.activity_type, &params.participants)
        .await
    {
        Ok(activities) => match pick_activity(&activities) {
            Some(activity) => {
                info!(activity = %activity, "Selected activity");
                Page::Activity(activity.clone())
            }
            None => {
                let message = NO_MATCH_MESSAGE.to_string();
                warn!(error = %message, "No activities matched the filter");
                Page::Error(message)
            }
        },
        Err(e) => {
            let message = e.user_message();
            warn!(error = %message, "Failed to fetch filtered activities");
            Page::Error(message)
        }
    };

    render_page(&state, &page)
}

/// Pick one element uniformly at random; `None` when the list is empty.
fn pick_activity(activities: &[Activity]) -> Option<&Activity> {
    if activities.is_empty() {
        return None;
    }

    let index = rand::thread_rng().gen_range(0..activities.len());
    activities.get(index)
}

fn render_page(state: &AppState, page: &Page) -> Result<Html<String>, PageError> {
    let html = state
        .renderer
        .render(page)
        .map_err(PageError::RenderFailed)?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_picking_from_an_empty_list_yields_nothing() {
        assert!(pick_activity(&[]).is_none());
    }

    #[test]
    fn test_picking_from_a_single_element_list_is_deterministic() {
        let activities = vec![Activity(json!({"key": "only"}))];
        let picked = pick_activity(&activities).unwrap();
        assert_eq!(picked.field("key"), Some(&json!("only")));
    }

    #[test]
    fn test_picking_eventually_covers_the_whole_list() {
        let activities: Vec<Activity> = (0..3)
            .map(|i| Activity(json!({ "key": i.to_string() })))
            .collect();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let picked = pick_activity(&activities).expect("non-empty list yields a pick");
            seen.insert(picked.field("key").unwrap().as_str().unwrap().to_string());
        }

        assert_eq!(seen.len(), 3);
    }
}
