use crate::core::handler::BalanceHandler;
use crate::core::{BalanceSource, ConfigProvider};
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

pub struct AppState<S: BalanceSource, C: ConfigProvider> {
    pub(crate) handler: Arc<BalanceHandler<S, C>>,
    pub(crate) app_name: String,
    pub(crate) app_version: String,
}

impl<S: BalanceSource, C: ConfigProvider> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            app_name: self.app_name.clone(),
            app_version: self.app_version.clone(),
        }
    }
}

/// POST /api/balance
pub async fn get_balance<S, C>(State(app): State<AppState<S, C>>, body: Bytes) -> impl IntoResponse
where
    S: BalanceSource + 'static,
    C: ConfigProvider + 'static,
{
    let result = app.handler.handle_bytes(&body).await;
    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(result.body))
}

/// GET /health
pub async fn get_health<S, C>(State(app): State<AppState<S, C>>) -> impl IntoResponse
where
    S: BalanceSource + 'static,
    C: ConfigProvider + 'static,
{
    Json(serde_json::json!({
        "status": "ok",
        "name": app.app_name,
        "version": app.app_version,
    }))
}
