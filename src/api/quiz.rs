//! 闯关接口
//!
//! POST /quiz 接受 {email, secret, url}，口令校验通过后把整条链
//! 派发成后台任务立即返回，不在请求周期内等待链条跑完

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::orchestrator::ChainDriver;
use crate::workflow::QuizTask;

/// 接口层共享状态
pub struct AppState {
    pub config: Config,
}

/// 闯关请求体
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub email: String,
    pub secret: String,
    pub url: String,
}

/// 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/quiz", post(handle_quiz))
        .with_state(state)
}

/// 启动对外 HTTP 服务
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let state = Arc::new(AppState { config });
    let app = router(state);

    info!("🌐 服务已启动: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 接受闯关任务
async fn handle_quiz(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuizRequest>,
) -> (StatusCode, Json<Value>) {
    if request.secret != state.config.shared_secret {
        warn!("⚠️ 口令校验失败，拒绝请求 ({})", request.email);
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "Secret Key Invalid" })),
        );
    }

    info!("🚀 接受闯关任务: {} ({})", request.url, request.email);

    // 派发后台任务，请求立即返回
    let config = state.config.clone();
    tokio::spawn(async move {
        let task = QuizTask::new(request.email, request.secret, request.url);
        match ChainDriver::new(&config) {
            Ok(driver) => {
                let outcome = driver.run(task).await;
                info!("🏁 闯关结束: {}", outcome.summary());
            }
            Err(e) => error!("❌ 初始化闯关流程失败: {}", e),
        }
    });

    (
        StatusCode::OK,
        Json(json!({ "status": "OK", "message": "Quiz task accepted" })),
    )
}
