use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{Catalog, ChatRequest, ChatResponse, ClubSummary, ErrorResponse, HealthResponse};
use crate::services::{build_prompt, OllamaClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub explainer: Arc<OllamaClient>,
}

/// Configure chat-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/chat", web::post().to(chat));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Chat endpoint
///
/// POST /api/chat
///
/// Request body:
/// ```json
/// {
///   "text": "i like swimming and coding"
/// }
/// ```
///
/// Matches the text against the catalog, then asks the LLM backend to phrase
/// a short reply about the matched clubs. A query with no matches is a normal
/// response with an empty `clubs_used`, not an error.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for chat request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let matches = state.matcher.match_clubs(&req.text, &state.catalog);

    tracing::debug!("Matched {} clubs for query: {:?}", matches.len(), req.text);

    if matches.is_empty() {
        return HttpResponse::Ok().json(ChatResponse {
            reply: "I couldn't find any clubs that match your description. \
                    Try mentioning an interest, like swimming, coding, or dance."
                .to_string(),
            clubs_used: vec![],
        });
    }

    let prompt = build_prompt(&req.text, &matches);

    let reply = match state.explainer.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("LLM backend call failed: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "LLM backend unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    let clubs_used = matches
        .iter()
        .map(|scored| ClubSummary {
            name: scored.club.name.clone(),
            description: scored.club.description.clone(),
        })
        .collect();

    tracing::info!("Replying with {} clubs", matches.len());

    HttpResponse::Ok().json(ChatResponse { reply, clubs_used })
}
