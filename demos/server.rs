//! Simple REST API server example for the revenue ledger.
//!
//! Run with: `cargo run --example server`
//!
//! ## Endpoints
//!
//! - `POST /entries` - Record a revenue entry (owner only)
//! - `GET /entries/{id}` - Get a ledger entry by id
//! - `GET /films` - List per-film revenue totals
//! - `GET /films/{id}/revenue` - Get the total revenue for a film
//!
//! The caller identity travels in the request body; the server is configured
//! with a single owner principal at startup and rejects everyone else with
//! HTTP 403. Unknown channel codes are rejected with HTTP 400.
//!
//! ## Example Usage
//!
//! ```bash
//! # Record opening weekend revenue (accepted: caller is the owner)
//! curl -X POST http://localhost:3000/entries \
//!   -H "Content-Type: application/json" \
//!   -d '{"caller": "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", "film_id": 1, "territory_id": 2, "channel": 1, "amount": 1000, "description": "Opening weekend box office"}'
//!
//! # Fetch the entry
//! curl http://localhost:3000/entries/1
//!
//! # Fetch the film total
//! curl http://localhost:3000/films/1/revenue
//! ```

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use revenue_ledger_rs::{
    AtomicClock, Channel, EntryId, FilmId, Principal, RevenueError, RevenueEvent, RevenueTracker,
    TerritoryId,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

// === Request/Response DTOs ===

/// Request body for recording a revenue entry.
///
/// `channel` is the numeric wire code (1..=6):
/// ```json
/// {"caller": "...", "film_id": 1, "territory_id": 2, "channel": 1, "amount": 1000, "description": "..."}
/// ```
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub caller: String,
    pub film_id: u64,
    pub territory_id: u32,
    pub channel: u32,
    pub amount: u64,
    #[serde(default)]
    pub description: String,
}

impl EntryRequest {
    /// Converts the request DTO into the internal event, validating the
    /// channel code at the boundary.
    fn into_event(self) -> Result<(Principal, RevenueEvent), RevenueError> {
        let channel = Channel::from_code(self.channel)?;
        let caller = Principal::new(self.caller);
        let event = RevenueEvent {
            film_id: FilmId(self.film_id),
            territory_id: TerritoryId(self.territory_id),
            channel,
            amount: self.amount,
            description: self.description,
        };
        Ok((caller, event))
    }
}

/// Response body for a successfully recorded entry.
#[derive(Debug, Serialize)]
pub struct EntryCreated {
    pub entry_id: u64,
}

/// Response body for a ledger entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry_id: u64,
    pub film_id: u64,
    pub territory_id: u32,
    pub channel: u32,
    pub amount: u64,
    pub timestamp: u64,
    pub description: String,
}

/// Response body for a film revenue total.
#[derive(Debug, Serialize)]
pub struct FilmRevenueResponse {
    pub film_id: u64,
    pub total_revenue: u64,
}

/// Response body for errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// === Application State ===

/// Shared application state containing the tracker and its clock.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<RevenueTracker>,
    pub clock: Arc<AtomicClock>,
}

// === Error Handling ===

/// Wrapper for converting `RevenueError` into HTTP responses.
pub struct AppError(RevenueError);

impl From<RevenueError> for AppError {
    fn from(err: RevenueError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            RevenueError::Unauthorized => (StatusCode::FORBIDDEN, "UNAUTHORIZED"),
            RevenueError::InvalidChannel(_) => (StatusCode::BAD_REQUEST, "INVALID_CHANNEL"),
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

// === Handlers ===

/// POST /entries - Record a new revenue entry.
async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<EntryRequest>,
) -> Result<(StatusCode, Json<EntryCreated>), AppError> {
    let (caller, event) = request.into_event()?;

    // One block per accepted write keeps the demo clock moving.
    state.clock.tick();
    let entry_id = state.tracker.record(&caller, event)?;

    Ok((StatusCode::CREATED, Json(EntryCreated { entry_id: entry_id.0 })))
}

/// GET /entries/{id} - Get a ledger entry by id.
async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<EntryResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .tracker
        .entry(EntryId(id))
        .map(|entry| {
            Json(EntryResponse {
                entry_id: entry.entry_id.0,
                film_id: entry.film_id.0,
                territory_id: entry.territory_id.0,
                channel: entry.channel.code(),
                amount: entry.amount,
                timestamp: entry.timestamp.0,
                description: entry.description.clone(),
            })
        })
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Entry not found".to_string(),
                    code: "ENTRY_NOT_FOUND".to_string(),
                }),
            )
        })
}

/// GET /films/{id}/revenue - Get the total revenue for a film.
///
/// Never fails; a film with no recorded entries reports a total of 0.
async fn get_film_revenue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<FilmRevenueResponse> {
    Json(FilmRevenueResponse {
        film_id: id,
        total_revenue: state.tracker.film_total(FilmId(id)),
    })
}

/// GET /films - List per-film revenue totals.
async fn list_films(State(state): State<AppState>) -> Json<Vec<FilmRevenueResponse>> {
    let films: Vec<FilmRevenueResponse> = state
        .tracker
        .film_totals()
        .into_iter()
        .map(|film| FilmRevenueResponse {
            film_id: film.film_id.0,
            total_revenue: film.total_revenue,
        })
        .collect();

    Json(films)
}

// === Router ===

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries", post(create_entry))
        .route("/entries/{id}", get(get_entry))
        .route("/films", get(list_films))
        .route("/films/{id}/revenue", get(get_film_revenue))
        .with_state(state)
}

// === Main ===

#[tokio::main]
async fn main() {
    let owner = Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    let clock = Arc::new(AtomicClock::new(100));
    let state = AppState {
        tracker: Arc::new(RevenueTracker::new(owner.clone(), clock.clone())),
        clock,
    };

    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    println!("Revenue ledger API server running on http://127.0.0.1:3000");
    println!("Owner principal: {}", owner);
    println!();
    println!("Endpoints:");
    println!("  POST /entries             - Record a revenue entry (owner only)");
    println!("  GET  /entries/{{id}}        - Get a ledger entry by id");
    println!("  GET  /films               - List per-film revenue totals");
    println!("  GET  /films/{{id}}/revenue  - Get total revenue for a film");

    axum::serve(listener, app).await.unwrap();
}
