//! Word game queries: random draws per scope and translation lookup.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use palabra_core::{Scope, WARFRAME_MODS_CATEGORY, WordFilter};
use palabra_store::Lexicon;

use crate::error;

// ─── Query parameters ────────────────────────────────────────

#[derive(Deserialize)]
struct FilterParams {
    categoria: Option<String>,
    dificultad: Option<String>,
}

#[derive(Deserialize)]
struct WarframeParams {
    dificultad: Option<String>,
}

#[derive(Deserialize)]
struct RandomParams {
    categoria: Option<String>,
    dificultad: Option<String>,
    tipo: Option<String>,
}

#[derive(Deserialize)]
struct TipoParams {
    tipo: Option<String>,
}

// ─── Routes ──────────────────────────────────────────────────

pub fn routes() -> Router<Arc<Lexicon>> {
    Router::new()
        .route("/palabra-normal", get(palabra_normal))
        .route("/palabra-warframe", get(palabra_warframe))
        .route("/palabra-mixta", get(palabra_mixta))
        .route("/palabra-random", get(palabra_random))
        .route("/traducir/{palabra}", get(traducir))
}

// ─── Handlers ────────────────────────────────────────────────

fn draw(lexicon: &Lexicon, scope: Scope, filter: &WordFilter) -> Response {
    match lexicon.random_word(scope, filter) {
        Some(record) => Json(record).into_response(),
        None => error::not_found("No se encontraron palabras"),
    }
}

async fn palabra_normal(
    State(lexicon): State<Arc<Lexicon>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let filter = WordFilter::from_params(params.categoria, params.dificultad);
    draw(&lexicon, Scope::Normal, &filter)
}

async fn palabra_warframe(
    State(lexicon): State<Arc<Lexicon>>,
    Query(params): Query<WarframeParams>,
) -> Response {
    // Category is pinned to the mod tag here, not caller-chosen
    let filter = WordFilter::from_params(
        Some(WARFRAME_MODS_CATEGORY.to_string()),
        params.dificultad,
    );
    draw(&lexicon, Scope::Warframe, &filter)
}

async fn palabra_mixta(
    State(lexicon): State<Arc<Lexicon>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let filter = WordFilter::from_params(params.categoria, params.dificultad);
    draw(&lexicon, Scope::Mixed, &filter)
}

async fn palabra_random(
    State(lexicon): State<Arc<Lexicon>>,
    Query(params): Query<RandomParams>,
) -> Response {
    let scope = Scope::from_param(params.tipo.as_deref());
    let filter = WordFilter::from_params(params.categoria, params.dificultad);
    draw(&lexicon, scope, &filter)
}

async fn traducir(
    State(lexicon): State<Arc<Lexicon>>,
    Path(palabra): Path<String>,
    Query(params): Query<TipoParams>,
) -> Response {
    let scope = Scope::from_param(params.tipo.as_deref());
    match lexicon.find_translation(&palabra, scope) {
        Some(record) => Json(record).into_response(),
        None => error::not_found("Traducción no encontrada"),
    }
}
