//! Curation and inspection: insertion, stats, and the full dumps used by
//! game masters to audit the collections.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use palabra_core::{Scope, WordRecord};
use palabra_store::{InsertError, Lexicon};

use crate::error;

// ─── Request / Response types ────────────────────────────────

/// Submission body. The four leading fields are mandatory; the rest
/// default to empty, unlike stored records where everything past the
/// word and translation is tolerated missing.
#[derive(Deserialize)]
pub struct NewWord {
    palabra: String,
    traduccion: String,
    categoria: String,
    dificultad: String,
    #[serde(default)]
    alternativas: Vec<String>,
    #[serde(default)]
    pista: String,
    #[serde(default)]
    ejemplo: String,
}

impl From<NewWord> for WordRecord {
    fn from(new: NewWord) -> Self {
        WordRecord {
            word: new.palabra,
            translation: new.traduccion,
            category: new.categoria,
            difficulty: new.dificultad,
            alternatives: new.alternativas,
            hint: new.pista,
            example: new.ejemplo,
        }
    }
}

#[derive(Serialize)]
struct ScopeView {
    total: usize,
    palabras: Vec<WordRecord>,
}

#[derive(Serialize)]
struct AdminView {
    normales: ScopeView,
    warframe: ScopeView,
    mixtas: ScopeView,
}

#[derive(Serialize)]
struct CategoryDirectory {
    normales: Vec<String>,
    warframe: Vec<String>,
    todas: Vec<String>,
}

#[derive(Deserialize)]
struct TipoParams {
    tipo: Option<String>,
}

// ─── Routes ──────────────────────────────────────────────────

pub fn routes() -> Router<Arc<Lexicon>> {
    Router::new()
        .route("/agregar-palabra", post(agregar_palabra))
        .route("/estadisticas", get(estadisticas))
        .route("/admin/palabras", get(admin_palabras))
        .route("/test/categorias", get(test_categorias))
}

// ─── Handlers ────────────────────────────────────────────────

async fn agregar_palabra(
    State(lexicon): State<Arc<Lexicon>>,
    Json(new): Json<NewWord>,
) -> Response {
    match lexicon.insert(WordRecord::from(new)) {
        Ok(record) => Json(serde_json::json!({
            "mensaje": "Palabra agregada exitosamente",
            "palabra": record,
        }))
        .into_response(),
        Err(err) => {
            let code = match &err {
                InsertError::Duplicate { .. } => "duplicate_word",
                InsertError::Persistence { .. } => {
                    tracing::error!("word insertion failed: {}", err);
                    "persistence_failed"
                }
            };
            error::error_response(StatusCode::BAD_REQUEST, code, &err.to_string())
        }
    }
}

async fn estadisticas(
    State(lexicon): State<Arc<Lexicon>>,
    Query(params): Query<TipoParams>,
) -> Response {
    let scope = Scope::from_param(params.tipo.as_deref());
    Json(lexicon.stats(scope)).into_response()
}

async fn admin_palabras(State(lexicon): State<Arc<Lexicon>>) -> Json<AdminView> {
    let view = |scope: Scope| {
        let palabras = lexicon.records(scope);
        ScopeView {
            total: palabras.len(),
            palabras,
        }
    };
    Json(AdminView {
        normales: view(Scope::Normal),
        warframe: view(Scope::Warframe),
        mixtas: view(Scope::Mixed),
    })
}

async fn test_categorias(State(lexicon): State<Arc<Lexicon>>) -> Json<CategoryDirectory> {
    Json(CategoryDirectory {
        normales: lexicon.category_names(Scope::Normal),
        warframe: lexicon.category_names(Scope::Warframe),
        todas: lexicon.category_names(Scope::Mixed),
    })
}
