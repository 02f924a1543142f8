use crate::view::{describe_item, ItemView, RecommendationResponse, RecommendationView};
use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult};
use rankx_catalog::CatalogStore;
use rankx_core::{Error, Preferences, MAX_IMPORTANCE};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Deserialize)]
struct RecommendRequest {
    /// Result count, defaults to the engine's configured `default_k`
    limit: Option<usize>,
    /// Importance scores keyed by preference name
    #[serde(flatten)]
    preferences: HashMap<String, f64>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<CatalogStore>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .configure(Self::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Route table, shared by the server and the handler tests
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error))
            .route("/", web::get().to(health))
            .route("/items", web::get().to(list_items))
            .route("/recommend", web::post().to(recommend))
            .route("/catalog/reload", web::post().to(reload_catalog));
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::InvalidRequest(_) | Error::DimensionMismatch { .. } => {
            HttpResponse::BadRequest().json(body)
        }
        Error::EmptyCatalog
        | Error::InvalidCatalog(_)
        | Error::Io(_)
        | Error::Serialization(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Malformed request bodies get the same `{error}` shape as engine errors
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected request body: {}", err);
    let response = HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "RankX Catalog Recommender",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn list_items(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    let engine = store.snapshot();
    let catalog = engine.catalog();
    let items: Vec<ItemView> = catalog
        .candidates()
        .iter()
        .map(|c| ItemView::from_candidate(catalog.schema(), c))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "count": items.len(),
        "items": items,
    })))
}

async fn recommend(
    store: web::Data<Arc<CatalogStore>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let engine = store.snapshot();
    let schema = engine.catalog().schema();

    let preferences = match Preferences::from_keyed(
        schema,
        req.preferences.iter().map(|(k, v)| (k.as_str(), *v)),
    )
    .and_then(|p| p.check_range(schema, MAX_IMPORTANCE).map(|_| p))
    {
        Ok(p) => p,
        Err(e) => {
            debug!("Rejected recommend request: {}", e);
            return Ok(error_response(&e));
        }
    };

    let k = req.limit.unwrap_or(engine.config().default_k);
    let ranked = match engine.rank(&preferences, k) {
        Ok(ranked) => ranked,
        Err(e) => {
            warn!("Ranking failed: {}", e);
            return Ok(error_response(&e));
        }
    };
    let analysis = match engine.explain(&preferences) {
        Ok(analysis) => analysis,
        Err(e) => return Ok(error_response(&e)),
    };

    let recommendations = ranked
        .into_iter()
        .map(|r| {
            let explanation = describe_item(schema, r.candidate, &preferences);
            RecommendationView::from_ranked(schema, &r.with_explanation(explanation))
        })
        .collect();

    info!("Recommended {} items (limit {})", k.min(engine.len()), k);

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        recommendations,
        analysis,
    }))
}

async fn reload_catalog(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    match store.reload() {
        Ok(count) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true,
            "count": count,
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
        }))),
    }
}
