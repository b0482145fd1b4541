use actix_web::{web, HttpResponse, Responder};
use log::warn;

use crate::config::Config;

/// Actix web handler for `GET /api/config`.
///
/// # Returns
/// - `200 OK` with the `StoreConfig` as JSON.
/// - `503 Service Unavailable` when `store.url` or `store.anon_key` is not set.
pub async fn process(config: web::Data<Config>) -> impl Responder {
    match config.store_config() {
        Some(store) => HttpResponse::Ok().json(store),
        None => {
            warn!("Store requested but ALUNOS_STORE__URL / ALUNOS_STORE__ANON_KEY are not set");
            HttpResponse::ServiceUnavailable()
                .body("Banco de dados não configurado: defina store.url e store.anon_key.")
        }
    }
}
