//! HTTP facade over the site client.
//!
//! The fail-soft contract lives here: list endpoints serve an empty
//! array when the upstream is down, the detail and chapter endpoints
//! serve a 500 with a JSON error body, and the image relay forwards the
//! upstream status. Callers never see a stack trace, only "no data".

use crate::app_state::AppState;
use crate::error::FetchError;
use crate::models::HotComic;
use crate::relay;
use crate::search;
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use serde_json::json;
use std::collections::HashMap;

#[get("/api/hot")]
async fn hot_comics(data: web::Data<AppState>) -> impl Responder {
    match data.site.hot_comics().await {
        Ok(comics) => HttpResponse::Ok().json(comics),
        Err(e) => {
            error!("Error getting hot comics: {}", e);
            HttpResponse::Ok().json(Vec::<HotComic>::new())
        }
    }
}

#[get("/api/comic/{title}")]
async fn comic_detail(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    match data.site.comic_detail(&title).await {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => {
            error!("Error getting comic details: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch comic details"
            }))
        }
    }
}

#[get("/api/comic/{title}/{chapter}")]
async fn chapter_pages(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (title, chapter) = path.into_inner();
    match data.site.chapter_pages(&title, &chapter).await {
        Ok(pages) => HttpResponse::Ok().json(pages),
        Err(e) => {
            error!("Error getting comic chapter: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch comic chapter"
            }))
        }
    }
}

#[get("/api/search/{title}")]
async fn search_comics(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    let results = search::resolve(&data.site, &title).await;
    HttpResponse::Ok().json(results)
}

#[get("/api/proxy/image")]
async fn proxy_image(
    data: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let url = match query.get("url") {
        Some(url) => url,
        None => return HttpResponse::BadRequest().body("Missing 'url' query parameter"),
    };

    match relay::fetch_image(&data.client, url).await {
        Ok(image) => HttpResponse::Ok()
            .content_type(image.content_type)
            .insert_header(("Cache-Control", "public, max-age=86400"))
            .body(image.bytes),
        Err(FetchError::Status { status, .. }) => {
            // Forward the upstream code; the body is ours, not theirs.
            let code =
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code).body(format!("Failed to fetch image: {}", status))
        }
        Err(e) => {
            error!("Error proxying image: {}", e);
            HttpResponse::InternalServerError().body("Failed to proxy image")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hot_comics)
        .service(comic_detail)
        .service(chapter_pages)
        .service(search_comics)
        .service(proxy_image);
}
