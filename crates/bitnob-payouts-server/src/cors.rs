//! CORS configuration for the faucet service.

use actix_cors::Cors;

/// Build the CORS middleware from allowed origins.
///
/// With no configured origins, only localhost (any port) is accepted so a
/// local frontend works out of the box. Production deployments set
/// `ALLOWED_ORIGINS` explicitly.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allowed_origin_fn(|origin, _req_head| {
            origin
                .to_str()
                .map(|o| o == "http://localhost" || o.starts_with("http://localhost:"))
                .unwrap_or(false)
        })
    } else {
        let allowed = allowed_origins.to_vec();
        Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = origin.to_str().unwrap_or("");
            allowed.iter().any(|a| a == origin_str)
        })
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::AUTHORIZATION,
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
