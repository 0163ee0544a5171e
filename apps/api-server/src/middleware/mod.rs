//! Middleware modules.

pub mod error;

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Headers that keep clients and proxies from caching any API response.
pub fn no_store() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, proxy-revalidate",
        ))
        .add((header::PRAGMA, "no-cache"))
        .add((header::EXPIRES, "0"))
}
