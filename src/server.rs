//! Actix handlers mounted next to the Leptos routes.

use actix_files::NamedFile;
use actix_web::web;
use leptos::LeptosOptions;

/// Serves `favicon.ico` from the site root cargo-leptos copies `assets/` into.
#[actix_web::get("favicon.ico")]
pub async fn favicon(leptos_options: web::Data<LeptosOptions>) -> actix_web::Result<NamedFile> {
    let site_root = &leptos_options.site_root;
    Ok(NamedFile::open(format!("{site_root}/favicon.ico"))?)
}
