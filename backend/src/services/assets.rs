use actix_files::Files;

use crate::config::ServerConfig;

/// Serves `config.assets_dir` under `<asset base>/images`.
pub fn configure_routes(config: &ServerConfig) -> Files {
    Files::new(&config.images_mount(), &config.assets_dir).use_etag(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::fs;

    #[actix_web::test]
    async fn serves_images_under_asset_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("image1.jpg"), b"jpeg-bytes").unwrap();

        let config = ServerConfig {
            assets_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let app = test::init_service(App::new().service(configure_routes(&config))).await;

        let req = test::TestRequest::get()
            .uri("/PrimeHomes/images/image1.jpg")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"jpeg-bytes");

        let missing = test::TestRequest::get()
            .uri("/PrimeHomes/images/nope.jpg")
            .to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
