use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use seminar_offers::config::{ServerConfig, StorageSettings};
use seminar_offers::db::{establish_connection_pool, run_pending_migrations};
use seminar_offers::renderer::DocxTemplateRenderer;
use seminar_offers::repository::DieselRepository;
use seminar_offers::routes::admin::{
    list_customers, list_inquiries, list_inquiry_positions, login, update_customer,
};
use seminar_offers::routes::api::{create_offer, get_customer, list_products};
use seminar_offers::services::catalog::seed_reference_data;
use seminar_offers::storage::{ArtifactStore, LocalDirStore, S3ObjectStore};

const DEFAULT_TEMPLATE_PATH: &str = "word_templates/Firmenvereinbarung_Exklusivangebot.docx";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init();

    let admin_password = match std::env::var("ADMIN_PASSWORD") {
        Ok(value) => value,
        Err(_) => {
            log::error!("ADMIN_PASSWORD environment variable must be set");
            std::process::exit(1);
        }
    };

    let database_url = std::env::var("DATABASE_URL").unwrap_or("seminar.db".to_string());
    let address = std::env::var("ADDRESS").unwrap_or("0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or("3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);
    let template_path =
        std::env::var("OFFER_TEMPLATE").unwrap_or(DEFAULT_TEMPLATE_PATH.to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to create database pool: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_pending_migrations(&pool) {
        log::error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    if let Err(e) = seed_reference_data(&repo) {
        log::error!("Failed to seed reference data: {e}");
        std::process::exit(1);
    }

    let server_config = ServerConfig { admin_password };
    let renderer = DocxTemplateRenderer::new(template_path);

    let storage_settings = StorageSettings::from_env();
    let offers_dir = match &storage_settings {
        StorageSettings::Local { offers_dir } => Some(offers_dir.clone()),
        StorageSettings::S3(_) => None,
    };

    let store: Arc<dyn ArtifactStore> = match &storage_settings {
        StorageSettings::S3(settings) => {
            log::info!("Storing offer documents in bucket {}", settings.bucket);
            Arc::new(S3ObjectStore::connect(settings).await)
        }
        StorageSettings::Local { offers_dir } => {
            log::info!("Storing offer documents under {}", offers_dir.display());
            match LocalDirStore::new(offers_dir) {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    log::error!("Failed to create offers directory: {e}");
                    std::process::exit(1);
                }
            }
        }
    };
    let store: web::Data<dyn ArtifactStore> = web::Data::from(store);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(web::Data::new(renderer.clone()))
            .app_data(store.clone())
            .service(list_products)
            .service(get_customer)
            .service(create_offer)
            .service(login)
            .service(list_customers)
            .service(list_inquiries)
            .service(list_inquiry_positions)
            .service(update_customer);

        // Locally stored offers are downloadable under /offers.
        if let Some(dir) = &offers_dir {
            app = app.service(Files::new("/offers", dir));
        }

        // The static frontend is the catch-all and must stay last.
        app.service(Files::new("/", "./public").index_file("index.html"))
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}
