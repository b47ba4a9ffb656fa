use crate::application::use_cases::combinatorial::CombinationUseCase;
use crate::application::use_cases::scenario_cases::ScenarioUseCase;
use crate::domain::error::{AppError, Result};
use crate::domain::generation::{CombinationRequest, DownloadQuery, ScenarioRequest};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::response::markdown_attachment;
use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub combinations: CombinationUseCase,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
    pub log_capacity: usize,
}

impl HttpState {
    pub fn new(config: &AppConfig, logs: Arc<Mutex<Vec<LogEntry>>>) -> Self {
        Self {
            combinations: CombinationUseCase::new(config.fallback_text_field()),
            logs,
            log_capacity: config.log_capacity,
        }
    }

    fn log(&self, level: &str, source: &str, message: &str) {
        add_log(&self.logs, self.log_capacity, level, source, message);
    }
}

#[get("/")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/generate-by-scenario")]
async fn generate_by_scenario(
    data: web::Data<HttpState>,
    req: web::Json<ScenarioRequest>,
) -> Result<HttpResponse> {
    validate_request(&data, "ScenarioApi", &*req)?;
    data.log(
        "INFO",
        "ScenarioApi",
        &format!(
            "Generating scenario cases (scenario={} platform={})",
            req.scenario, req.platform
        ),
    );

    let response = ScenarioUseCase::execute(&req);
    Ok(HttpResponse::Ok().json(response))
}

#[post("/generate-combinations")]
async fn generate_combinations(
    data: web::Data<HttpState>,
    req: web::Json<CombinationRequest>,
) -> Result<HttpResponse> {
    validate_request(&data, "CombinationApi", &*req)?;

    let response = data.combinations.execute(&req);
    data.log(
        "INFO",
        "CombinationApi",
        &format!(
            "Generated {} of {} combinations (scenario={} platform={})",
            response.returned_count,
            response.total_combinations,
            response.scenario,
            response.platform
        ),
    );
    Ok(HttpResponse::Ok().json(response))
}

#[get("/download-markdown")]
async fn download_markdown(
    data: web::Data<HttpState>,
    query: web::Query<DownloadQuery>,
) -> Result<HttpResponse> {
    validate_request(&data, "DownloadApi", &*query)?;

    let query = query.into_inner();
    let scenario = query.scenario.clone();
    let response = data.combinations.execute(&CombinationRequest::from(query));
    data.log(
        "INFO",
        "DownloadApi",
        &format!(
            "Prepared Markdown download with {} cases (scenario={})",
            response.returned_count, response.scenario
        ),
    );

    Ok(markdown_attachment(&scenario, response.combined_markdown))
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    HttpResponse::Ok().json(&*logs)
}

fn validate_request<T: Validate>(data: &HttpState, source: &str, request: &T) -> Result<()> {
    request.validate().map_err(|errors| {
        let err = AppError::from(errors);
        tracing::warn!(source, error = %err, "Rejected request");
        data.log("WARN", source, &err.to_string());
        err
    })
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Registers every route; shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        .service(generate_by_scenario)
        .service(generate_combinations)
        .service(download_markdown)
        .service(get_logs);
}

pub fn add_log(
    logs: &Mutex<Vec<LogEntry>>,
    capacity: usize,
    level: &str,
    source: &str,
    message: &str,
) {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    logs.push(entry);
    if logs.len() > capacity {
        let overflow = logs.len() - capacity;
        logs.drain(..overflow);
    }
}

pub fn start_server(
    config: &AppConfig,
    logs: Arc<Mutex<Vec<LogEntry>>>,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new(config, logs));

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
