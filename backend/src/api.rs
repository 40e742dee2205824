use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{
    get,
    http::header,
    post,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use common::model::NewReading;

use crate::store::Store;

pub type SharedStore = Arc<Mutex<Store>>;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LecturasQuery {
    /// Required; requests without it are rejected with 400.
    sensor_id: i32,
    desde: Option<String>,
    hasta: Option<String>,
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS]` and date-only
/// `YYYY-MM-DD` (midnight). Naive values are taken as UTC.
fn parse_fecha(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&ts));
        }
    }
    if let Ok(fecha) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&fecha.and_hms_opt(0, 0, 0).unwrap()));
    }
    None
}

fn mensaje(texto: impl Into<String>) -> serde_json::Value {
    let texto = texto.into();
    serde_json::json!({ "message": texto })
}

#[get("/api/sensores")]
async fn list_sensors(store: web::Data<SharedStore>) -> HttpResponse {
    let Ok(store) = store.lock() else {
        return HttpResponse::InternalServerError().finish();
    };
    HttpResponse::Ok().json(store.sensors())
}

#[get("/api/sensores/{id}")]
async fn get_sensor(path: web::Path<i32>, store: web::Data<SharedStore>) -> HttpResponse {
    let Ok(store) = store.lock() else {
        return HttpResponse::InternalServerError().finish();
    };
    match store.sensor(path.into_inner()) {
        Some(sensor) => HttpResponse::Ok().json(sensor),
        None => HttpResponse::NotFound().json(mensaje("Sensor no encontrado")),
    }
}

#[get("/api/lecturas")]
async fn list_readings(
    query: web::Query<LecturasQuery>,
    store: web::Data<SharedStore>,
) -> HttpResponse {
    let desde = match query.desde.as_deref() {
        Some(raw) => match parse_fecha(raw) {
            Some(ts) => Some(ts),
            None => {
                return HttpResponse::BadRequest().json(mensaje(format!("Fecha inválida: {raw}")))
            }
        },
        None => None,
    };
    let hasta = match query.hasta.as_deref() {
        Some(raw) => match parse_fecha(raw) {
            Some(ts) => Some(ts),
            None => {
                return HttpResponse::BadRequest().json(mensaje(format!("Fecha inválida: {raw}")))
            }
        },
        None => None,
    };

    let Ok(store) = store.lock() else {
        return HttpResponse::InternalServerError().finish();
    };
    HttpResponse::Ok().json(store.readings_by_date(query.sensor_id, desde, hasta))
}

#[post("/api/lecturas")]
async fn create_reading(
    body: web::Json<NewReading>,
    store: web::Data<SharedStore>,
) -> HttpResponse {
    let Ok(mut store) = store.lock() else {
        return HttpResponse::InternalServerError().finish();
    };
    let reading = store.insert_reading(&body);
    log::debug!(
        "lectura {} registrada para el sensor {}",
        reading.id,
        reading.sensor_id
    );
    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/lecturas/{}", reading.id)))
        .json(reading)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_sensors)
        .service(get_sensor)
        .service(list_readings)
        .service(create_reading);
}

pub async fn new_http_server(store: SharedStore, bind: &str) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(store.clone()))
            .configure(configure)
            .wrap(
                Cors::default()
                    .allowed_origin("http://127.0.0.1:8080") // frontend
                    .allowed_origin("http://localhost:8080")
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
                    .allowed_header(header::CONTENT_TYPE)
                    .supports_credentials()
                    .max_age(3600),
            )
    })
    .bind(bind)?
    .run()
    .await
}
