use anyhow::Result;
use common::model::{NewReading, Reading, Sensor};
use reqwest::header::ACCEPT;

fn api_url(endpoint: &str) -> String {
    let host_url = host_url();
    format!("{host_url}/{endpoint}")
}

fn host_url() -> String {
    let location = web_sys::window().unwrap().location();
    format!(
        "{}//{}:8081",
        location.protocol().unwrap(),
        location.hostname().unwrap()
    )
}

pub async fn sensors() -> Result<Vec<Sensor>> {
    let client = reqwest::Client::new();

    Ok(client
        .get(api_url("api/sensores"))
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Sensor>>()
        .await?)
}

pub async fn readings(
    sensor_id: i32,
    desde: Option<&str>,
    hasta: Option<&str>,
) -> Result<Vec<Reading>> {
    let client = reqwest::Client::new();

    let mut query = vec![("sensorId", sensor_id.to_string())];
    if let Some(fecha) = desde {
        query.push(("desde", fecha.to_owned()))
    }
    if let Some(fecha) = hasta {
        query.push(("hasta", fecha.to_owned()))
    }

    Ok(client
        .get(api_url("api/lecturas"))
        .query(&query)
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Reading>>()
        .await?)
}

pub async fn create_reading(new: &NewReading) -> Result<Reading> {
    let client = reqwest::Client::new();

    Ok(client
        .post(api_url("api/lecturas"))
        .header(ACCEPT, "application/json")
        .json(new)
        .send()
        .await?
        .error_for_status()?
        .json::<Reading>()
        .await?)
}
