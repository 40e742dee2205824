use chrono::{DateTime, Local, NaiveDate, Utc};
use wasm_bindgen::{JsCast, JsValue};

/// Display unit by sensor type. Unrecognized types have no unit.
pub fn unit_for(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "temperatura" => "°C",
        "humedad" => "%",
        "presión" => "hPa",
        "luz" => "lux",
        _ => "",
    }
}

/// List icon by sensor type.
pub fn icon_for(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "temperatura" => "🌡️",
        "humedad" => "💧",
        "presión" => "📊",
        "luz" => "💡",
        "movimiento" => "🔔",
        _ => "📡",
    }
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = DateTime::from(*ts);
    local.format("%d/%m/%Y %H:%M:%S").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn alert(texto: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(texto);
    }
}

/// Offers `contents` as a CSV download via a Blob object URL.
pub fn download_csv(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let mut props = web_sys::BlobPropertyBag::new();
    props.type_("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
