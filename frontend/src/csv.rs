//! CSV export of the currently loaded readings.

use chrono::NaiveDate;
use common::model::{Reading, Sensor};

use crate::utils;

const CABECERA: &str = "Fecha/Hora,Sensor,Ubicación,Tipo,Valor,Unidad";

pub fn build(sensor: &Sensor, readings: &[Reading]) -> String {
    let unidad = utils::unit_for(&sensor.kind);
    let mut lines = Vec::with_capacity(readings.len() + 1);
    lines.push(CABECERA.to_owned());
    for r in readings {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",\"{}\",{},\"{}\"",
            utils::format_timestamp(&r.timestamp),
            sensor.name,
            sensor.location,
            sensor.kind,
            r.value,
            unidad
        ));
    }
    lines.join("\n")
}

/// `lecturas_<name-with-underscores>_<YYYY-MM-DD>.csv`
pub fn file_name(sensor_name: &str, fecha: NaiveDate) -> String {
    let nombre = sensor_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("lecturas_{}_{}.csv", nombre, fecha.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sensor() -> Sensor {
        Sensor {
            id: 1,
            name: "Sensor Temperatura Sala 1".to_owned(),
            location: "Oficina Principal".to_owned(),
            kind: "temperatura".to_owned(),
        }
    }

    #[test]
    fn header_and_one_row_per_reading() {
        let readings = vec![
            Reading {
                id: 2,
                sensor_id: 1,
                value: 23.1,
                timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, 5, 0).unwrap(),
            },
            Reading {
                id: 1,
                sensor_id: 1,
                value: 22.5,
                timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap(),
            },
        ];
        let csv = build(&sensor(), &readings);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CABECERA);
        assert!(lines[1].contains("\"Sensor Temperatura Sala 1\""));
        assert!(lines[1].contains("\"Oficina Principal\""));
        assert!(lines[1].contains("\"temperatura\""));
        assert!(lines[1].contains("23.1"));
        assert!(lines[1].ends_with("\"°C\""));
    }

    #[test]
    fn unknown_type_exports_empty_unit() {
        let mut s = sensor();
        s.kind = "ruido".to_owned();
        let csv = build(&s, &[]);
        assert_eq!(csv, CABECERA);
    }

    #[test]
    fn file_name_replaces_whitespace() {
        let fecha = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(
            file_name("Sensor Temperatura Sala 1", fecha),
            "lecturas_Sensor_Temperatura_Sala_1_2026-08-07.csv"
        );
    }
}
