use chrono::{Duration, Utc};
use common::model::{Reading, Sensor};

use crate::store::Store;

/// Demo data loaded at startup. Reading timestamps are relative to process
/// start so the dashboard always opens on recent data.
pub fn demo_store() -> Store {
    let sensor = |id, name: &str, location: &str, kind: &str| Sensor {
        id,
        name: name.to_owned(),
        location: location.to_owned(),
        kind: kind.to_owned(),
    };

    let now = Utc::now();
    let reading = |id, sensor_id, value, minutes_ago| Reading {
        id,
        sensor_id,
        value,
        timestamp: now - Duration::minutes(minutes_ago),
    };

    let sensors = vec![
        sensor(1, "Sensor Temperatura Sala 1", "Oficina Principal", "temperatura"),
        sensor(2, "Sensor Humedad Bodega", "Bodega A", "humedad"),
        sensor(3, "Sensor Presión Laboratorio", "Lab 3", "presión"),
        sensor(4, "Sensor Luz Entrada", "Recepción", "luz"),
    ];

    let readings = vec![
        reading(1, 1, 22.5, 30),
        reading(2, 1, 23.1, 25),
        reading(3, 1, 22.8, 20),
        reading(4, 1, 23.5, 15),
        reading(5, 1, 24.0, 10),
        reading(6, 1, 23.7, 5),
        reading(7, 1, 24.2, 0),
        reading(8, 2, 65.0, 30),
        reading(9, 2, 67.5, 20),
        reading(10, 2, 66.2, 10),
        reading(11, 2, 68.0, 0),
        reading(12, 3, 1013.2, 25),
        reading(13, 3, 1012.8, 15),
        reading(14, 3, 1013.5, 5),
        reading(15, 4, 450.0, 20),
        reading(16, 4, 520.0, 10),
        reading(17, 4, 480.0, 0),
    ];

    Store::new(sensors, readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_sensors_and_their_readings() {
        let store = demo_store();
        assert_eq!(store.sensors().len(), 4);
        assert_eq!(store.readings_by_date(1, None, None).len(), 7);
        assert_eq!(store.readings_by_date(2, None, None).len(), 4);
        assert_eq!(store.readings_by_date(3, None, None).len(), 3);
        assert_eq!(store.readings_by_date(4, None, None).len(), 3);
    }

    #[test]
    fn newest_seed_reading_comes_first() {
        let store = demo_store();
        let res = store.readings_by_date(1, None, None);
        assert_eq!(res[0].value, 24.2);
        assert_eq!(res.last().unwrap().value, 22.5);
    }
}
