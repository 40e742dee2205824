use chrono::{DateTime, Utc};
use common::model::{NewReading, Reading, Sensor};

/// In-memory reading store. Lives for the process lifetime; shared between
/// request handlers behind an `Arc<Mutex<_>>`, so id assignment happens
/// under the lock.
#[derive(Debug, Default)]
pub struct Store {
    sensors: Vec<Sensor>,
    readings: Vec<Reading>,
}

impl Store {
    pub fn new(sensors: Vec<Sensor>, readings: Vec<Reading>) -> Self {
        Self { sensors, readings }
    }

    /// All sensors, in creation order.
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn sensor(&self, id: i32) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.id == id)
    }

    /// Readings of one sensor, optionally restricted to the inclusive range
    /// `desde..=hasta`, newest first. An unknown sensor id yields an empty
    /// list, not an error.
    pub fn readings_by_date(
        &self,
        sensor_id: i32,
        desde: Option<DateTime<Utc>>,
        hasta: Option<DateTime<Utc>>,
    ) -> Vec<Reading> {
        let mut res: Vec<Reading> = self
            .readings
            .iter()
            .filter(|r| r.sensor_id == sensor_id)
            .filter(|r| desde.map_or(true, |ts| r.timestamp >= ts))
            .filter(|r| hasta.map_or(true, |ts| r.timestamp <= ts))
            .cloned()
            .collect();
        res.sort_by_key(|r| std::cmp::Reverse(r.timestamp));
        res
    }

    /// Appends a reading with the next free id (max + 1, max-of-empty = 0)
    /// and the current time when no timestamp was supplied.
    pub fn insert_reading(&mut self, new: &NewReading) -> Reading {
        let id = self.readings.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let reading = Reading {
            id,
            sensor_id: new.sensor_id,
            value: new.value,
            timestamp: new.timestamp.unwrap_or_else(Utc::now),
        };
        self.readings.push(reading.clone());
        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sensor(id: i32) -> Sensor {
        Sensor {
            id,
            name: format!("Sensor {id}"),
            location: "Lab".to_owned(),
            kind: "temperatura".to_owned(),
        }
    }

    fn reading(id: i32, sensor_id: i32, value: f64, minute: u32) -> Reading {
        Reading {
            id,
            sensor_id,
            value,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 10, minute, 0).unwrap(),
        }
    }

    fn fixture() -> Store {
        Store::new(
            vec![sensor(1), sensor(2)],
            vec![
                reading(1, 1, 22.5, 0),
                reading(2, 2, 65.0, 5),
                reading(3, 1, 23.1, 10),
                reading(4, 1, 22.8, 20),
            ],
        )
    }

    #[test]
    fn sensor_lookup() {
        let store = fixture();
        assert_eq!(store.sensor(1).unwrap().name, "Sensor 1");
        assert!(store.sensor(999).is_none());
    }

    #[test]
    fn readings_match_sensor_and_sort_descending() {
        let store = fixture();
        let res = store.readings_by_date(1, None, None);
        assert_eq!(res.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 3, 1]);
        assert!(res.iter().all(|r| r.sensor_id == 1));
        assert!(res.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn range_bounds_are_inclusive_and_independent() {
        let store = fixture();
        let at = |minute| Utc.with_ymd_and_hms(2026, 8, 7, 10, minute, 0).unwrap();

        let res = store.readings_by_date(1, Some(at(10)), None);
        assert_eq!(res.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 3]);

        let res = store.readings_by_date(1, None, Some(at(10)));
        assert_eq!(res.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);

        let res = store.readings_by_date(1, Some(at(10)), Some(at(10)));
        assert_eq!(res.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn unknown_sensor_yields_empty_list() {
        assert!(fixture().readings_by_date(999, None, None).is_empty());
    }

    #[test]
    fn insert_assigns_strictly_increasing_ids() {
        let mut store = fixture();
        let max_before = 4;
        let created = store.insert_reading(&NewReading {
            sensor_id: 1,
            value: 23.5,
            timestamp: Some(Utc.with_ymd_and_hms(2026, 8, 7, 11, 0, 0).unwrap()),
        });
        assert!(created.id > max_before);

        let res = store.readings_by_date(1, None, None);
        assert_eq!(res.iter().filter(|r| r.id == created.id).count(), 1);
        assert_eq!(res[0], created);
    }

    #[test]
    fn insert_into_empty_store_starts_at_one() {
        let mut store = Store::default();
        let created = store.insert_reading(&NewReading {
            sensor_id: 1,
            value: 1.0,
            timestamp: None,
        });
        assert_eq!(created.id, 1);
    }

    #[test]
    fn explicit_timestamp_round_trips() {
        let mut store = fixture();
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let created = store.insert_reading(&NewReading {
            sensor_id: 2,
            value: 66.2,
            timestamp: Some(ts),
        });
        assert_eq!(created.timestamp, ts);
    }

    #[test]
    fn omitted_timestamp_defaults_to_now() {
        let mut store = fixture();
        let created = store.insert_reading(&NewReading {
            sensor_id: 2,
            value: 68.0,
            timestamp: None,
        });
        assert!(Utc::now() - created.timestamp < Duration::seconds(5));
    }
}
