use foundation::math::{LatLon, Vec3, lat_lon_to_sphere};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub &'static str);

impl MarkerId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A named network location drawn as a glowing beacon.
#[derive(Debug, Clone, PartialEq)]
pub struct DataCenter {
    pub id: MarkerId,
    pub name: &'static str,
    pub country: &'static str,
    pub geo: LatLon,
    pub position: Vec3,
}

const SITES: [(&str, &str, &str, f64, f64); 12] = [
    ("pl", "Warsaw", "Poland", 52.1, 21.0),
    ("cz", "Prague", "Czech Republic", 50.1, 14.4),
    ("sk", "Bratislava", "Slovakia", 48.1, 17.1),
    ("at", "Vienna", "Austria", 48.2, 16.4),
    ("hu", "Budapest", "Hungary", 47.5, 19.0),
    ("ro", "Bucharest", "Romania", 44.4, 26.0),
    ("bg", "Sofia", "Bulgaria", 42.7, 23.3),
    ("gr", "Athens", "Greece", 37.9, 23.7),
    ("hr", "Zagreb", "Croatia", 45.8, 16.0),
    ("it", "Rome", "Italy", 41.9, 12.5),
    ("es", "Madrid", "Spain", 40.4, -3.7),
    ("pt", "Lisbon", "Portugal", 38.7, -9.1),
];

/// The fixed network, positioned on a sphere of `radius`.
pub fn data_centers(radius: f64) -> Vec<DataCenter> {
    SITES
        .iter()
        .map(|&(id, name, country, lat, lon)| {
            let geo = LatLon::new(lat, lon);
            DataCenter {
                id: MarkerId(id),
                name,
                country,
                geo,
                position: lat_lon_to_sphere(geo, radius),
            }
        })
        .collect()
}

pub fn find<'a>(markers: &'a [DataCenter], id: MarkerId) -> Option<&'a DataCenter> {
    markers.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::{MarkerId, data_centers, find};

    #[test]
    fn twelve_unique_sites() {
        let markers = data_centers(280.0);
        assert_eq!(markers.len(), 12);
        let mut ids: Vec<_> = markers.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn sites_sit_on_the_sphere() {
        for m in data_centers(280.0) {
            assert!((m.position.length() - 280.0).abs() < 1e-9, "{}", m.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let markers = data_centers(280.0);
        let warsaw = find(&markers, MarkerId("pl")).expect("pl");
        assert_eq!(warsaw.name, "Warsaw");
        assert_eq!(warsaw.country, "Poland");
        assert!(find(&markers, MarkerId("xx")).is_none());
    }
}
