//! Static airport reference data.
//!
//! The table is built once on first access and lives for the rest of
//! the process. It is never mutated, so it can be shared between
//! concurrent lookups without locking.

use crate::types::{AirportCode, GeoCoordinate};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Source of locally known airport coordinates.
///
/// Implemented by [`StaticAirportTable`]; tests and callers with their
/// own reference data can provide another implementation.
pub trait AirportTable: Send + Sync {
    /// Exact, case-sensitive lookup.
    fn get(&self, code: &AirportCode) -> Option<GeoCoordinate>;
}

lazy_static! {
    static ref AIRPORTS: HashMap<&'static str, GeoCoordinate> = {
        let entries: [(&'static str, f64, f64); 23] = [
            // Italy
            ("FCO", 41.8002, 12.2388),  // Rome Fiumicino
            ("MXP", 45.6306, 8.7281),   // Milan Malpensa
            ("LIN", 45.4545, 9.2767),   // Milan Linate
            ("VCE", 45.5053, 12.3519),  // Venice Marco Polo
            ("NAP", 40.8847, 14.2908),  // Naples Capodichino
            ("CTA", 37.4668, 15.0664),  // Catania Fontanarossa
            ("PMO", 38.1824, 13.0998),  // Palermo Punta Raisi
            ("BLQ", 44.5354, 11.2887),  // Bologna Guglielmo Marconi
            ("BGY", 45.6689, 9.7003),   // Bergamo Orio al Serio
            ("SUF", 38.9054, 16.2423),  // Lamezia Terme
            // International hubs
            ("CDG", 49.0097, 2.5479),   // Paris Charles de Gaulle
            ("LHR", 51.4700, -0.4543),  // London Heathrow
            ("FRA", 50.0379, 8.5622),   // Frankfurt
            ("AMS", 52.3105, 4.7683),   // Amsterdam Schiphol
            ("MAD", 40.4983, -3.5676),  // Madrid Barajas
            ("BCN", 41.2974, 2.0833),   // Barcelona El Prat
            ("IST", 41.2606, 28.7425),  // Istanbul
            ("DXB", 25.2532, 55.3657),  // Dubai
            ("JFK", 40.6413, -73.7781), // New York JFK
            ("LAX", 33.9416, -118.4085), // Los Angeles
            ("SFO", 37.6213, -122.3790), // San Francisco
            ("HND", 35.5494, 139.7798), // Tokyo Haneda
            ("SYD", -33.9399, 151.1753), // Sydney Kingsford Smith
        ];

        entries
            .into_iter()
            .map(|(code, lat, lng)| (code, GeoCoordinate { lat, lng }))
            .collect()
    };
}

/// The built-in table of busy airports.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAirportTable;

impl StaticAirportTable {
    /// Number of tabled airports.
    pub fn len(&self) -> usize {
        AIRPORTS.len()
    }

    /// Always false, the table ships with entries.
    pub fn is_empty(&self) -> bool {
        AIRPORTS.is_empty()
    }
}

impl AirportTable for StaticAirportTable {
    fn get(&self, code: &AirportCode) -> Option<GeoCoordinate> {
        AIRPORTS.get(code.as_str()).copied()
    }
}

impl AirportTable for HashMap<AirportCode, GeoCoordinate> {
    fn get(&self, code: &AirportCode) -> Option<GeoCoordinate> {
        HashMap::get(self, code).copied()
    }
}
