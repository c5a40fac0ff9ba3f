//! Built-in airport definitions: the thirty busiest US airports plus Paris
//! Charles de Gaulle.

/// Static definition of a catalog entry, converted into an
/// [`AirportRecord`](super::AirportRecord) when the catalog is built.
#[derive(Debug, Clone, Copy)]
pub struct AirportDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub metro_area: &'static str,
}

const fn airport(
    code: &'static str,
    name: &'static str,
    city: &'static str,
    region: &'static str,
    latitude: f64,
    longitude: f64,
    metro_area: &'static str,
) -> AirportDefinition {
    AirportDefinition {
        code,
        name,
        city,
        region,
        latitude,
        longitude,
        metro_area,
    }
}

/// Catalog entries in definition order.
#[rustfmt::skip]
pub const AIRPORT_DEFINITIONS: &[AirportDefinition] = &[
    airport("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta", "GA", 33.6407, -84.4277, "Metro Atlanta"),
    airport("DFW", "Dallas/Fort Worth International Airport", "Dallas and Fort Worth", "TX", 32.8998, -97.0403, "Dallas–Fort Worth"),
    airport("DEN", "Denver International Airport", "Denver", "CO", 39.8561, -104.6737, "Greater Denver"),
    airport("ORD", "O'Hare International Airport", "Chicago", "IL", 41.9786, -87.9048, "Chicagoland"),
    airport("LAX", "Los Angeles International Airport", "Los Angeles", "CA", 33.9425, -118.4081, "Greater Los Angeles"),
    airport("JFK", "John F. Kennedy International Airport", "New York City", "NY", 40.6413, -73.7781, "New York Metro"),
    airport("CLT", "Charlotte Douglas International Airport", "Charlotte", "NC", 35.2144, -80.9473, "Greater Charlotte"),
    airport("LAS", "Harry Reid International Airport", "Las Vegas", "NV", 36.0840, -115.1537, "Las Vegas Valley"),
    airport("MCO", "Orlando International Airport", "Orlando", "FL", 28.4312, -81.3083, "Greater Orlando"),
    airport("MIA", "Miami International Airport", "Miami", "FL", 25.7959, -80.2870, "Miami Metro"),
    airport("PHX", "Phoenix Sky Harbor International Airport", "Phoenix", "AZ", 33.4342, -112.0116, "Metro Phoenix"),
    airport("SEA", "Seattle-Tacoma International Airport", "Seattle and Tacoma", "WA", 47.4502, -122.3088, "Seattle Metro"),
    airport("SFO", "San Francisco International Airport", "San Francisco", "CA", 37.6213, -122.3790, "San Francisco Bay Area"),
    airport("EWR", "Newark Liberty International Airport", "Newark and New York City", "NJ", 40.6895, -74.1745, "New York Metro"),
    airport("IAH", "George Bush Intercontinental Airport", "Houston", "TX", 29.9844, -95.3414, "Greater Houston"),
    airport("BOS", "Logan International Airport", "Boston", "MA", 42.3656, -71.0096, "Greater Boston"),
    airport("MSP", "Minneapolis-Saint Paul International Airport", "Minneapolis and Saint Paul", "MN", 44.8848, -93.2223, "Minneapolis–Saint Paul"),
    airport("FLL", "Fort Lauderdale-Hollywood International Airport", "Fort Lauderdale and Hollywood", "FL", 26.0712, -80.1528, "Miami Metro"),
    airport("LGA", "LaGuardia Airport", "New York City", "NY", 40.7769, -73.8740, "New York Metro"),
    airport("DTW", "Detroit Metropolitan Airport", "Detroit", "MI", 42.2162, -83.3554, "Detroit Metro"),
    airport("PHL", "Philadelphia International Airport", "Philadelphia", "PA", 39.8719, -75.2411, "Philadelphia Metro"),
    airport("SLC", "Salt Lake City International Airport", "Salt Lake City", "UT", 40.7899, -111.9791, "Wasatch Front"),
    airport("BWI", "Baltimore-Washington International Airport", "Baltimore and Washington, D.C.", "MD", 39.1774, -76.6684, "Baltimore metropolitan area"),
    airport("IAD", "Dulles International Airport", "Washington, D.C.", "VA", 38.9531, -77.4565, "Washington Metro"),
    airport("SAN", "San Diego International Airport", "San Diego", "CA", 32.7338, -117.1933, "Greater San Diego"),
    airport("DCA", "Ronald Reagan Washington National Airport", "Washington, D.C.", "VA", 38.8512, -77.0402, "Washington Metro"),
    airport("TPA", "Tampa International Airport", "Tampa", "FL", 27.9755, -82.5332, "Tampa Bay area"),
    airport("BNA", "Nashville International Airport", "Nashville", "TN", 36.1263, -86.6774, "Greater Nashville"),
    airport("AUS", "Austin-Bergstrom International Airport", "Austin", "TX", 30.1945, -97.6699, "Greater Austin"),
    airport("HNL", "Daniel K. Inouye International Airport", "Honolulu", "HI", 21.3206, -157.9242, "Oahu"),
    airport("CDG", "Charles de Gaulle Airport", "Paris", "France", 49.0097, 2.5479, "Paris Metropolitan Area"),
];

/// Domestic airports that take part in network generation. CDG is in the
/// catalog for distance queries but is held out of the generated network.
pub const US_AIRPORTS: [&str; 30] = [
    "ATL", "DFW", "DEN", "ORD", "LAX", "JFK", "CLT", "LAS", "MCO", "MIA", "PHX", "SEA", "SFO",
    "EWR", "IAH", "BOS", "MSP", "FLL", "LGA", "DTW", "PHL", "SLC", "BWI", "IAD", "SAN", "DCA",
    "TPA", "BNA", "AUS", "HNL",
];

/// Default hubs: Southeast, Central, Mountain, and Midwest coverage.
pub const MAJOR_HUBS: [&str; 4] = ["ATL", "DFW", "DEN", "ORD"];
