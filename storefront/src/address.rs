//! Address Formatter

use shared::Address;

use crate::links::encode_component;

/// Base URL of the map search service
pub const MAP_SEARCH_BASE_URL: &str = "https://www.google.com/maps/search/";

/// Street; `"{neighborhood}, {city} - {state}"`; zipcode
pub fn display_lines(addr: &Address) -> [String; 3] {
    [
        addr.street.clone(),
        format!("{}, {} - {}", addr.neighborhood, addr.city, addr.state),
        addr.zipcode.clone(),
    ]
}

/// `"{street}, {neighborhood}, {city} - {state}"` (no zipcode)
pub fn single_line(addr: &Address) -> String {
    format!(
        "{}, {}, {} - {}",
        addr.street, addr.neighborhood, addr.city, addr.state
    )
}

pub fn map_search_url(addr: &Address) -> String {
    format!("{MAP_SEARCH_BASE_URL}{}", encode_component(&single_line(addr)))
}

/// `(lat, lng)` centre for the embedded map widget
pub fn coordinates(addr: &Address) -> (f64, f64) {
    (addr.lat, addr.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address {
            street: "Av. Paulista, 1000".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zipcode: "01310-100".to_string(),
            lat: -23.5631,
            lng: -46.6544,
        }
    }

    #[test]
    fn test_display_lines_order() {
        let lines = display_lines(&sample());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Av. Paulista, 1000");
        assert_eq!(lines[1], "Bela Vista, São Paulo - SP");
        assert_eq!(lines[2], "01310-100");
    }

    #[test]
    fn test_single_line_omits_zipcode() {
        let line = single_line(&sample());
        assert_eq!(line, "Av. Paulista, 1000, Bela Vista, São Paulo - SP");
        assert!(!line.contains("01310"));
    }

    #[test]
    fn test_map_search_url_round_trip() {
        let addr = sample();
        let url = map_search_url(&addr);
        let segment = url.strip_prefix(MAP_SEARCH_BASE_URL).unwrap();

        assert!(!segment.contains(' '));
        assert!(!segment.contains('/'));
        assert_eq!(urlencoding::decode(segment).unwrap(), single_line(&addr));
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(coordinates(&sample()), (-23.5631, -46.6544));
    }
}
