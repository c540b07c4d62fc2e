//! Static map URL construction
//!
//! Pure string building; the client never fetches the image itself. Given
//! the same request the produced URL is byte-identical across calls.

use url::form_urlencoded;

use crate::client::LocationIqClient;
use crate::models::{MapMarker, StaticMapRequest};

/// Separator between marker attributes and between markers
const MARKER_SEPARATOR: char = '|';

impl LocationIqClient {
    /// Build a ready-to-use static map URL
    ///
    /// Query order is fixed: `key`, `center`, `zoom`, `size`, `format`,
    /// `style`, `markers`. Each marker renders as
    /// `icon:<v>|color:<v>|size:<v>|lat,lon` with only the attributes that
    /// are set.
    #[must_use]
    pub fn static_map_url(&self, request: &StaticMapRequest) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("key", &self.api_key);

        if let Some((lat, lon)) = request.center {
            query.append_pair("center", &format!("{lat},{lon}"));
        }
        if let Some(zoom) = request.zoom {
            query.append_pair("zoom", &zoom.to_string());
        }
        if let Some((width, height)) = request.size {
            query.append_pair("size", &format!("{width}x{height}"));
        }
        if let Some(format) = request.format {
            query.append_pair("format", format.as_str());
        }
        if let Some(style) = &request.style {
            query.append_pair("style", style);
        }
        if !request.markers.is_empty() {
            query.append_pair("markers", &markers_value(&request.markers));
        }

        format!("{}/staticmap?{}", self.base_url, query.finish())
    }
}

fn markers_value(markers: &[MapMarker]) -> String {
    markers
        .iter()
        .map(marker_segment)
        .collect::<Vec<_>>()
        .join(&MARKER_SEPARATOR.to_string())
}

fn marker_segment(marker: &MapMarker) -> String {
    let mut attributes = Vec::new();
    if let Some(icon) = &marker.icon {
        attributes.push(format!("icon:{icon}"));
    }
    if let Some(color) = &marker.color {
        attributes.push(format!("color:{color}"));
    }
    if let Some(size) = &marker.size {
        attributes.push(format!("size:{size}"));
    }
    attributes.push(format!("{},{}", marker.lat, marker.lon));
    attributes.join(&MARKER_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocationIqConfig;
    use crate::models::ImageFormat;

    fn client() -> LocationIqClient {
        LocationIqClient::new(&LocationIqConfig::for_testing()).expect("valid config")
    }

    #[test]
    fn test_url_is_deterministic() {
        let request = StaticMapRequest {
            center: Some((48.8566, 2.3522)),
            zoom: Some(12),
            size: Some((600, 400)),
            format: Some(ImageFormat::Png),
            style: Some("streets".to_string()),
            markers: vec![MapMarker {
                color: Some("red".to_string()),
                ..MapMarker::new(48.8566, 2.3522)
            }],
        };
        let client = client();
        assert_eq!(client.static_map_url(&request), client.static_map_url(&request));
    }

    #[test]
    fn test_query_parameter_order() {
        let request = StaticMapRequest {
            center: Some((48.8566, 2.3522)),
            zoom: Some(12),
            size: Some((600, 400)),
            format: Some(ImageFormat::Jpg),
            style: Some("streets".to_string()),
            markers: Vec::new(),
        };
        let url = client().static_map_url(&request);
        assert!(url.starts_with("https://api.locationiq.com/v1/staticmap?key=pk.test"));

        let key_pos = url.find("key=").expect("key present");
        let center_pos = url.find("center=").expect("center present");
        let zoom_pos = url.find("zoom=").expect("zoom present");
        let size_pos = url.find("size=600x400").expect("size present");
        let format_pos = url.find("format=jpg").expect("format present");
        let style_pos = url.find("style=streets").expect("style present");
        assert!(key_pos < center_pos);
        assert!(center_pos < zoom_pos);
        assert!(zoom_pos < size_pos);
        assert!(size_pos < format_pos);
        assert!(format_pos < style_pos);
    }

    #[test]
    fn test_marker_attribute_order() {
        let marker = MapMarker {
            icon: Some("pin".to_string()),
            color: Some("blue".to_string()),
            size: Some("large".to_string()),
            ..MapMarker::new(48.8566, 2.3522)
        };
        assert_eq!(
            marker_segment(&marker),
            "icon:pin|color:blue|size:large|48.8566,2.3522"
        );
    }

    #[test]
    fn test_marker_with_partial_attributes() {
        let marker = MapMarker {
            color: Some("red".to_string()),
            ..MapMarker::new(40.7128, -74.006)
        };
        assert_eq!(marker_segment(&marker), "color:red|40.7128,-74.006");
    }

    #[test]
    fn test_bare_marker_is_just_coordinates() {
        assert_eq!(marker_segment(&MapMarker::new(52.52, 13.405)), "52.52,13.405");
    }

    #[test]
    fn test_multiple_markers_joined() {
        let markers = vec![
            MapMarker {
                color: Some("red".to_string()),
                ..MapMarker::new(48.85, 2.35)
            },
            MapMarker::new(48.86, 2.36),
        ];
        assert_eq!(markers_value(&markers), "color:red|48.85,2.35|48.86,2.36");
    }

    #[test]
    fn test_no_markers_omits_parameter() {
        let url = client().static_map_url(&StaticMapRequest::default());
        assert!(!url.contains("markers="));
        assert!(url.contains("key=pk.test"));
    }

    #[test]
    fn test_marker_value_is_urlencoded() {
        let request = StaticMapRequest {
            markers: vec![MapMarker {
                color: Some("red".to_string()),
                ..MapMarker::new(48.85, 2.35)
            }],
            ..StaticMapRequest::default()
        };
        let url = client().static_map_url(&request);
        // '|' is percent-encoded by the query serializer
        assert!(url.contains("markers=color%3Ared%7C48.85%2C2.35"));
    }
}
