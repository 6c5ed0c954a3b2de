//! Stops sent to the journey planner.

use serde::Serialize;

use super::{LinkError, trim_label};

/// The serialized form of a station in the `stops` query parameter.
///
/// Field order matters: the destination parses the payload literally, so
/// the struct serializes as `{"label":…,"type":"ID","value":""}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
}

impl Stop {
    /// A stop identified only by its label.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: "ID",
            value: String::new(),
        }
    }
}

/// Build the stop list from station texts, in order.
///
/// Values are trimmed; blank entries are skipped. Fails with
/// [`LinkError::NoStations`] when nothing is left.
pub fn collect_stops<I, S>(stations: I) -> Result<Vec<Stop>, LinkError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stops: Vec<Stop> = stations
        .into_iter()
        .filter_map(|s| {
            let label = trim_label(s.as_ref());
            (!label.is_empty()).then(|| Stop::labelled(label))
        })
        .collect();

    if stops.is_empty() {
        return Err(LinkError::NoStations);
    }
    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_field_order() {
        let json = serde_json::to_string(&Stop::labelled("Zurich HB")).unwrap();
        assert_eq!(json, r#"{"label":"Zurich HB","type":"ID","value":""}"#);
    }

    #[test]
    fn skips_blank_and_trims() {
        let stops = collect_stops(["  Basel SBB ", "", "   ", "Chur"]).unwrap();
        let labels: Vec<&str> = stops.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Basel SBB", "Chur"]);
    }

    #[test]
    fn byte_order_mark_alone_is_no_station() {
        assert_eq!(collect_stops(["\u{FEFF}", " \u{FEFF} "]), Err(LinkError::NoStations));
    }

    #[test]
    fn next_line_is_kept_in_label() {
        let stops = collect_stops(["\u{85}Bern"]).unwrap();
        assert_eq!(stops[0].label, "\u{85}Bern");
    }

    #[test]
    fn no_stations() {
        assert_eq!(collect_stops(Vec::<String>::new()), Err(LinkError::NoStations));
        assert_eq!(collect_stops(["", " "]), Err(LinkError::NoStations));
    }
}
