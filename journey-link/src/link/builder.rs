//! Link generation.

use serde::Serialize;
use tracing::debug;

use crate::domain::{FormOptions, LinkError, Stop, collect_stops};

use super::config::LinkConfig;
use super::encode::encode_stops;

/// A generated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOutput {
    /// The link with the stops payload percent-encoded
    pub url: String,
    /// The same link with the stops payload as literal JSON, for debugging.
    /// Only produced by the advanced form.
    pub decoded_url: Option<String>,
}

/// Builds journey planner links for one configuration.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    config: LinkConfig,
}

impl LinkBuilder {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Build the link for the given station texts (in row order) and options.
    ///
    /// Station texts are trimmed and blanks skipped. Nothing else is
    /// validated.
    pub fn build<I, S>(&self, stations: I, options: &FormOptions) -> Result<LinkOutput, LinkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stops = collect_stops(stations)?;
        let json = stops_json(&stops);

        let base = format!("https://{}/{}?stops=", self.config.host, options.language);
        let tail = self.config.variant.schema().render(options);

        let url = format!("{base}{}{tail}", encode_stops(&json));
        let decoded_url = self
            .config
            .variant
            .includes_decoded()
            .then(|| format!("{base}{json}{tail}"));

        debug!(stops = stops.len(), variant = %self.config.variant, "generated link");

        Ok(LinkOutput { url, decoded_url })
    }
}

/// Build a link with the default configuration (advanced form, `www.sbb.ch`).
pub fn generate_link<I, S>(stations: I, options: &FormOptions) -> Result<LinkOutput, LinkError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LinkBuilder::default().build(stations, options)
}

fn stops_json(stops: &[Stop]) -> String {
    // A Vec of string-only structs cannot fail to serialize
    serde_json::to_string(stops).expect("stops serialize to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::FormVariant;

    fn options() -> FormOptions {
        FormOptions::new("departure", "en")
    }

    #[test]
    fn no_stations() {
        assert_eq!(
            generate_link(Vec::<String>::new(), &options()),
            Err(LinkError::NoStations)
        );
        assert_eq!(
            generate_link(["", "   "], &options()),
            Err(LinkError::NoStations)
        );
    }

    #[test]
    fn single_station() {
        let link = generate_link(["Zurich HB"], &options()).unwrap();
        assert_eq!(
            link.url,
            "https://www.sbb.ch/en?stops=%5B%7B%22label%22%3A%22Zurich%20HB%22%2C%22type%22%3A%22ID%22%2C%22value%22%3A%22%22%7D%5D&moment=\"departure\""
        );
        assert_eq!(
            link.decoded_url.as_deref(),
            Some(
                "https://www.sbb.ch/en?stops=[{\"label\":\"Zurich HB\",\"type\":\"ID\",\"value\":\"\"}]&moment=\"departure\""
            )
        );
    }

    #[test]
    fn placeholder_label() {
        let link = generate_link(["%s Station"], &options()).unwrap();
        assert!(link.url.contains("%22%s%20Station%22"));
        assert!(!link.url.contains("%25s"));
    }

    #[test]
    fn labels_are_trimmed_and_blanks_skipped() {
        let link = generate_link(["  Bern ", "", "Thun"], &options()).unwrap();
        let decoded = link.decoded_url.unwrap();
        assert!(decoded.contains(r#"[{"label":"Bern","type":"ID","value":""},{"label":"Thun","type":"ID","value":""}]"#));
    }

    #[test]
    fn browser_whitespace_rules() {
        assert_eq!(
            generate_link(["\u{FEFF}"], &options()),
            Err(LinkError::NoStations)
        );

        let link = generate_link(["\u{85}Bern"], &options()).unwrap();
        assert!(link.url.contains("%22label%22%3A%22%C2%85Bern%22"));
    }

    #[test]
    fn direct_connection_once_in_order() {
        let options = FormOptions {
            direct_connection: true,
            walk_speed: Some("FAST".into()),
            hide_prices: true,
            ..options()
        };
        let link = generate_link(["A"], &options).unwrap();
        assert_eq!(link.url.matches("&directConnection=true").count(), 1);
        assert!(link.url.ends_with(
            "&walkSpeed=FAST&directConnection=true&hidePrices=true&moment=\"departure\""
        ));
    }

    #[test]
    fn stop_order_and_transport_modes() {
        let options = FormOptions {
            transport_modes: vec!["TRAIN".into(), "BUS".into()],
            date: Some("2024-06-01".into()),
            time: Some("09:00".into()),
            ..options()
        };
        let link = generate_link(["A", "B"], &options).unwrap();

        let a = link.url.find("%22A%22").unwrap();
        let b = link.url.find("%22B%22").unwrap();
        assert!(a < b);

        let modes = link.url.find("&transportModes=TRAIN,BUS").unwrap();
        for later in ["&date=", "&time=", "&moment="] {
            assert!(modes < link.url.find(later).unwrap());
        }
    }

    #[test]
    fn date_and_time_pass_through_verbatim() {
        let options = FormOptions {
            date: Some("not a date".into()),
            time: Some("25:99".into()),
            ..options()
        };
        let link = generate_link(["A"], &options).unwrap();
        assert!(link.url.ends_with("&date=\"not a date\"&time=\"25:99\"&moment=\"departure\""));
    }

    #[test]
    fn language_is_path_segment() {
        let link = generate_link(["A"], &FormOptions::new("arrival", "it")).unwrap();
        assert!(link.url.starts_with("https://www.sbb.ch/it?stops="));
        assert!(link.url.ends_with("&moment=\"arrival\""));
    }

    #[test]
    fn minimal_variant() {
        let builder = LinkBuilder::new(
            LinkConfig::default()
                .with_host("example.test")
                .with_variant(FormVariant::Minimal),
        );
        let options = FormOptions {
            transport_modes: vec!["TRAIN".into()],
            date: Some("2024-06-01".into()),
            ..options()
        };
        let link = builder.build(["Basel"], &options).unwrap();
        assert_eq!(
            link.url,
            "https://example.test/en?stops=%5B%7B%22label%22%3A%22Basel%22%2C%22type%22%3A%22ID%22%2C%22value%22%3A%22%22%7D%5D&date=\"2024-06-01\"&moment=\"departure\""
        );
        assert_eq!(link.decoded_url, None);
    }

    #[test]
    fn json_escapes_quotes_in_labels() {
        let link = generate_link([r#"Say "hi""#], &options()).unwrap();
        assert!(link.url.contains("%22Say%20%5C%22hi%5C%22%22"));
    }
}
