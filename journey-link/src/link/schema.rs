//! Query parameter schema.
//!
//! The parameters after `stops` are described as data: which option feeds
//! each parameter, how its value is written, and when it is included. The
//! order of the schema is the order of the query string.

use crate::domain::FormOptions;

/// An option field that can feed a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    TransportModes,
    WalkSpeed,
    DirectConnection,
    EconomicConnection,
    UnsharpConnection,
    ShowAccessibility,
    HidePrices,
    AccessibilityFilters,
    Occupancy,
    Attributes,
    Date,
    Time,
    Moment,
}

/// The value of an option field in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    List(&'a [String]),
    Flag(bool),
}

impl OptionField {
    /// Read this field from a snapshot.
    pub fn read<'a>(&self, options: &'a FormOptions) -> FieldValue<'a> {
        match self {
            Self::TransportModes => FieldValue::List(&options.transport_modes),
            Self::WalkSpeed => FieldValue::Text(options.walk_speed()),
            Self::DirectConnection => FieldValue::Flag(options.direct_connection),
            Self::EconomicConnection => FieldValue::Flag(options.economic_connection),
            Self::UnsharpConnection => FieldValue::Flag(options.unsharp_connection),
            Self::ShowAccessibility => FieldValue::Flag(options.show_accessibility),
            Self::HidePrices => FieldValue::Flag(options.hide_prices),
            Self::AccessibilityFilters => FieldValue::List(&options.accessibility_filters),
            Self::Occupancy => FieldValue::Text(options.occupancy()),
            Self::Attributes => FieldValue::List(&options.attributes),
            Self::Date => FieldValue::Text(options.date()),
            Self::Time => FieldValue::Text(options.time()),
            Self::Moment => FieldValue::Text(Some(options.moment.as_str())),
        }
    }
}

impl FieldValue<'_> {
    /// Whether the field carries anything worth emitting.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(value) => value.is_some_and(|v| !v.is_empty()),
            Self::List(items) => !items.is_empty(),
            Self::Flag(set) => *set,
        }
    }
}

/// How a parameter value is written. Values are never percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// The text as is
    Verbatim,
    /// List items joined with `,`
    CommaJoined,
    /// The literal `true`
    True,
    /// The text wrapped in double quotes
    Quoted,
}

impl Formatter {
    fn format(&self, value: FieldValue<'_>) -> String {
        match (self, value) {
            (Self::True, _) => "true".to_string(),
            (Self::CommaJoined, FieldValue::List(items)) => items.join(","),
            (Self::Quoted, value) => format!("\"{}\"", text_of(value)),
            (_, value) => text_of(value),
        }
    }
}

fn text_of(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => text.unwrap_or_default().to_string(),
        FieldValue::List(items) => items.join(","),
        FieldValue::Flag(set) => set.to_string(),
    }
}

/// When a parameter appears in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Only if the field is non-empty / true
    WhenPresent,
    /// Unconditionally, even if empty
    Always,
}

/// One query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub field: OptionField,
    pub url_param: &'static str,
    pub formatter: Formatter,
    pub inclusion: Inclusion,
}

impl ParamSpec {
    const fn new(
        field: OptionField,
        url_param: &'static str,
        formatter: Formatter,
        inclusion: Inclusion,
    ) -> Self {
        Self {
            field,
            url_param,
            formatter,
            inclusion,
        }
    }

    /// Render `&name=value` for this snapshot, or `None` if omitted.
    pub fn render(&self, options: &FormOptions) -> Option<String> {
        let value = self.field.read(options);
        if self.inclusion == Inclusion::WhenPresent && !value.is_present() {
            return None;
        }
        Some(format!(
            "&{}={}",
            self.url_param,
            self.formatter.format(value)
        ))
    }
}

use Formatter::{CommaJoined, Quoted, True, Verbatim};
use Inclusion::{Always, WhenPresent};

const ADVANCED: &[ParamSpec] = &[
    ParamSpec::new(OptionField::TransportModes, "transportModes", CommaJoined, WhenPresent),
    ParamSpec::new(OptionField::WalkSpeed, "walkSpeed", Verbatim, WhenPresent),
    ParamSpec::new(OptionField::DirectConnection, "directConnection", True, WhenPresent),
    ParamSpec::new(OptionField::EconomicConnection, "includeEconomic", True, WhenPresent),
    ParamSpec::new(OptionField::UnsharpConnection, "includeUnsharp", True, WhenPresent),
    ParamSpec::new(OptionField::ShowAccessibility, "showAccessibility", True, WhenPresent),
    ParamSpec::new(OptionField::HidePrices, "hidePrices", True, WhenPresent),
    ParamSpec::new(OptionField::AccessibilityFilters, "filterAccessibility", CommaJoined, WhenPresent),
    ParamSpec::new(OptionField::Occupancy, "occupancy", Verbatim, WhenPresent),
    ParamSpec::new(OptionField::Attributes, "attributes", CommaJoined, WhenPresent),
    ParamSpec::new(OptionField::Date, "date", Quoted, WhenPresent),
    ParamSpec::new(OptionField::Time, "time", Quoted, WhenPresent),
    ParamSpec::new(OptionField::Moment, "moment", Quoted, Always),
];

const MINIMAL: &[ParamSpec] = &[
    ParamSpec::new(OptionField::Date, "date", Quoted, WhenPresent),
    ParamSpec::new(OptionField::Time, "time", Quoted, WhenPresent),
    ParamSpec::new(OptionField::Moment, "moment", Quoted, Always),
];

/// Ordered list of query parameters following `stops`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSchema {
    specs: &'static [ParamSpec],
}

impl ParamSchema {
    /// Every trip option the advanced form offers.
    pub fn advanced() -> Self {
        Self { specs: ADVANCED }
    }

    /// Date, time and moment only.
    pub fn minimal() -> Self {
        Self { specs: MINIMAL }
    }

    pub fn specs(&self) -> &'static [ParamSpec] {
        self.specs
    }

    /// Render the full parameter tail for a snapshot.
    pub fn render(&self, options: &FormOptions) -> String {
        self.specs
            .iter()
            .filter_map(|spec| spec.render(options))
            .collect()
    }
}
