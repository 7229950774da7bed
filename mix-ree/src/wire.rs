//! Wire format of the REE `estructura-generacion` endpoint and its
//! classification into snapshots or errors.

use std::collections::BTreeMap;

use mix_core::{GenerationSnapshot, MixError, RegionQuery, RequestWindow, SourceValue};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use url::Url;

use crate::ReeConnector;

#[derive(Debug, Deserialize)]
struct ReeBody {
    #[serde(default)]
    errors: Option<Vec<ReeErrorItem>>,
    #[serde(default)]
    included: Vec<Included>,
}

#[derive(Debug, Deserialize)]
struct ReeErrorItem {
    #[serde(deserialize_with = "lenient_code")]
    code: i64,
    #[serde(default)]
    detail: String,
}

#[derive(Debug, Deserialize)]
struct Included {
    #[serde(rename = "type")]
    kind: String,
    attributes: Attributes,
}

#[derive(Debug, Deserialize)]
struct Attributes {
    #[serde(default)]
    values: Vec<ReeValue>,
}

#[derive(Debug, Deserialize)]
struct ReeValue {
    // MWh
    value: f64,
    // 0-1
    #[serde(default)]
    percentage: f64,
}

// REE sends numeric codes; tolerate them arriving as strings.
fn lenient_code<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom("non-integer error code")),
        serde_json::Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("unexpected error code {other}"))),
    }
}

/// Build the query URL for one region and window.
pub(crate) fn query_url(
    base: &Url,
    geo_trunc: &str,
    region: &RegionQuery,
    window: &RequestWindow,
) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("start_date", &window.start_param())
        .append_pair("end_date", &window.end_param())
        .append_pair("time_trunc", window.granularity().as_trunc())
        .append_pair("geo_trunc", geo_trunc)
        .append_pair("geo_limit", &region.scope)
        .append_pair("geo_ids", &region.id.to_string());
    url
}

/// Classify a response body.
///
/// - An `errors` list: the first entry decides. `no_data_code` maps to
///   `NoDataForWindow` carrying the window label; anything else is `Upstream`
///   with the upstream detail.
/// - Otherwise each `included` entry yields one source keyed by its lower-cased
///   type, converted from MWh to GWh and from a 0-1 fraction to 0-100.
pub(crate) fn classify(
    body: &str,
    window: &RequestWindow,
    no_data_code: i64,
) -> Result<GenerationSnapshot, MixError> {
    let decoded: ReeBody = serde_json::from_str(body).map_err(|e| {
        MixError::transport(ReeConnector::NAME, format!("invalid response body: {e}"))
    })?;

    if let Some(errors) = decoded.errors {
        let first = errors
            .into_iter()
            .next()
            .ok_or_else(|| MixError::Data("upstream returned an empty error list".into()))?;
        if first.code == no_data_code {
            return Err(MixError::no_data(window.label(), first.code));
        }
        return Err(MixError::upstream(first.code, first.detail));
    }

    let mut sources = BTreeMap::new();
    for inc in decoded.included {
        // One window per query: the values array has exactly one element.
        let v = inc.attributes.values.first().ok_or_else(|| {
            MixError::Data(format!("no values for generation type '{}'", inc.kind))
        })?;
        sources.insert(
            inc.kind.to_lowercase(),
            SourceValue::new(v.value / 1000.0, 100.0 * v.percentage),
        );
    }
    GenerationSnapshot::new(sources)
}
