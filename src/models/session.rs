use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One day of driving work ("corrida").
///
/// Field names on the wire are the legacy ones written by the browser
/// version, so existing `corridas` blobs load without conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    #[serde(deserialize_with = "id_text")]
    pub id: String,

    /// ISO-8601 text. Kept as text: a corrupt value must not break loading.
    #[serde(rename = "data")]
    pub date: String,

    #[serde(rename = "horasTrabalhadas", default, deserialize_with = "amount")]
    pub hours_worked: f64,

    #[serde(rename = "kmRodados", default, deserialize_with = "amount")]
    pub distance_km: f64,

    /// Derived from `distance_km` and the vehicle profile at save time.
    #[serde(rename = "gastoGasolina", default, deserialize_with = "amount")]
    pub fuel_cost: f64,

    #[serde(rename = "quantidadeViagens", default, deserialize_with = "count")]
    pub trip_count: u32,

    #[serde(rename = "ganhoBruto", default, deserialize_with = "amount")]
    pub gross_earnings: f64,
}

impl WorkSession {
    /// Parsed timestamp, `None` when the stored text is not RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).ok()
    }

    /// `YYYY-MM-DD` of the stored instant (UTC), or the raw text when unparsable.
    pub fn date_str(&self) -> String {
        match self.timestamp() {
            Some(ts) => ts.naive_utc().date().format("%Y-%m-%d").to_string(),
            None => self.date.clone(),
        }
    }
}

// Records written by the browser version are loosely typed: `null` for a
// non-finite number, numeric strings, fractional counts.

fn number(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn amount<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(number(&Value::deserialize(d)?))
}

fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let n = number(&Value::deserialize(d)?).trunc();
    Ok(if n <= 0.0 {
        0
    } else if n >= u32::MAX as f64 {
        u32::MAX
    } else {
        n as u32
    })
}

/// Ids were `Date.now()` strings, but numeric ids are accepted too.
fn id_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a text or numeric id, got {other}"
        ))),
    }
}
