//! Wire types for the baseball-stats payload.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// Keep a stat only when the wire value is a JSON number.
fn de_number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_f64())
}

/// Names come through as-is: strings verbatim, numbers as their JSON text,
/// anything else as empty.
fn de_display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn de_player_id<'de, D>(deserializer: D) -> Result<Option<PlayerId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) => Some(PlayerId::Text(s)),
        Value::Number(n) => Some(PlayerId::Number(n)),
        _ => None,
    })
}

/// Identifier used to locate a player's plot image.
///
/// The backend has sent both string and numeric ids over time, so both are
/// accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerId {
    Text(String),
    Number(Number),
}

impl PlayerId {
    /// Whether this id should produce an image: non-empty text or a non-zero number.
    pub fn is_truthy(&self) -> bool {
        match self {
            PlayerId::Text(s) => !s.is_empty(),
            PlayerId::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Text(s) => write!(f, "{}", s),
            PlayerId::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{}", i)
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{}", u)
                } else {
                    match n.as_f64() {
                        // 12.0 prints as "12"
                        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                            write!(f, "{}", v as i64)
                        }
                        Some(v) => write!(f, "{}", v),
                        None => write!(f, "{}", n),
                    }
                }
            }
        }
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlayerId::Text(s) => serializer.serialize_str(s),
            PlayerId::Number(n) => n.serialize(serializer),
        }
    }
}

/// One entry of the `players` array.
///
/// No field is required; missing or mistyped values become absent rather
/// than failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerStat {
    #[serde(default, deserialize_with = "de_display_text")]
    pub player_name: String,
    #[serde(
        default,
        deserialize_with = "de_number_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub rolling_woba: Option<f64>,
    #[serde(
        rename = "diff_rolling_OBA",
        default,
        deserialize_with = "de_number_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub diff_rolling_oba: Option<f64>,
    #[serde(
        default,
        deserialize_with = "de_player_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub player_id: Option<PlayerId>,
}

impl PlayerStat {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    pub fn with_rolling_woba(mut self, value: f64) -> Self {
        self.rolling_woba = Some(value);
        self
    }

    pub fn with_diff_rolling_oba(mut self, value: f64) -> Self {
        self.diff_rolling_oba = Some(value);
        self
    }

    pub fn with_player_id(mut self, id: PlayerId) -> Self {
        self.player_id = Some(id);
        self
    }

    /// The id to build an image URL from, if it is truthy.
    pub fn image_id(&self) -> Option<&PlayerId> {
        self.player_id.as_ref().filter(|id| id.is_truthy())
    }
}

/// Deserialize a `players` array element by element without rejecting odd
/// entries. Anything that is not an object still takes a rank, with every
/// field absent.
pub(crate) fn players_from_array(items: Vec<Value>) -> Vec<PlayerStat> {
    items
        .into_iter()
        .map(|item| {
            if item.is_object() {
                serde_json::from_value(item).unwrap_or_default()
            } else {
                PlayerStat::default()
            }
        })
        .collect()
}
