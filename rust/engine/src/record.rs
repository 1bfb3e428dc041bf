//! Record parsing for the line-oriented `key=value` hand-history format.
//!
//! [`parse_record`] is a key-agnostic decoder: every line containing `=` becomes one
//! field, typed by the same ordered rule set regardless of its name. [`HandRecord`]
//! then pulls the fields the replay needs out of the resulting [`FieldMap`].
//!
//! ```
//! use phhforge_engine::record::{parse_record, FieldValue};
//!
//! let fields = parse_record("hand = 7\nplayers = ['p1', 'p2']\nstarting_stacks = [100, 200]").unwrap();
//! assert_eq!(fields["hand"], FieldValue::Int(7));
//! assert_eq!(fields["starting_stacks"], FieldValue::IntList(vec![100, 200]));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::HandError;

/// A typed field value.
///
/// Bracketed lists are either all integers or all strings; an empty list `[]`
/// decodes as an empty `IntList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(u64),
    Bool(bool),
    Str(String),
    IntList(Vec<u64>),
    StrList(Vec<String>),
}

impl FieldValue {
    fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Str(_) => "string",
            FieldValue::IntList(_) => "integer list",
            FieldValue::StrList(_) => "string list",
        }
    }
}

/// Field name to decoded value. Later duplicates of a key overwrite earlier ones.
pub type FieldMap = BTreeMap<String, FieldValue>;

type ValueRule = fn(&str) -> Option<FieldValue>;

// First match wins; anything left over stays a raw string.
const VALUE_RULES: [ValueRule; 4] = [decode_list, decode_int, decode_bool, decode_quoted];

/// Parses the full text of one record into a [`FieldMap`].
///
/// # Errors
///
/// Returns [`HandError::MalformedRecord`] when no line contains `=`.
pub fn parse_record(text: &str) -> Result<FieldMap, HandError> {
    let mut fields = FieldMap::new();
    let mut saw_assignment = false;
    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        saw_assignment = true;
        fields.insert(key.trim().to_string(), parse_value(value.trim()));
    }
    if !saw_assignment {
        return Err(HandError::MalformedRecord);
    }
    tracing::trace!(fields = fields.len(), "parsed record");
    Ok(fields)
}

/// Types one already-trimmed value string.
pub fn parse_value(raw: &str) -> FieldValue {
    VALUE_RULES
        .iter()
        .find_map(|rule| rule(raw))
        .unwrap_or_else(|| FieldValue::Str(raw.to_string()))
}

fn decode_list(raw: &str) -> Option<FieldValue> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    if inner.trim().is_empty() {
        return Some(FieldValue::IntList(Vec::new()));
    }
    let items: Vec<&str> = inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"'))
        .collect();
    let ints: Option<Vec<u64>> = items.iter().map(|item| decode_digits(item)).collect();
    Some(match ints {
        Some(ints) => FieldValue::IntList(ints),
        None => FieldValue::StrList(items.into_iter().map(str::to_string).collect()),
    })
}

fn decode_int(raw: &str) -> Option<FieldValue> {
    decode_digits(raw).map(FieldValue::Int)
}

fn decode_bool(raw: &str) -> Option<FieldValue> {
    if raw.eq_ignore_ascii_case("true") {
        Some(FieldValue::Bool(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Some(FieldValue::Bool(false))
    } else {
        None
    }
}

fn decode_quoted(raw: &str) -> Option<FieldValue> {
    let inner = raw.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(FieldValue::Str(inner.to_string()))
}

fn decode_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// The fields of one hand that the replay consumes.
///
/// `starting_stacks`, `finishing_stacks` and `antes`, when non-empty, have one
/// entry per player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand: Option<u64>,
    pub players: Vec<String>,
    pub starting_stacks: Vec<u64>,
    pub finishing_stacks: Option<Vec<u64>>,
    pub blinds_or_straddles: Vec<u64>,
    pub antes: Vec<u64>,
    pub variant: Option<String>,
    /// Raw action tokens, in order.
    pub actions: Vec<String>,
}

impl HandRecord {
    /// Parses record text straight into a `HandRecord`.
    pub fn parse(text: &str) -> Result<Self, HandError> {
        Self::from_fields(&parse_record(text)?)
    }

    /// Extracts the known fields. Missing fields default to empty.
    ///
    /// # Errors
    ///
    /// [`HandError::FieldType`] when a known field has an incompatible type and
    /// [`HandError::MisalignedField`] when a per-player list does not match the
    /// player count.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, HandError> {
        let players = str_list(fields, "players")?;
        let record = Self {
            hand: int(fields, "hand")?,
            starting_stacks: int_list(fields, "starting_stacks")?,
            finishing_stacks: fields
                .contains_key("finishing_stacks")
                .then(|| int_list(fields, "finishing_stacks"))
                .transpose()?,
            blinds_or_straddles: int_list(fields, "blinds_or_straddles")?,
            antes: int_list(fields, "antes")?,
            variant: string(fields, "variant")?,
            actions: str_list(fields, "actions")?,
            players,
        };
        record.check_alignment()?;
        Ok(record)
    }

    fn check_alignment(&self) -> Result<(), HandError> {
        let per_player = [
            ("starting_stacks", Some(&self.starting_stacks)),
            ("finishing_stacks", self.finishing_stacks.as_ref()),
            ("antes", Some(&self.antes)),
        ];
        for (field, list) in per_player {
            let Some(list) = list else { continue };
            if !list.is_empty() && list.len() != self.players.len() {
                return Err(HandError::MisalignedField {
                    field: field.to_string(),
                    len: list.len(),
                    players: self.players.len(),
                });
            }
        }
        Ok(())
    }

    /// Index of a named player in `players`.
    pub fn seat_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }
}

fn wrong_type(field: &str, expected: &'static str) -> HandError {
    HandError::FieldType {
        field: field.to_string(),
        expected,
    }
}

fn int(fields: &FieldMap, name: &str) -> Result<Option<u64>, HandError> {
    match fields.get(name) {
        None => Ok(None),
        Some(FieldValue::Int(v)) => Ok(Some(*v)),
        Some(_) => Err(wrong_type(name, "integer")),
    }
}

fn string(fields: &FieldMap, name: &str) -> Result<Option<String>, HandError> {
    match fields.get(name) {
        None => Ok(None),
        Some(FieldValue::Str(s)) => Ok(Some(s.clone())),
        Some(FieldValue::Int(v)) => Ok(Some(v.to_string())),
        Some(other) => {
            tracing::debug!(field = name, found = other.type_name(), "string field mistyped");
            Err(wrong_type(name, "string"))
        }
    }
}

fn int_list(fields: &FieldMap, name: &str) -> Result<Vec<u64>, HandError> {
    match fields.get(name) {
        None => Ok(Vec::new()),
        Some(FieldValue::IntList(v)) => Ok(v.clone()),
        Some(_) => Err(wrong_type(name, "integer list")),
    }
}

fn str_list(fields: &FieldMap, name: &str) -> Result<Vec<String>, HandError> {
    match fields.get(name) {
        None => Ok(Vec::new()),
        Some(FieldValue::StrList(v)) => Ok(v.clone()),
        Some(FieldValue::IntList(v)) => Ok(v.iter().map(u64::to_string).collect()),
        Some(_) => Err(wrong_type(name, "string list")),
    }
}
