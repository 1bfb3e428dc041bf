use thiserror::Error;

/// Conditions raised while turning one hand-history record into snapshots.
///
/// `MalformedRecord`, `FieldType` and `MisalignedField` reject the whole record.
/// The remaining variants are soft: the offending token or action is skipped and
/// the condition is reported alongside the output so callers can count it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Malformed record: no key=value lines")]
    MalformedRecord,
    #[error("Field '{field}' has the wrong type (expected {expected})")]
    FieldType {
        field: String,
        expected: &'static str,
    },
    #[error("Field '{field}' has {len} entries but there are {players} players")]
    MisalignedField {
        field: String,
        len: usize,
        players: usize,
    },
    #[error("Action references seat p{label} outside the {players}-player table", label = .seat + 1)]
    UnknownPlayer { seat: usize, players: usize },
    #[error("Malformed card token: '{token}'")]
    MalformedCardToken { token: String },
    #[error("Unrecognised action token: '{token}'")]
    MalformedActionToken { token: String },
    #[error("Player {player} was never dealt hole cards")]
    IncompleteHand { player: String },
}

impl HandError {
    /// True when the condition aborts processing of its record.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            HandError::MalformedRecord | HandError::FieldType { .. } | HandError::MisalignedField { .. }
        )
    }
}
