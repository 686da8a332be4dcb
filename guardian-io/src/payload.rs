//! Payload parsing as an ordered chain of strategies.
//!
//! Each strategy either yields a field map or a [`PayloadError`] meaning
//! "try the next one". The default chain ends with [`RawText`], which
//! cannot fail, so parsing a payload never aborts a run.

use guardian_core::constants;
use guardian_core::errors::PayloadError;
use guardian_core::models::FieldMap;
use serde::Serialize;
use serde_json::Value;

/// Which strategy produced the field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSource {
    Empty,
    Json,
    QuoteNormalized,
    Raw,
}

impl PayloadSource {
    /// True for every source other than a clean parse.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::QuoteNormalized | Self::Raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPayload {
    pub fields: FieldMap,
    pub source: PayloadSource,
}

pub trait PayloadStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn source(&self) -> PayloadSource;
    fn parse(&self, raw: &str) -> Result<FieldMap, PayloadError>;
}

/// An empty cell is an empty record.
pub struct EmptyPayload;

impl PayloadStrategy for EmptyPayload {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::Empty
    }

    fn parse(&self, raw: &str) -> Result<FieldMap, PayloadError> {
        if raw.is_empty() {
            Ok(FieldMap::new())
        } else {
            Err(PayloadError::NotApplicable {
                strategy: self.name(),
            })
        }
    }
}

/// The payload as-is must be a JSON object.
pub struct StrictJson;

impl PayloadStrategy for StrictJson {
    fn name(&self) -> &'static str {
        "strict_json"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::Json
    }

    fn parse(&self, raw: &str) -> Result<FieldMap, PayloadError> {
        parse_object(self.name(), raw)
    }
}

/// Single-quoted pseudo-JSON: every `'` becomes `"` before parsing.
pub struct QuoteNormalizedJson;

impl PayloadStrategy for QuoteNormalizedJson {
    fn name(&self) -> &'static str {
        "quote_normalized_json"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::QuoteNormalized
    }

    fn parse(&self, raw: &str) -> Result<FieldMap, PayloadError> {
        if !raw.contains('\'') {
            return Err(PayloadError::NotApplicable {
                strategy: self.name(),
            });
        }
        parse_object(self.name(), &raw.replace('\'', "\""))
    }
}

/// Last resort: the whole text becomes a single `_raw` field.
pub struct RawText;

impl PayloadStrategy for RawText {
    fn name(&self) -> &'static str {
        "raw_text"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::Raw
    }

    fn parse(&self, raw: &str) -> Result<FieldMap, PayloadError> {
        Ok(raw_fields(raw))
    }
}

fn raw_fields(raw: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert(constants::RAW_FIELD.to_string(), Value::String(raw.to_string()));
    fields
}

fn parse_object(strategy: &'static str, text: &str) -> Result<FieldMap, PayloadError> {
    let value: Value = serde_json::from_str(text).map_err(|e| PayloadError::Malformed {
        strategy,
        reason: e.to_string(),
    })?;
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(not_an_object(strategy, "null")),
        Value::Bool(_) => Err(not_an_object(strategy, "bool")),
        Value::Number(_) => Err(not_an_object(strategy, "number")),
        Value::String(_) => Err(not_an_object(strategy, "string")),
        Value::Array(_) => Err(not_an_object(strategy, "array")),
    }
}

fn not_an_object(strategy: &'static str, found: &'static str) -> PayloadError {
    PayloadError::NotAnObject { strategy, found }
}

/// Runs the strategies in order and returns the first success.
pub struct PayloadParser {
    strategies: Vec<Box<dyn PayloadStrategy>>,
}

impl PayloadParser {
    /// Empty → strict JSON → quote-normalized JSON → raw text.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(EmptyPayload),
            Box::new(StrictJson),
            Box::new(QuoteNormalizedJson),
            Box::new(RawText),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn PayloadStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn parse(&self, raw: &str) -> ParsedPayload {
        for strategy in &self.strategies {
            match strategy.parse(raw) {
                Ok(fields) => {
                    let source = strategy.source();
                    if source == PayloadSource::Raw {
                        tracing::warn!(len = raw.len(), "payload unparseable; kept as raw text");
                    }
                    return ParsedPayload { fields, source };
                }
                Err(PayloadError::NotApplicable { .. }) => {}
                Err(e) => tracing::debug!(error = %e, "payload strategy failed"),
            }
        }
        // Only reachable with a custom chain that lacks a catch-all.
        ParsedPayload {
            fields: raw_fields(raw),
            source: PayloadSource::Raw,
        }
    }
}

impl Default for PayloadParser {
    fn default() -> Self {
        Self::new()
    }
}
