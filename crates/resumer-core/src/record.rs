//! The analysis record and its validating JSON boundary.
//!
//! An analysis engine hands back a JSON document. Nothing about its shape is
//! trusted: [`AnalysisRecord::from_json`] parses it into an untyped form,
//! checks every score range and the sections mapping, and only then builds
//! the typed record the results view renders.
//!
//! Section order is significant (cards are rendered in the order the engine
//! emitted them), so `serde_json` is built with `preserve_order`.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::score::Score;

/// Reasons an analysis payload is rejected at the boundary.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("malformed analysis payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{field} score {value} is outside 0..=100")]
    ScoreOutOfRange { field: String, value: i64 },
    #[error("analysis has no sections")]
    EmptySections,
}

/// One scored section of a resume (e.g. "headline", "summary").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub score: Score,
    pub feedback: String,
}

impl Section {
    /// Section name with its first letter upper-cased, for card titles.
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A validated analysis of one resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub overall_score: Score,
    /// In the order the analysis engine emitted them.
    pub sections: Vec<Section>,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    #[serde(alias = "overall_score")]
    overall_score: i64,
    sections: Map<String, Value>,
    recommendations: Vec<String>,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

#[derive(Deserialize)]
struct RawSection {
    score: i64,
    feedback: String,
}

impl AnalysisRecord {
    /// Parse and validate a JSON analysis payload.
    pub fn from_json(payload: &str) -> Result<Self, SchemaError> {
        let raw: RawAnalysis = serde_json::from_str(payload)?;
        Self::validate(raw)
    }

    /// Validate an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let raw: RawAnalysis = serde_json::from_value(value)?;
        Self::validate(raw)
    }

    fn validate(raw: RawAnalysis) -> Result<Self, SchemaError> {
        let overall_score = score_in_range("overallScore", raw.overall_score)?;

        if raw.sections.is_empty() {
            return Err(SchemaError::EmptySections);
        }

        let mut sections = Vec::with_capacity(raw.sections.len());
        for (name, body) in raw.sections {
            let body: RawSection = serde_json::from_value(body)?;
            let score = score_in_range(&format!("sections.{name}"), body.score)?;
            sections.push(Section {
                name,
                score,
                feedback: body.feedback,
            });
        }

        Ok(Self {
            overall_score,
            sections,
            recommendations: raw.recommendations,
            strengths: raw.strengths,
            improvements: raw.improvements,
        })
    }

    /// Serialize back to the camel-case wire shape.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

fn score_in_range(field: &str, value: i64) -> Result<Score, SchemaError> {
    Score::new(value).ok_or_else(|| SchemaError::ScoreOutOfRange {
        field: field.to_string(),
        value,
    })
}

impl Serialize for AnalysisRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("AnalysisRecord", 5)?;
        st.serialize_field("overallScore", &self.overall_score.value())?;
        st.serialize_field("sections", &SectionMap(&self.sections))?;
        st.serialize_field("recommendations", &self.recommendations)?;
        st.serialize_field("strengths", &self.strengths)?;
        st.serialize_field("improvements", &self.improvements)?;
        st.end()
    }
}

struct SectionMap<'a>(&'a [Section]);

#[derive(Serialize)]
struct SectionBody<'a> {
    score: u8,
    feedback: &'a str,
}

impl Serialize for SectionMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for section in self.0 {
            map.serialize_entry(
                &section.name,
                &SectionBody {
                    score: section.score.value(),
                    feedback: &section.feedback,
                },
            )?;
        }
        map.end()
    }
}
