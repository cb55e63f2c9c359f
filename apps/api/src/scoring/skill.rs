//! Skill normalization: one canonical lowercase name per skill entry,
//! whatever shape the client sent.
//!
//! Jobs created through older clients stored skills as bare strings or as
//! `{ "skillName": ..., "rating": ... }`; the current schema is
//! `{ "name": ..., "rating": ... }`. All three deserialize into
//! [`SkillEntry`], and anything unusable normalizes to `None` instead of
//! failing the request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single skill entry as it appears on a job or an application.
///
/// Deserialization tries the variants top to bottom; `Other` absorbs any
/// malformed entry (null, empty object, a number) so one bad element never
/// rejects the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Structured(StructuredSkill),
    Legacy(LegacySkill),
    Name(String),
    Other(Value),
}

/// Current skill shape: `{ "name": "Rust", "rating": 4 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredSkill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Legacy skill shape: `{ "skillName": "Go", "rating": 2 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySkill {
    #[serde(rename = "skillName")]
    pub skill_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl SkillEntry {
    /// Canonical matching key: lowercase, trimmed. `None` when the entry
    /// carries no usable name (empty string, malformed object).
    pub fn normalized_name(&self) -> Option<String> {
        let raw = match self {
            SkillEntry::Structured(s) => s.name.as_str(),
            SkillEntry::Legacy(s) => s.skill_name.as_str(),
            SkillEntry::Name(s) => s.as_str(),
            SkillEntry::Other(_) => return None,
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_lowercase())
    }

    /// The 1-5 weight attached to the entry. A missing rating defaults to
    /// 1; out-of-range values pass through untouched, validation being the
    /// caller's concern.
    pub fn rating(&self) -> u32 {
        let rating = match self {
            SkillEntry::Structured(s) => s.rating,
            SkillEntry::Legacy(s) => s.rating,
            SkillEntry::Name(_) | SkillEntry::Other(_) => None,
        };
        rating.map(u32::from).unwrap_or(1)
    }
}

/// Normalizes a whole skill list into `(name, weight)` pairs, dropping
/// entries with no usable name. Dropped entries never count toward a
/// scoring denominator.
pub fn normalized_skills(entries: &[SkillEntry]) -> Vec<(String, u32)> {
    entries
        .iter()
        .filter_map(|e| e.normalized_name().map(|name| (name, e.rating())))
        .collect()
}
