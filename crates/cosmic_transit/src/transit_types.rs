//! Types for transit entries and snapshots.

use std::fmt::{Display, Formatter};

use cosmic_zodiac::{Element, ZodiacSign};
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// One body's placement. Field names match the remote transit API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitEntry {
    pub body: Body,
    pub sign: ZodiacSign,
    /// Whole degree within the sign, 0..=29.
    pub degree: u8,
    pub is_retrograde: bool,
    pub element: Element,
}

impl Display for TransitEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<8} {:<12} {:>2}\u{b0} {:<5}",
            self.body.name(),
            self.sign.name(),
            self.degree,
            self.element.name()
        )?;
        if self.is_retrograde {
            f.write_str(" R")?;
        }
        Ok(())
    }
}

/// An ordered list of transit entries.
///
/// Local snapshots always hold the ten bodies in
/// [`SNAPSHOT_ORDER`](crate::SNAPSHOT_ORDER); remote ones hold whatever the
/// source sent after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitSnapshot(Vec<TransitEntry>);

impl TransitSnapshot {
    pub fn new(entries: Vec<TransitEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[TransitEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransitEntry> {
        self.0.iter()
    }

    /// First entry for `body`, if present.
    pub fn get(&self, body: Body) -> Option<&TransitEntry> {
        self.0.iter().find(|e| e.body == body)
    }

    pub fn into_entries(self) -> Vec<TransitEntry> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TransitSnapshot {
    type Item = &'a TransitEntry;
    type IntoIter = std::slice::Iter<'a, TransitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which path produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitOrigin {
    Remote,
    Local,
}

impl TransitOrigin {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

impl Display for TransitOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of the remote-then-local orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitFetch {
    pub origin: TransitOrigin,
    pub snapshot: TransitSnapshot,
}
