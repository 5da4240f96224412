//! Strong type definitions for chanmap.
//!
//! Identifiers and ranks are newtypes so a channel id can never be written
//! where a display position is expected.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Store string for audio+video services.
pub const SERVICE_TYPE_AUDIO_VIDEO: &str = "SERVICE_TYPE_AUDIO_VIDEO";

/// Store string for audio-only services.
pub const SERVICE_TYPE_AUDIO: &str = "SERVICE_TYPE_AUDIO";

/// The `_id` primary key of a channel row.
///
/// Stable for the lifetime of the database; never rewritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub i64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display position in the tuner's channel list.
///
/// Rendered as a bare decimal integer, which is what `display_number` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(pub i64);

impl Rank {
    /// The rank immediately after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service classification of a channel.
///
/// Decides which fallback band an unmatched channel lands in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ServiceType {
    AudioVideo,
    Audio,
    /// Anything else, with the raw store text preserved.
    Other(String),
}

impl ServiceType {
    /// Parse the `service_type` column value.
    pub fn from_store(value: &str) -> Self {
        match value {
            SERVICE_TYPE_AUDIO_VIDEO => Self::AudioVideo,
            SERVICE_TYPE_AUDIO => Self::Audio,
            other => Self::Other(other.to_string()),
        }
    }

    /// The `service_type` column value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AudioVideo => SERVICE_TYPE_AUDIO_VIDEO,
            Self::Audio => SERVICE_TYPE_AUDIO,
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `channels` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    /// Tuner/transport classification (`type` column), only used as a filter.
    pub tuner_type: String,
    pub service_type: ServiceType,
    /// Current rank exactly as stored; the column is text.
    pub display_number: String,
    /// Display name, the join key against the desired order. Not unique.
    pub name: String,
}

/// One record of the desired-order JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Order")]
    pub order: i64,
}

/// Channel name to wanted rank.
///
/// Several names may want the same rank; the resolver settles that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesiredOrder {
    ranks: HashMap<String, Rank>,
}

impl DesiredOrder {
    /// Create an empty desired order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records. A name listed twice keeps its last rank.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = OrderEntry>,
    {
        let ranks = entries
            .into_iter()
            .map(|entry| (entry.name, Rank(entry.order)))
            .collect();
        Self { ranks }
    }

    /// Decode the JSON array `[{"Name": .., "Order": ..}, ..]`.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let entries: Vec<OrderEntry> = serde_json::from_slice(bytes)?;
        Ok(Self::from_entries(entries))
    }

    /// Set the wanted rank for a name, replacing any earlier one.
    pub fn insert(&mut self, name: impl Into<String>, rank: Rank) {
        self.ranks.insert(name.into(), rank);
    }

    /// The wanted rank for a channel name, if listed.
    pub fn rank_for(&self, name: &str) -> Option<Rank> {
        self.ranks.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<OrderEntry> for DesiredOrder {
    fn from_iter<I: IntoIterator<Item = OrderEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Final rank to channel mapping.
///
/// A rank is claimed at most once. Iteration runs in rank order, though
/// nothing downstream depends on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankAssignment {
    claims: BTreeMap<Rank, ChannelId>,
}

impl RankAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `rank` for `id`.
    ///
    /// Returns `false` and leaves the assignment untouched if the rank is
    /// already taken.
    pub fn claim(&mut self, rank: Rank, id: ChannelId) -> bool {
        if self.claims.contains_key(&rank) {
            return false;
        }
        self.claims.insert(rank, id);
        true
    }

    pub fn is_claimed(&self, rank: Rank) -> bool {
        self.claims.contains_key(&rank)
    }

    /// The channel holding `rank`.
    pub fn get(&self, rank: Rank) -> Option<ChannelId> {
        self.claims.get(&rank).copied()
    }

    /// The rank assigned to `id`. Linear scan.
    pub fn rank_of(&self, id: ChannelId) -> Option<Rank> {
        self.claims
            .iter()
            .find_map(|(rank, claimed)| (*claimed == id).then_some(*rank))
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, ChannelId)> + '_ {
        self.claims.iter().map(|(rank, id)| (*rank, *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_roundtrip() {
        for raw in [SERVICE_TYPE_AUDIO_VIDEO, SERVICE_TYPE_AUDIO, "SERVICE_TYPE_DATA"] {
            assert_eq!(ServiceType::from_store(raw).as_str(), raw);
        }
        assert_eq!(
            ServiceType::from_store("SERVICE_TYPE_AUDIO"),
            ServiceType::Audio
        );
        assert_eq!(
            ServiceType::from_store("service_type_audio"),
            ServiceType::Other("service_type_audio".into())
        );
    }

    #[test]
    fn test_desired_order_from_json() {
        let json = br#"[{"Name": "BBC One", "Order": 1}, {"Name": "ITV", "Order": 3}]"#;
        let order = DesiredOrder::from_json(json).unwrap();
        assert_eq!(order.len(), 2);
        assert_eq!(order.rank_for("BBC One"), Some(Rank(1)));
        assert_eq!(order.rank_for("ITV"), Some(Rank(3)));
        assert_eq!(order.rank_for("Dave"), None);
    }

    #[test]
    fn test_desired_order_last_write_wins() {
        let json = br#"[{"Name": "BBC", "Order": 1}, {"Name": "BBC", "Order": 7}]"#;
        let order = DesiredOrder::from_json(json).unwrap();
        assert_eq!(order.len(), 1);
        assert_eq!(order.rank_for("BBC"), Some(Rank(7)));
    }

    #[test]
    fn test_desired_order_shared_rank_is_accepted() {
        let json = br#"[{"Name": "BBC", "Order": 1}, {"Name": "BBC HD", "Order": 1}]"#;
        let order = DesiredOrder::from_json(json).unwrap();
        assert_eq!(order.rank_for("BBC"), Some(Rank(1)));
        assert_eq!(order.rank_for("BBC HD"), Some(Rank(1)));
    }

    #[test]
    fn test_desired_order_rejects_malformed() {
        assert!(DesiredOrder::from_json(b"{\"Name\": \"BBC\"}").is_err());
        assert!(DesiredOrder::from_json(br#"[{"Name": "BBC", "Order": "one"}]"#).is_err());
        assert!(DesiredOrder::from_json(b"not json").is_err());
    }

    #[test]
    fn test_rank_assignment_claims_once() {
        let mut assignment = RankAssignment::new();
        assert!(assignment.claim(Rank(1), ChannelId(10)));
        assert!(!assignment.claim(Rank(1), ChannelId(11)));
        assert_eq!(assignment.get(Rank(1)), Some(ChannelId(10)));
        assert_eq!(assignment.rank_of(ChannelId(10)), Some(Rank(1)));
        assert_eq!(assignment.rank_of(ChannelId(11)), None);
        assert_eq!(assignment.len(), 1);
    }

    #[test]
    fn test_rank_display_is_bare_integer() {
        assert_eq!(Rank(1000).to_string(), "1000");
        assert_eq!(Rank(7).next(), Rank(8));
    }
}
