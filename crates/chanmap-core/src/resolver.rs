//! Rank resolution: desired order plus current channel list to final ranks.
//!
//! Channels are visited in the order the store returned them (ascending
//! current rank). A channel takes its desired rank if it has one and nobody
//! earlier took it. Everything else goes to the fallback band of its service
//! type, handed out in encounter order.
//!
//! A band counter steps over ranks that are already claimed, so no channel is
//! ever dropped. It does not look ahead: a desired rank inside a band that a
//! later channel wants can be taken by the counter first, and that later
//! channel then falls back too. Keep desired ranks below
//! [`FallbackBases::audio_video`].

use tracing::debug;

use crate::types::{Channel, DesiredOrder, Rank, RankAssignment, ServiceType};

/// First rank of each fallback band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackBases {
    pub audio_video: Rank,
    pub audio: Rank,
    pub other: Rank,
}

impl Default for FallbackBases {
    fn default() -> Self {
        Self {
            audio_video: Rank(200),
            audio: Rank(1000),
            other: Rank(1500),
        }
    }
}

/// Next free rank in each fallback band.
#[derive(Debug)]
struct FallbackCounters {
    audio_video: Rank,
    audio: Rank,
    other: Rank,
}

impl FallbackCounters {
    fn new(bases: FallbackBases) -> Self {
        Self {
            audio_video: bases.audio_video,
            audio: bases.audio,
            other: bases.other,
        }
    }

    /// Take the next unclaimed rank of the band for `service_type`.
    fn take(&mut self, service_type: &ServiceType, claimed: &RankAssignment) -> Rank {
        let counter = match service_type {
            ServiceType::AudioVideo => &mut self.audio_video,
            ServiceType::Audio => &mut self.audio,
            ServiceType::Other(_) => &mut self.other,
        };
        while claimed.is_claimed(*counter) {
            *counter = counter.next();
        }
        let rank = *counter;
        *counter = rank.next();
        rank
    }
}

/// Resolve the final rank of every channel.
///
/// `channels` must already be filtered and sorted by ascending current rank;
/// that order breaks ties between channels wanting the same rank and fixes
/// the order fallback ranks are handed out in.
pub fn resolve(
    channels: &[Channel],
    desired: &DesiredOrder,
    bases: FallbackBases,
) -> RankAssignment {
    let mut assignment = RankAssignment::new();
    let mut counters = FallbackCounters::new(bases);

    for channel in channels {
        if let Some(rank) = desired.rank_for(&channel.name) {
            if assignment.claim(rank, channel.id) {
                continue;
            }
            debug!(
                id = %channel.id,
                name = %channel.name,
                %rank,
                "desired rank already claimed, falling back"
            );
        }

        let rank = counters.take(&channel.service_type, &assignment);
        debug!(
            id = %channel.id,
            name = %channel.name,
            service_type = %channel.service_type,
            %rank,
            "assigned fallback rank"
        );
        let claimed = assignment.claim(rank, channel.id);
        debug_assert!(claimed, "fallback counter returned a claimed rank");
    }

    assignment
}
