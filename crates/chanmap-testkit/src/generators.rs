//! Proptest generators for property-based testing.

use proptest::prelude::*;

use chanmap_core::{Channel, ChannelId, DesiredOrder, OrderEntry, ServiceType};

/// Names drawn from a small pool so duplicate names are common.
const NAMES: &[&str] = &[
    "BBC One", "BBC Two", "ITV", "Channel 4", "Dave", "Film4", "Radio X", "Heart", "Guide",
];

/// Generate a service type, mostly audio+video like a real lineup.
pub fn service_type() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        6 => Just(ServiceType::AudioVideo),
        3 => Just(ServiceType::Audio),
        1 => Just(ServiceType::Other("SERVICE_TYPE_DATA".to_string())),
    ]
}

/// Generate a channel name.
pub fn channel_name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

/// Generate up to `max_len` satellite channels with unique ids.
///
/// The list is sorted by display number, as the store would return it.
pub fn channel_list(max_len: usize) -> impl Strategy<Value = Vec<Channel>> {
    prop::collection::vec((channel_name(), service_type(), 1u32..500), 0..=max_len).prop_map(
        |rows| {
            let mut channels: Vec<Channel> = rows
                .into_iter()
                .enumerate()
                .map(|(i, (name, service_type, number))| Channel {
                    id: ChannelId(i as i64 + 1),
                    tuner_type: "TYPE_DVB_S2".to_string(),
                    service_type,
                    display_number: number.to_string(),
                    name,
                })
                .collect();
            channels.sort_by(|a, b| {
                a.display_number
                    .cmp(&b.display_number)
                    .then(a.id.cmp(&b.id))
            });
            channels
        },
    )
}

/// Generate desired-order records, including repeated names and shared ranks.
pub fn order_entries(max_len: usize) -> impl Strategy<Value = Vec<OrderEntry>> {
    prop::collection::vec((channel_name(), 1i64..30), 0..=max_len).prop_map(|rows| {
        rows.into_iter()
            .map(|(name, order)| OrderEntry { name, order })
            .collect()
    })
}

/// A channel list together with a desired order.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub channels: Vec<Channel>,
    pub entries: Vec<OrderEntry>,
}

impl Scenario {
    pub fn desired(&self) -> DesiredOrder {
        DesiredOrder::from_entries(self.entries.clone())
    }
}

impl Arbitrary for Scenario {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (channel_list(40), order_entries(12))
            .prop_map(|(channels, entries)| Scenario { channels, entries })
            .boxed()
    }
}
