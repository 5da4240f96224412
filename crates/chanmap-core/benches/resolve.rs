use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chanmap_core::sidecar::patch_checksum;
use chanmap_core::{
    resolve, Channel, ChannelId, Checksum, ChecksumPair, DesiredOrder, FallbackBases, OrderEntry,
    ServiceType,
};

fn satellite_lineup(n: usize) -> Vec<Channel> {
    (0..n)
        .map(|i| Channel {
            id: ChannelId(i as i64 + 1),
            tuner_type: "TYPE_DVB_S2".into(),
            service_type: match i % 5 {
                0 | 1 | 2 => ServiceType::AudioVideo,
                3 => ServiceType::Audio,
                _ => ServiceType::Other("SERVICE_TYPE_DATA".into()),
            },
            display_number: (i + 1).to_string(),
            name: format!("Channel {}", i % (n / 2).max(1)),
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let channels = satellite_lineup(2_000);
    let desired: DesiredOrder = (0..150)
        .map(|i| OrderEntry {
            name: format!("Channel {}", i * 3),
            order: i + 1,
        })
        .collect();

    c.bench_function("resolve 2000 channels", |b| {
        b.iter(|| resolve(black_box(&channels), black_box(&desired), FallbackBases::default()))
    });
}

fn bench_sidecar_patch(c: &mut Criterion) {
    let content: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let pair = ChecksumPair::new(Checksum(0x0201), Checksum(0xbeef));

    c.bench_function("patch 64KiB sidecar", |b| {
        b.iter(|| patch_checksum(black_box(&content), black_box(&pair)))
    });
}

criterion_group!(benches, bench_resolve, bench_sidecar_patch);
criterion_main!(benches);
