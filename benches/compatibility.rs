use criterion::{criterion_group, criterion_main, Criterion};

use wfc_core::socket::Socket;
use wfc_core::{CatalogConfig, TileCatalog};

fn build_catalog(tile_capacity: usize) -> TileCatalog {
    let mut catalog = TileCatalog::new(CatalogConfig {
        tile_capacity,
        direction_count: 4,
        socket_count_per_direction: 3,
    })
    .unwrap();

    let variety = (tile_capacity / 4).max(1);
    for i in 0..variety {
        let v = (i % 8) as u8;
        let sockets = [
            Socket::pack_many(&[v, 1, 0]),
            Socket::pack_many(&[0, v, 1]),
            Socket::pack_many(&[1, 0, v]),
            Socket::pack_many(&[v, v, v]),
        ];
        if catalog.add(i as u32, &sockets, 3).is_err() {
            break;
        }
    }
    catalog
}

fn compute_compatibility_64(c: &mut Criterion) {
    let mut catalog = build_catalog(64);
    c.bench_function("compute_compatibility_64_tiles", |b| {
        b.iter(|| {
            catalog.compute_compatibility().unwrap();
        })
    });
}

fn compute_compatibility_255(c: &mut Criterion) {
    let mut catalog = build_catalog(255);
    c.bench_function("compute_compatibility_255_tiles", |b| {
        b.iter(|| {
            catalog.compute_compatibility().unwrap();
        })
    });
}

criterion_group!(compatibility_bench, compute_compatibility_64, compute_compatibility_255);
criterion_main!(compatibility_bench);
