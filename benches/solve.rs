use criterion::{criterion_group, criterion_main, Criterion};

use wfc_core::socket::Socket;
use wfc_core::{CatalogConfig, Grid, Solver, TileCatalog};

fn sample_catalog() -> TileCatalog {
    let mut catalog = TileCatalog::new(CatalogConfig {
        tile_capacity: 5,
        direction_count: 4,
        socket_count_per_direction: 3,
    })
    .unwrap();
    catalog.add(0, &[Socket::EMPTY; 4], 0).unwrap();
    let cross = [
        Socket::pack_many(&[0, 1, 0]),
        Socket::pack_many(&[0, 1, 0]),
        Socket::pack_many(&[0, 0, 0]),
        Socket::pack_many(&[0, 1, 0]),
    ];
    catalog.add(1, &cross, 3).unwrap();
    catalog.compute_compatibility().unwrap();
    catalog
}

fn solve_16x16(c: &mut Criterion) {
    let catalog = sample_catalog();

    c.bench_function("solve_16x16", |b| {
        b.iter(|| {
            let mut catalog = catalog.clone();
            let mut grid = Grid::new(16, 16, &catalog).unwrap();
            let mut seed = 42u32;
            loop {
                let mut solver = Solver::new(seed);
                match solver.solve(&mut grid, &mut catalog, None) {
                    Ok(()) => break,
                    Err(_) => {
                        grid.reset();
                        seed = seed.wrapping_add(1);
                    }
                }
            }
        })
    });
}

criterion_group!(solve_bench, solve_16x16);
criterion_main!(solve_bench);
