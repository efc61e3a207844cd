//! Generate a world and print tessellation statistics.

use voronoi_atlas::{World, WorldConfigBuilder};

fn main() {
    let config = WorldConfigBuilder::new()
        .seed(42)
        .region_count(2000)
        .build()
        .expect("world configuration");

    println!("generating {} regions (seed {})...", config.region_count, config.seed);
    let world = World::generate(config).expect("world generation");

    let num_regions = world.num_regions();
    let total_edges: usize = (0..num_regions)
        .map(|i| world.region(i).num_vertices())
        .sum();
    println!("regions: {}", num_regions);
    println!(
        "average edges per region: {:.2}",
        total_edges as f64 / num_regions as f64
    );

    let heights = world.regions().heights();
    let land = heights.iter().filter(|&&h| h >= 140).count();
    println!(
        "land fraction at threshold 140: {:.1}%",
        100.0 * land as f64 / heights.len() as f64
    );

    println!("sample regions:");
    for i in 0..5.min(num_regions) {
        let region = world.region(i);
        let center = region.center();
        println!(
            "  region {}: center=({:.2}, {:.2}, {:.2}), height={}, edges={}",
            i,
            center.x,
            center.y,
            center.z,
            region.height(),
            region.num_vertices()
        );
    }
}
