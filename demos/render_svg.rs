//! Render a generated world to `world.svg`.
//!
//! Acts as the rendering collaborator: the land/water policy (regions below
//! height 140 stay water) and the output format live here, not in the core.

use svg::node::element::{Polygon, Rectangle};
use svg::Document;
use voronoi_atlas::{split_region, MapProjection, World, WorldConfigBuilder};

const WIDTH: f64 = 1500.0;
const LAND_THRESHOLD: u8 = 140;

const REGION_STYLE: &str = "fill:rgb(230,230,230);stroke:rgb(170,170,170);stroke-width:1";
const WATER_FILL: &str = "rgb(170,210,230)";

fn main() {
    let config = WorldConfigBuilder::new()
        .seed(1000)
        .region_count(5000)
        .build()
        .expect("world configuration");
    let world = World::generate(config).expect("world generation");

    let projection = MapProjection::new(WIDTH);
    let mut document = Document::new()
        .set("width", WIDTH)
        .set("height", projection.height())
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", projection.height())
                .set("fill", WATER_FILL),
        );

    let mut polygons = 0usize;
    for i in 0..world.num_regions() {
        let region = world.region(i);
        if region.height() < LAND_THRESHOLD {
            continue;
        }

        for fragment in split_region(region, &projection) {
            if fragment.len() < 3 {
                continue;
            }
            let points = fragment
                .iter()
                .map(|p| format!("{:.1},{:.1}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            document = document.add(Polygon::new().set("points", points).set("style", REGION_STYLE));
            polygons += 1;
        }
    }

    svg::save("world.svg", &document).expect("write world.svg");
    println!(
        "wrote world.svg: {} land polygons from {} regions",
        polygons,
        world.num_regions()
    );
}
