//! Print the derived quantities of a polygon sequence.
//!
//! Usage:
//!   cargo run -p polygons --example sequence_table -- 12 3.0

use polygons::PolygonSequence;

fn main() {
    let mut args = std::env::args().skip(1);
    let max = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let radius = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let seq = match PolygonSequence::new(max, radius) {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("usage: sequence_table [max_edges>=3] [radius]: {err}");
            return;
        }
    };
    println!("{seq}");
    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "edges", "angle", "edge", "apothem", "area", "perimeter"
    );
    for p in &seq {
        println!(
            "{:>5} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            p.edge_count(),
            p.interior_angle_deg(),
            p.edge_length(),
            p.apothem(),
            p.area(),
            p.perimeter()
        );
    }
}
