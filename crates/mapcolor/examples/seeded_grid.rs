//! Color a small grid of squares one unit apart with a fixed seed and print the result.
//!
//! Usage:
//!   cargo run -p mapcolor --example seeded_grid -- 5 42
//!
//! Arguments are the grid side (default 4) and the seed (default 2025).

use mapcolor::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut args = std::env::args().skip(1);
    let side: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let mut layout = Layout::new();
    for i in 0..side {
        for j in 0..side {
            let (x, y) = (3 * i, 3 * j);
            layout.add_polygon(
                format!("{i},{j}"),
                Poly2::new(vec![pt(x, y), pt(x + 2, y), pt(x + 2, y + 2), pt(x, y + 2)]),
            );
        }
    }
    find_neighbors(&mut layout, AdjacencyCfg::default());
    let mut rng = StdRng::seed_from_u64(seed);
    match colorize(&mut layout, &mut rng) {
        Ok(()) => {
            for j in (0..side).rev() {
                let row: Vec<String> = (0..side)
                    .map(|i| {
                        let r = &layout.regions()[(i * side + j) as usize];
                        r.color().map_or("-".into(), |c| c.name()[..1].to_string())
                    })
                    .collect();
                println!("{}", row.join(" "));
            }
        }
        Err(e) => eprintln!("seed {seed}: {e}"),
    }
}
