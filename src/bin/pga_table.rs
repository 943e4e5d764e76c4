// src/bin/pga_table.rs
//! Print the slot destination table and the product mask of every pair of
//! partition masks.

use pga_engine::layout::{product_mask, union_mask, DESTINATIONS};

fn slots(mask: u8) -> String {
    if mask == 0 {
        return "-".to_string();
    }
    (0..4)
        .filter(|i| mask & (1 << i) != 0)
        .map(|i| format!("p{i}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn main() {
    println!("Kernel destinations (lhs slot \\ rhs slot):");
    println!("{:>4} | {:^7} | {:^7} | {:^7} | {:^7}", "", "p0", "p1", "p2", "p3");
    for (i, row) in DESTINATIONS.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|&m| format!("{:^7}", slots(m))).collect();
        println!("{:>4} | {}", format!("p{i}"), cells.join(" | "));
    }

    println!();
    println!("Product masks (lhs mask \\ rhs mask, hex):");
    print!("     ");
    for b in 0u8..16 {
        print!(" {b:x}");
    }
    println!();
    for a in 0u8..16 {
        print!("{a:04b} ");
        for b in 0u8..16 {
            print!(" {:x}", product_mask(a, b));
        }
        println!();
    }

    println!();
    let mismatched = (0u8..16)
        .flat_map(|a| (0u8..16).map(move |b| (a, b)))
        .filter(|&(a, b)| union_mask(a, b) != (a | b))
        .count();
    println!("union masks checked: {} mismatches", mismatched);
}
