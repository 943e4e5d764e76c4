// build.rs
//! Generates the `Union` and `Product` impls for every pair of partition
//! masks. Stable Rust cannot name `Mask<{ A | B }>` in an associated type, so
//! the 16x16 output masks are written out here instead.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/layout.rs"]
mod layout;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/layout.rs");

    let mut code = String::new();
    code.push_str("// @generated by build.rs from src/layout.rs\n");
    for a in 0u8..16 {
        for b in 0u8..16 {
            let _ = writeln!(
                code,
                "impl Union<Mask<{b}>> for Mask<{a}> {{ type Output = Mask<{}>; }}",
                layout::union_mask(a, b)
            );
            let _ = writeln!(
                code,
                "impl Product<Mask<{b}>> for Mask<{a}> {{ type Output = Mask<{}>; }}",
                layout::product_mask(a, b)
            );
        }
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("mask_tables.rs");
    fs::write(dest, code).expect("failed to write mask_tables.rs");
}
