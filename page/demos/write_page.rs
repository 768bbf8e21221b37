//! Write the standalone page, the bare fragment and the stylesheet side by side.
//!
//! The fragment is for hosts that already own `<head>`; they link
//! `coming_soon.css` and render the document without inline styles.
//!
//! Run with: `cargo run -p coming-soon-page --example write_page -- [out_dir]`

use std::path::PathBuf;

use coming_soon_page::styles::page_stylesheet;
use coming_soon_page::{PageOptions, render_page, render_placeholder};

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("coming-soon-demo"));
    std::fs::create_dir_all(&out_dir)?;

    let outputs = [
        ("index.html", render_page(&PageOptions::default())),
        (
            "unstyled.html",
            render_page(&PageOptions {
                inline_styles: false,
                ..Default::default()
            }),
        ),
        ("fragment.html", render_placeholder()),
        ("coming_soon.css", page_stylesheet()),
    ];

    for (name, body) in &outputs {
        let path = out_dir.join(name);
        std::fs::write(&path, body)?;
        println!("{:>16}  {:>6} bytes", name, body.len());
    }

    Ok(())
}
