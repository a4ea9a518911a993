//! Render the default page to a file.
//!
//! Run with: `cargo run -p speechbridge-site --example render_page`

use speechbridge_site::{render_site, types::SiteContent};

fn main() {
    let mut content = SiteContent::default();
    content.contact.phone = "+44 20 7946 0000".into();

    let html = render_site(&content);

    let output_path = "speechbridge.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
