//! Common test utilities and helpers
//!
//! Shared fixture HTML and setup helpers for the integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// A mens vertical chart table with chest/waist/hips columns.
pub const VERTICAL_CHART_PAGE: &str = r#"<html><head><title>Crew Tee</title></head><body>
    <h1>Crew Tee</h1>
    <table>
        <tr><th>Size</th><th>Chest (in)</th><th>Waist (in)</th><th>Hips (in)</th></tr>
        <tr><td>S</td><td>35-37</td><td>29-31</td><td>35-37</td></tr>
        <tr><td>M</td><td>38-40</td><td>32-34</td><td>39-41</td></tr>
        <tr><td>L</td><td>42-44</td><td>36-38</td><td>43-45</td></tr>
    </table>
</body></html>"#;

/// The same data flipped: sizes across the header, measurements as rows.
#[allow(dead_code)]
pub const HORIZONTAL_CHART_PAGE: &str = r#"<html><body>
    <table>
        <tr><th>Measurement</th><th>S</th><th>M</th><th>L</th></tr>
        <tr><td>Chest</td><td>35-37</td><td>38-40</td><td>42-44</td></tr>
        <tr><td>Waist</td><td>29-31</td><td>32-34</td><td>36-38</td></tr>
    </table>
</body></html>"#;

/// A product page with only a size selector, no chart markup.
#[allow(dead_code)]
pub const SELECTOR_ONLY_PAGE: &str = r#"<html><head><title>Boxy Tee</title></head><body>
    <h1>Boxy Tee</h1>
    <span class="product-price">$25</span>
    <button>Add to cart</button>
    <div class="size-selector">
        <button>S</button>
        <button>M</button>
        <button class="sold-out">L</button>
    </div>
</body></html>"#;

/// A page with nothing size-related at all.
#[allow(dead_code)]
pub const BARE_PAGE: &str =
    "<html><head><title>Linen Shirt</title></head><body><p>Lookbook</p></body></html>";

/// Write a page fixture into a temp dir; returns (dir guard, page path).
#[allow(dead_code)]
pub fn write_page(html: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("page.html");
    std::fs::write(&path, html).expect("write page fixture");
    (dir, path)
}
