use std::path::Path;

pub fn write_cart_fixture(path: &Path, lines: &[&str]) -> std::io::Result<()> {
    std::fs::write(path, lines.join("\n"))
}
