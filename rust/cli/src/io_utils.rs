//! File reading helpers shared by the `settle` and `stats` commands.
//!
//! Paths ending in `.zst` are Zstandard-compressed and decompressed
//! transparently; a leading UTF-8 BOM is dropped.

/// Read a text file, decompressing `.zst` files.
///
/// # Example
///
/// ```rust,no_run
/// # use showdown_cli::io_utils::read_text_auto;
/// let table = read_text_auto("table.json").unwrap();
/// let history = read_text_auto("hands.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
