//! File I/O utilities for reading hand histories and preparing output paths.
//!
//! ## Compressed File Support
//!
//! `read_text_auto` detects `.zst` (Zstandard) files by extension and
//! decompresses them, so `hand.phh.zst` reads the same as `hand.phh`.

use std::path::Path;

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM (Byte Order Mark) is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use phhforge_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("30/hand_0001.phh").unwrap();
/// let compressed = read_text_auto("30/hand_0002.phh.zst").unwrap();
/// ```
pub fn read_text_auto(path: impl AsRef<Path>) -> Result<String, String> {
    let path = path.as_ref();
    let is_zst = path.extension().is_some_and(|ext| ext == "zst");
    let mut content = if is_zst {
        // Read entire compressed file then decompress; more portable across platforms
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
