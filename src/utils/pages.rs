/// Rough page count of an uploaded document from its MIME type and size,
/// used to prefill the page field. Always at least 1.
pub fn estimate_page_count(mime_type: &str, size_bytes: u64) -> u32 {
    let bytes_per_page = if mime_type == "application/pdf" {
        50_000
    } else if mime_type.contains("word") || mime_type.contains("document") {
        30_000
    } else if mime_type.contains("image") {
        return 1;
    } else {
        40_000
    };

    let pages = size_bytes.div_ceil(bytes_per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
