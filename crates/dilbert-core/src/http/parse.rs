//! Header line parsing.

/// `Content-Type` of the last response in `lines`.
///
/// With redirects followed libcurl reports the headers of every hop, so
/// each status line starts a fresh block. Parameters (`; charset=...`) are
/// dropped and the media type is lowercased.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                let media = value.split(';').next().unwrap_or("").trim();
                if !media.is_empty() {
                    content_type = Some(media.to_ascii_lowercase());
                }
            }
        }
    }

    content_type
}
