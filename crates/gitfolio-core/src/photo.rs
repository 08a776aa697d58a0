// Local avatar probe
use std::path::Path;
use tracing::debug;

/// Try to fetch the configured local photo. `true` only if an image is actually there.
///
/// An http(s) reference must answer with a success status, an `image/*`
/// content type and a body; anything else is a file path whose bytes must
/// start like a PNG, JPEG, GIF or WebP. Errors are swallowed: a missing photo
/// just means the remote avatar stays.
pub async fn probe_local_photo(src: &str) -> bool {
    let loaded = if src.starts_with("http://") || src.starts_with("https://") {
        probe_url(src).await
    } else {
        probe_file(Path::new(src)).await
    };

    debug!("Local photo probe for {}: {}", src, loaded);
    loaded
}

/// Sniff the leading bytes for one of the formats a browser would decode
pub fn looks_like_image(bytes: &[u8]) -> bool {
    bytes.starts_with(b"\x89PNG")
        || bytes.starts_with(&[0xFF, 0xD8, 0xFF])
        || bytes.starts_with(b"GIF8")
        || (bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP")
}

async fn probe_url(url: &str) -> bool {
    let response = match reqwest::get(url).await {
        Ok(response) => response,
        Err(e) => {
            debug!("Local photo request failed: {}", e);
            return false;
        }
    };

    if !response.status().is_success() {
        debug!("Local photo answered {}", response.status());
        return false;
    }

    let is_image = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        debug!("Local photo is not served as an image");
        return false;
    }

    response
        .bytes()
        .await
        .map(|body| !body.is_empty())
        .unwrap_or(false)
}

async fn probe_file(path: &Path) -> bool {
    match tokio::fs::read(path).await {
        Ok(bytes) => looks_like_image(&bytes),
        Err(e) => {
            debug!("Local photo unreadable: {}", e);
            false
        }
    }
}
