//! Single blocking HTTP PUT of a byte slice.

use super::TransportError;
use std::time::Duration;

/// Issues one synchronous PUT of `body` to `url` and returns the HTTP status
/// code the server answered with. The response body is read and discarded.
///
/// Any curl-level failure (connect, resolve, timeout) becomes a
/// `TransportError`; the status code is reported as-is and never judged here.
/// Runs on the calling thread until the transfer finishes or errors.
pub fn put_bytes(url: &str, body: &[u8]) -> Result<u32, TransportError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.upload(true)?; // PUT with a request body
    easy.in_filesize(body.len() as u64)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(300))?;

    let mut remaining = body;
    {
        let mut transfer = easy.transfer();
        transfer.read_function(move |into| {
            let n = into.len().min(remaining.len());
            into[..n].copy_from_slice(&remaining[..n]);
            remaining = &remaining[n..];
            Ok(n)
        })?;
        // Discard the response body; routing never inspects it.
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    Ok(code)
}
