use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read one typed utterance, without its line ending. Bytes that are not
/// UTF-8 become U+FFFD instead of ending the session. `None` at end of input.
pub async fn read_utterance<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
