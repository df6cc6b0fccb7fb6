use anyhow::Result;
use boot_api::Envelope;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Read a single line-delimited JSON envelope from the reader.
///
/// `Ok(None)` means the peer closed the stream.
pub async fn read_envelope<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<Envelope>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Ok(None);
    }
    let env = serde_json::from_str(line.trim())?;
    Ok(Some(env))
}

/// Write a single envelope as line-delimited JSON to the writer.
pub async fn write_envelope<W: AsyncWrite + Unpin>(writer: &mut W, env: &Envelope) -> Result<()> {
    let s = serde_json::to_string(env)?;
    writer.write_all(s.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
