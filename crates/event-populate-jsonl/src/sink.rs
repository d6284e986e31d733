//! Output sinks for the parallel writer.

use std::path::Path;
use tokio::io::AsyncWrite;

/// Boxed async output stream.
pub type Sink = Box<dyn AsyncWrite + Unpin + Send>;

/// Whether `path` names stdout (`-`).
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Open `path` for writing events, or stdout for `-`.
///
/// Files are truncated unless `append` is set.
pub async fn open_sink(path: &Path, append: bool) -> std::io::Result<Sink> {
    if is_stdout(path) {
        return Ok(Box::new(tokio::io::stdout()));
    }

    let file = tokio::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .await?;

    Ok(Box::new(file))
}
