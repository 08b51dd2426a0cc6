//! Opening story links in the system's default browser

/// Open `url` in the default browser
///
/// `open` on macOS, `xdg-open` on Linux and `cmd /C start` on Windows.
/// Failures are logged, the UI keeps running.
pub async fn open_url(url: String) {
    #[cfg(target_os = "macos")]
    let child = tokio::process::Command::new("open").arg(&url).spawn();

    #[cfg(target_os = "windows")]
    let child = tokio::process::Command::new("cmd")
        .args(["/C", "start", "", &url])
        .spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let child = tokio::process::Command::new("xdg-open").arg(&url).spawn();

    match child {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::warn!("Browser process for {} did not finish cleanly: {}", url, e);
            }
        }
        Err(e) => log::error!("Failed to open {} in browser: {}", url, e),
    }
}
