/// Open a URL or path with the system handler.
pub fn open_target(target: &str) -> anyhow::Result<()> {
    tracing::debug!(target, "opening");
    open::that(target).map_err(|e| e.into())
}
