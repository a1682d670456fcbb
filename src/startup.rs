/// Run one independent piece of page wiring. A failure is logged and
/// reported as `false`; it never stops the stages that follow.
pub fn run_stage(name: &str, stage: impl FnOnce() -> anyhow::Result<()>) -> bool {
    match stage() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{} disabled: {:?}", name, e);
            false
        }
    }
}
