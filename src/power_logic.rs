/// Decide whether the screen should be lit after `idle_secs` without a press.
pub fn screen_should_be_on(
    auto_off_enabled: bool,
    idle_secs: u64,
    auto_off_timeout_secs: u64,
) -> bool {
    !(auto_off_enabled && idle_secs >= auto_off_timeout_secs)
}
