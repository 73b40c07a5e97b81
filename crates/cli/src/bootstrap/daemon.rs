pub enum ForkOutcome {
    /// Original process; should exit.
    Parent(i32),
    /// Detached child; carries on with the sweep loop.
    Child,
}

/// Fork into the background and start a new session.
///
/// Must run before the tokio runtime starts any threads.
#[cfg(unix)]
pub fn daemonize() -> anyhow::Result<ForkOutcome> {
    // SAFETY: single-threaded at this point; the child only continues into
    // normal Rust code.
    let pid = unsafe { libc::fork() };
    if pid < 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    if pid > 0 {
        return Ok(ForkOutcome::Parent(pid));
    }

    // SAFETY: plain syscall with no pointer arguments.
    if unsafe { libc::setsid() } < 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    Ok(ForkOutcome::Child)
}

#[cfg(not(unix))]
pub fn daemonize() -> anyhow::Result<ForkOutcome> {
    anyhow::bail!("--fork is only supported on unix")
}
