//! SIGINT handling while cmdoc waits on something else.
//!
//! Ctrl-C goes to the whole foreground process group. While a child tool
//! (or a raw-mode prompt) owns the terminal, the interrupt belongs to it and
//! cmdoc must survive to report the outcome.

/// Ignores SIGINT until dropped.
#[cfg(unix)]
pub(crate) struct SigintGuard {
    previous: libc::sighandler_t,
}

#[cfg(unix)]
impl SigintGuard {
    pub(crate) fn ignore() -> Self {
        // SAFETY: installs the SIG_IGN disposition; no handler code runs.
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        Self { previous }
    }
}

#[cfg(unix)]
impl Drop for SigintGuard {
    fn drop(&mut self) {
        // SAFETY: restores the disposition captured in `ignore`.
        unsafe {
            libc::signal(libc::SIGINT, self.previous);
        }
    }
}

#[cfg(not(unix))]
pub(crate) struct SigintGuard;

#[cfg(not(unix))]
impl SigintGuard {
    pub(crate) fn ignore() -> Self {
        Self
    }
}
