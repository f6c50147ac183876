//! Exit handling: signal handlers and terminal cleanup.

/// Reset attributes, show cursor.
const CLEANUP_SEQ: &[u8] = b"\x1b[0m\x1b[?25h";

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                CLEANUP_SEQ.as_ptr() as *const libc::c_void,
                CLEANUP_SEQ.len(),
            );
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

/// Whether stdin is attached to a terminal.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_sequence_is_complete() {
        assert!(CLEANUP_SEQ.starts_with(b"\x1b[0m"));
        assert!(CLEANUP_SEQ.ends_with(b"\x1b[?25h"));
        assert_eq!(CLEANUP_SEQ.len(), 10);
    }
}
