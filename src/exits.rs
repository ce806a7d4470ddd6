//! Process-level exit paths.
//!
//! [`crate::terminal::Screen`] restores the terminal on drop, but drop never
//! runs on a signal or a crash. These handlers cover that gap while the form
//! holds the screen.

use std::sync::atomic::{AtomicBool, Ordering};

static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mouse reporting off, cursor shown, main screen, attributes reset.
const RESTORE: &[u8] = b"\x1b[?1000l\x1b[?1002l\x1b[?1003l\x1b[?1006l\x1b[?1015l\x1b[?25h\x1b[?1049l\x1b[0m";

/// Signals that end the process normally (exit status 128 + SIGINT).
const QUIT_SIGNALS: [libc::c_int; 3] = [libc::SIGINT, libc::SIGTERM, libc::SIGHUP];

/// Signals re-raised with their default action after restoring the screen.
const CRASH_SIGNALS: [libc::c_int; 2] = [libc::SIGSEGV, libc::SIGABRT];

/// Record whether the form currently owns the terminal.
pub fn mark_screen(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Put the tty back in cooked mode and leave the alternate screen.
///
/// Only raw syscalls here: this runs inside signal handlers.
fn restore_screen() {
    if !SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }

    unsafe {
        let mut tio: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut tio) == 0 {
            tio.c_iflag |= libc::ICRNL;
            tio.c_oflag |= libc::OPOST | libc::ONLCR;
            tio.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG | libc::IEXTEN;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &tio);
        }
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr() as *const libc::c_void,
                RESTORE.len(),
            );
        }
    }
}

extern "C" fn on_exit() {
    restore_screen();
}

extern "C" fn on_quit(_: libc::c_int) {
    // atexit runs restore_screen
    unsafe { libc::exit(130) }
}

extern "C" fn on_crash(sig: libc::c_int) {
    restore_screen();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Register the atexit hook and the signal handlers. Call first thing in
/// `main`.
pub fn install_handlers() {
    unsafe {
        libc::atexit(on_exit);
        for sig in QUIT_SIGNALS {
            libc::signal(sig, on_quit as *const () as libc::sighandler_t);
        }
        for sig in CRASH_SIGNALS {
            libc::signal(sig, on_crash as *const () as libc::sighandler_t);
        }
    }
}

/// Mark the process non-dumpable: no core files, no ptrace by other users.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
