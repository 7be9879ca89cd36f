//! CPU affinity for timing runs and worker threads.
//!
//! Linux pins through `sched_setaffinity`; other platforms fall back to
//! no-ops so callers never need to special-case them.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn online_cores() -> Option<usize> {
        // SAFETY: sysconf has no memory-safety preconditions.
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        (n > 0).then_some(n as usize)
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save_affinity() -> bool {
        // SAFETY: cpu_set_t is plain data; the kernel fills it in.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) != 0 {
                return false;
            }
            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
            true
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        // SAFETY: the set is zero-initialised and only touched through the libc macros.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: the set was produced by sched_getaffinity on this thread.
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn online_cores() -> Option<usize> {
        std::thread::available_parallelism().ok().map(|n| n.get())
    }
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

/// Number of online CPU cores, if the platform reports it.
pub fn online_cores() -> Option<usize> {
    platform::online_cores()
}

/// Pin the current thread to `core_id`, saving the previous affinity first.
pub fn pin_to_core(core_id: usize) -> bool {
    platform::save_affinity() && platform::set_affinity(core_id)
}

/// Pin to the core the thread is running on, or core 0 if that is unknown.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    pin_to_core(core).then_some(core)
}

/// Restore the affinity saved by the last successful pin on this thread.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // thread pinned
///     // ... timed work ...
/// } // unpinned here, even on panic
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    /// Pin to the current CPU core.
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    /// Pin to a specific core. Worker `i` of `n` uses `i % cores`.
    pub fn with_core(core_id: usize) -> Self {
        Self {
            pinned_core: pin_to_core(core_id).then_some(core_id),
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
