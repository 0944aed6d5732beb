//! Reading the current time from the OS.
//!
//! Each platform provides `raw_time`, giving the seconds since the Unix
//! epoch and the nanoseconds into that second, which `sys_time` then
//! truncates to milliseconds.

#[cfg(target_os = "redox")]
extern crate syscall as redox_syscall;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    let (seconds, nanos) = raw_time();
    (seconds, (nanos / 1_000_000) as i16)
}


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
unsafe fn raw_time() -> (i64, i64) {
    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, std::ptr::null_mut());
    (tv.tv_sec as i64, tv.tv_usec as i64 * 1_000)
}


#[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "redox", windows)))]
unsafe fn raw_time() -> (i64, i64) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts);
    (ts.tv_sec as i64, ts.tv_nsec as i64)
}


#[cfg(target_os = "redox")]
fn raw_time() -> (i64, i64) {
    let mut ts = redox_syscall::TimeSpec::default();
    let _ = redox_syscall::clock_gettime(redox_syscall::CLOCK_REALTIME, &mut ts);
    (ts.tv_sec, ts.tv_nsec as i64)
}


/// Windows counts in 100ns ticks from the start of 1601.
#[cfg(windows)]
mod filetime {
    pub(super) const PER_SECOND: i64 = 10_000_000;
    pub(super) const TO_UNIX_EPOCH: i64 = 11_644_473_600 * PER_SECOND;
}

#[cfg(windows)]
unsafe fn raw_time() -> (i64, i64) {
    use winapi::shared::minwindef::FILETIME;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft: FILETIME = std::mem::zeroed();
    GetSystemTimeAsFileTime(&mut ft);

    let ticks = ((u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)) as i64 - filetime::TO_UNIX_EPOCH;
    (ticks / filetime::PER_SECOND, (ticks % filetime::PER_SECOND) * 100)
}


#[cfg(test)]
mod test {
    use super::sys_time;

    #[test]
    fn sanity_check() {
        let (seconds, milliseconds) = unsafe { sys_time() };
        assert!(seconds > 0);
        assert!((0 .. 1000).contains(&milliseconds));
    }
}
