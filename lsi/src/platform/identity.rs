//! User and group name resolution through the reentrant libc lookups.
#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io;
use std::mem::MaybeUninit;
use std::ptr;
use std::sync::Arc;

use crate::error::{Error, Result};

const FALLBACK_BUFFER: usize = 1024;
const MAX_BUFFER: usize = 1 << 20;

fn initial_buffer(name: libc::c_int) -> Vec<libc::c_char> {
    // SAFETY: sysconf has no preconditions.
    let size = unsafe { libc::sysconf(name) };
    let size = usize::try_from(size)
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(FALLBACK_BUFFER);
    vec![0; size]
}

/// Return codes POSIX allows for "no such entry" besides a null result.
fn is_missing(rc: libc::c_int) -> bool {
    matches!(rc, libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM)
}

fn lookup_failed(id: u32, rc: libc::c_int) -> Error {
    Error::IdentityLookup {
        id,
        source: Arc::new(io::Error::from_raw_os_error(rc)),
    }
}

/// Name of the user with id `uid`.
pub(crate) fn user_name(uid: u32) -> Result<String> {
    let mut buf = initial_buffer(libc::_SC_GETPW_R_SIZE_MAX);
    loop {
        let mut entry = MaybeUninit::<libc::passwd>::uninit();
        let mut result: *mut libc::passwd = ptr::null_mut();
        // SAFETY: every pointer is valid for the call and buf.len() is the
        // real length of buf.
        let rc = unsafe {
            libc::getpwuid_r(
                uid as libc::uid_t,
                entry.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUFFER {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if result.is_null() {
            if rc == 0 || is_missing(rc) {
                return Err(Error::UnknownUser { uid });
            }
            return Err(lookup_failed(uid, rc));
        }

        // SAFETY: a non-null result points at `entry`, whose strings live in
        // `buf`, and both outlive this borrow.
        let name = unsafe { CStr::from_ptr((*result).pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

/// Name of the group with id `gid`.
pub(crate) fn group_name(gid: u32) -> Result<String> {
    let mut buf = initial_buffer(libc::_SC_GETGR_R_SIZE_MAX);
    loop {
        let mut entry = MaybeUninit::<libc::group>::uninit();
        let mut result: *mut libc::group = ptr::null_mut();
        // SAFETY: as in user_name.
        let rc = unsafe {
            libc::getgrgid_r(
                gid as libc::gid_t,
                entry.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUFFER {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if result.is_null() {
            if rc == 0 || is_missing(rc) {
                return Err(Error::UnknownGroup { gid });
            }
            return Err(lookup_failed(gid, rc));
        }

        // SAFETY: as in user_name.
        let name = unsafe { CStr::from_ptr((*result).gr_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}
