// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Transport`] over the native JSON interface of TDLib.
#![allow(unsafe_code)]

use std::ffi::{c_char, c_void, CStr, CString};
use std::ptr::NonNull;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use log::warn;

use crate::Transport;

#[link(name = "tdjson")]
unsafe extern "C" {
    fn td_json_client_create() -> *mut c_void;
    fn td_json_client_send(client: *mut c_void, request: *const c_char);
    fn td_json_client_receive(client: *mut c_void, timeout: f64) -> *const c_char;
    fn td_json_client_execute(client: *mut c_void, request: *const c_char) -> *const c_char;
    fn td_json_client_destroy(client: *mut c_void);
}

/// A TDLib instance created through `td_json_client_create`, destroyed on drop.
///
/// Requires the `tdjson` shared library to be available when linking.
pub struct TdJson {
    client: NonNull<c_void>,
    // The string returned by receive is only valid until the next call.
    receiving: Mutex<()>,
}

// The native client may be used from any thread, and the only
// function that must not run concurrently is guarded by `receiving`.
unsafe impl Send for TdJson {}
unsafe impl Sync for TdJson {}

impl TdJson {
    /// Creates a new TDLib instance. Returns `None` if TDLib failed to create it.
    pub fn new() -> Option<Self> {
        let client = NonNull::new(unsafe { td_json_client_create() })?;
        Some(Self {
            client,
            receiving: Mutex::new(()),
        })
    }
}

fn to_c_string(request: &str) -> Option<CString> {
    match CString::new(request) {
        Ok(request) => Some(request),
        Err(e) => {
            warn!("cannot hand request with a nul byte over to tdjson: {e}");
            None
        }
    }
}

/// # Safety
///
/// `response` must be null or point to a nul-terminated string.
unsafe fn to_owned(response: *const c_char) -> Option<String> {
    if response.is_null() {
        None
    } else {
        Some(
            unsafe { CStr::from_ptr(response) }
                .to_string_lossy()
                .into_owned(),
        )
    }
}

impl Transport for TdJson {
    fn send(&self, request: &str) {
        if let Some(request) = to_c_string(request) {
            unsafe { td_json_client_send(self.client.as_ptr(), request.as_ptr()) }
        }
    }

    fn receive(&self, timeout: Duration) -> Option<String> {
        let _guard = self
            .receiving
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        unsafe {
            to_owned(td_json_client_receive(
                self.client.as_ptr(),
                timeout.as_secs_f64(),
            ))
        }
    }

    fn execute(&self, request: &str) -> Option<String> {
        let request = to_c_string(request)?;
        unsafe {
            to_owned(td_json_client_execute(
                self.client.as_ptr(),
                request.as_ptr(),
            ))
        }
    }
}

impl Drop for TdJson {
    fn drop(&mut self) {
        unsafe { td_json_client_destroy(self.client.as_ptr()) }
    }
}
