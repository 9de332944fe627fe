/// C ABI bridge so native libraries can consume or supply a value provider.

use crate::provider::{Constant, ValueProvider};
use std::ffi::{c_char, c_int, c_void};
use std::ptr;

/// Callback signature for a provider implemented on the native side.
pub type DemoValueFn = extern "C" fn(user_data: *mut c_void) -> c_int;

/// Opaque handle to a value provider.
pub struct DemoProvider {
    inner: Box<dyn ValueProvider>,
}

/// Provider whose value comes from a native callback.
struct ForeignProvider {
    callback: DemoValueFn,
    user_data: *mut c_void,
}

impl ValueProvider for ForeignProvider {
    fn value(&mut self) -> i32 {
        (self.callback)(self.user_data)
    }
}

fn into_handle(inner: Box<dyn ValueProvider>) -> *mut DemoProvider {
    Box::into_raw(Box::new(DemoProvider { inner }))
}

#[no_mangle]
pub extern "C" fn libdemo_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
pub extern "C" fn demo_provider_new_constant(value: c_int) -> *mut DemoProvider {
    into_handle(Box::new(Constant(value)))
}

/// `user_data` is passed back to `callback` unchanged on every read; the
/// caller keeps it alive until the handle is freed. A null callback yields
/// a null handle.
#[no_mangle]
pub extern "C" fn demo_provider_new_callback(
    callback: Option<DemoValueFn>,
    user_data: *mut c_void,
) -> *mut DemoProvider {
    let Some(callback) = callback else {
        log::warn!("demo_provider_new_callback called with a null callback");
        return ptr::null_mut();
    };
    into_handle(Box::new(ForeignProvider { callback, user_data }))
}

/// Read the provider's current value. A null handle reads as 0.
#[no_mangle]
pub extern "C" fn demo_provider_value(provider: *mut DemoProvider) -> c_int {
    if provider.is_null() {
        log::warn!("demo_provider_value called with a null handle");
        return 0;
    }
    let provider = unsafe { &mut *provider };
    provider.inner.value()
}

#[no_mangle]
pub extern "C" fn demo_provider_free(provider: *mut DemoProvider) {
    if !provider.is_null() {
        unsafe { drop(Box::from_raw(provider)); }
    }
}
