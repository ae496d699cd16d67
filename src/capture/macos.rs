//! ApplicationServices FFI for the accessibility tree.
//!
//! Reads and writes the selected-text attribute of the focused UI element
//! through the AXUIElement API. Every CF handle obtained here is released
//! before returning.

use std::ffi::c_void;

use tracing::debug;

use crate::error::{BlurError, BlurResult};

type CFTypeRef = *const c_void;
type CFStringRef = *const c_void;
type CFIndex = isize;
type AXUIElementRef = *const c_void;
type AXError = i32;

const AX_SUCCESS: AXError = 0;
const CF_STRING_ENCODING_UTF8: u32 = 0x0800_0100;

const FOCUSED_UI_ELEMENT_ATTRIBUTE: &str = "AXFocusedUIElement";
const SELECTED_TEXT_ATTRIBUTE: &str = "AXSelectedText";

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXUIElementCreateSystemWide() -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: CFTypeRef,
    ) -> AXError;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFRelease(cf: CFTypeRef);
    fn CFStringCreateWithBytes(
        alloc: *const c_void,
        bytes: *const u8,
        num_bytes: CFIndex,
        encoding: u32,
        is_external_representation: bool,
    ) -> CFStringRef;
    fn CFStringGetLength(s: CFStringRef) -> CFIndex;
    fn CFStringGetMaximumSizeForEncoding(length: CFIndex, encoding: u32) -> CFIndex;
    fn CFStringGetCString(
        s: CFStringRef,
        buffer: *mut u8,
        buffer_size: CFIndex,
        encoding: u32,
    ) -> bool;
}

/// Whether the process holds the accessibility (TCC) permission.
pub fn process_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

unsafe fn cfstring(s: &str) -> CFStringRef {
    CFStringCreateWithBytes(
        std::ptr::null(),
        s.as_ptr(),
        s.len() as CFIndex,
        CF_STRING_ENCODING_UTF8,
        false,
    )
}

unsafe fn cfstring_to_string(s: CFStringRef) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let length = CFStringGetLength(s);
    let max = CFStringGetMaximumSizeForEncoding(length, CF_STRING_ENCODING_UTF8) + 1;
    let mut buf = vec![0u8; max as usize];
    if !CFStringGetCString(s, buf.as_mut_ptr(), max, CF_STRING_ENCODING_UTF8) {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8(buf[..end].to_vec()).ok()
}

unsafe fn focused_element(system: AXUIElementRef) -> Option<AXUIElementRef> {
    let attr = cfstring(FOCUSED_UI_ELEMENT_ATTRIBUTE);
    let mut focused: CFTypeRef = std::ptr::null();
    let err = AXUIElementCopyAttributeValue(system, attr, &mut focused);
    CFRelease(attr);
    if err != AX_SUCCESS || focused.is_null() {
        debug!("No focused element (AXError {})", err);
        return None;
    }
    Some(focused)
}

/// Selected text of the focused UI element.
pub fn selected_text() -> BlurResult<String> {
    unsafe {
        let system = AXUIElementCreateSystemWide();
        let result = match focused_element(system) {
            Some(focused) => {
                let attr = cfstring(SELECTED_TEXT_ATTRIBUTE);
                let mut value: CFTypeRef = std::ptr::null();
                let err = AXUIElementCopyAttributeValue(focused, attr, &mut value);
                CFRelease(attr);
                CFRelease(focused);
                if err != AX_SUCCESS || value.is_null() {
                    debug!("No selected text (AXError {})", err);
                    Err(BlurError::NoSelectedText)
                } else {
                    let text = cfstring_to_string(value);
                    CFRelease(value);
                    text.ok_or(BlurError::NoSelectedText)
                }
            }
            None => Err(BlurError::NoFocusedElement),
        };
        CFRelease(system);
        result
    }
}

/// Overwrite the focused element's selection. The element is re-resolved
/// here, so it can legitimately have vanished since the matching read.
pub fn set_selected_text(text: &str) -> BlurResult<()> {
    unsafe {
        let system = AXUIElementCreateSystemWide();
        let result = match focused_element(system) {
            Some(focused) => {
                let attr = cfstring(SELECTED_TEXT_ATTRIBUTE);
                let value = cfstring(text);
                let err = AXUIElementSetAttributeValue(focused, attr, value);
                CFRelease(value);
                CFRelease(attr);
                CFRelease(focused);
                if err == AX_SUCCESS {
                    Ok(())
                } else {
                    debug!("Selection write rejected (AXError {})", err);
                    Err(BlurError::WriteBack)
                }
            }
            None => Err(BlurError::NoFocusedElement),
        };
        CFRelease(system);
        result
    }
}
