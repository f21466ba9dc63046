//! OpenGL implementation of the graphics boundary
//!
//! All raw `gl` calls live here. The function pointers are process-wide once
//! loaded, so [`GlContext`] only marks that loading succeeded; it is neither
//! `Send` nor `Sync` because the context is current on one thread.
#![allow(unsafe_code)]

use std::ffi::CStr;
use std::marker::PhantomData;
use std::os::raw::c_char;

use gl::types::{GLboolean, GLenum, GLint, GLubyte};

use crate::core::config::ClearColor;
use crate::render::api::{GraphicsApi, LoaderError, Viewport};

/// Loader identifier written to the debug log
const LOADER_NAME: &str = "gl-rs";

/// Handle to the loaded GL entry points of the current context
pub struct GlContext {
    _not_send: PhantomData<*const ()>,
}

impl GlContext {
    /// Check that every entry point used by [`GraphicsApi`] resolved
    pub(crate) fn verify_loaded() -> Result<Self, LoaderError> {
        let required: [(&'static str, bool); 7] = [
            ("glGetString", gl::GetString::is_loaded()),
            ("glGetStringi", gl::GetStringi::is_loaded()),
            ("glGetIntegerv", gl::GetIntegerv::is_loaded()),
            ("glGetBooleanv", gl::GetBooleanv::is_loaded()),
            ("glViewport", gl::Viewport::is_loaded()),
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
        ];

        match required.iter().find(|(_, loaded)| !*loaded) {
            Some(&(name, _)) => Err(LoaderError::MissingFunction(name)),
            None => Ok(Self { _not_send: PhantomData }),
        }
    }
}

fn owned_string(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // GL strings are static, NUL-terminated and owned by the driver
    let text = unsafe { CStr::from_ptr(ptr.cast::<c_char>()) };
    Some(text.to_string_lossy().into_owned())
}

impl GraphicsApi for GlContext {
    fn loader_version(&self) -> String {
        LOADER_NAME.to_string()
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        owned_string(unsafe { gl::GetString(name) })
    }

    fn get_integer(&self, name: GLenum) -> i32 {
        let mut value: GLint = 0;
        unsafe { gl::GetIntegerv(name, &mut value) };
        value
    }

    fn get_integer_pair(&self, name: GLenum) -> [i32; 2] {
        let mut values: [GLint; 2] = [0; 2];
        unsafe { gl::GetIntegerv(name, values.as_mut_ptr()) };
        values
    }

    fn get_boolean(&self, name: GLenum) -> bool {
        let mut value: GLboolean = gl::FALSE;
        unsafe { gl::GetBooleanv(name, &mut value) };
        value == gl::TRUE
    }

    fn extension(&self, index: u32) -> Option<String> {
        owned_string(unsafe { gl::GetStringi(gl::EXTENSIONS, index) })
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        unsafe { gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height) };
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear_color_buffer(&mut self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_identifier_has_no_pinned_version() {
        let context = GlContext { _not_send: PhantomData };
        assert_eq!(context.loader_version(), "gl-rs");
    }
}
