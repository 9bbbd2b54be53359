//! Minimal GLFW glue: context creation and the loader.
//!
//! [`get_proc_address`] is a [`GlLoader`](crate::GlLoader) as it stands:
//! `unsafe { Gl::load_with(glfw::get_proc_address) }`.

use std::{
    ffi::{c_char, c_int, c_void, CStr, CString},
    ptr::{self, NonNull},
};

use color_eyre::{eyre::eyre, Result as EyreResult};
use glam::IVec2;
use glfw::ffi;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlfwError {
    NotInitialized,
    NoCurrentContext,
    InvalidEnum,
    InvalidValue,
    OutOfMemory,
    ApiUnavailable,
    VersionUnavailable,
    PlatformError,
    FormatUnavailable,
    NoWindowContext,
    CursorUnavilable,
    FeatureUnavailable,
    FeatureUnimplemented,
    PlatformUnavailable,
}

impl GlfwError {
    pub fn from_num(err: i32) -> Option<Self> {
        Some(match err {
            0x00010001 => Self::NotInitialized,
            0x00010002 => Self::NoCurrentContext,
            0x00010003 => Self::InvalidEnum,
            0x00010004 => Self::InvalidValue,
            0x00010005 => Self::OutOfMemory,
            0x00010006 => Self::ApiUnavailable,
            0x00010007 => Self::VersionUnavailable,
            0x00010008 => Self::PlatformError,
            0x00010009 => Self::FormatUnavailable,
            0x0001000a => Self::NoWindowContext,
            0x0001000b => Self::CursorUnavilable,
            0x0001000c => Self::FeatureUnavailable,
            0x0001000d => Self::FeatureUnimplemented,
            0x0001000e => Self::PlatformUnavailable,
            _ => return None,
        })
    }
}

extern "C" fn err_callback(err: c_int, desc: *const c_char) {
    let desc = if desc.is_null() {
        "".into()
    } else {
        unsafe { CStr::from_ptr(desc) }.to_string_lossy()
    };
    match GlfwError::from_num(err) {
        Some(err) => log::error!("GLFW error {err:?}: {desc}"),
        None => log::error!("GLFW error {err:#x}: {desc}"),
    }
}

pub fn init() -> Option<()> {
    let err = unsafe { ffi::glfwInit() };
    (err == ffi::TRUE).then_some(())
}

pub fn install_errors() {
    unsafe { ffi::glfwSetErrorCallback(Some(err_callback)) };
}

pub fn terminate() {
    unsafe { ffi::glfwTerminate() }
}

/// Needs a current context.
pub fn get_proc_address(name: &'static str) -> *const c_void {
    match CString::new(name) {
        Ok(name) => unsafe { ffi::glfwGetProcAddress(name.as_ptr()) },
        Err(_) => ptr::null(),
    }
}

pub fn poll_events() {
    unsafe { ffi::glfwPollEvents() }
}

/// Window hints for the context the next [`Window::create`] makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextHints {
    pub major: u32,
    pub minor: u32,
    pub core: bool,
    pub debug: bool,
    pub visible: bool,
}

impl Default for ContextHints {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 6,
            core: true,
            debug: false,
            visible: true,
        }
    }
}

fn glfw_bool(value: bool) -> c_int {
    if value {
        ffi::TRUE
    } else {
        ffi::FALSE
    }
}

impl ContextHints {
    pub fn apply(&self) {
        unsafe {
            ffi::glfwDefaultWindowHints();
            ffi::glfwWindowHint(ffi::CONTEXT_VERSION_MAJOR, self.major as c_int);
            ffi::glfwWindowHint(ffi::CONTEXT_VERSION_MINOR, self.minor as c_int);
            if self.core {
                ffi::glfwWindowHint(ffi::OPENGL_PROFILE, ffi::OPENGL_CORE_PROFILE);
                ffi::glfwWindowHint(ffi::OPENGL_FORWARD_COMPAT, ffi::TRUE);
            }
            ffi::glfwWindowHint(ffi::OPENGL_DEBUG_CONTEXT, glfw_bool(self.debug));
            ffi::glfwWindowHint(ffi::VISIBLE, glfw_bool(self.visible));
        }
    }
}

pub struct Window {
    window: NonNull<ffi::GLFWwindow>,
}

impl Window {
    pub fn create(width: i32, height: i32, title: &str) -> EyreResult<Self> {
        let as_c_str = CString::new(title)?;
        let window = unsafe {
            ffi::glfwCreateWindow(
                width,
                height,
                as_c_str.as_ptr(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };

        if let Some(window) = NonNull::new(window) {
            Ok(Self { window })
        } else {
            Err(eyre!("Window creation failed: nullptr"))
        }
    }

    /// Applies `hints`, then creates the window.
    pub fn create_with(hints: ContextHints, width: i32, height: i32, title: &str) -> EyreResult<Self> {
        hints.apply();
        Self::create(width, height, title)
    }

    pub fn should_close(&self) -> bool {
        (unsafe { ffi::glfwWindowShouldClose(self.window.as_ptr()) }) > 0
    }

    pub fn swap_buffers(&self) {
        unsafe { ffi::glfwSwapBuffers(self.window.as_ptr()) }
    }

    pub fn make_current(&self) {
        unsafe { ffi::glfwMakeContextCurrent(self.window.as_ptr()) };
    }

    pub fn get_framebuffer_size(&self) -> IVec2 {
        let mut result = IVec2::ZERO;
        unsafe { ffi::glfwGetFramebufferSize(self.window.as_ptr(), &mut result.x, &mut result.y) };
        result
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { ffi::glfwDestroyWindow(self.window.as_ptr()) }
    }
}
