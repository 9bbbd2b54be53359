use thiserror::Error;

use crate::{transmutable_u32, Gl};

/// Errors raised while marshalling arguments or checking results, before or
/// after GL itself runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("missing OpenGL entry points: {}", .0.join(", "))]
    MissingEntryPoints(Vec<String>),
    #[error("string contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },
    #[error("{0} does not fit in the GL size type")]
    TooLarge(usize),
    #[error("parallel arrays differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("shader compilation failed:\n{0}")]
    Compile(String),
    #[error("program link failed:\n{0}")]
    Link(String),
    #[error("could not open the OpenGL library: {0}")]
    Library(String),
}

pub type BindResult<T> = Result<T, BindError>;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    InvalidEnum = gl::INVALID_ENUM,
    InvalidValue = gl::INVALID_VALUE,
    InvalidOperation = gl::INVALID_OPERATION,
    InvalidFramebufferOperation = gl::INVALID_FRAMEBUFFER_OPERATION,
    OutOfMemory = gl::OUT_OF_MEMORY,
    StackUnderflow = gl::STACK_UNDERFLOW,
    StackOverflow = gl::STACK_OVERFLOW,
    ContextLost = gl::CONTEXT_LOST,
}
transmutable_u32!(GlError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    StackUnderflow,
    StackOverflow,
    ContextLost,
});

/// Upper bound on `glGetError` calls per drain. A lost context can report
/// `GL_CONTEXT_LOST` forever.
const MAX_DRAINED_ERRORS: usize = 64;

impl Gl {
    /// Pops one error flag, if any is set.
    pub fn get_error(&self) -> Option<GlError> {
        let code = unsafe { self.GetError() };
        if code == gl::NO_ERROR {
            return None;
        }
        let err = GlError::from_u32(code);
        if err.is_none() {
            log::warn!("glGetError returned unknown code {code:#06x}");
        }
        err
    }

    /// Pops error flags until none are left.
    pub fn drain_errors(&self) -> Vec<GlError> {
        let mut errors = Vec::new();
        for _ in 0..MAX_DRAINED_ERRORS {
            match unsafe { self.GetError() } {
                gl::NO_ERROR => break,
                code => match GlError::from_u32(code) {
                    Some(err) => errors.push(err),
                    None => log::warn!("glGetError returned unknown code {code:#06x}"),
                },
            }
        }
        errors
    }
}

/// Clears any GL errors on creation, asserts
/// that no GL errors occur in its lifetime.
///
/// Checks for GL errors on `Drop`, and panics
/// if any occured.
pub struct GlErrorGuard<'gl> {
    gl: &'gl Gl,
    name: Option<&'static str>,
}

impl Drop for GlErrorGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let errors = self.gl.drain_errors();
        if !errors.is_empty() {
            match self.name {
                Some(name) => panic!("GL error assert \"{name}\" failed: {errors:?}"),
                None => panic!("GL error assert failed: {errors:?}"),
            }
        }
    }
}

impl<'gl> GlErrorGuard<'gl> {
    pub fn clear_existing(gl: &Gl, name: Option<&'static str>) {
        let errors = gl.drain_errors();
        if !errors.is_empty() {
            match name {
                Some(name) => log::warn!("Existing errors on guard \"{name}\" creation: {errors:?}"),
                None => log::warn!("Existing errors on guard creation: {errors:?}"),
            }
        }
    }

    fn new_internal(gl: &'gl Gl, name: Option<&'static str>) -> Self {
        Self::clear_existing(gl, name);
        Self { gl, name }
    }

    pub fn new(gl: &'gl Gl) -> Self {
        Self::new_internal(gl, None)
    }

    pub fn named(gl: &'gl Gl, name: &'static str) -> Self {
        Self::new_internal(gl, Some(name))
    }

    pub fn guarded<T>(gl: &'gl Gl, run: impl FnOnce() -> T) -> T {
        let guard = Self::new(gl);
        let result = run();
        drop(guard);
        result
    }

    pub fn guard_named<T>(gl: &'gl Gl, name: &'static str, run: impl FnOnce() -> T) -> T {
        let guard = Self::named(gl, name);
        let result = run();
        drop(guard);
        result
    }
}
