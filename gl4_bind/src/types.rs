//! C typedefs used by the OpenGL API.

use std::ffi::c_void;

pub use gl::types::{
    GLbitfield, GLboolean, GLbyte, GLchar, GLdouble, GLenum, GLfloat, GLint, GLint64, GLintptr,
    GLshort, GLsizei, GLsizeiptr, GLsync, GLubyte, GLuint, GLuint64, GLushort,
};

/// `typedef void (APIENTRY *GLDEBUGPROC)(GLenum source, GLenum type, GLuint id,
/// GLenum severity, GLsizei length, const GLchar *message, const void *userParam)`
pub type GLDEBUGPROC = Option<
    unsafe extern "system" fn(
        source: GLenum,
        gltype: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *const c_void,
    ),
>;
