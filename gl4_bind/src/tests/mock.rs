//! A fake driver: `extern "system"` functions that record what they were
//! called with, and a loader that hands them out by name.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    ffi::{c_void, CStr, CString},
    ptr, slice,
};

use crate::{types::*, Gl};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Ints(&'static str, Vec<i64>),
    Floats(&'static str, Vec<i64>, Vec<f32>),
    Doubles(&'static str, Vec<i64>, Vec<f64>),
    Strings(&'static str, Vec<String>, Vec<GLint>),
    Bytes(&'static str, Vec<i64>, Vec<u8>),
}

pub struct State {
    pub calls: Vec<Call>,
    pub errors: VecDeque<GLenum>,
    pub integers: HashMap<GLenum, GLint>,
    pub strings: HashMap<GLenum, CString>,
    pub extensions: Vec<CString>,
    pub compile_status: GLint,
    pub link_status: GLint,
    /// Reported `GL_INFO_LOG_LENGTH`, terminator included.
    pub info_log_length: GLint,
    pub info_log: String,
    pub next_name: GLuint,
    pub debug_proc: GLDEBUGPROC,
    pub debug_user_param: *const c_void,
    pub debug_log: Vec<(GLenum, GLenum, GLuint, GLenum, String)>,
    pub wait_status: GLenum,
    pub framebuffer_status: GLenum,
    pub label: String,
    pub binary: Vec<u8>,
    pub attached_shaders: Vec<GLuint>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            errors: VecDeque::new(),
            integers: HashMap::new(),
            strings: HashMap::new(),
            extensions: Vec::new(),
            compile_status: GLint::from(gl::TRUE),
            link_status: GLint::from(gl::TRUE),
            info_log_length: 0,
            info_log: String::new(),
            next_name: 1,
            debug_proc: None,
            debug_user_param: ptr::null(),
            debug_log: Vec::new(),
            wait_status: gl::ALREADY_SIGNALED,
            framebuffer_status: gl::FRAMEBUFFER_COMPLETE,
            label: String::new(),
            binary: Vec::new(),
            attached_shaders: Vec::new(),
        }
    }
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

pub fn with<T>(f: impl FnOnce(&mut State) -> T) -> T {
    STATE.with_borrow_mut(f)
}

pub fn calls() -> Vec<Call> {
    with(|state| state.calls.clone())
}

pub fn called(name: &str) -> bool {
    calls().iter().any(|call| match call {
        Call::Ints(called, ..)
        | Call::Floats(called, ..)
        | Call::Doubles(called, ..)
        | Call::Strings(called, ..)
        | Call::Bytes(called, ..) => *called == name,
    })
}

fn record(call: Call) {
    with(|state| state.calls.push(call));
}

/// Sets the driver's info log, reporting its length plus a terminator.
pub fn set_info_log(log: &str) {
    with(|state| {
        state.info_log = log.into();
        state.info_log_length = log.len() as GLint + 1;
    });
}

/// Calls the installed debug callback the way a driver would.
pub fn emit_debug(source: GLenum, ty: GLenum, id: GLuint, severity: GLenum, text: &str) {
    let (callback, user_param) = with(|state| (state.debug_proc, state.debug_user_param));
    let Some(callback) = callback else {
        return;
    };
    unsafe {
        callback(
            source,
            ty,
            id,
            severity,
            text.len() as GLsizei,
            text.as_ptr().cast(),
            user_param,
        )
    };
}

/// A fresh mock state and a table loaded from every mock.
pub fn gl() -> Gl {
    with(|state| *state = State::default());
    unsafe { Gl::load_with(loader) }
}

pub fn loader(symbol: &'static str) -> *const c_void {
    match symbol {
        "glGetError" => get_error as *const c_void,
        "glGetIntegerv" => get_integerv as *const c_void,
        "glGetString" => get_string as *const c_void,
        "glGetStringi" => get_stringi as *const c_void,
        "glEnable" => enable as *const c_void,
        "glDebugMessageCallback" => debug_message_callback as *const c_void,
        "glGetDebugMessageLog" => get_debug_message_log as *const c_void,
        "glPushDebugGroup" => push_debug_group as *const c_void,
        "glPopDebugGroup" => pop_debug_group as *const c_void,
        "glUniform3fv" => uniform_3fv as *const c_void,
        "glUniformMatrix2x4fv" => uniform_matrix_2x4fv as *const c_void,
        "glUniformMatrix2x4dv" => uniform_matrix_2x4dv as *const c_void,
        "glUniformMatrix4fv" => uniform_matrix_4fv as *const c_void,
        "glUniformMatrix2dv" => uniform_matrix_2dv as *const c_void,
        "glUniformMatrix3dv" => uniform_matrix_3dv as *const c_void,
        "glGetUniformIndices" => get_uniform_indices as *const c_void,
        "glTransformFeedbackVaryings" => transform_feedback_varyings as *const c_void,
        "glGetAttachedShaders" => get_attached_shaders as *const c_void,
        "glGetProgramBinary" => get_program_binary as *const c_void,
        "glGetObjectLabel" => get_object_label as *const c_void,
        "glClientWaitSync" => client_wait_sync as *const c_void,
        "glCheckFramebufferStatus" => check_framebuffer_status as *const c_void,
        "glViewport" => viewport as *const c_void,
        "glGetUniformLocation" => get_uniform_location as *const c_void,
        "glCreateShader" => create_shader as *const c_void,
        "glShaderSource" => shader_source as *const c_void,
        "glCompileShader" => compile_shader as *const c_void,
        "glGetShaderiv" => get_shaderiv as *const c_void,
        "glGetShaderInfoLog" => get_shader_info_log as *const c_void,
        "glDeleteShader" => delete_shader as *const c_void,
        "glCreateShaderProgramv" => create_shader_programv as *const c_void,
        "glGetProgramiv" => get_programiv as *const c_void,
        "glGetProgramInfoLog" => get_program_info_log as *const c_void,
        "glDeleteProgram" => delete_program as *const c_void,
        "glBufferData" => buffer_data as *const c_void,
        "glMultiDrawArrays" => multi_draw_arrays as *const c_void,
        "glVertexArrayAttribFormat" => vertex_array_attrib_format as *const c_void,
        "glVertexArrayAttribIFormat" => vertex_array_attrib_i_format as *const c_void,
        "glVertexArrayAttribBinding" => vertex_array_attrib_binding as *const c_void,
        "glEnableVertexArrayAttrib" => enable_vertex_array_attrib as *const c_void,
        _ => ptr::null(),
    }
}

unsafe extern "system" fn get_error() -> GLenum {
    with(|state| state.errors.pop_front().unwrap_or(gl::NO_ERROR))
}

unsafe extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    *data = with(|state| state.integers.get(&pname).copied().unwrap_or(0));
}

unsafe extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    with(|state| {
        state
            .strings
            .get(&name)
            .map_or(ptr::null(), |string| string.as_ptr().cast())
    })
}

unsafe extern "system" fn get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    assert_eq!(name, gl::EXTENSIONS);
    with(|state| {
        state
            .extensions
            .get(index as usize)
            .map_or(ptr::null(), |string| string.as_ptr().cast())
    })
}

unsafe extern "system" fn enable(cap: GLenum) {
    record(Call::Ints("glEnable", vec![cap.into()]));
}

unsafe extern "system" fn debug_message_callback(callback: GLDEBUGPROC, user_param: *const c_void) {
    with(|state| {
        state.debug_proc = callback;
        state.debug_user_param = user_param;
    });
}

#[allow(clippy::too_many_arguments)]
unsafe extern "system" fn get_debug_message_log(
    count: GLuint,
    buf_size: GLsizei,
    sources: *mut GLenum,
    types: *mut GLenum,
    ids: *mut GLuint,
    severities: *mut GLenum,
    lengths: *mut GLsizei,
    message_log: *mut GLchar,
) -> GLuint {
    let log = with(|state| std::mem::take(&mut state.debug_log));
    let mut written = 0usize;
    let mut fetched = 0;
    for (source, ty, id, severity, text) in log.into_iter().take(count as usize) {
        let bytes = text.len() + 1;
        if written + bytes > buf_size as usize {
            break;
        }
        let index = fetched as usize;
        *sources.add(index) = source;
        *types.add(index) = ty;
        *ids.add(index) = id;
        *severities.add(index) = severity;
        *lengths.add(index) = bytes as GLsizei;
        let out = message_log.add(written).cast::<u8>();
        ptr::copy_nonoverlapping(text.as_ptr(), out, text.len());
        *out.add(text.len()) = 0;
        written += bytes;
        fetched += 1;
    }
    fetched
}

unsafe extern "system" fn push_debug_group(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar) {
    let text = slice::from_raw_parts(message.cast::<u8>(), length as usize);
    record(Call::Bytes(
        "glPushDebugGroup",
        vec![source.into(), id.into()],
        text.to_vec(),
    ));
}

unsafe extern "system" fn pop_debug_group() {
    record(Call::Ints("glPopDebugGroup", vec![]));
}

unsafe extern "system" fn uniform_3fv(location: GLint, count: GLsizei, value: *const GLfloat) {
    let values = slice::from_raw_parts(value, count as usize * 3).to_vec();
    record(Call::Floats(
        "glUniform3fv",
        vec![location.into(), count.into()],
        values,
    ));
}

unsafe extern "system" fn uniform_matrix_2x4fv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLfloat,
) {
    let values = slice::from_raw_parts(value, count as usize * 8).to_vec();
    record(Call::Floats(
        "glUniformMatrix2x4fv",
        vec![location.into(), count.into(), transpose.into()],
        values,
    ));
}

unsafe extern "system" fn uniform_matrix_2x4dv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLdouble,
) {
    let values = slice::from_raw_parts(value, count as usize * 8).to_vec();
    record(Call::Doubles(
        "glUniformMatrix2x4dv",
        vec![location.into(), count.into(), transpose.into()],
        values,
    ));
}

unsafe extern "system" fn uniform_matrix_4fv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLfloat,
) {
    let values = slice::from_raw_parts(value, count as usize * 16).to_vec();
    record(Call::Floats(
        "glUniformMatrix4fv",
        vec![location.into(), count.into(), transpose.into()],
        values,
    ));
}

unsafe extern "system" fn get_uniform_location(_program: GLuint, name: *const GLchar) -> GLint {
    match CStr::from_ptr(name).to_bytes() {
        b"transform" => 4,
        _ => -1,
    }
}

unsafe extern "system" fn create_shader(ty: GLenum) -> GLuint {
    record(Call::Ints("glCreateShader", vec![ty.into()]));
    with(|state| {
        state.next_name += 1;
        state.next_name - 1
    })
}

unsafe extern "system" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    string: *const *const GLchar,
    length: *const GLint,
) {
    let pointers = slice::from_raw_parts(string, count as usize);
    let lengths = slice::from_raw_parts(length, count as usize).to_vec();
    let sources = pointers
        .iter()
        .zip(&lengths)
        .map(|(&pointer, &len)| {
            let bytes = slice::from_raw_parts(pointer.cast::<u8>(), len as usize);
            String::from_utf8_lossy(bytes).into_owned()
        })
        .collect();
    record(Call::Ints("glShaderSource", vec![shader.into()]));
    record(Call::Strings("glShaderSource", sources, lengths));
}

unsafe extern "system" fn compile_shader(shader: GLuint) {
    record(Call::Ints("glCompileShader", vec![shader.into()]));
}

unsafe extern "system" fn get_shaderiv(_shader: GLuint, pname: GLenum, params: *mut GLint) {
    *params = with(|state| match pname {
        gl::COMPILE_STATUS => state.compile_status,
        gl::INFO_LOG_LENGTH => state.info_log_length,
        _ => 0,
    });
}

unsafe fn write_info_log(buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar) {
    let log = with(|state| state.info_log.clone());
    let written = log.len().min((buf_size.max(1) - 1) as usize);
    ptr::copy_nonoverlapping(log.as_ptr(), info_log.cast::<u8>(), written);
    *info_log.add(written) = 0;
    if !length.is_null() {
        *length = written as GLsizei;
    }
}

unsafe extern "system" fn get_shader_info_log(
    _shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    record(Call::Ints("glGetShaderInfoLog", vec![buf_size.into()]));
    write_info_log(buf_size, length, info_log);
}

unsafe extern "system" fn delete_shader(shader: GLuint) {
    record(Call::Ints("glDeleteShader", vec![shader.into()]));
}

unsafe extern "system" fn create_shader_programv(
    ty: GLenum,
    count: GLsizei,
    strings: *const *const GLchar,
) -> GLuint {
    let sources = slice::from_raw_parts(strings, count as usize)
        .iter()
        .map(|&pointer| CStr::from_ptr(pointer).to_string_lossy().into_owned())
        .collect();
    record(Call::Ints("glCreateShaderProgramv", vec![ty.into()]));
    record(Call::Strings("glCreateShaderProgramv", sources, vec![]));
    with(|state| {
        state.next_name += 1;
        state.next_name - 1
    })
}

unsafe extern "system" fn get_programiv(_program: GLuint, pname: GLenum, params: *mut GLint) {
    *params = with(|state| match pname {
        gl::LINK_STATUS => state.link_status,
        gl::INFO_LOG_LENGTH => state.info_log_length,
        _ => state.integers.get(&pname).copied().unwrap_or(0),
    });
}

unsafe extern "system" fn get_program_info_log(
    _program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    write_info_log(buf_size, length, info_log);
}

unsafe extern "system" fn delete_program(program: GLuint) {
    record(Call::Ints("glDeleteProgram", vec![program.into()]));
}

unsafe extern "system" fn buffer_data(
    target: GLenum,
    size: GLsizeiptr,
    data: *const c_void,
    usage: GLenum,
) {
    let bytes = slice::from_raw_parts(data.cast::<u8>(), size as usize).to_vec();
    record(Call::Bytes(
        "glBufferData",
        vec![target.into(), size as i64, usage.into()],
        bytes,
    ));
}

unsafe extern "system" fn multi_draw_arrays(
    mode: GLenum,
    first: *const GLint,
    count: *const GLsizei,
    drawcount: GLsizei,
) {
    let mut args = vec![mode.into(), drawcount.into()];
    for index in 0..drawcount as usize {
        args.push((*first.add(index)).into());
        args.push((*count.add(index)).into());
    }
    record(Call::Ints("glMultiDrawArrays", args));
}

unsafe extern "system" fn vertex_array_attrib_format(
    vaobj: GLuint,
    attribindex: GLuint,
    size: GLint,
    ty: GLenum,
    normalized: GLboolean,
    relativeoffset: GLuint,
) {
    record(Call::Ints(
        "glVertexArrayAttribFormat",
        vec![
            vaobj.into(),
            attribindex.into(),
            size.into(),
            ty.into(),
            normalized.into(),
            relativeoffset.into(),
        ],
    ));
}

unsafe extern "system" fn vertex_array_attrib_i_format(
    vaobj: GLuint,
    attribindex: GLuint,
    size: GLint,
    ty: GLenum,
    relativeoffset: GLuint,
) {
    record(Call::Ints(
        "glVertexArrayAttribIFormat",
        vec![
            vaobj.into(),
            attribindex.into(),
            size.into(),
            ty.into(),
            relativeoffset.into(),
        ],
    ));
}

unsafe extern "system" fn vertex_array_attrib_binding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint) {
    record(Call::Ints(
        "glVertexArrayAttribBinding",
        vec![vaobj.into(), attribindex.into(), bindingindex.into()],
    ));
}

unsafe extern "system" fn enable_vertex_array_attrib(vaobj: GLuint, index: GLuint) {
    record(Call::Ints(
        "glEnableVertexArrayAttrib",
        vec![vaobj.into(), index.into()],
    ));
}

unsafe fn double_matrices(
    name: &'static str,
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLdouble,
    size: usize,
) {
    let values = slice::from_raw_parts(value, count as usize * size).to_vec();
    record(Call::Doubles(
        name,
        vec![location.into(), count.into(), transpose.into()],
        values,
    ));
}

unsafe extern "system" fn uniform_matrix_2dv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLdouble,
) {
    double_matrices("glUniformMatrix2dv", location, count, transpose, value, 4);
}

unsafe extern "system" fn uniform_matrix_3dv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLdouble,
) {
    double_matrices("glUniformMatrix3dv", location, count, transpose, value, 9);
}

unsafe fn terminated_strings(count: GLsizei, strings: *const *const GLchar) -> Vec<String> {
    slice::from_raw_parts(strings, count as usize)
        .iter()
        .map(|&pointer| CStr::from_ptr(pointer).to_string_lossy().into_owned())
        .collect()
}

unsafe extern "system" fn get_uniform_indices(
    _program: GLuint,
    count: GLsizei,
    names: *const *const GLchar,
    indices: *mut GLuint,
) {
    let names = terminated_strings(count, names);
    for (slot, name) in names.iter().enumerate() {
        *indices.add(slot) = match name.as_str() {
            "transform" => 0,
            "tint" => 3,
            _ => gl::INVALID_INDEX,
        };
    }
    record(Call::Strings("glGetUniformIndices", names, vec![]));
}

unsafe extern "system" fn transform_feedback_varyings(
    program: GLuint,
    count: GLsizei,
    varyings: *const *const GLchar,
    buffer_mode: GLenum,
) {
    record(Call::Ints(
        "glTransformFeedbackVaryings",
        vec![program.into(), count.into(), buffer_mode.into()],
    ));
    record(Call::Strings(
        "glTransformFeedbackVaryings",
        terminated_strings(count, varyings),
        vec![],
    ));
}

unsafe extern "system" fn get_attached_shaders(
    _program: GLuint,
    max_count: GLsizei,
    count: *mut GLsizei,
    shaders: *mut GLuint,
) {
    let attached = with(|state| state.attached_shaders.clone());
    let written = attached.len().min(max_count as usize);
    ptr::copy_nonoverlapping(attached.as_ptr(), shaders, written);
    *count = written as GLsizei;
}

unsafe extern "system" fn get_program_binary(
    _program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    binary_format: *mut GLenum,
    binary: *mut c_void,
) {
    let bytes = with(|state| state.binary.clone());
    let written = bytes.len().min(buf_size as usize);
    ptr::copy_nonoverlapping(bytes.as_ptr(), binary.cast::<u8>(), written);
    *length = written as GLsizei;
    *binary_format = 0x9130;
}

/// Writes the label, its terminator, then junk up to `buf_size`, like a
/// driver that does not clear the rest of the buffer.
unsafe extern "system" fn get_object_label(
    identifier: GLenum,
    name: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    label: *mut GLchar,
) {
    record(Call::Ints(
        "glGetObjectLabel",
        vec![identifier.into(), name.into(), buf_size.into()],
    ));
    let text = with(|state| state.label.clone());
    let out = slice::from_raw_parts_mut(label.cast::<u8>(), buf_size as usize);
    out.fill(b'#');
    let written = text.len().min(out.len() - 1);
    out[..written].copy_from_slice(&text.as_bytes()[..written]);
    out[written] = 0;
    *length = written as GLsizei;
}

unsafe extern "system" fn client_wait_sync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
    record(Call::Ints(
        "glClientWaitSync",
        vec![sync as usize as i64, flags.into(), timeout as i64],
    ));
    with(|state| state.wait_status)
}

unsafe extern "system" fn check_framebuffer_status(target: GLenum) -> GLenum {
    record(Call::Ints("glCheckFramebufferStatus", vec![target.into()]));
    with(|state| state.framebuffer_status)
}

unsafe extern "system" fn viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
    record(Call::Ints(
        "glViewport",
        vec![x.into(), y.into(), width.into(), height.into()],
    ));
}
