use pretty_assertions::assert_eq;

use std::{
    ffi::{c_void, CString},
    ptr,
    sync::{Arc, Mutex},
    time::Duration,
};

use glam::{DMat2, DMat3, Mat4, Vec3};

use crate::{
    attrib::{AttrFormat, AttrType},
    buffer::{BufferBindTarget, DataUsage},
    debug::{DebugMessage, DebugSeverity, DebugSource, DebugType},
    framebuffer::FramebufferStatus,
    info::GlVersion,
    marshal,
    program::ShaderType,
    sync::WaitStatus,
    types::GLsync,
    BindError, Gl, GlError, GlErrorGuard, GlLoader,
};

mod mock;
use mock::Call;

fn only(symbols: &'static [&'static str]) -> impl FnMut(&'static str) -> *const c_void {
    move |symbol| {
        if symbols.contains(&symbol) {
            // Any address outside the bogus range will do; these are never called.
            0x1000 as *const c_void
        } else {
            ptr::null()
        }
    }
}

#[test]
fn resolves_through_aliases() {
    let (gl, report) = unsafe {
        Gl::load_reporting(only(&["glDebugMessageCallbackARB", "glGetError"]))
    };

    assert!(gl.is_loaded("glDebugMessageCallback"));
    assert!(gl.is_loaded("glGetError"));
    assert!(!gl.is_loaded("glFinish"));
    assert_eq!(report.loaded, 2);
    assert_eq!(
        report.aliased,
        vec![("glDebugMessageCallback", "glDebugMessageCallbackARB")]
    );
    assert_eq!(report.total(), crate::EntryPoints::NAMES.len());
    assert!(report.missing.contains(&"glFinish"));
    assert!(!report.is_complete());
}

#[test]
fn require_lists_missing_entry_points() {
    let gl = unsafe { Gl::load_with(only(&["glFlush"])) };

    assert_eq!(gl.require(&["glFlush"]), Ok(()));
    assert_eq!(
        gl.require(&["glFlush", "glFinish", "glNotAFunction"]),
        Err(BindError::MissingEntryPoints(vec![
            "glFinish".into(),
            "glNotAFunction".into()
        ]))
    );
}

#[test]
fn bogus_addresses_count_as_missing() {
    let gl = unsafe {
        Gl::load_with(|symbol: &'static str| match symbol {
            "glFlush" => 1 as *const c_void,
            "glFinish" => usize::MAX as *const c_void,
            "glClear" => 0x2000 as *const c_void,
            _ => ptr::null(),
        })
    };

    assert!(!gl.is_loaded("glFlush"));
    assert!(!gl.is_loaded("glFinish"));
    assert!(gl.is_loaded("glClear"));
}

#[test]
fn gles_only_aliases_are_not_tried() {
    let (gl, report) = unsafe { Gl::load_reporting(only(&["glFenceSyncAPPLE"])) };

    assert!(!gl.is_loaded("glFenceSync"));
    assert!(report.missing.contains(&"glFenceSync"));
    assert!(report.aliased.is_empty());
}

#[cfg(feature = "library")]
#[test]
fn export_table_wins_unless_the_resolver_is_trusted() {
    use crate::library::first_found;

    let exported = || 0x1000 as *const c_void;
    let stub = || 0x2000 as *const c_void;
    assert_eq!(first_found(false, exported, stub), exported());
    assert_eq!(first_found(true, exported, stub), stub());

    let resolver_asked = std::cell::Cell::new(false);
    first_found(false, exported, || {
        resolver_asked.set(true);
        ptr::null()
    });
    assert!(!resolver_asked.get());

    assert_eq!(first_found(false, ptr::null, stub), stub());
    assert_eq!(first_found(true, exported, || 1 as *const c_void), exported());
    assert!(first_found(false, ptr::null, || usize::MAX as *const c_void).is_null());
}

#[test]
fn or_asks_the_fallback_for_unresolved_names() {
    let loader = only(&["glFlush"]).or(only(&["glFinish", "glFlush"]));
    let gl = unsafe { Gl::load_with(loader) };

    assert!(gl.is_loaded("glFlush"));
    assert!(gl.is_loaded("glFinish"));
    assert!(!gl.is_loaded("glClear"));
}

#[test]
#[should_panic(expected = "OpenGL entry point glFinish was not loaded")]
fn calling_a_missing_entry_point_panics() {
    let gl = unsafe { Gl::load_with(only(&[])) };
    unsafe { gl.Finish() };
}

#[test]
fn matrix_uniform_count_is_in_matrices() {
    let gl = mock::gl();
    let first: [f32; 8] = [0., 1., 2., 3., 4., 5., 6., 7.];
    let second: [f32; 8] = [8., 9., 10., 11., 12., 13., 14., 15.];

    gl.uniform_matrix_2x4fv(3, false, &[first, second]).unwrap();

    let expected: Vec<f32> = (0..16).map(|value| value as f32).collect();
    assert_eq!(
        mock::calls(),
        vec![Call::Floats("glUniformMatrix2x4fv", vec![3, 2, 0], expected)]
    );
}

#[test]
fn double_matrix_uniform_reads_eight_doubles_per_matrix() {
    let gl = mock::gl();
    let matrix: [f64; 8] = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5];

    gl.uniform_matrix_2x4dv(1, true, &[matrix]).unwrap();

    assert_eq!(
        mock::calls(),
        vec![Call::Doubles(
            "glUniformMatrix2x4dv",
            vec![1, 1, 1],
            matrix.to_vec()
        )]
    );
}

#[test]
fn glam_values_upload_column_major() {
    let gl = mock::gl();
    let matrix = Mat4::from_cols_array(&std::array::from_fn(|index| index as f32));

    gl.uniform_mat4(2, &[matrix]).unwrap();
    gl.uniform_vec3(5, &[Vec3::X, Vec3::new(1.0, 2.0, 3.0)]).unwrap();

    assert_eq!(
        mock::calls(),
        vec![
            Call::Floats(
                "glUniformMatrix4fv",
                vec![2, 1, 0],
                matrix.to_cols_array().to_vec()
            ),
            Call::Floats(
                "glUniform3fv",
                vec![5, 2],
                vec![1.0, 0.0, 0.0, 1.0, 2.0, 3.0]
            ),
        ]
    );
}

#[test]
fn uniform_location_maps_minus_one_to_none() {
    let gl = mock::gl();

    assert_eq!(gl.uniform_location(7, "transform"), Ok(Some(4)));
    assert_eq!(gl.uniform_location(7, "missing"), Ok(None));
    assert_eq!(
        gl.uniform_location(7, "bad\0name"),
        Err(BindError::InteriorNul { position: 3 })
    );
}

#[test]
fn shader_source_passes_explicit_lengths() {
    let gl = mock::gl();

    gl.shader_source(9, &["#version 460\n", "void main() {}"])
        .unwrap();

    assert_eq!(
        mock::calls(),
        vec![
            Call::Ints("glShaderSource", vec![9]),
            Call::Strings(
                "glShaderSource",
                vec!["#version 460\n".into(), "void main() {}".into()],
                vec![13, 14]
            ),
        ]
    );
}

#[test]
fn info_log_stops_at_reported_length() {
    let gl = mock::gl();
    mock::set_info_log("0:1(1): error: syntax error");

    assert_eq!(gl.shader_info_log(1), "0:1(1): error: syntax error");
}

#[test]
fn empty_info_log_skips_the_query() {
    let gl = mock::gl();

    assert_eq!(gl.shader_info_log(1), "");
    assert!(!mock::called("glGetShaderInfoLog"));
}

#[test]
fn failed_compile_returns_log_and_deletes_shader() {
    let gl = mock::gl();
    mock::with(|state| state.compile_status = gl::FALSE.into());
    mock::set_info_log("0:3(5): error: `colour' undeclared");

    let result = gl.compile_shader(ShaderType::Fragment, &["void main() { colour; }"]);

    assert_eq!(
        result,
        Err(BindError::Compile("0:3(5): error: `colour' undeclared".into()))
    );
    assert!(mock::calls().contains(&Call::Ints("glDeleteShader", vec![1])));
}

#[test]
fn successful_compile_keeps_shader() {
    let gl = mock::gl();

    let shader = gl.compile_shader(ShaderType::Vertex, &["void main() {}"]);

    assert_eq!(shader, Ok(1));
    assert!(mock::called("glCompileShader"));
    assert!(!mock::called("glDeleteShader"));
}

#[test]
fn create_shader_program_terminates_sources() {
    let gl = mock::gl();

    let program = gl.create_shader_program(ShaderType::Compute, &["void main() {}", "// tail"]);

    assert_eq!(program, Ok(1));
    assert!(mock::calls().contains(&Call::Strings(
        "glCreateShaderProgramv",
        vec!["void main() {}".into(), "// tail".into()],
        vec![]
    )));
}

#[test]
fn create_shader_program_rejects_interior_nul() {
    let gl = mock::gl();

    let program = gl.create_shader_program(ShaderType::Compute, &["void\0main"]);

    assert_eq!(program, Err(BindError::InteriorNul { position: 4 }));
    assert!(!mock::called("glCreateShaderProgramv"));
}

#[test]
fn debug_messages_reach_the_callback() {
    let gl = mock::gl();
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    gl.debug_message_callback(move |message: &DebugMessage| {
        sink.lock().unwrap().push(message.clone());
    });

    mock::emit_debug(
        gl::DEBUG_SOURCE_API,
        gl::DEBUG_TYPE_ERROR,
        1281,
        gl::DEBUG_SEVERITY_HIGH,
        "GL_INVALID_VALUE in glBufferData(size < 0)",
    );

    assert_eq!(
        *received.lock().unwrap(),
        vec![DebugMessage {
            source: Some(DebugSource::Api),
            ty: Some(DebugType::Error),
            id: 1281,
            severity: Some(DebugSeverity::High),
            text: "GL_INVALID_VALUE in glBufferData(size < 0)".into(),
        }]
    );
    assert!(mock::calls().contains(&Call::Ints("glEnable", vec![gl::DEBUG_OUTPUT.into()])));

    gl.clear_debug_callback();
    assert!(mock::with(|state| state.debug_proc.is_none()));
}

#[test]
fn panicking_debug_callback_does_not_unwind_into_gl() {
    let gl = mock::gl();
    gl.debug_message_callback(|_: &DebugMessage| panic!("callback failure"));

    mock::emit_debug(
        gl::DEBUG_SOURCE_APPLICATION,
        gl::DEBUG_TYPE_MARKER,
        0,
        gl::DEBUG_SEVERITY_NOTIFICATION,
        "marker",
    );
}

#[test]
fn debug_message_log_splits_messages() {
    let gl = mock::gl();
    mock::with(|state| {
        state.integers.insert(gl::MAX_DEBUG_MESSAGE_LENGTH, 64);
        state.debug_log = vec![
            (
                gl::DEBUG_SOURCE_SHADER_COMPILER,
                gl::DEBUG_TYPE_OTHER,
                7,
                gl::DEBUG_SEVERITY_LOW,
                "first".into(),
            ),
            (
                gl::DEBUG_SOURCE_OTHER,
                gl::DEBUG_TYPE_PERFORMANCE,
                8,
                0,
                "second message".into(),
            ),
        ];
    });

    let messages = gl.debug_message_log(4).unwrap();

    assert_eq!(
        messages,
        vec![
            DebugMessage {
                source: Some(DebugSource::ShaderCompiler),
                ty: Some(DebugType::Other),
                id: 7,
                severity: Some(DebugSeverity::Low),
                text: "first".into(),
            },
            DebugMessage {
                source: Some(DebugSource::Other),
                ty: Some(DebugType::Performance),
                id: 8,
                severity: None,
                text: "second message".into(),
            },
        ]
    );
}

#[test]
fn debug_group_pops_on_drop() {
    let gl = mock::gl();

    let group = gl.debug_group(3, "shadow pass").unwrap();
    drop(group);

    assert_eq!(
        mock::calls(),
        vec![
            Call::Bytes(
                "glPushDebugGroup",
                vec![gl::DEBUG_SOURCE_APPLICATION.into(), 3],
                b"shadow pass".to_vec()
            ),
            Call::Ints("glPopDebugGroup", vec![]),
        ]
    );
}

#[test]
fn drain_errors_empties_the_queue() {
    let gl = mock::gl();
    mock::with(|state| {
        state.errors.extend([gl::INVALID_ENUM, 0x1234, gl::OUT_OF_MEMORY]);
    });

    assert_eq!(
        gl.drain_errors(),
        vec![GlError::InvalidEnum, GlError::OutOfMemory]
    );
    assert_eq!(gl.get_error(), None);
}

#[test]
fn guard_passes_when_no_error_is_raised() {
    let gl = mock::gl();
    mock::with(|state| state.errors.push_back(gl::INVALID_VALUE));

    let value = GlErrorGuard::guard_named(&gl, "quiet", || 5);

    assert_eq!(value, 5);
}

#[test]
#[should_panic(expected = "GL error assert \"upload\" failed: [InvalidOperation]")]
fn guard_panics_on_new_errors() {
    let gl = mock::gl();
    GlErrorGuard::guard_named(&gl, "upload", || {
        mock::with(|state| state.errors.push_back(gl::INVALID_OPERATION));
    });
}

#[test]
fn version_strings_parse() {
    assert_eq!(
        GlVersion::parse("4.6.0 NVIDIA 550.54.14"),
        Some(GlVersion::new(4, 6))
    );
    assert_eq!(
        GlVersion::parse("4.5 (Core Profile) Mesa 24.0.5"),
        Some(GlVersion::new(4, 5))
    );
    assert_eq!(
        GlVersion::parse("OpenGL ES 3.2 Mesa 24.0.5"),
        Some(GlVersion {
            es: true,
            major: 3,
            minor: 2
        })
    );
    assert_eq!(GlVersion::parse("4.1ATI-4.8.101"), Some(GlVersion::new(4, 1)));
    assert_eq!(GlVersion::parse("garbage"), None);
    assert!(GlVersion::new(4, 6).at_least(4, 3));
    assert!(!GlVersion::new(4, 1).at_least(4, 3));
}

#[test]
fn version_and_extensions_come_from_the_context() {
    let gl = mock::gl();
    mock::with(|state| {
        state
            .strings
            .insert(gl::VERSION, CString::new("4.6 (Core Profile) Mesa").unwrap());
        state.integers.insert(gl::NUM_EXTENSIONS, 2);
        state.extensions = vec![
            CString::new("GL_KHR_debug").unwrap(),
            CString::new("GL_ARB_gl_spirv").unwrap(),
        ];
    });

    assert_eq!(gl.version(), Some(GlVersion::new(4, 6)));
    assert_eq!(gl.extensions(), vec!["GL_KHR_debug", "GL_ARB_gl_spirv"]);
    assert!(gl.has_extension("GL_KHR_debug"));
    assert!(!gl.has_extension("GL_KHR"));
}

#[test]
fn buffer_data_passes_byte_size() {
    let gl = mock::gl();

    gl.buffer_data(
        BufferBindTarget::ArrayBuffer,
        &[1u32, 2, 3],
        DataUsage::STATIC_DRAW,
    )
    .unwrap();

    let bytes: Vec<u8> = [1u32, 2, 3]
        .iter()
        .flat_map(|value| value.to_ne_bytes())
        .collect();
    assert_eq!(
        mock::calls(),
        vec![Call::Bytes(
            "glBufferData",
            vec![gl::ARRAY_BUFFER.into(), 12, gl::STATIC_DRAW.into()],
            bytes
        )]
    );
}

#[test]
fn multi_draw_arrays_checks_parallel_lengths() {
    let gl = mock::gl();

    assert_eq!(
        gl.multi_draw_arrays(gl::TRIANGLES, &[0, 6], &[6]),
        Err(BindError::LengthMismatch { left: 2, right: 1 })
    );
    assert!(!mock::called("glMultiDrawArrays"));

    gl.multi_draw_arrays(gl::TRIANGLES, &[0, 6], &[6, 3]).unwrap();
    assert_eq!(
        mock::calls(),
        vec![Call::Ints(
            "glMultiDrawArrays",
            vec![gl::TRIANGLES.into(), 2, 0, 6, 6, 3]
        )]
    );
}

#[test]
fn vertex_layout_picks_format_entry_points() {
    let gl = mock::gl();

    let stride = gl.vertex_array_layout(
        1,
        0,
        2,
        &[
            AttrFormat::new(AttrType::Float, 3),
            AttrFormat::new(AttrType::Uint, 1),
        ],
    );

    assert_eq!(stride, 16);
    assert_eq!(
        mock::calls(),
        vec![
            Call::Ints(
                "glVertexArrayAttribFormat",
                vec![1, 2, 3, gl::FLOAT.into(), 0, 0]
            ),
            Call::Ints("glVertexArrayAttribBinding", vec![1, 2, 0]),
            Call::Ints("glEnableVertexArrayAttrib", vec![1, 2]),
            Call::Ints(
                "glVertexArrayAttribIFormat",
                vec![1, 3, 1, gl::UNSIGNED_INT.into(), 12]
            ),
            Call::Ints("glVertexArrayAttribBinding", vec![1, 3, 0]),
            Call::Ints("glEnableVertexArrayAttrib", vec![1, 3]),
        ]
    );
}

#[test]
fn read_string_handles_short_and_terminated_writes() {
    let text = marshal::read_string(16, |size, length, buffer| unsafe {
        assert_eq!(size, 16);
        ptr::copy_nonoverlapping(b"abc\0".as_ptr(), buffer.cast(), 4);
        *length = 4;
    });
    assert_eq!(text, "abc");

    let clamped = marshal::read_string(4, |_, length, buffer| unsafe {
        ptr::copy_nonoverlapping(b"abcd".as_ptr(), buffer.cast(), 4);
        *length = 100;
    });
    assert_eq!(clamped, "abcd");

    let terminated = marshal::read_terminated(8, |_, buffer| unsafe {
        ptr::copy_nonoverlapping(b"hi\0".as_ptr(), buffer.cast(), 3);
    });
    assert_eq!(terminated, "hi");
}

#[test]
fn string_list_keeps_lengths() {
    let sources = ["a", "bcd", ""];
    let list = marshal::StringList::new(&sources).unwrap();

    assert_eq!(list.count(), Ok(3));
    let lengths = unsafe { std::slice::from_raw_parts(list.lengths(), 3) };
    assert_eq!(lengths, &[1, 3, 0]);
}

#[test]
fn attr_type_sizes() {
    assert_eq!(AttrFormat::new(AttrType::HalfFloat, 2).byte_size(), 4);
    assert_eq!(AttrFormat::new(AttrType::Double, 3).byte_size(), 24);
    assert_eq!(AttrType::Double.to_u32(), gl::DOUBLE);
}

#[test]
fn enum_values_convert_back() {
    assert_eq!(DebugType::try_from(gl::DEBUG_TYPE_ERROR), Ok(DebugType::Error));
    assert_eq!(DebugType::try_from(gl::DEBUG_TYPE_OTHER), Ok(DebugType::Other));
    assert_eq!(DebugType::try_from(gl::DEBUG_SOURCE_API), Err(gl::DEBUG_SOURCE_API));
    assert_eq!(WaitStatus::try_from(gl::TIMEOUT_EXPIRED), Ok(WaitStatus::TimeoutExpired));
}

#[test]
fn client_wait_sync_maps_status_and_timeout() {
    let gl = mock::gl();
    let sync = 0x40 as GLsync;

    let status = gl.client_wait_sync(sync, true, Duration::from_millis(2));
    assert_eq!(status, WaitStatus::AlreadySignaled);
    assert!(status.is_signaled());

    mock::with(|state| state.wait_status = gl::TIMEOUT_EXPIRED);
    let status = gl.client_wait_sync(sync, false, Duration::MAX);
    assert_eq!(status, WaitStatus::TimeoutExpired);
    assert!(!status.is_signaled());

    mock::with(|state| state.wait_status = 0x1234);
    assert_eq!(
        gl.client_wait_sync(sync, false, Duration::ZERO),
        WaitStatus::WaitFailed
    );

    assert_eq!(
        mock::calls(),
        vec![
            Call::Ints(
                "glClientWaitSync",
                vec![0x40, gl::SYNC_FLUSH_COMMANDS_BIT.into(), 2_000_000]
            ),
            Call::Ints(
                "glClientWaitSync",
                vec![0x40, 0, gl::TIMEOUT_IGNORED as i64]
            ),
            Call::Ints("glClientWaitSync", vec![0x40, 0, 0]),
        ]
    );
}

#[test]
fn uniform_indices_terminate_names_and_map_invalid_index() {
    let gl = mock::gl();

    let indices = gl.uniform_indices(5, &["tint", "unused", "transform"]);

    assert_eq!(indices, Ok(vec![Some(3), None, Some(0)]));
    assert_eq!(
        mock::calls(),
        vec![Call::Strings(
            "glGetUniformIndices",
            vec!["tint".into(), "unused".into(), "transform".into()],
            vec![]
        )]
    );
    assert_eq!(
        gl.uniform_indices(5, &["ti\0nt"]),
        Err(BindError::InteriorNul { position: 2 })
    );
}

#[test]
fn transform_feedback_varyings_are_terminated() {
    let gl = mock::gl();

    gl.transform_feedback_varyings(2, &["out_position", "out_velocity"], gl::INTERLEAVED_ATTRIBS)
        .unwrap();

    assert_eq!(
        mock::calls(),
        vec![
            Call::Ints(
                "glTransformFeedbackVaryings",
                vec![2, 2, gl::INTERLEAVED_ATTRIBS.into()]
            ),
            Call::Strings(
                "glTransformFeedbackVaryings",
                vec!["out_position".into(), "out_velocity".into()],
                vec![]
            ),
        ]
    );
}

#[test]
fn object_label_stops_at_reported_length() {
    let gl = mock::gl();
    mock::with(|state| {
        state.integers.insert(gl::MAX_LABEL_LENGTH, 32);
        state.label = "shadow map".into();
    });

    assert_eq!(gl.get_object_label(gl::TEXTURE, 4), "shadow map");
    assert_eq!(
        mock::calls(),
        vec![Call::Ints(
            "glGetObjectLabel",
            vec![gl::TEXTURE.into(), 4, 32]
        )]
    );
}

#[test]
fn program_binary_is_cut_to_written_length() {
    let gl = mock::gl();
    mock::with(|state| {
        state.integers.insert(gl::PROGRAM_BINARY_LENGTH, 16);
        state.binary = vec![1, 2, 3, 4, 5];
    });

    assert_eq!(gl.program_binary(1), Some((0x9130, vec![1, 2, 3, 4, 5])));

    mock::with(|state| state.integers.insert(gl::PROGRAM_BINARY_LENGTH, 0));
    assert_eq!(gl.program_binary(1), None);
}

#[test]
fn attached_shaders_are_cut_to_written_count() {
    let gl = mock::gl();
    mock::with(|state| {
        state.integers.insert(gl::ATTACHED_SHADERS, 4);
        state.attached_shaders = vec![7, 9];
    });

    assert_eq!(gl.attached_shaders(1), vec![7, 9]);

    mock::with(|state| state.integers.insert(gl::ATTACHED_SHADERS, 0));
    assert_eq!(gl.attached_shaders(1), Vec::<u32>::new());
}

#[test]
fn framebuffer_status_keeps_unknown_values() {
    let gl = mock::gl();

    assert_eq!(
        gl.check_framebuffer_status(gl::FRAMEBUFFER),
        Ok(FramebufferStatus::Complete)
    );

    mock::with(|state| state.framebuffer_status = gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT);
    assert_eq!(
        gl.check_framebuffer_status(gl::DRAW_FRAMEBUFFER),
        Ok(FramebufferStatus::MissingAttachment)
    );

    mock::with(|state| state.framebuffer_status = 0);
    assert_eq!(gl.check_framebuffer_status(gl::FRAMEBUFFER), Err(0));

    assert_eq!(
        mock::calls()[1],
        Call::Ints("glCheckFramebufferStatus", vec![gl::DRAW_FRAMEBUFFER.into()])
    );
}

#[test]
fn double_matrices_upload_column_major() {
    let gl = mock::gl();
    let two = DMat2::from_cols_array(&[1.0, 2.0, 3.0, 4.0]);
    let three = DMat3::from_cols_array(&std::array::from_fn(|index| index as f64 / 2.0));

    gl.uniform_dmat2(0, &[two, two]).unwrap();
    gl.uniform_dmat3(1, &[three]).unwrap();

    assert_eq!(
        mock::calls(),
        vec![
            Call::Doubles(
                "glUniformMatrix2dv",
                vec![0, 2, 0],
                vec![1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]
            ),
            Call::Doubles(
                "glUniformMatrix3dv",
                vec![1, 1, 0],
                three.to_cols_array().to_vec()
            ),
        ]
    );
}

#[test]
fn viewport_passes_origin_and_size() {
    let gl = mock::gl();

    gl.viewport((0, 8), (640, 480));

    assert_eq!(
        mock::calls(),
        vec![Call::Ints("glViewport", vec![0, 8, 640, 480])]
    );
}
