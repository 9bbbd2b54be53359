//! `KHR_debug` message delivery.
//!
//! The callback is boxed and its address handed to GL as `userParam`; GL hands
//! it back on every message, so no global state is involved.

use std::{
    ffi::{c_void, CStr},
    panic::{self, AssertUnwindSafe},
    ptr, slice,
};

use crate::{
    marshal, trait_alias, transmutable_u32,
    types::{GLchar, GLenum, GLsizei, GLuint},
    BindError, BindResult, Gl,
};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugSource {
    Api = gl::DEBUG_SOURCE_API,
    WindowSystem = gl::DEBUG_SOURCE_WINDOW_SYSTEM,
    ShaderCompiler = gl::DEBUG_SOURCE_SHADER_COMPILER,
    ThirdParty = gl::DEBUG_SOURCE_THIRD_PARTY,
    Application = gl::DEBUG_SOURCE_APPLICATION,
    Other = gl::DEBUG_SOURCE_OTHER,
}
transmutable_u32!(DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
});

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugType {
    Error = gl::DEBUG_TYPE_ERROR,
    DeprecatedBehavior = gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR,
    UndefinedBehavior = gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR,
    Portability = gl::DEBUG_TYPE_PORTABILITY,
    Performance = gl::DEBUG_TYPE_PERFORMANCE,
    Marker = gl::DEBUG_TYPE_MARKER,
    PushGroup = gl::DEBUG_TYPE_PUSH_GROUP,
    PopGroup = gl::DEBUG_TYPE_POP_GROUP,
    Other = gl::DEBUG_TYPE_OTHER,
}
transmutable_u32!(DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other,
});

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugSeverity {
    High = gl::DEBUG_SEVERITY_HIGH,
    Medium = gl::DEBUG_SEVERITY_MEDIUM,
    Low = gl::DEBUG_SEVERITY_LOW,
    Notification = gl::DEBUG_SEVERITY_NOTIFICATION,
}
transmutable_u32!(DebugSeverity {
    High,
    Medium,
    Low,
    Notification,
});

impl DebugSeverity {
    pub const fn log_level(self) -> log::Level {
        match self {
            Self::High => log::Level::Error,
            Self::Medium => log::Level::Warn,
            Self::Low => log::Level::Info,
            Self::Notification => log::Level::Debug,
        }
    }
}

/// One debug message, copied out of GL's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: Option<DebugSource>,
    pub ty: Option<DebugType>,
    pub id: GLuint,
    pub severity: Option<DebugSeverity>,
    pub text: String,
}

impl DebugMessage {
    fn from_raw(source: GLenum, ty: GLenum, id: GLuint, severity: GLenum, text: &[u8]) -> Self {
        let text = text.strip_suffix(&[0]).unwrap_or(text);
        Self {
            source: DebugSource::from_u32(source),
            ty: DebugType::from_u32(ty),
            id,
            severity: DebugSeverity::from_u32(severity),
            text: String::from_utf8_lossy(text).into_owned(),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.severity.map_or(log::Level::Debug, DebugSeverity::log_level)
    }
}

trait_alias!(pub trait DebugCallback = Fn(&DebugMessage) + Send + Sync + 'static);

pub(crate) type DebugHandler = Box<dyn DebugCallback>;

unsafe extern "system" fn debug_trampoline(
    source: GLenum,
    ty: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *const c_void,
) {
    if user_param.is_null() || message.is_null() {
        return;
    }
    let text = if length >= 0 {
        slice::from_raw_parts(message.cast::<u8>(), length as usize)
    } else {
        CStr::from_ptr(message).to_bytes()
    };
    let message = DebugMessage::from_raw(source, ty, id, severity, text);
    let handler = &*user_param.cast::<DebugHandler>();

    // Unwinding into the driver is undefined behaviour.
    if panic::catch_unwind(AssertUnwindSafe(|| handler(&message))).is_err() {
        log::error!("OpenGL debug callback panicked on message {}", message.id);
    }
}

/// Pops the debug group on drop.
#[must_use]
pub struct DebugGroup<'gl> {
    gl: &'gl Gl,
}

impl Drop for DebugGroup<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.PopDebugGroup() }
    }
}

fn wildcard<T: Into<u32>>(value: Option<T>) -> GLenum {
    value.map_or(gl::DONT_CARE, Into::into)
}

impl Gl {
    /// Delivers every debug message to `callback`, replacing any earlier
    /// one. Only contexts created with the debug flag are guaranteed to
    /// produce messages; `GL_DEBUG_OUTPUT_SYNCHRONOUS` is enabled so the
    /// callback runs on the thread that issued the call.
    pub fn debug_message_callback(&self, callback: impl DebugCallback) {
        let handler: Box<DebugHandler> = Box::new(Box::new(callback));
        let user_param = ptr::from_ref::<DebugHandler>(&*handler).cast::<c_void>();
        unsafe {
            self.Enable(gl::DEBUG_OUTPUT);
            self.Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
            self.DebugMessageCallback(Some(debug_trampoline), user_param);
        }
        // The old handler may only go once GL stopped pointing at it.
        self.debug_handler.replace(Some(handler));
    }

    /// Routes debug messages to the `log` crate, at a level matching their
    /// severity.
    pub fn log_debug_messages(&self) {
        self.debug_message_callback(|message: &DebugMessage| {
            log::log!(
                target: "gl4_bind::debug",
                message.log_level(),
                "[{:?}/{:?} {}] {}",
                message.source,
                message.ty,
                message.id,
                message.text
            );
        });
    }

    pub fn clear_debug_callback(&self) {
        if self.is_loaded("glDebugMessageCallback") {
            unsafe { self.DebugMessageCallback(None, ptr::null()) };
        }
        self.debug_handler.replace(None);
    }

    /// Enables or disables messages. `None` matches everything; `ids` only
    /// applies when source and type are both given.
    pub fn debug_message_control(
        &self,
        source: Option<DebugSource>,
        ty: Option<DebugType>,
        severity: Option<DebugSeverity>,
        ids: &[GLuint],
        enabled: bool,
    ) -> BindResult<()> {
        let count = marshal::count_of(ids)?;
        unsafe {
            self.DebugMessageControl(
                wildcard(source),
                wildcard(ty),
                wildcard(severity),
                count,
                marshal::ptr_or_null(ids),
                if enabled { gl::TRUE } else { gl::FALSE },
            )
        };
        Ok(())
    }

    pub fn debug_message_insert(
        &self,
        source: DebugSource,
        ty: DebugType,
        id: GLuint,
        severity: DebugSeverity,
        text: &str,
    ) -> BindResult<()> {
        let length = marshal::count_of(text.as_bytes())?;
        unsafe {
            self.DebugMessageInsert(
                source.to_u32(),
                ty.to_u32(),
                id,
                severity.to_u32(),
                length,
                text.as_ptr().cast(),
            )
        };
        Ok(())
    }

    pub fn push_debug_group(&self, source: DebugSource, id: GLuint, text: &str) -> BindResult<()> {
        let length = marshal::count_of(text.as_bytes())?;
        unsafe { self.PushDebugGroup(source.to_u32(), id, length, text.as_ptr().cast()) };
        Ok(())
    }

    pub fn pop_debug_group(&self) {
        unsafe { self.PopDebugGroup() }
    }

    /// Pushes an application debug group that is popped when the returned
    /// guard drops.
    pub fn debug_group(&self, id: GLuint, text: &str) -> BindResult<DebugGroup<'_>> {
        self.push_debug_group(DebugSource::Application, id, text)?;
        Ok(DebugGroup { gl: self })
    }

    pub fn object_label(&self, identifier: GLenum, name: GLuint, label: &str) -> BindResult<()> {
        let length = marshal::count_of(label.as_bytes())?;
        unsafe { self.ObjectLabel(identifier, name, length, label.as_ptr().cast()) };
        Ok(())
    }

    pub fn get_object_label(&self, identifier: GLenum, name: GLuint) -> String {
        let capacity = self.get_integer(gl::MAX_LABEL_LENGTH);
        marshal::read_string(capacity, |size, length, buffer| unsafe {
            self.GetObjectLabel(identifier, name, size, length, buffer)
        })
    }

    /// Fetches up to `count` messages from the log kept while no callback is
    /// installed.
    pub fn debug_message_log(&self, count: usize) -> BindResult<Vec<DebugMessage>> {
        let max_length = self.get_integer(gl::MAX_DEBUG_MESSAGE_LENGTH).max(1) as usize;
        let count = GLuint::try_from(count).map_err(|_| BindError::TooLarge(count))?;
        let text_size = max_length
            .checked_mul(count as usize)
            .ok_or(BindError::TooLarge(usize::MAX))?;
        let buf_size =
            GLsizei::try_from(text_size).map_err(|_| BindError::TooLarge(text_size))?;

        let slots = count as usize;
        let mut sources = vec![0; slots];
        let mut types = vec![0; slots];
        let mut ids = vec![0; slots];
        let mut severities = vec![0; slots];
        let mut lengths = vec![0; slots];
        let mut text = vec![0u8; text_size];

        let fetched = unsafe {
            self.GetDebugMessageLog(
                count,
                buf_size,
                sources.as_mut_ptr(),
                types.as_mut_ptr(),
                ids.as_mut_ptr(),
                severities.as_mut_ptr(),
                lengths.as_mut_ptr(),
                text.as_mut_ptr().cast(),
            )
        };

        let mut messages = Vec::with_capacity(fetched as usize);
        let mut offset = 0;
        for index in 0..(fetched as usize).min(slots) {
            let length = lengths[index].max(0) as usize;
            let end = (offset + length).min(text.len());
            messages.push(DebugMessage::from_raw(
                sources[index],
                types[index],
                ids[index],
                severities[index],
                &text[offset..end],
            ));
            offset = end;
        }
        Ok(messages)
    }
}
