use std::{ffi::CStr, fmt};

use crate::{transmutable_u32, Gl};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlString {
    Vendor = gl::VENDOR,
    Renderer = gl::RENDERER,
    Version = gl::VERSION,
    ShadingLanguageVersion = gl::SHADING_LANGUAGE_VERSION,
}
transmutable_u32!(GlString);

/// Context version as reported by `GL_VERSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlVersion {
    pub es: bool,
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            es: false,
            major,
            minor,
        }
    }

    /// Parses `"4.6.0 NVIDIA 550.54"`, `"OpenGL ES 3.2 Mesa 24.0"` and the like.
    pub fn parse(version: &str) -> Option<Self> {
        let (es, rest) = match version
            .strip_prefix("OpenGL ES-CM ")
            .or_else(|| version.strip_prefix("OpenGL ES-CL "))
            .or_else(|| version.strip_prefix("OpenGL ES "))
        {
            Some(rest) => (true, rest),
            None => (false, version),
        };

        let number = rest.split_whitespace().next()?;
        let mut parts = number.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?;
        let digits = minor
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(minor.len());
        let minor = minor[..digits].parse().ok()?;
        Some(Self { es, major, minor })
    }

    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.es {
            write!(f, "OpenGL ES {}.{}", self.major, self.minor)
        } else {
            write!(f, "OpenGL {}.{}", self.major, self.minor)
        }
    }
}

unsafe fn gl_str(ptr: *const gl::types::GLubyte) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned())
    }
}

impl Gl {
    pub fn get_string(&self, name: GlString) -> Option<String> {
        unsafe { gl_str(self.GetString(name.to_u32())) }
    }

    pub fn extensions(&self) -> Vec<String> {
        let count = self.get_integer(gl::NUM_EXTENSIONS).max(0) as u32;
        (0..count)
            .filter_map(|index| unsafe { gl_str(self.GetStringi(gl::EXTENSIONS, index)) })
            .collect()
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions().iter().any(|extension| extension == name)
    }

    pub fn version(&self) -> Option<GlVersion> {
        GlVersion::parse(&self.get_string(GlString::Version)?)
    }
}
