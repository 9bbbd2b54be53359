use std::{
    ffi::{c_char, c_void, CString, OsStr},
    ptr,
};

use libloading::Library;

use crate::{loader::is_bogus, BindError, BindResult, GlLoader};

#[cfg(target_os = "linux")]
const CANDIDATES: &[&str] = &["libGL.so.1", "libGL.so", "libOpenGL.so.0"];
#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
#[cfg(target_os = "windows")]
const CANDIDATES: &[&str] = &["opengl32.dll"];
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[&str] = &["libGL.so"];

/// Extension entry points are only reachable through the window system's
/// resolver, core ones usually through the export table too.
#[cfg(target_os = "windows")]
const PROC_RESOLVER: &[u8] = b"wglGetProcAddress";
#[cfg(not(target_os = "windows"))]
const PROC_RESOLVER: &[u8] = b"glXGetProcAddressARB";

/// wglGetProcAddress returns null for names the driver lacks, so it is asked
/// first. glXGetProcAddress hands out a dispatch stub for any name at all, so
/// its answer proves nothing and the export table goes first there.
const RESOLVER_FIRST: bool = cfg!(target_os = "windows");

type ProcResolver = unsafe extern "system" fn(*const c_char) -> *const c_void;

/// Runs the two lookups in order, stopping at the first real address.
pub(crate) fn first_found(
    resolver_first: bool,
    exported: impl FnOnce() -> *const c_void,
    resolved: impl FnOnce() -> *const c_void,
) -> *const c_void {
    let found = |address: *const c_void| (!is_bogus(address)).then_some(address);
    let address = if resolver_first {
        found(resolved()).or_else(|| found(exported()))
    } else {
        found(exported()).or_else(|| found(resolved()))
    };
    address.unwrap_or(ptr::null())
}

/// The system OpenGL library, opened at runtime.
///
/// Borrow it as the loader (`Gl::load_with(&library)`) and keep it alive for
/// as long as the [`Gl`](crate::Gl) built from it.
pub struct SystemLibrary {
    resolver: Option<ProcResolver>,
    library: Library,
}

impl SystemLibrary {
    /// Opens the first library name that loads on this platform.
    pub fn open() -> BindResult<Self> {
        let mut failures = Vec::new();
        for candidate in CANDIDATES {
            match Self::open_path(candidate) {
                Ok(library) => {
                    log::debug!("opened {candidate}");
                    return Ok(library);
                }
                Err(err) => failures.push(err.to_string()),
            }
        }
        Err(BindError::Library(failures.join("; ")))
    }

    pub fn open_path(path: impl AsRef<OsStr>) -> BindResult<Self> {
        // SAFETY: GL libraries run no initialisers that depend on our state.
        let library = unsafe { Library::new(path.as_ref()) }
            .map_err(|err| BindError::Library(err.to_string()))?;
        let resolver = unsafe { library.get::<ProcResolver>(PROC_RESOLVER) }
            .ok()
            .map(|symbol| *symbol);
        Ok(Self { resolver, library })
    }

    /// Address of `symbol` from the export table or the window system
    /// resolver.
    ///
    /// On GLX a name only the resolver knows still resolves, even when the
    /// driver does not implement it. Check the context version or extension
    /// list before calling such entry points.
    pub fn lookup(&self, symbol: &str) -> *const c_void {
        let Ok(name) = CString::new(symbol) else {
            return ptr::null();
        };
        first_found(
            RESOLVER_FIRST,
            || {
                unsafe { self.library.get::<*const c_void>(name.as_bytes_with_nul()) }
                    .map_or(ptr::null(), |symbol| *symbol)
            },
            || match self.resolver {
                Some(resolver) => unsafe { resolver(name.as_ptr()) },
                None => ptr::null(),
            },
        )
    }
}

impl GlLoader for &SystemLibrary {
    fn get_proc_address(&mut self, symbol: &'static str) -> *const c_void {
        self.lookup(symbol)
    }
}
