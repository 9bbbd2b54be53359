use std::{cell::RefCell, ffi::c_void, ops::Deref, ptr};

use crate::{
    debug::DebugHandler,
    loader::{self, GlLoader, LoadReport},
    BindError, BindResult,
};

pub use crate::table::EntryPoints;

/// Address of one entry point, and whether the loader found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnPtr {
    ptr: *const c_void,
    loaded: bool,
}

impl FnPtr {
    pub const MISSING: Self = Self {
        ptr: ptr::null(),
        loaded: false,
    };

    pub fn new(ptr: *const c_void) -> Self {
        if loader::is_bogus(ptr) {
            Self::MISSING
        } else {
            Self { ptr, loaded: true }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.ptr
    }
}

#[cold]
#[inline(never)]
pub(crate) fn missing_entry_point(symbol: &'static str) -> ! {
    panic!("OpenGL entry point {symbol} was not loaded")
}

/// Declares the entry point table.
///
/// Each line is `fn Name("glName" [, "glNameARB" ...])(arg: Ty, ...) [-> Ret];`,
/// the format `gl4_registry` emits. The extra symbols are tried in order when
/// the first one does not resolve.
macro_rules! gl_entry_points {
    ($(
        fn $name: ident ($symbol: literal $(, $alias: literal)*) ($($arg: ident : $ty: ty),* $(,)?) $(-> $ret: ty)?;
    )*) => {
        /// Resolved addresses of every bound entry point, with one raw
        /// wrapper method per entry point.
        #[allow(non_snake_case)]
        pub struct EntryPoints {
            $($name: $crate::entry::FnPtr,)*
        }

        #[allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]
        impl EntryPoints {
            /// Symbol names in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($symbol),*];

            pub(crate) fn load(
                loader: &mut dyn $crate::loader::GlLoader,
                report: &mut $crate::loader::LoadReport,
            ) -> Self {
                Self {
                    $($name: $crate::loader::resolve(loader, report, $symbol, &[$($alias),*]),)*
                }
            }

            /// The resolved address of `symbol`, if it is part of the table.
            pub fn get(&self, symbol: &str) -> Option<$crate::entry::FnPtr> {
                match symbol {
                    $($symbol => Some(self.$name),)*
                    _ => None,
                }
            }

            $(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)? {
                    let entry = self.$name;
                    if !entry.is_loaded() {
                        $crate::entry::missing_entry_point($symbol);
                    }
                    let func = std::mem::transmute::<
                        *const std::ffi::c_void,
                        unsafe extern "system" fn($($ty),*) $(-> $ret)?,
                    >(entry.as_ptr());
                    func($($arg),*)
                }
            )*
        }
    };
}
pub(crate) use gl_entry_points;

/// A loaded OpenGL function table.
///
/// Derefs to [`EntryPoints`] for the raw calls. Not `Sync`: a context is
/// current on one thread at a time.
pub struct Gl {
    entry_points: EntryPoints,
    pub(crate) debug_handler: RefCell<Option<Box<DebugHandler>>>,
}

impl Deref for Gl {
    type Target = EntryPoints;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.entry_points
    }
}

impl Gl {
    /// Resolve every entry point through `loader`.
    ///
    /// # Safety
    ///
    /// The loader must return, for each name, either null or the address of
    /// that OpenGL function with the registry's signature. Every later call
    /// on the returned table needs a context that those addresses are valid
    /// for to be current on the calling thread.
    pub unsafe fn load_with(loader: impl GlLoader) -> Self {
        Self::load_reporting(loader).0
    }

    /// Like [`Gl::load_with`], also returning which entry points resolved.
    ///
    /// # Safety
    ///
    /// See [`Gl::load_with`].
    pub unsafe fn load_reporting(mut loader: impl GlLoader) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let entry_points = EntryPoints::load(&mut loader, &mut report);
        report.log_summary();
        let gl = Self {
            entry_points,
            debug_handler: RefCell::new(None),
        };
        (gl, report)
    }

    pub fn is_loaded(&self, symbol: &str) -> bool {
        self.get(symbol).is_some_and(|ptr| ptr.is_loaded())
    }

    /// Fails with every symbol in `symbols` that did not resolve.
    pub fn require(&self, symbols: &[&str]) -> BindResult<()> {
        let missing: Vec<String> = symbols
            .iter()
            .filter(|symbol| !self.is_loaded(symbol))
            .map(|symbol| symbol.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BindError::MissingEntryPoints(missing))
        }
    }

    /// Iterates `(symbol, loaded)` over the whole table.
    pub fn entry_points(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        EntryPoints::NAMES
            .iter()
            .map(|&symbol| (symbol, self.is_loaded(symbol)))
    }
}

impl Drop for Gl {
    fn drop(&mut self) {
        if self.debug_handler.get_mut().is_some() {
            self.clear_debug_callback();
        }
    }
}
