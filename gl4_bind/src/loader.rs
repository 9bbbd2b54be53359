use std::ffi::c_void;

use crate::entry::FnPtr;

/// Resolves OpenGL entry point names to addresses.
///
/// Implemented for every `FnMut(&'static str) -> *const c_void`, so
/// `glfwGetProcAddress`/`eglGetProcAddress` style functions work directly.
pub trait GlLoader {
    /// Address of `symbol`, or null when the symbol is unknown.
    fn get_proc_address(&mut self, symbol: &'static str) -> *const c_void;

    /// Ask `fallback` for every symbol this loader cannot resolve.
    fn or<L: GlLoader>(self, fallback: L) -> Or<Self, L>
    where
        Self: Sized,
    {
        Or {
            primary: self,
            fallback,
        }
    }
}

impl<F> GlLoader for F
where
    F: FnMut(&'static str) -> *const c_void,
{
    fn get_proc_address(&mut self, symbol: &'static str) -> *const c_void {
        self(symbol)
    }
}

/// Two loaders chained with [`GlLoader::or`].
pub struct Or<A, B> {
    primary: A,
    fallback: B,
}

impl<A: GlLoader, B: GlLoader> GlLoader for Or<A, B> {
    fn get_proc_address(&mut self, symbol: &'static str) -> *const c_void {
        let address = self.primary.get_proc_address(symbol);
        if is_bogus(address) {
            self.fallback.get_proc_address(symbol)
        } else {
            address
        }
    }
}

/// wglGetProcAddress reports failure with small integers as well as null.
pub(crate) fn is_bogus(address: *const c_void) -> bool {
    matches!(address as usize, 0 | 1 | 2 | 3 | usize::MAX)
}

/// Outcome of resolving the entry point table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of entry points that resolved, directly or through an alias.
    pub loaded: usize,
    /// `(entry point, alias it was resolved through)`.
    pub aliased: Vec<(&'static str, &'static str)>,
    /// Entry points with no address.
    pub missing: Vec<&'static str>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn total(&self) -> usize {
        self.loaded + self.missing.len()
    }

    pub fn log_summary(&self) {
        log::info!(
            "resolved {} of {} OpenGL entry points ({} through aliases)",
            self.loaded,
            self.total(),
            self.aliased.len()
        );
        if !self.missing.is_empty() {
            log::warn!("missing OpenGL entry points: {}", self.missing.join(", "));
        }
    }
}

pub(crate) fn resolve(
    loader: &mut dyn GlLoader,
    report: &mut LoadReport,
    symbol: &'static str,
    aliases: &[&'static str],
) -> FnPtr {
    let ptr = FnPtr::new(loader.get_proc_address(symbol));
    if ptr.is_loaded() {
        report.loaded += 1;
        return ptr;
    }

    for &alias in aliases {
        let ptr = FnPtr::new(loader.get_proc_address(alias));
        if ptr.is_loaded() {
            log::debug!("{symbol} resolved through {alias}");
            report.loaded += 1;
            report.aliased.push((symbol, alias));
            return ptr;
        }
    }

    report.missing.push(symbol);
    FnPtr::MISSING
}
