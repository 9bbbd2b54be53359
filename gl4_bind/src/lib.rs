//! Function-pointer bindings for the OpenGL 4.x core API.
//!
//! [`Gl`] holds one resolved address per entry point. Every entry point gets a
//! raw `unsafe` method named after the C function without its `gl` prefix
//! (`gl.BindBuffer(..)`), and the entry points that take arrays or strings
//! also get a snake_case method that marshals Rust slices and `&str`s.

mod entry;
mod error;
mod loader;
mod table;

pub mod marshal;
pub mod types;

pub mod attrib;
pub mod buffer;
pub mod debug;
pub mod draw;
pub mod framebuffer;
pub mod info;
pub mod program;
pub mod query;
pub mod state;
pub mod sync;
pub mod texture;
pub mod uniform;

#[cfg(feature = "glfw")]
pub mod glfw;
#[cfg(feature = "library")]
pub mod library;

pub use entry::{EntryPoints, FnPtr, Gl};
pub use error::{BindError, BindResult, GlError, GlErrorGuard};
pub use loader::{GlLoader, LoadReport, Or};

pub use gl;

#[cfg(test)]
mod tests;

#[macro_export]
macro_rules! transmutable_u32 {
    ($name: ident) => {
        impl $name {
            pub const fn to_u32(self) -> u32 {
                unsafe { std::mem::transmute(self) }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.to_u32()
            }
        }
    };
    ($name: ident { $($variant: ident),* $(,)? }) => {
        $crate::transmutable_u32!($name);

        impl $name {
            pub const fn from_u32(value: u32) -> Option<Self> {
                $(
                    if value == Self::$variant as u32 {
                        return Some(Self::$variant);
                    }
                )*
                None
            }
        }

        impl TryFrom<u32> for $name {
            type Error = u32;

            fn try_from(value: u32) -> Result<Self, u32> {
                Self::from_u32(value).ok_or(value)
            }
        }
    };
}

macro_rules! trait_alias {
    ($(#[$meta:meta])* $v:vis trait $alias:ident = $($tr:tt)*) => {
        $(#[$meta])*
        $v trait $alias: $($tr)* {}
        impl <T: $($tr)*> $alias for T {}
    };
}
pub(crate) use trait_alias;
