//! Conversions between Rust values and the pointer/length pairs GL expects.

use std::{ffi::CString, marker::PhantomData, mem, ptr};

use crate::{
    types::{GLchar, GLint, GLsizei, GLsizeiptr},
    BindError, BindResult,
};

/// Copies `text` into a NUL-terminated string.
pub fn to_cstring(text: &str) -> BindResult<CString> {
    CString::new(text).map_err(|err| BindError::InteriorNul {
        position: err.nul_position(),
    })
}

/// Number of elements in `slice` as a `GLsizei`.
pub fn count_of<T>(slice: &[T]) -> BindResult<GLsizei> {
    GLsizei::try_from(slice.len()).map_err(|_| BindError::TooLarge(slice.len()))
}

/// Size of `slice` in bytes as a `GLsizeiptr`.
pub fn byte_size<T>(slice: &[T]) -> BindResult<GLsizeiptr> {
    let bytes = mem::size_of_val(slice);
    GLsizeiptr::try_from(bytes).map_err(|_| BindError::TooLarge(bytes))
}

/// Fails unless both sides have the same length.
pub fn same_len<A, B>(left: &[A], right: &[B]) -> BindResult<()> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(BindError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

/// Pointer/length arrays for `const GLchar *const *string, const GLint *length`
/// parameters. The strings are borrowed and need no terminator.
pub struct StringList<'a> {
    pointers: Vec<*const GLchar>,
    lengths: Vec<GLint>,
    _strings: PhantomData<&'a str>,
}

impl<'a> StringList<'a> {
    pub fn new(strings: &[&'a str]) -> BindResult<Self> {
        let mut pointers = Vec::with_capacity(strings.len());
        let mut lengths = Vec::with_capacity(strings.len());
        for string in strings {
            pointers.push(string.as_ptr().cast::<GLchar>());
            lengths.push(GLint::try_from(string.len()).map_err(|_| BindError::TooLarge(string.len()))?);
        }
        Ok(Self {
            pointers,
            lengths,
            _strings: PhantomData,
        })
    }

    pub fn count(&self) -> BindResult<GLsizei> {
        count_of(&self.pointers)
    }

    pub fn pointers(&self) -> *const *const GLchar {
        self.pointers.as_ptr()
    }

    pub fn lengths(&self) -> *const GLint {
        self.lengths.as_ptr()
    }
}

/// Pointer array for `const GLchar *const *` parameters that take no
/// lengths, so every string is copied and NUL-terminated.
pub struct CStringList {
    strings: Vec<CString>,
    pointers: Vec<*const GLchar>,
}

impl CStringList {
    pub fn new<S: AsRef<str>>(strings: &[S]) -> BindResult<Self> {
        let strings = strings
            .iter()
            .map(|string| to_cstring(string.as_ref()))
            .collect::<BindResult<Vec<_>>>()?;
        let pointers = strings.iter().map(|string| string.as_ptr()).collect();
        Ok(Self { strings, pointers })
    }

    pub fn count(&self) -> BindResult<GLsizei> {
        count_of(&self.strings)
    }

    pub fn pointers(&self) -> *const *const GLchar {
        self.pointers.as_ptr()
    }
}

/// Reads a string GL writes into a caller buffer, as in `glGetShaderInfoLog`.
///
/// `fill` receives `(bufSize, length, buffer)`. When `capacity` is zero or
/// less GL is not called at all. The result stops at the length GL reports
/// and never includes the terminator.
pub fn read_string(
    capacity: GLint,
    fill: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    if capacity <= 0 {
        return String::new();
    }
    let mut buffer = vec![0u8; capacity as usize];
    let mut length: GLsizei = 0;
    fill(capacity, &mut length, buffer.as_mut_ptr().cast());

    let written = (length.max(0) as usize).min(buffer.len());
    buffer.truncate(written);
    if buffer.last() == Some(&0) {
        buffer.pop();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Reads a string GL writes without reporting its length.
pub fn read_terminated(capacity: GLint, fill: impl FnOnce(GLsizei, *mut GLchar)) -> String {
    read_string(capacity, |size, length, buffer| {
        fill(size, buffer);
        // SAFETY: `buffer` holds `size` bytes and `length` is a valid out slot.
        unsafe {
            let bytes = std::slice::from_raw_parts(buffer.cast::<u8>(), size as usize);
            *length = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len()) as GLsizei;
        }
    })
}

/// `ptr::null()` for an empty slice, the slice pointer otherwise.
pub fn ptr_or_null<T>(slice: &[T]) -> *const T {
    if slice.is_empty() {
        ptr::null()
    } else {
        slice.as_ptr()
    }
}
