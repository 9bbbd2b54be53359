//! C declarations as they appear in `<proto>` and `<param>`, and their Rust
//! spelling.

use std::fmt::{self, Display, Formatter};

use crate::{RegistryError, RegistryResult};

/// A base type with any number of pointer levels.
///
/// `pointers[i]` says whether the `i`-th `*` (counting from the base type) is
/// itself `const`, so `const GLchar *const*` is `GLchar`, `base_const`,
/// `[true, false]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CType {
    pub base: String,
    pub base_const: bool,
    pub pointers: Vec<bool>,
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super",
    "trait", "true", "try", "type", "unsafe", "use", "virtual", "where", "while", "yield",
];

/// Parameter names that collide with Rust keywords get a trailing `_`.
pub fn rust_ident(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_owned()
    }
}

fn tokens(declaration: &str) -> impl Iterator<Item = &str> {
    declaration
        .split_whitespace()
        .flat_map(|word| word.split_inclusive('*'))
        .flat_map(|word| match word.strip_suffix('*') {
            Some(rest) => [rest, "*"],
            None => [word, ""],
        })
        .filter(|token| !token.is_empty())
}

impl CType {
    pub fn parse(declaration: &str) -> RegistryResult<Self> {
        let bad = || RegistryError::CType(declaration.trim().to_owned());

        let mut base = None;
        let mut base_const = false;
        let mut pointers = Vec::new();
        for token in tokens(declaration) {
            match token {
                "const" => match pointers.last_mut() {
                    Some(pointer_const) => *pointer_const = true,
                    None => base_const = true,
                },
                "struct" => {}
                "*" => {
                    if base.is_none() {
                        return Err(bad());
                    }
                    pointers.push(false);
                }
                // Array parameters decay to a pointer.
                array if array.starts_with('[') && array.ends_with(']') => {
                    if base.is_none() {
                        return Err(bad());
                    }
                    pointers.push(false);
                }
                ident if base.is_none() && pointers.is_empty() => base = Some(ident),
                _ => return Err(bad()),
            }
        }

        Ok(Self {
            base: base.ok_or_else(bad)?.to_owned(),
            base_const,
            pointers,
        })
    }

    /// `void` with no pointers: a missing return type.
    pub fn is_void(&self) -> bool {
        self.pointers.is_empty() && matches!(self.base.as_str(), "void" | "GLvoid")
    }

    fn rust_base(&self) -> &str {
        match self.base.as_str() {
            "void" | "GLvoid" => "c_void",
            // Opaque OpenCL handles only ever travel behind pointers.
            base if base.starts_with("_cl_") => "c_void",
            "GLDEBUGPROCARB" | "GLDEBUGPROCKHR" => "GLDEBUGPROC",
            base => base,
        }
    }

    pub fn rust(&self) -> String {
        let mut ty = self.rust_base().to_owned();
        for level in 0..self.pointers.len() {
            let pointee_const = match level {
                0 => self.base_const,
                _ => self.pointers[level - 1],
            };
            let mutability = if pointee_const { "const" } else { "mut" };
            ty = format!("*{mutability} {ty}");
        }
        ty
    }
}

impl Display for CType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.base_const {
            write!(f, "const ")?;
        }
        write!(f, "{}", self.base)?;
        for &pointer_const in &self.pointers {
            write!(f, " *")?;
            if pointer_const {
                write!(f, "const")?;
            }
        }
        Ok(())
    }
}
