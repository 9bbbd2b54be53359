//! Writing the `gl_entry_points!` table that `gl4_bind` compiles.

use std::io::{self, Write};

use crate::ctype::rust_ident;
use crate::registry::{Command, EnumValue};
use crate::select::{Selected, Selection};

/// One line of the table:
/// `fn Name("glName", "glNameARB")(arg: Ty, ...) -> Ret;`
pub fn entry_line(command: &Command, aliases: &[&str]) -> String {
    let short = command.name.strip_prefix("gl").unwrap_or(&command.name);

    let symbols = std::iter::once(command.name.as_str())
        .chain(aliases.iter().copied())
        .map(|symbol| format!("{symbol:?}"))
        .collect::<Vec<_>>()
        .join(", ");

    let params = command
        .params
        .iter()
        .map(|param| format!("{}: {}", rust_ident(&param.name), param.ty.rust()))
        .collect::<Vec<_>>()
        .join(", ");

    let ret = if command.ret.is_void() {
        String::new()
    } else {
        format!(" -> {}", command.ret.rust())
    };

    format!("fn {short}({symbols})({params}){ret};")
}

fn constant_type(value: &EnumValue) -> &'static str {
    match value.ty.as_deref() {
        Some("ull") => "GLuint64",
        Some("u") => "GLuint",
        _ if value.value.starts_with('-') => "GLint",
        _ => "GLenum",
    }
}

pub fn constant_line(value: &EnumValue) -> String {
    format!(
        "pub const {}: {} = {};",
        value.name,
        constant_type(value),
        value.value
    )
}

pub fn write_entry_points(
    out: &mut impl Write,
    selection: &Selection,
    selected: &Selected,
) -> io::Result<()> {
    writeln!(
        out,
        "//! OpenGL {} {} entry points, generated by gl4_registry.",
        selection.version, selection.profile
    )?;
    writeln!(out)?;
    writeln!(out, "use std::ffi::c_void;")?;
    writeln!(out)?;
    writeln!(out, "use crate::entry::gl_entry_points;")?;
    writeln!(out, "use crate::types::*;")?;
    writeln!(out)?;
    writeln!(out, "gl_entry_points! {{")?;
    for command in &selected.commands {
        let aliases = selected.aliases_of(&command.name);
        writeln!(out, "    {}", entry_line(command, aliases))?;
    }
    writeln!(out, "}}")
}

pub fn write_constants(out: &mut impl Write, selected: &Selected) -> io::Result<()> {
    writeln!(out)?;
    for value in &selected.enums {
        writeln!(out, "{}", constant_line(value))?;
    }
    Ok(())
}
