use pretty_assertions::assert_eq;

use std::collections::BTreeMap;

use crate::{
    ctype::{rust_ident, CType},
    emit,
    registry::Version,
    xml::{self, decode_entities, Node},
    Api, Profile, RegistryError, Selection,
};

const REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- trimmed down gl.xml -->
<registry>
    <comment>Copyright 2013-2020 The Khronos Group Inc.</comment>
    <types>
        <type>typedef unsigned int <name>GLenum</name>;</type>
        <type requires="GLintptr">typedef void (<apientry/> *<name>GLDEBUGPROC</name>)(GLenum source,GLenum type,GLuint id,GLenum severity,GLsizei length,const GLchar *message,const void *userParam);</type>
    </types>
    <enums namespace="GL" group="StringName" type="enum">
        <enum value="0x1F02" name="GL_VERSION" group="StringName"/>
        <enum value="0x92E0" name="GL_DEBUG_OUTPUT" group="EnableCap"/>
        <enum value="0xFFFFFFFFFFFFFFFF" name="GL_TIMEOUT_IGNORED" type="ull"/>
        <enum value="0x8259" name="GL_ACTIVE_PROGRAM_EXT" api="gles2"/>
        <enum value="0x8B8D" name="GL_ACTIVE_PROGRAM_EXT" comment="For the &quot;GL_EXT_separate_shader_objects&quot; extension"/>
    </enums>
    <commands namespace="GL">
        <command>
            <proto>void <name>glBegin</name></proto>
            <param group="PrimitiveType"><ptype>GLenum</ptype> <name>mode</name></param>
        </command>
        <command>
            <proto class="program"><ptype>GLuint</ptype> <name>glCreateShaderProgramv</name></proto>
            <param group="ShaderType"><ptype>GLenum</ptype> <name>type</name></param>
            <param><ptype>GLsizei</ptype> <name>count</name></param>
            <param len="count">const <ptype>GLchar</ptype> *const*<name>strings</name></param>
        </command>
        <command>
            <proto>void <name>glDebugMessageCallback</name></proto>
            <param><ptype>GLDEBUGPROC</ptype> <name>callback</name></param>
            <param>const void *<name>userParam</name></param>
        </command>
        <command>
            <proto>void <name>glDebugMessageCallbackARB</name></proto>
            <param><ptype>GLDEBUGPROCARB</ptype> <name>callback</name></param>
            <param kind="cannot be const">const void *<name>userParam</name></param>
            <alias name="glDebugMessageCallback"/>
        </command>
        <command>
            <proto>void <name>glDebugMessageCallbackKHR</name></proto>
            <param><ptype>GLDEBUGPROCKHR</ptype> <name>callback</name></param>
            <param>const void *<name>userParam</name></param>
            <alias name="glDebugMessageCallback"/>
        </command>
        <command>
            <proto group="String">const <ptype>GLubyte</ptype> *<name>glGetString</name></proto>
            <param group="StringName"><ptype>GLenum</ptype> <name>name</name></param>
        </command>
        <command>
            <proto>void <name>glUniformMatrix2x4dv</name></proto>
            <param><ptype>GLint</ptype> <name>location</name></param>
            <param><ptype>GLsizei</ptype> <name>count</name></param>
            <param><ptype>GLboolean</ptype> <name>transpose</name></param>
            <param len="count*8">const <ptype>GLdouble</ptype> *<name>value</name></param>
        </command>
    </commands>
    <feature api="gl" name="GL_VERSION_1_0" number="1.0">
        <require>
            <command name="glBegin"/>
            <command name="glGetString"/>
            <enum name="GL_VERSION"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_3_2" number="3.2">
        <require>
            <enum name="GL_TIMEOUT_IGNORED"/>
        </require>
        <remove profile="core" comment="Compatibility-only GL 1.0 features removed from GL 3.2">
            <command name="glBegin"/>
        </remove>
    </feature>
    <feature api="gl" name="GL_VERSION_4_3" number="4.3">
        <require comment="Reuse GL_KHR_debug">
            <command name="glDebugMessageCallback"/>
            <enum name="GL_DEBUG_OUTPUT"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_4_1" number="4.1">
        <require comment="Reuse ARB_separate_shader_objects">
            <command name="glCreateShaderProgramv"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_4_0" number="4.0">
        <require comment="Reuse ARB_gpu_shader_fp64">
            <command name="glUniformMatrix2x4dv"/>
        </require>
    </feature>
    <feature api="gles2" name="GL_ES_VERSION_2_0" number="2.0">
        <require>
            <command name="glGetString"/>
        </require>
    </feature>
    <extensions>
        <extension name="GL_ARB_debug_output" supported="gl|glcore">
            <require>
                <command name="glDebugMessageCallbackARB"/>
            </require>
        </extension>
        <extension name="GL_KHR_debug" supported="gl|glcore|gles2">
            <require>
                <command name="glDebugMessageCallback"/>
                <enum name="GL_DEBUG_OUTPUT"/>
            </require>
            <require api="gles2" comment="KHR extensions *mandate* suffixes for ES, unlike for GL">
                <command name="glDebugMessageCallbackKHR"/>
            </require>
        </extension>
    </extensions>
</registry>
"#;

const CREATE_SHADER_PROGRAM: &str = r#"fn CreateShaderProgramv("glCreateShaderProgramv")(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;"#;
const DEBUG_MESSAGE_CALLBACK: &str = r#"fn DebugMessageCallback("glDebugMessageCallback", "glDebugMessageCallbackARB")(callback: GLDEBUGPROC, userParam: *const c_void);"#;
const GET_STRING: &str = r#"fn GetString("glGetString")(name: GLenum) -> *const GLubyte;"#;
const UNIFORM_MATRIX_2X4DV: &str = r#"fn UniformMatrix2x4dv("glUniformMatrix2x4dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);"#;

fn selected_names(selection: &Selection) -> Vec<String> {
    let registry = crate::load(REGISTRY).unwrap();
    let selected = selection.resolve(&registry).unwrap();
    selected
        .commands
        .iter()
        .map(|command| command.name.clone())
        .collect()
}

#[test]
fn xml_attributes_and_entities() {
    let root = xml::parse_document(
        "<?xml version=\"1.0\"?>\n<root a=\"1 &amp; 2\" b='x&lt;y' c = \"&#65;&#x42;\">\
         t&quot;<child/><![CDATA[<raw>]]></root>\n",
    )
    .unwrap();

    assert_eq!(root.name, "root");
    assert_eq!(root.attr("a"), Some("1 & 2"));
    assert_eq!(root.attr("b"), Some("x<y"));
    assert_eq!(root.attr("c"), Some("AB"));
    assert_eq!(root.attr("d"), None);
    assert_eq!(root.text(), "t\"<raw>");
    assert!(root.child("child").is_some());
}

#[test]
fn xml_comments_are_dropped() {
    let root = xml::parse_document(
        "<!-- before --><a><!-- <b>not an element</b> -->x<?pi data?>y</a><!-- after -->",
    )
    .unwrap();
    assert_eq!(
        root.children,
        vec![Node::Text("x".into()), Node::Text("y".into())]
    );
}

#[test]
fn unknown_entities_stay_literal() {
    assert_eq!(decode_entities("a &bogus; & b &#xZZ;"), "a &bogus; & b &#xZZ;");
    assert_eq!(decode_entities("&lt;&gt;&apos;"), "<>'");
}

#[test]
fn mismatched_tags_are_rejected() {
    assert!(matches!(
        xml::parse_document("<a><b></a></b>"),
        Err(RegistryError::Xml { .. })
    ));
    assert!(matches!(
        xml::parse_document("<a x=1/>"),
        Err(RegistryError::Xml { .. })
    ));
    assert!(matches!(
        xml::parse_document("<a/><b/>"),
        Err(RegistryError::Xml { .. })
    ));
}

#[test]
fn c_types() {
    let rust = |declaration: &str| CType::parse(declaration).unwrap().rust();

    assert_eq!(rust("const GLchar *const*"), "*const *const GLchar");
    assert_eq!(rust("void *"), "*mut c_void");
    assert_eq!(rust("const void *"), "*const c_void");
    assert_eq!(rust("GLsizei *"), "*mut GLsizei");
    assert_eq!(rust("GLchar **"), "*mut *mut GLchar");
    assert_eq!(rust("const void **"), "*mut *const c_void");
    assert_eq!(rust("struct _cl_context *"), "*mut c_void");
    assert_eq!(rust(" GLDEBUGPROC "), "GLDEBUGPROC");
    assert_eq!(rust("GLDEBUGPROCARB"), "GLDEBUGPROC");
    assert_eq!(rust("GLuint"), "GLuint");
    assert_eq!(rust("GLuint  [2]"), "*mut GLuint");

    assert!(CType::parse("void ").unwrap().is_void());
    assert!(!CType::parse("void *").unwrap().is_void());
    assert!(CType::parse("GLint GLint").is_err());
    assert!(CType::parse("*").is_err());
    assert!(CType::parse("").is_err());
    assert!(CType::parse("[2]").is_err());

    assert_eq!(
        CType::parse("const GLchar *const*").unwrap().to_string(),
        "const GLchar *const *"
    );
}

#[test]
fn keyword_parameter_names() {
    assert_eq!(rust_ident("type"), "type_");
    assert_eq!(rust_ident("ref"), "ref_");
    assert_eq!(rust_ident("in"), "in_");
    assert_eq!(rust_ident("location"), "location");
}

#[test]
fn registry_contents() {
    let registry = crate::load(REGISTRY).unwrap();

    assert_eq!(registry.commands.len(), 7);
    assert_eq!(registry.features.len(), 6);
    assert_eq!(registry.extensions.len(), 2);

    let callback = &registry.commands["glDebugMessageCallback"];
    assert_eq!(
        callback.aliases,
        vec![
            "glDebugMessageCallbackARB".to_owned(),
            "glDebugMessageCallbackKHR".to_owned()
        ]
    );
    assert_eq!(
        registry.commands["glDebugMessageCallbackKHR"].alias.as_deref(),
        Some("glDebugMessageCallback")
    );

    let matrix = &registry.commands["glUniformMatrix2x4dv"];
    assert!(matrix.ret.is_void());
    assert_eq!(matrix.params[3].name, "value");
    assert_eq!(matrix.params[3].len.as_deref(), Some("count*8"));

    let feature = &registry.features[1];
    assert_eq!(feature.number, Version::new(3, 2));
    assert_eq!(feature.remove[0].profile.as_deref(), Some("core"));

    assert_eq!(registry.enum_for("GL_ACTIVE_PROGRAM_EXT", "gl").unwrap().value, "0x8B8D");
    assert_eq!(registry.enum_for("GL_ACTIVE_PROGRAM_EXT", "gles2").unwrap().value, "0x8259");
    assert!(registry.enum_for("GL_NOT_THERE", "gl").is_none());
}

#[test]
fn not_a_registry() {
    assert_eq!(crate::load("<types/>"), Err(RegistryError::NotARegistry));
}

#[test]
fn core_profile_removes_legacy_commands() {
    assert_eq!(
        selected_names(&Selection::default()),
        vec![
            "glCreateShaderProgramv",
            "glDebugMessageCallback",
            "glGetString",
            "glUniformMatrix2x4dv"
        ]
    );

    let compatibility = Selection {
        profile: Profile::Compatibility,
        ..Selection::default()
    };
    assert_eq!(selected_names(&compatibility)[0], "glBegin");

    let old = Selection {
        version: Version::new(3, 1),
        ..Selection::default()
    };
    assert_eq!(selected_names(&old), vec!["glBegin", "glGetString"]);
}

#[test]
fn version_limits_features() {
    let selection = Selection {
        version: Version::new(4, 0),
        ..Selection::default()
    };
    assert_eq!(
        selected_names(&selection),
        vec!["glGetString", "glUniformMatrix2x4dv"]
    );

    let es = Selection {
        api: Api::Gles2,
        version: Version::new(2, 0),
        ..Selection::default()
    };
    assert_eq!(selected_names(&es), vec!["glGetString"]);
}

#[test]
fn extensions_add_commands() {
    let selection = Selection {
        version: Version::new(4, 2),
        extensions: vec!["GL_ARB_debug_output".into(), "GL_KHR_debug".into()],
        ..Selection::default()
    };
    let registry = crate::load(REGISTRY).unwrap();
    let selected = selection.resolve(&registry).unwrap();
    let names: Vec<_> = selected.commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "glCreateShaderProgramv",
            "glDebugMessageCallback",
            "glDebugMessageCallbackARB",
            "glGetString",
            "glUniformMatrix2x4dv"
        ]
    );
    // ARB is selected in its own right and KHR is only required on gles2.
    assert!(selected.aliases_of("glDebugMessageCallback").is_empty());

    let unknown = Selection {
        extensions: vec!["GL_ARB_nope".into()],
        ..Selection::default()
    };
    assert_eq!(
        unknown.resolve(&registry),
        Err(RegistryError::UnknownExtension("GL_ARB_nope".into()))
    );
}

#[test]
fn emitted_entry_lines() {
    let registry = crate::load(REGISTRY).unwrap();
    let selected = Selection::default().resolve(&registry).unwrap();
    let line = |name: &str| {
        emit::entry_line(&registry.commands[name], selected.aliases_of(name))
    };

    assert_eq!(line("glUniformMatrix2x4dv"), UNIFORM_MATRIX_2X4DV);
    assert_eq!(line("glCreateShaderProgramv"), CREATE_SHADER_PROGRAM);
    assert_eq!(line("glDebugMessageCallback"), DEBUG_MESSAGE_CALLBACK);
    assert_eq!(line("glGetString"), GET_STRING);
}

#[test]
fn emitted_table() {
    let registry = crate::load(REGISTRY).unwrap();
    let selection = Selection::default();
    let selected = selection.resolve(&registry).unwrap();

    let mut out = Vec::new();
    emit::write_entry_points(&mut out, &selection, &selected).unwrap();
    emit::write_constants(&mut out, &selected).unwrap();

    let expected = format!(
        "//! OpenGL 4.6 core entry points, generated by gl4_registry.

use std::ffi::c_void;

use crate::entry::gl_entry_points;
use crate::types::*;

gl_entry_points! {{
    {CREATE_SHADER_PROGRAM}
    {DEBUG_MESSAGE_CALLBACK}
    {GET_STRING}
    {UNIFORM_MATRIX_2X4DV}
}}

pub const GL_DEBUG_OUTPUT: GLenum = 0x92E0;
pub const GL_TIMEOUT_IGNORED: GLuint64 = 0xFFFFFFFFFFFFFFFF;
pub const GL_VERSION: GLenum = 0x1F02;
"
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn gles_only_extensions_add_no_aliases() {
    let registry = crate::load(
        r#"<registry>
    <commands namespace="GL">
        <command>
            <proto><ptype>GLsync</ptype> <name>glFenceSync</name></proto>
            <param><ptype>GLenum</ptype> <name>condition</name></param>
            <param><ptype>GLbitfield</ptype> <name>flags</name></param>
        </command>
        <command>
            <proto><ptype>GLsync</ptype> <name>glFenceSyncAPPLE</name></proto>
            <param><ptype>GLenum</ptype> <name>condition</name></param>
            <param><ptype>GLbitfield</ptype> <name>flags</name></param>
            <alias name="glFenceSync"/>
        </command>
        <command>
            <proto>void <name>glPathGlyphIndexRangeNV</name></proto>
            <param><ptype>GLuint</ptype> <name>baseAndCount</name>[2]</param>
        </command>
    </commands>
    <feature api="gl" name="GL_VERSION_3_2" number="3.2">
        <require>
            <command name="glFenceSync"/>
        </require>
    </feature>
    <extensions>
        <extension name="GL_APPLE_sync" supported="gles1|gles2">
            <require>
                <command name="glFenceSyncAPPLE"/>
            </require>
        </extension>
        <extension name="GL_NV_path_rendering" supported="gl|glcore|gles2">
            <require>
                <command name="glPathGlyphIndexRangeNV"/>
            </require>
        </extension>
    </extensions>
</registry>"#,
    )
    .unwrap();
    let selected = Selection::default().resolve(&registry).unwrap();

    assert!(selected.aliases.is_empty());
    assert_eq!(
        emit::entry_line(&registry.commands["glFenceSync"], selected.aliases_of("glFenceSync")),
        r#"fn FenceSync("glFenceSync")(condition: GLenum, flags: GLbitfield) -> GLsync;"#
    );
    assert_eq!(
        emit::entry_line(&registry.commands["glPathGlyphIndexRangeNV"], &[]),
        r#"fn PathGlyphIndexRangeNV("glPathGlyphIndexRangeNV")(baseAndCount: *mut GLuint);"#
    );
}

#[test]
fn checked_in_table_matches_emitter() {
    let table = include_str!("../../gl4_bind/src/table.rs");

    let selection = Selection::default();
    let empty = crate::Selected {
        commands: Vec::new(),
        enums: Vec::new(),
        aliases: BTreeMap::new(),
    };
    let mut frame = Vec::new();
    emit::write_entry_points(&mut frame, &selection, &empty).unwrap();
    let frame = String::from_utf8(frame).unwrap();
    let header = frame.strip_suffix("}\n").unwrap();
    assert!(table.starts_with(header), "header differs from the emitter's");
    assert!(table.ends_with("\n}\n"));

    let body: Vec<&str> = table[header.len()..table.len() - 2].lines().collect();
    let mut symbols = Vec::new();
    for line in &body {
        let entry = line.strip_prefix("    fn ").unwrap_or_else(|| panic!("{line}"));
        assert!(entry.ends_with(';'), "{line}");
        let (short, rest) = entry.split_once("(\"").unwrap();
        let symbol = &rest[..rest.find('"').unwrap()];
        assert_eq!(symbol.strip_prefix("gl"), Some(short));
        symbols.push(symbol);
    }
    assert!(symbols.windows(2).all(|pair| pair[0] < pair[1]), "not sorted by name");

    for line in [
        CREATE_SHADER_PROGRAM,
        DEBUG_MESSAGE_CALLBACK,
        GET_STRING,
        UNIFORM_MATRIX_2X4DV,
    ] {
        assert!(body.contains(&format!("    {line}").as_str()), "{line}");
    }
    for command in [
        "glClampColor",
        "glCompressedTexSubImage3D",
        "glGetCompressedTexImage",
        "glGetCompressedTextureSubImage",
        "glGetTexLevelParameterfv",
        "glGetTransformFeedbacki64_v",
        "glVertexAttrib4Nub",
        "glVertexAttribI1i",
        "glVertexAttribP4ui",
    ] {
        assert!(symbols.contains(&command), "{command}");
    }
    assert!(!table.contains("SyncAPPLE"));
}

#[test]
fn version_strings() {
    assert_eq!("4.6".parse(), Ok(Version::new(4, 6)));
    assert_eq!(" 3.2 ".parse(), Ok(Version::new(3, 2)));
    assert_eq!(
        "four".parse::<Version>(),
        Err(RegistryError::BadVersion("four".into()))
    );
    assert_eq!(Version::new(4, 6).to_string(), "4.6");
    assert!(Version::new(4, 10) > Version::new(4, 6));
    assert_eq!("gles2".parse(), Ok(Api::Gles2));
    assert!("vulkan".parse::<Api>().is_err());
}
