use color_eyre::{
    eyre::{eyre, OptionExt},
    Result as EyreResult,
};
use gl4_bind::{
    glfw::{self, ContextHints, Window},
    info::GlString,
    Gl,
};

const VERSIONS: &[(u32, u32)] = &[(4, 6), (4, 5), (4, 4), (4, 3), (4, 2), (4, 1)];

fn create_context() -> EyreResult<Window> {
    for &(major, minor) in VERSIONS {
        let hints = ContextHints {
            major,
            minor,
            debug: true,
            visible: false,
            ..ContextHints::default()
        };
        match Window::create_with(hints, 64, 64, "gl4_info") {
            Ok(window) => {
                log::info!("created an OpenGL {major}.{minor} core context");
                return Ok(window);
            }
            Err(err) => log::debug!("no {major}.{minor} context: {err}"),
        }
    }
    Err(eyre!("no OpenGL 4.x core context is available"))
}

fn report(gl: &Gl) {
    for name in [
        GlString::Vendor,
        GlString::Renderer,
        GlString::Version,
        GlString::ShadingLanguageVersion,
    ] {
        let value = gl.get_string(name).unwrap_or_else(|| "<null>".into());
        println!("{name:?}: {value}");
    }
    match gl.version() {
        Some(version) => println!("Parsed version: {version}"),
        None => println!("Parsed version: <unrecognised>"),
    }
    println!("Extensions: {}", gl.extensions().len());

    let missing: Vec<_> = gl
        .entry_points()
        .filter(|(_, loaded)| !loaded)
        .map(|(symbol, _)| symbol)
        .collect();
    println!(
        "Entry points: {} of {} loaded",
        gl4_bind::EntryPoints::NAMES.len() - missing.len(),
        gl4_bind::EntryPoints::NAMES.len()
    );
    for symbol in missing {
        println!("  missing {symbol}");
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    glfw::install_errors();
    glfw::init().ok_or_eyre("glfw init failed")?;

    let window = create_context()?;
    window.make_current();

    let gl = unsafe { Gl::load_with(glfw::get_proc_address) };
    gl.require(&["glGetString", "glGetStringi", "glGetIntegerv", "glGetError"])?;
    if gl.is_loaded("glDebugMessageCallback") {
        gl.log_debug_messages();
    }

    report(&gl);

    gl.clear_color([0.0, 0.0, 0.0, 1.0]);
    gl.clear(gl4_bind::framebuffer::ClearMask::COLOR);
    window.swap_buffers();

    let errors = gl.drain_errors();
    if !errors.is_empty() {
        log::warn!("GL errors while probing: {errors:?}");
    }

    drop(gl);
    drop(window);
    glfw::terminate();
    Ok(())
}
