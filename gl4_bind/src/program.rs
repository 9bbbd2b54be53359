use crate::{
    marshal::{self, CStringList, StringList},
    transmutable_u32,
    types::{GLenum, GLint, GLsizei, GLuint},
    BindError, BindResult, Gl,
};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    Compute = gl::COMPUTE_SHADER,
    Vertex = gl::VERTEX_SHADER,
    TessControl = gl::TESS_CONTROL_SHADER,
    TessEval = gl::TESS_EVALUATION_SHADER,
    Geometry = gl::GEOMETRY_SHADER,
    Fragment = gl::FRAGMENT_SHADER,
}
transmutable_u32!(ShaderType {
    Compute,
    Vertex,
    TessControl,
    TessEval,
    Geometry,
    Fragment,
});

/// An active uniform, attribute or varying as reported by `glGetActive*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    pub name: String,
    /// Array length, 1 for non-arrays.
    pub size: GLint,
    /// `GL_FLOAT_VEC3` and friends.
    pub ty: GLenum,
}

fn log_failure(what: &str, info_log: &str) {
    log::error!("{what} failed:");
    log::error!(" | ");
    for line in info_log.lines() {
        log::error!(" | {line}");
    }
    log::error!(" | ");
}

impl Gl {
    pub fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.GetShaderiv(shader, pname, &mut value) };
        value
    }

    pub fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.GetProgramiv(program, pname, &mut value) };
        value
    }

    pub fn create_shader(&self, shader_type: ShaderType) -> GLuint {
        unsafe { self.CreateShader(shader_type.to_u32()) }
    }

    /// Replaces the source of `shader` with the concatenation of `sources`.
    /// Lengths are passed explicitly, so no terminators are needed.
    pub fn shader_source(&self, shader: GLuint, sources: &[&str]) -> BindResult<()> {
        let sources = StringList::new(sources)?;
        unsafe { self.ShaderSource(shader, sources.count()?, sources.pointers(), sources.lengths()) };
        Ok(())
    }

    /// The source currently attached to `shader`.
    pub fn get_shader_source(&self, shader: GLuint) -> String {
        let capacity = self.get_shader_iv(shader, gl::SHADER_SOURCE_LENGTH);
        marshal::read_string(capacity, |size, length, buffer| unsafe {
            self.GetShaderSource(shader, size, length, buffer)
        })
    }

    pub fn shader_info_log(&self, shader: GLuint) -> String {
        let capacity = self.get_shader_iv(shader, gl::INFO_LOG_LENGTH);
        marshal::read_string(capacity, |size, length, buffer| unsafe {
            self.GetShaderInfoLog(shader, size, length, buffer)
        })
    }

    pub fn program_info_log(&self, program: GLuint) -> String {
        let capacity = self.get_program_iv(program, gl::INFO_LOG_LENGTH);
        marshal::read_string(capacity, |size, length, buffer| unsafe {
            self.GetProgramInfoLog(program, size, length, buffer)
        })
    }

    pub fn program_pipeline_info_log(&self, pipeline: GLuint) -> String {
        let mut capacity = 0;
        unsafe { self.GetProgramPipelineiv(pipeline, gl::INFO_LOG_LENGTH, &mut capacity) };
        marshal::read_string(capacity, |size, length, buffer| unsafe {
            self.GetProgramPipelineInfoLog(pipeline, size, length, buffer)
        })
    }

    /// Compiles `shader` and returns its info log as the error on failure.
    pub fn compile_shader_checked(&self, shader: GLuint) -> BindResult<()> {
        unsafe { self.CompileShader(shader) };
        if self.get_shader_iv(shader, gl::COMPILE_STATUS) == GLint::from(gl::FALSE) {
            let info_log = self.shader_info_log(shader);
            log_failure("Shader compilation", &info_log);
            return Err(BindError::Compile(info_log));
        }
        Ok(())
    }

    /// Creates, sources and compiles a shader. The shader is deleted again
    /// when compilation fails.
    pub fn compile_shader(&self, shader_type: ShaderType, sources: &[&str]) -> BindResult<GLuint> {
        let shader = self.create_shader(shader_type);
        let result = self
            .shader_source(shader, sources)
            .and_then(|()| self.compile_shader_checked(shader));
        match result {
            Ok(()) => Ok(shader),
            Err(err) => {
                unsafe { self.DeleteShader(shader) };
                Err(err)
            }
        }
    }

    /// Links `program` and returns its info log as the error on failure.
    pub fn link_program_checked(&self, program: GLuint) -> BindResult<()> {
        unsafe { self.LinkProgram(program) };
        if self.get_program_iv(program, gl::LINK_STATUS) == GLint::from(gl::FALSE) {
            let info_log = self.program_info_log(program);
            log_failure("Program link", &info_log);
            return Err(BindError::Link(info_log));
        }
        Ok(())
    }

    /// Links `shaders` into a new program, detaching them afterwards.
    pub fn link_program(&self, shaders: &[GLuint]) -> BindResult<GLuint> {
        let program = unsafe { self.CreateProgram() };
        for &shader in shaders {
            unsafe { self.AttachShader(program, shader) };
        }
        let result = self.link_program_checked(program);
        for &shader in shaders {
            unsafe { self.DetachShader(program, shader) };
        }
        match result {
            Ok(()) => Ok(program),
            Err(err) => {
                unsafe { self.DeleteProgram(program) };
                Err(err)
            }
        }
    }

    /// `glCreateShaderProgramv`. The sources have no length array, so each
    /// one is copied into a NUL-terminated string first.
    pub fn create_shader_program<S: AsRef<str>>(
        &self,
        shader_type: ShaderType,
        sources: &[S],
    ) -> BindResult<GLuint> {
        let sources = CStringList::new(sources)?;
        let program = unsafe {
            self.CreateShaderProgramv(shader_type.to_u32(), sources.count()?, sources.pointers())
        };
        if self.get_program_iv(program, gl::LINK_STATUS) == GLint::from(gl::FALSE) {
            let info_log = self.program_info_log(program);
            log_failure("Separable program link", &info_log);
            unsafe { self.DeleteProgram(program) };
            return Err(BindError::Link(info_log));
        }
        Ok(program)
    }

    pub fn use_program(&self, program: GLuint) {
        unsafe { self.UseProgram(program) }
    }

    pub fn attached_shaders(&self, program: GLuint) -> Vec<GLuint> {
        let capacity = self.get_program_iv(program, gl::ATTACHED_SHADERS);
        if capacity <= 0 {
            return Vec::new();
        }
        let mut shaders = vec![0; capacity as usize];
        let mut count: GLsizei = 0;
        unsafe { self.GetAttachedShaders(program, capacity, &mut count, shaders.as_mut_ptr()) };
        shaders.truncate(count.clamp(0, capacity) as usize);
        shaders
    }

    /// `(format, bytes)` of the linked program, for caching.
    pub fn program_binary(&self, program: GLuint) -> Option<(GLenum, Vec<u8>)> {
        let capacity = self.get_program_iv(program, gl::PROGRAM_BINARY_LENGTH);
        if capacity <= 0 {
            return None;
        }
        let mut binary = vec![0u8; capacity as usize];
        let mut length: GLsizei = 0;
        let mut format: GLenum = 0;
        unsafe {
            self.GetProgramBinary(
                program,
                capacity,
                &mut length,
                &mut format,
                binary.as_mut_ptr().cast(),
            )
        };
        binary.truncate(length.clamp(0, capacity) as usize);
        Some((format, binary))
    }

    /// Loads a binary from [`Gl::program_binary`]. A driver may reject
    /// binaries from other versions, which shows up as a link error.
    pub fn load_program_binary(
        &self,
        program: GLuint,
        format: GLenum,
        binary: &[u8],
    ) -> BindResult<()> {
        let length = marshal::count_of(binary)?;
        unsafe { self.ProgramBinary(program, format, binary.as_ptr().cast(), length) };
        if self.get_program_iv(program, gl::LINK_STATUS) == GLint::from(gl::FALSE) {
            return Err(BindError::Link(self.program_info_log(program)));
        }
        Ok(())
    }

    pub fn program_resource_index(
        &self,
        program: GLuint,
        interface: GLenum,
        name: &str,
    ) -> BindResult<Option<GLuint>> {
        let name = marshal::to_cstring(name)?;
        let index = unsafe { self.GetProgramResourceIndex(program, interface, name.as_ptr()) };
        Ok((index != gl::INVALID_INDEX).then_some(index))
    }

    pub fn program_resource_location(
        &self,
        program: GLuint,
        interface: GLenum,
        name: &str,
    ) -> BindResult<Option<GLint>> {
        let name = marshal::to_cstring(name)?;
        let location =
            unsafe { self.GetProgramResourceLocation(program, interface, name.as_ptr()) };
        Ok((location != -1).then_some(location))
    }

    pub fn program_resource_name(&self, program: GLuint, interface: GLenum, index: GLuint) -> String {
        let mut capacity = 0;
        unsafe {
            self.GetProgramInterfaceiv(program, interface, gl::MAX_NAME_LENGTH, &mut capacity)
        };
        marshal::read_string(capacity, |size, length, buffer| unsafe {
            self.GetProgramResourceName(program, interface, index, size, length, buffer)
        })
    }

    /// Queries `props` of one resource, one value per property.
    pub fn program_resource(
        &self,
        program: GLuint,
        interface: GLenum,
        index: GLuint,
        props: &[GLenum],
    ) -> BindResult<Vec<GLint>> {
        let count = marshal::count_of(props)?;
        let mut values = vec![0; props.len()];
        let mut written: GLsizei = 0;
        unsafe {
            self.GetProgramResourceiv(
                program,
                interface,
                index,
                count,
                props.as_ptr(),
                count,
                &mut written,
                values.as_mut_ptr(),
            )
        };
        values.truncate(written.clamp(0, count) as usize);
        Ok(values)
    }

    pub fn transform_feedback_varyings<S: AsRef<str>>(
        &self,
        program: GLuint,
        varyings: &[S],
        buffer_mode: GLenum,
    ) -> BindResult<()> {
        let varyings = CStringList::new(varyings)?;
        unsafe {
            self.TransformFeedbackVaryings(
                program,
                varyings.count()?,
                varyings.pointers(),
                buffer_mode,
            )
        };
        Ok(())
    }

    pub fn frag_data_location(&self, program: GLuint, name: &str) -> BindResult<Option<GLint>> {
        let name = marshal::to_cstring(name)?;
        let location = unsafe { self.GetFragDataLocation(program, name.as_ptr()) };
        Ok((location != -1).then_some(location))
    }

    pub fn bind_frag_data_location(&self, program: GLuint, color: GLuint, name: &str) -> BindResult<()> {
        let name = marshal::to_cstring(name)?;
        unsafe { self.BindFragDataLocation(program, color, name.as_ptr()) };
        Ok(())
    }

    pub fn subroutine_index(
        &self,
        program: GLuint,
        shader_type: ShaderType,
        name: &str,
    ) -> BindResult<Option<GLuint>> {
        let name = marshal::to_cstring(name)?;
        let index =
            unsafe { self.GetSubroutineIndex(program, shader_type.to_u32(), name.as_ptr()) };
        Ok((index != gl::INVALID_INDEX).then_some(index))
    }

    /// Selects one subroutine per active subroutine uniform location of the
    /// current program's `shader_type` stage.
    pub fn uniform_subroutines(&self, shader_type: ShaderType, indices: &[GLuint]) -> BindResult<()> {
        let count = marshal::count_of(indices)?;
        unsafe { self.UniformSubroutinesuiv(shader_type.to_u32(), count, indices.as_ptr()) };
        Ok(())
    }

    pub fn create_program_pipelines(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateProgramPipelines(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_program_pipelines(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteProgramPipelines(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }
}
