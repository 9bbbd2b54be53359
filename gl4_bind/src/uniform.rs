//! Slice-based uniform uploads.
//!
//! Every `*v` entry point takes an element count, not a scalar count: one
//! `vec3` is one element, one `mat2x4` is one element of eight scalars. The
//! wrappers take slices of fixed-size arrays so the count is always the
//! slice length.

use glam::{DMat2, DMat3, DMat4, IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

use crate::{
    marshal,
    program::ActiveVariable,
    types::{GLboolean, GLdouble, GLenum, GLfloat, GLint, GLsizei, GLuint},
    BindResult, Gl,
};

const fn gl_bool(value: bool) -> GLboolean {
    if value {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

macro_rules! scalar_uniforms {
    ($($method: ident, $program_method: ident => $raw: ident, $program_raw: ident: $ty: ty;)*) => {
        $(
            pub fn $method(&self, location: GLint, values: &[$ty]) -> BindResult<()> {
                let count = marshal::count_of(values)?;
                unsafe { self.$raw(location, count, values.as_ptr()) };
                Ok(())
            }

            pub fn $program_method(
                &self,
                program: GLuint,
                location: GLint,
                values: &[$ty],
            ) -> BindResult<()> {
                let count = marshal::count_of(values)?;
                unsafe { self.$program_raw(program, location, count, values.as_ptr()) };
                Ok(())
            }
        )*
    };
}

macro_rules! vector_uniforms {
    ($($method: ident, $program_method: ident => $raw: ident, $program_raw: ident: [$ty: ty; $n: literal];)*) => {
        $(
            pub fn $method(&self, location: GLint, values: &[[$ty; $n]]) -> BindResult<()> {
                let count = marshal::count_of(values)?;
                unsafe { self.$raw(location, count, values.as_ptr().cast()) };
                Ok(())
            }

            pub fn $program_method(
                &self,
                program: GLuint,
                location: GLint,
                values: &[[$ty; $n]],
            ) -> BindResult<()> {
                let count = marshal::count_of(values)?;
                unsafe { self.$program_raw(program, location, count, values.as_ptr().cast()) };
                Ok(())
            }
        )*
    };
}

/// `[$ty; $n]` is one column-major matrix; `$n` is columns times rows.
macro_rules! matrix_uniforms {
    ($($method: ident, $program_method: ident => $raw: ident, $program_raw: ident: [$ty: ty; $n: literal];)*) => {
        $(
            pub fn $method(
                &self,
                location: GLint,
                transpose: bool,
                values: &[[$ty; $n]],
            ) -> BindResult<()> {
                let count = marshal::count_of(values)?;
                unsafe { self.$raw(location, count, gl_bool(transpose), values.as_ptr().cast()) };
                Ok(())
            }

            pub fn $program_method(
                &self,
                program: GLuint,
                location: GLint,
                transpose: bool,
                values: &[[$ty; $n]],
            ) -> BindResult<()> {
                let count = marshal::count_of(values)?;
                unsafe {
                    self.$program_raw(
                        program,
                        location,
                        count,
                        gl_bool(transpose),
                        values.as_ptr().cast(),
                    )
                };
                Ok(())
            }
        )*
    };
}

impl Gl {
    scalar_uniforms! {
        uniform_1fv, program_uniform_1fv => Uniform1fv, ProgramUniform1fv: GLfloat;
        uniform_1iv, program_uniform_1iv => Uniform1iv, ProgramUniform1iv: GLint;
        uniform_1uiv, program_uniform_1uiv => Uniform1uiv, ProgramUniform1uiv: GLuint;
        uniform_1dv, program_uniform_1dv => Uniform1dv, ProgramUniform1dv: GLdouble;
    }

    vector_uniforms! {
        uniform_2fv, program_uniform_2fv => Uniform2fv, ProgramUniform2fv: [GLfloat; 2];
        uniform_3fv, program_uniform_3fv => Uniform3fv, ProgramUniform3fv: [GLfloat; 3];
        uniform_4fv, program_uniform_4fv => Uniform4fv, ProgramUniform4fv: [GLfloat; 4];
        uniform_2iv, program_uniform_2iv => Uniform2iv, ProgramUniform2iv: [GLint; 2];
        uniform_3iv, program_uniform_3iv => Uniform3iv, ProgramUniform3iv: [GLint; 3];
        uniform_4iv, program_uniform_4iv => Uniform4iv, ProgramUniform4iv: [GLint; 4];
        uniform_2uiv, program_uniform_2uiv => Uniform2uiv, ProgramUniform2uiv: [GLuint; 2];
        uniform_3uiv, program_uniform_3uiv => Uniform3uiv, ProgramUniform3uiv: [GLuint; 3];
        uniform_4uiv, program_uniform_4uiv => Uniform4uiv, ProgramUniform4uiv: [GLuint; 4];
        uniform_2dv, program_uniform_2dv => Uniform2dv, ProgramUniform2dv: [GLdouble; 2];
        uniform_3dv, program_uniform_3dv => Uniform3dv, ProgramUniform3dv: [GLdouble; 3];
        uniform_4dv, program_uniform_4dv => Uniform4dv, ProgramUniform4dv: [GLdouble; 4];
    }

    matrix_uniforms! {
        uniform_matrix_2fv, program_uniform_matrix_2fv => UniformMatrix2fv, ProgramUniformMatrix2fv: [GLfloat; 4];
        uniform_matrix_3fv, program_uniform_matrix_3fv => UniformMatrix3fv, ProgramUniformMatrix3fv: [GLfloat; 9];
        uniform_matrix_4fv, program_uniform_matrix_4fv => UniformMatrix4fv, ProgramUniformMatrix4fv: [GLfloat; 16];
        uniform_matrix_2x3fv, program_uniform_matrix_2x3fv => UniformMatrix2x3fv, ProgramUniformMatrix2x3fv: [GLfloat; 6];
        uniform_matrix_3x2fv, program_uniform_matrix_3x2fv => UniformMatrix3x2fv, ProgramUniformMatrix3x2fv: [GLfloat; 6];
        uniform_matrix_2x4fv, program_uniform_matrix_2x4fv => UniformMatrix2x4fv, ProgramUniformMatrix2x4fv: [GLfloat; 8];
        uniform_matrix_4x2fv, program_uniform_matrix_4x2fv => UniformMatrix4x2fv, ProgramUniformMatrix4x2fv: [GLfloat; 8];
        uniform_matrix_3x4fv, program_uniform_matrix_3x4fv => UniformMatrix3x4fv, ProgramUniformMatrix3x4fv: [GLfloat; 12];
        uniform_matrix_4x3fv, program_uniform_matrix_4x3fv => UniformMatrix4x3fv, ProgramUniformMatrix4x3fv: [GLfloat; 12];
        uniform_matrix_2dv, program_uniform_matrix_2dv => UniformMatrix2dv, ProgramUniformMatrix2dv: [GLdouble; 4];
        uniform_matrix_3dv, program_uniform_matrix_3dv => UniformMatrix3dv, ProgramUniformMatrix3dv: [GLdouble; 9];
        uniform_matrix_4dv, program_uniform_matrix_4dv => UniformMatrix4dv, ProgramUniformMatrix4dv: [GLdouble; 16];
        uniform_matrix_2x3dv, program_uniform_matrix_2x3dv => UniformMatrix2x3dv, ProgramUniformMatrix2x3dv: [GLdouble; 6];
        uniform_matrix_3x2dv, program_uniform_matrix_3x2dv => UniformMatrix3x2dv, ProgramUniformMatrix3x2dv: [GLdouble; 6];
        uniform_matrix_2x4dv, program_uniform_matrix_2x4dv => UniformMatrix2x4dv, ProgramUniformMatrix2x4dv: [GLdouble; 8];
        uniform_matrix_4x2dv, program_uniform_matrix_4x2dv => UniformMatrix4x2dv, ProgramUniformMatrix4x2dv: [GLdouble; 8];
        uniform_matrix_3x4dv, program_uniform_matrix_3x4dv => UniformMatrix3x4dv, ProgramUniformMatrix3x4dv: [GLdouble; 12];
        uniform_matrix_4x3dv, program_uniform_matrix_4x3dv => UniformMatrix4x3dv, ProgramUniformMatrix4x3dv: [GLdouble; 12];
    }
}

// glam types are column-major, which is what GL expects without transposing.
impl Gl {
    pub fn uniform_vec2(&self, location: GLint, values: &[Vec2]) -> BindResult<()> {
        self.uniform_2fv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_vec3(&self, location: GLint, values: &[Vec3]) -> BindResult<()> {
        self.uniform_3fv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_vec4(&self, location: GLint, values: &[Vec4]) -> BindResult<()> {
        self.uniform_4fv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_ivec2(&self, location: GLint, values: &[IVec2]) -> BindResult<()> {
        self.uniform_2iv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_ivec3(&self, location: GLint, values: &[IVec3]) -> BindResult<()> {
        self.uniform_3iv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_ivec4(&self, location: GLint, values: &[IVec4]) -> BindResult<()> {
        self.uniform_4iv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_uvec2(&self, location: GLint, values: &[UVec2]) -> BindResult<()> {
        self.uniform_2uiv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_uvec3(&self, location: GLint, values: &[UVec3]) -> BindResult<()> {
        self.uniform_3uiv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_uvec4(&self, location: GLint, values: &[UVec4]) -> BindResult<()> {
        self.uniform_4uiv(location, bytemuck::cast_slice(values))
    }

    pub fn uniform_mat2(&self, location: GLint, values: &[Mat2]) -> BindResult<()> {
        self.uniform_matrix_2fv(location, false, bytemuck::cast_slice(values))
    }

    pub fn uniform_mat3(&self, location: GLint, values: &[Mat3]) -> BindResult<()> {
        self.uniform_matrix_3fv(location, false, bytemuck::cast_slice(values))
    }

    pub fn uniform_mat4(&self, location: GLint, values: &[Mat4]) -> BindResult<()> {
        self.uniform_matrix_4fv(location, false, bytemuck::cast_slice(values))
    }

    pub fn uniform_dmat2(&self, location: GLint, values: &[DMat2]) -> BindResult<()> {
        self.uniform_matrix_2dv(location, false, bytemuck::cast_slice(values))
    }

    pub fn uniform_dmat3(&self, location: GLint, values: &[DMat3]) -> BindResult<()> {
        self.uniform_matrix_3dv(location, false, bytemuck::cast_slice(values))
    }

    pub fn uniform_dmat4(&self, location: GLint, values: &[DMat4]) -> BindResult<()> {
        self.uniform_matrix_4dv(location, false, bytemuck::cast_slice(values))
    }

    pub fn program_uniform_mat4(
        &self,
        program: GLuint,
        location: GLint,
        values: &[Mat4],
    ) -> BindResult<()> {
        self.program_uniform_matrix_4fv(program, location, false, bytemuck::cast_slice(values))
    }
}

impl Gl {
    /// `None` when `name` is not an active uniform of `program`.
    pub fn uniform_location(&self, program: GLuint, name: &str) -> BindResult<Option<GLint>> {
        let name = marshal::to_cstring(name)?;
        let location = unsafe { self.GetUniformLocation(program, name.as_ptr()) };
        Ok((location != -1).then_some(location))
    }

    pub fn uniform_block_index(&self, program: GLuint, name: &str) -> BindResult<Option<GLuint>> {
        let name = marshal::to_cstring(name)?;
        let index = unsafe { self.GetUniformBlockIndex(program, name.as_ptr()) };
        Ok((index != gl::INVALID_INDEX).then_some(index))
    }

    /// Indices of several uniforms at once, `None` for inactive names.
    pub fn uniform_indices<S: AsRef<str>>(
        &self,
        program: GLuint,
        names: &[S],
    ) -> BindResult<Vec<Option<GLuint>>> {
        let names = marshal::CStringList::new(names)?;
        let count = names.count()?;
        let mut indices = vec![gl::INVALID_INDEX; count as usize];
        unsafe { self.GetUniformIndices(program, count, names.pointers(), indices.as_mut_ptr()) };
        Ok(indices
            .into_iter()
            .map(|index| (index != gl::INVALID_INDEX).then_some(index))
            .collect())
    }

    pub fn active_uniform(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity = self.get_program_iv(program, gl::ACTIVE_UNIFORM_MAX_LENGTH);
        let mut size: GLint = 0;
        let mut ty: GLenum = 0;
        let name = marshal::read_string(capacity, |buf_size, length, buffer| unsafe {
            self.GetActiveUniform(program, index, buf_size, length, &mut size, &mut ty, buffer)
        });
        ActiveVariable { name, size, ty }
    }

    /// Reads back a uniform's value, never writing past `values`.
    pub fn get_uniform_fv(
        &self,
        program: GLuint,
        location: GLint,
        values: &mut [GLfloat],
    ) -> BindResult<()> {
        let bytes = std::mem::size_of_val(values);
        let size = GLsizei::try_from(bytes).map_err(|_| crate::BindError::TooLarge(bytes))?;
        unsafe { self.GetnUniformfv(program, location, size, values.as_mut_ptr()) };
        Ok(())
    }

    pub fn get_uniform_iv(
        &self,
        program: GLuint,
        location: GLint,
        values: &mut [GLint],
    ) -> BindResult<()> {
        let bytes = std::mem::size_of_val(values);
        let size = GLsizei::try_from(bytes).map_err(|_| crate::BindError::TooLarge(bytes))?;
        unsafe { self.GetnUniformiv(program, location, size, values.as_mut_ptr()) };
        Ok(())
    }
}
