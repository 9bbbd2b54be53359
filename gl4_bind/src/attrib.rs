use crate::{
    marshal,
    program::ActiveVariable,
    transmutable_u32,
    types::{GLenum, GLint, GLintptr, GLsizei, GLuint},
    BindResult, Gl,
};

/// Component type of a vertex attribute.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Byte = gl::BYTE,
    UnsignedByte = gl::UNSIGNED_BYTE,
    Short = gl::SHORT,
    UnsignedShort = gl::UNSIGNED_SHORT,
    Int = gl::INT,
    Uint = gl::UNSIGNED_INT,
    HalfFloat = gl::HALF_FLOAT,
    Float = gl::FLOAT,
    Double = gl::DOUBLE,
}
transmutable_u32!(AttrType);

/// How the shader sees the attribute, which picks the format entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// `float`/`vec*` inputs, fed through `glVertexAttribFormat`.
    Float { normalized: bool },
    /// `int`/`uint` inputs, fed through `glVertexAttribIFormat`.
    Int,
    /// `double`/`dvec*` inputs, fed through `glVertexAttribLFormat`.
    Long,
}

impl AttrType {
    /// Bytes per component.
    pub const fn size(self) -> u32 {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort | Self::HalfFloat => 2,
            Self::Int | Self::Uint | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// The kind a shader input of this type would usually have.
    pub const fn default_kind(self) -> AttrKind {
        match self {
            Self::HalfFloat | Self::Float => AttrKind::Float { normalized: false },
            Self::Double => AttrKind::Long,
            _ => AttrKind::Int,
        }
    }
}

/// One attribute of an interleaved vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrFormat {
    pub ty: AttrType,
    pub components: u32,
    pub kind: AttrKind,
}

impl AttrFormat {
    pub const fn new(ty: AttrType, components: u32) -> Self {
        Self {
            ty,
            components,
            kind: ty.default_kind(),
        }
    }

    pub const fn normalized(ty: AttrType, components: u32) -> Self {
        Self {
            ty,
            components,
            kind: AttrKind::Float { normalized: true },
        }
    }

    pub const fn byte_size(&self) -> u32 {
        self.ty.size() * self.components
    }
}

impl Gl {
    pub fn gen_vertex_arrays(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenVertexArrays(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_vertex_arrays(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateVertexArrays(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_vertex_arrays(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteVertexArrays(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    /// Sets the format of attribute `index` of `vao` and returns the offset
    /// just past it.
    pub fn vertex_array_attrib_format(
        &self,
        vao: GLuint,
        index: GLuint,
        format: AttrFormat,
        relative_offset: GLuint,
    ) -> GLuint {
        let size = format.components as GLint;
        let ty = format.ty.to_u32();
        unsafe {
            match format.kind {
                AttrKind::Float { normalized } => {
                    let normalized = if normalized { gl::TRUE } else { gl::FALSE };
                    self.VertexArrayAttribFormat(vao, index, size, ty, normalized, relative_offset)
                }
                AttrKind::Int => self.VertexArrayAttribIFormat(vao, index, size, ty, relative_offset),
                AttrKind::Long => self.VertexArrayAttribLFormat(vao, index, size, ty, relative_offset),
            }
        }
        relative_offset + format.byte_size()
    }

    /// Bind-to-edit version of [`Gl::vertex_array_attrib_format`].
    pub fn vertex_attrib_format(
        &self,
        index: GLuint,
        format: AttrFormat,
        relative_offset: GLuint,
    ) -> GLuint {
        let size = format.components as GLint;
        let ty = format.ty.to_u32();
        unsafe {
            match format.kind {
                AttrKind::Float { normalized } => {
                    let normalized = if normalized { gl::TRUE } else { gl::FALSE };
                    self.VertexAttribFormat(index, size, ty, normalized, relative_offset)
                }
                AttrKind::Int => self.VertexAttribIFormat(index, size, ty, relative_offset),
                AttrKind::Long => self.VertexAttribLFormat(index, size, ty, relative_offset),
            }
        }
        relative_offset + format.byte_size()
    }

    /// Lays out `formats` back to back in binding `binding` of `vao`, on
    /// attribute indices `first_index..`, and enables them. Returns the stride.
    pub fn vertex_array_layout(
        &self,
        vao: GLuint,
        binding: GLuint,
        first_index: GLuint,
        formats: &[AttrFormat],
    ) -> GLuint {
        let mut offset = 0;
        for (index, format) in (first_index..).zip(formats) {
            offset = self.vertex_array_attrib_format(vao, index, *format, offset);
            unsafe {
                self.VertexArrayAttribBinding(vao, index, binding);
                self.EnableVertexArrayAttrib(vao, index);
            }
        }
        offset
    }

    /// `glVertexAttribPointer` with a byte offset into the bound
    /// `GL_ARRAY_BUFFER`, the only form core profiles accept.
    pub fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        format: AttrFormat,
        stride: GLsizei,
        offset: usize,
    ) {
        let size = format.components as GLint;
        let ty = format.ty.to_u32();
        let pointer = offset as *const std::ffi::c_void;
        unsafe {
            match format.kind {
                AttrKind::Float { normalized } => {
                    let normalized = if normalized { gl::TRUE } else { gl::FALSE };
                    self.VertexAttribPointer(index, size, ty, normalized, stride, pointer)
                }
                AttrKind::Int => self.VertexAttribIPointer(index, size, ty, stride, pointer),
                AttrKind::Long => self.VertexAttribLPointer(index, size, ty, stride, pointer),
            }
        }
    }

    /// Binds one vertex buffer per binding point from `first`. The three
    /// slices are parallel and must have equal lengths.
    pub fn vertex_array_vertex_buffers(
        &self,
        vao: GLuint,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[GLintptr],
        strides: &[GLsizei],
    ) -> BindResult<()> {
        marshal::same_len(buffers, offsets)?;
        marshal::same_len(buffers, strides)?;
        let count = marshal::count_of(buffers)?;
        unsafe {
            self.VertexArrayVertexBuffers(
                vao,
                first,
                count,
                marshal::ptr_or_null(buffers),
                marshal::ptr_or_null(offsets),
                marshal::ptr_or_null(strides),
            )
        };
        Ok(())
    }

    /// `None` when `name` is not an active attribute of `program`.
    pub fn attrib_location(&self, program: GLuint, name: &str) -> BindResult<Option<GLuint>> {
        let name = marshal::to_cstring(name)?;
        let location = unsafe { self.GetAttribLocation(program, name.as_ptr()) };
        Ok(GLuint::try_from(location).ok())
    }

    pub fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) -> BindResult<()> {
        let name = marshal::to_cstring(name)?;
        unsafe { self.BindAttribLocation(program, index, name.as_ptr()) };
        Ok(())
    }

    pub fn active_attrib(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity = self.get_program_iv(program, gl::ACTIVE_ATTRIBUTE_MAX_LENGTH);
        let mut size: GLint = 0;
        let mut ty: GLenum = 0;
        let name = marshal::read_string(capacity, |buf_size, length, buffer| unsafe {
            self.GetActiveAttrib(program, index, buf_size, length, &mut size, &mut ty, buffer)
        });
        ActiveVariable { name, size, ty }
    }
}
