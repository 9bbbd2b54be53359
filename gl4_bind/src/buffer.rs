use bitflags::bitflags;
use bytemuck::{AnyBitPattern, NoUninit};

use crate::{
    marshal, transmutable_u32,
    types::{GLbitfield, GLenum, GLint, GLint64, GLintptr, GLsizeiptr, GLuint},
    BindError, BindResult, Gl,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessFrequency {
    /// Modified once, used a few times
    Stream,
    /// Modified once, used many times
    #[default]
    Static,
    /// Modified many times, used many times
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessNature {
    /// Modified by app, used in draw and image commands
    #[default]
    Draw,
    /// Modified by reading from GL, used to return data to app
    Read,
    /// Modified by reading from GL, used in draw and image commands
    Copy,
}

/// The `usage` hint of `glBufferData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataUsage {
    frequency: AccessFrequency,
    nature: AccessNature,
}

use AccessFrequency as Freq;
use AccessNature as Nat;

impl DataUsage {
    pub const STATIC_DRAW: Self = Self::new(Freq::Static, Nat::Draw);
    pub const DYNAMIC_DRAW: Self = Self::new(Freq::Dynamic, Nat::Draw);
    pub const STREAM_DRAW: Self = Self::new(Freq::Stream, Nat::Draw);

    pub const fn new(frequency: Freq, nature: Nat) -> Self {
        Self { frequency, nature }
    }

    pub const fn to_u32(self) -> u32 {
        match (self.frequency, self.nature) {
            (Freq::Stream, Nat::Draw) => gl::STREAM_DRAW,
            (Freq::Static, Nat::Draw) => gl::STATIC_DRAW,
            (Freq::Dynamic, Nat::Draw) => gl::DYNAMIC_DRAW,

            (Freq::Stream, Nat::Copy) => gl::STREAM_COPY,
            (Freq::Static, Nat::Copy) => gl::STATIC_COPY,
            (Freq::Dynamic, Nat::Copy) => gl::DYNAMIC_COPY,

            (Freq::Stream, Nat::Read) => gl::STREAM_READ,
            (Freq::Static, Nat::Read) => gl::STATIC_READ,
            (Freq::Dynamic, Nat::Read) => gl::DYNAMIC_READ,
        }
    }
}

impl From<DataUsage> for u32 {
    fn from(value: DataUsage) -> Self {
        value.to_u32()
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferBindTarget {
    /// Vertex attributes
    ArrayBuffer = gl::ARRAY_BUFFER,
    /// Atomic counter storage
    AtomicCounter = gl::ATOMIC_COUNTER_BUFFER,
    /// Buffer copy source
    CopyRead = gl::COPY_READ_BUFFER,
    /// Buffer copy destination
    CopyWrite = gl::COPY_WRITE_BUFFER,
    /// Indirect compute dispatch commands
    DispatchIndirect = gl::DISPATCH_INDIRECT_BUFFER,
    /// Indirect command arguments
    DrawIndirect = gl::DRAW_INDIRECT_BUFFER,
    /// Vertex array indices
    ElementArray = gl::ELEMENT_ARRAY_BUFFER,
    /// Pixel read target
    PixelPack = gl::PIXEL_PACK_BUFFER,
    /// Texture data source
    PixelUnpack = gl::PIXEL_UNPACK_BUFFER,
    /// Query result buffer
    QueryBuffer = gl::QUERY_BUFFER,
    /// Read-write storage for shaders
    ShaderStorage = gl::SHADER_STORAGE_BUFFER,
    /// Texture data buffer
    Texture = gl::TEXTURE_BUFFER,
    /// Transform feedback buffer
    TransformFeedback = gl::TRANSFORM_FEEDBACK_BUFFER,
    /// Uniform block storage
    Uniform = gl::UNIFORM_BUFFER,
}
transmutable_u32!(BufferBindTarget);

impl BufferBindTarget {
    /// Whether the target has indexed binding points (`glBindBufferBase`).
    pub const fn can_bind_base(self) -> bool {
        matches!(
            self,
            Self::ShaderStorage | Self::Uniform | Self::AtomicCounter | Self::TransformFeedback
        )
    }
}

bitflags! {
    /// `access` bits of `glMapBufferRange`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MapAccess: GLbitfield {
        const READ = gl::MAP_READ_BIT;
        const WRITE = gl::MAP_WRITE_BIT;
        const INVALIDATE_RANGE = gl::MAP_INVALIDATE_RANGE_BIT;
        const INVALIDATE_BUFFER = gl::MAP_INVALIDATE_BUFFER_BIT;
        const FLUSH_EXPLICIT = gl::MAP_FLUSH_EXPLICIT_BIT;
        const UNSYNCHRONIZED = gl::MAP_UNSYNCHRONIZED_BIT;
        const PERSISTENT = gl::MAP_PERSISTENT_BIT;
        const COHERENT = gl::MAP_COHERENT_BIT;
    }

    /// `flags` of `glBufferStorage`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StorageFlags: GLbitfield {
        const DYNAMIC_STORAGE = gl::DYNAMIC_STORAGE_BIT;
        const MAP_READ = gl::MAP_READ_BIT;
        const MAP_WRITE = gl::MAP_WRITE_BIT;
        const MAP_PERSISTENT = gl::MAP_PERSISTENT_BIT;
        const MAP_COHERENT = gl::MAP_COHERENT_BIT;
        const CLIENT_STORAGE = gl::CLIENT_STORAGE_BIT;
    }
}

fn offset_of(offset: usize) -> BindResult<GLintptr> {
    GLintptr::try_from(offset).map_err(|_| BindError::TooLarge(offset))
}

impl Gl {
    pub fn gen_buffers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenBuffers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_buffers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateBuffers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_buffers(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteBuffers(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    pub fn bind_buffer(&self, target: BufferBindTarget, buffer: GLuint) {
        unsafe { self.BindBuffer(target.to_u32(), buffer) }
    }

    pub fn bind_buffer_base(&self, target: BufferBindTarget, index: GLuint, buffer: GLuint) {
        debug_assert!(target.can_bind_base(), "{target:?} has no indexed bindings");
        unsafe { self.BindBufferBase(target.to_u32(), index, buffer) }
    }

    /// Binds `buffers` to consecutive indexed binding points from `first`.
    pub fn bind_buffers_base(
        &self,
        target: BufferBindTarget,
        first: GLuint,
        buffers: &[GLuint],
    ) -> BindResult<()> {
        let count = marshal::count_of(buffers)?;
        unsafe { self.BindBuffersBase(target.to_u32(), first, count, marshal::ptr_or_null(buffers)) };
        Ok(())
    }

    /// `size` is the byte length of `data`.
    pub fn buffer_data<T: NoUninit>(
        &self,
        target: BufferBindTarget,
        data: &[T],
        usage: DataUsage,
    ) -> BindResult<()> {
        let size = marshal::byte_size(data)?;
        unsafe { self.BufferData(target.to_u32(), size, data.as_ptr().cast(), usage.to_u32()) };
        Ok(())
    }

    /// Reallocates the bound buffer with `size` uninitialized bytes.
    pub fn allocate_buffer(
        &self,
        target: BufferBindTarget,
        size: usize,
        usage: DataUsage,
    ) -> BindResult<()> {
        let size = GLsizeiptr::try_from(size).map_err(|_| BindError::TooLarge(size))?;
        unsafe { self.BufferData(target.to_u32(), size, std::ptr::null(), usage.to_u32()) };
        Ok(())
    }

    pub fn buffer_sub_data<T: NoUninit>(
        &self,
        target: BufferBindTarget,
        offset: usize,
        data: &[T],
    ) -> BindResult<()> {
        let offset = offset_of(offset)?;
        let size = marshal::byte_size(data)?;
        unsafe { self.BufferSubData(target.to_u32(), offset, size, data.as_ptr().cast()) };
        Ok(())
    }

    pub fn named_buffer_data<T: NoUninit>(
        &self,
        buffer: GLuint,
        data: &[T],
        usage: DataUsage,
    ) -> BindResult<()> {
        let size = marshal::byte_size(data)?;
        unsafe { self.NamedBufferData(buffer, size, data.as_ptr().cast(), usage.to_u32()) };
        Ok(())
    }

    pub fn named_buffer_sub_data<T: NoUninit>(
        &self,
        buffer: GLuint,
        offset: usize,
        data: &[T],
    ) -> BindResult<()> {
        let offset = offset_of(offset)?;
        let size = marshal::byte_size(data)?;
        unsafe { self.NamedBufferSubData(buffer, offset, size, data.as_ptr().cast()) };
        Ok(())
    }

    /// Immutable storage initialized from `data`.
    pub fn named_buffer_storage<T: NoUninit>(
        &self,
        buffer: GLuint,
        data: &[T],
        flags: StorageFlags,
    ) -> BindResult<()> {
        let size = marshal::byte_size(data)?;
        unsafe { self.NamedBufferStorage(buffer, size, data.as_ptr().cast(), flags.bits()) };
        Ok(())
    }

    /// Reads `data.len()` elements starting `offset` bytes into the bound buffer.
    pub fn get_buffer_sub_data<T: AnyBitPattern + NoUninit>(
        &self,
        target: BufferBindTarget,
        offset: usize,
        data: &mut [T],
    ) -> BindResult<()> {
        let offset = offset_of(offset)?;
        let size = marshal::byte_size(data)?;
        unsafe { self.GetBufferSubData(target.to_u32(), offset, size, data.as_mut_ptr().cast()) };
        Ok(())
    }

    pub fn get_named_buffer_sub_data<T: AnyBitPattern + NoUninit>(
        &self,
        buffer: GLuint,
        offset: usize,
        data: &mut [T],
    ) -> BindResult<()> {
        let offset = offset_of(offset)?;
        let size = marshal::byte_size(data)?;
        unsafe { self.GetNamedBufferSubData(buffer, offset, size, data.as_mut_ptr().cast()) };
        Ok(())
    }

    pub fn buffer_parameter(&self, target: BufferBindTarget, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.GetBufferParameteriv(target.to_u32(), pname, &mut value) };
        value
    }

    pub fn named_buffer_size(&self, buffer: GLuint) -> GLint64 {
        let mut value = 0;
        unsafe { self.GetNamedBufferParameteri64v(buffer, gl::BUFFER_SIZE, &mut value) };
        value
    }

    /// Maps a byte range of `buffer`.
    ///
    /// # Safety
    ///
    /// The returned pointer is valid until the buffer is unmapped or deleted,
    /// and only for the accesses `access` allows.
    pub unsafe fn map_named_buffer_range(
        &self,
        buffer: GLuint,
        offset: usize,
        length: usize,
        access: MapAccess,
    ) -> BindResult<*mut u8> {
        let offset = offset_of(offset)?;
        let length = GLsizeiptr::try_from(length).map_err(|_| BindError::TooLarge(length))?;
        Ok(self
            .MapNamedBufferRange(buffer, offset, length, access.bits())
            .cast())
    }

    /// `false` when the store was corrupted while mapped.
    pub fn unmap_named_buffer(&self, buffer: GLuint) -> bool {
        unsafe { self.UnmapNamedBuffer(buffer) != gl::FALSE }
    }
}
