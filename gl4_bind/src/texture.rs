use bytemuck::Pod;

use crate::{
    marshal,
    types::{GLenum, GLfloat, GLint, GLsizei, GLuint},
    BindError, BindResult, Gl,
};

impl Gl {
    pub fn gen_textures(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenTextures(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_textures(&self, target: GLenum, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateTextures(target, marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_textures(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteTextures(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    pub fn gen_samplers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenSamplers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_samplers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateSamplers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_samplers(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteSamplers(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    /// Binds `textures` to units `first..`. A zero unbinds that unit.
    pub fn bind_textures(&self, first: GLuint, textures: &[GLuint]) -> BindResult<()> {
        let count = marshal::count_of(textures)?;
        unsafe { self.BindTextures(first, count, marshal::ptr_or_null(textures)) };
        Ok(())
    }

    pub fn bind_samplers(&self, first: GLuint, samplers: &[GLuint]) -> BindResult<()> {
        let count = marshal::count_of(samplers)?;
        unsafe { self.BindSamplers(first, count, marshal::ptr_or_null(samplers)) };
        Ok(())
    }

    pub fn bind_image_textures(&self, first: GLuint, textures: &[GLuint]) -> BindResult<()> {
        let count = marshal::count_of(textures)?;
        unsafe { self.BindImageTextures(first, count, marshal::ptr_or_null(textures)) };
        Ok(())
    }

    /// `glTexImage2D` from client memory, or with no data when `pixels` is
    /// `None`.
    ///
    /// # Safety
    ///
    /// GL reads `width * height` texels of `format`/`type_` from `pixels`,
    /// subject to the current unpack state. `pixels` must be at least that
    /// long, and no `GL_PIXEL_UNPACK_BUFFER` may be bound.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        (width, height): (GLsizei, GLsizei),
        format: GLenum,
        type_: GLenum,
        pixels: Option<&[u8]>,
    ) {
        let pixels = pixels.map_or(std::ptr::null(), |pixels| pixels.as_ptr().cast());
        self.TexImage2D(target, level, internal_format, width, height, 0, format, type_, pixels);
    }

    /// # Safety
    ///
    /// Same requirements as [`Gl::tex_image_2d`] for the updated region.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn texture_sub_image_2d(
        &self,
        texture: GLuint,
        level: GLint,
        (x, y): (GLint, GLint),
        (width, height): (GLsizei, GLsizei),
        format: GLenum,
        type_: GLenum,
        pixels: &[u8],
    ) {
        self.TextureSubImage2D(
            texture,
            level,
            x,
            y,
            width,
            height,
            format,
            type_,
            pixels.as_ptr().cast(),
        );
    }

    pub fn texture_storage_2d(
        &self,
        texture: GLuint,
        levels: GLsizei,
        internal_format: GLenum,
        (width, height): (GLsizei, GLsizei),
    ) {
        unsafe { self.TextureStorage2D(texture, levels, internal_format, width, height) }
    }

    pub fn texture_parameter_i(&self, texture: GLuint, pname: GLenum, param: GLint) {
        unsafe { self.TextureParameteri(texture, pname, param) }
    }

    /// For vector parameters like `GL_TEXTURE_BORDER_COLOR`.
    ///
    /// # Safety
    ///
    /// `params` must hold as many values as `pname` takes.
    pub unsafe fn texture_parameter_fv(&self, texture: GLuint, pname: GLenum, params: &[GLfloat]) {
        self.TextureParameterfv(texture, pname, params.as_ptr());
    }

    pub fn sampler_parameter_i(&self, sampler: GLuint, pname: GLenum, param: GLint) {
        unsafe { self.SamplerParameteri(sampler, pname, param) }
    }

    /// Reads a whole mip level into `pixels`. GL writes at most the slice's
    /// byte size.
    pub fn get_texture_image<T: Pod>(
        &self,
        texture: GLuint,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [T],
    ) -> BindResult<()> {
        let bytes = std::mem::size_of_val(pixels);
        let size = GLsizei::try_from(bytes).map_err(|_| BindError::TooLarge(bytes))?;
        unsafe {
            self.GetTextureImage(texture, level, format, type_, size, pixels.as_mut_ptr().cast())
        };
        Ok(())
    }

    pub fn generate_texture_mipmap(&self, texture: GLuint) {
        unsafe { self.GenerateTextureMipmap(texture) }
    }
}
