use bytemuck::Pod;

use crate::{
    types::{GLboolean, GLenum, GLfloat, GLint, GLint64, GLsizei},
    BindError, BindResult, Gl,
};

impl Gl {
    pub fn get_integer(&self, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.GetIntegerv(pname, &mut value) };
        value
    }

    /// For queries that write several integers, like `GL_VIEWPORT`.
    ///
    /// # Safety
    ///
    /// `values` must be at least as long as the query's result.
    pub unsafe fn get_integer_v(&self, pname: GLenum, values: &mut [GLint]) {
        self.GetIntegerv(pname, values.as_mut_ptr());
    }

    pub fn get_integer_indexed(&self, target: GLenum, index: u32) -> GLint {
        let mut value = 0;
        unsafe { self.GetIntegeri_v(target, index, &mut value) };
        value
    }

    pub fn get_integer_64(&self, pname: GLenum) -> GLint64 {
        let mut value = 0;
        unsafe { self.GetInteger64v(pname, &mut value) };
        value
    }

    pub fn get_float(&self, pname: GLenum) -> GLfloat {
        let mut value = 0.0;
        unsafe { self.GetFloatv(pname, &mut value) };
        value
    }

    pub fn get_boolean(&self, pname: GLenum) -> bool {
        let mut value: GLboolean = gl::FALSE;
        unsafe { self.GetBooleanv(pname, &mut value) };
        value != gl::FALSE
    }

    pub fn enable(&self, cap: GLenum) {
        unsafe { self.Enable(cap) }
    }

    pub fn disable(&self, cap: GLenum) {
        unsafe { self.Disable(cap) }
    }

    pub fn is_enabled(&self, cap: GLenum) -> bool {
        unsafe { self.IsEnabled(cap) != gl::FALSE }
    }

    pub fn viewport(&self, (x, y): (GLint, GLint), (width, height): (GLsizei, GLsizei)) {
        unsafe { self.Viewport(x, y, width, height) }
    }

    /// `[x, y, width, height]` of the current viewport.
    pub fn get_viewport(&self) -> [GLint; 4] {
        let mut values = [0; 4];
        unsafe { self.get_integer_v(gl::VIEWPORT, &mut values) };
        values
    }

    /// Reads pixels into `pixels` with the robust entry point, so GL never
    /// writes past the slice.
    pub fn read_pixels<T: Pod>(
        &self,
        (x, y): (GLint, GLint),
        (width, height): (GLsizei, GLsizei),
        format: GLenum,
        type_: GLenum,
        pixels: &mut [T],
    ) -> BindResult<()> {
        let bytes = std::mem::size_of_val(pixels);
        let size = GLsizei::try_from(bytes).map_err(|_| BindError::TooLarge(bytes))?;
        unsafe {
            self.ReadnPixels(
                x,
                y,
                width,
                height,
                format,
                type_,
                size,
                pixels.as_mut_ptr().cast(),
            )
        };
        Ok(())
    }
}
