use bytemuck::{Pod, Zeroable};

use crate::{
    marshal,
    types::{GLenum, GLint, GLsizei, GLuint},
    BindError, BindResult, Gl,
};

/// Layout of one command in a `GL_DRAW_INDIRECT_BUFFER` for
/// `glMultiDrawArraysIndirect`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DrawArraysIndirectCommand {
    pub count: GLuint,
    pub instance_count: GLuint,
    pub first: GLuint,
    pub base_instance: GLuint,
}

/// Layout of one command for `glMultiDrawElementsIndirect`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DrawElementsIndirectCommand {
    pub count: GLuint,
    pub instance_count: GLuint,
    pub first_index: GLuint,
    pub base_vertex: GLint,
    pub base_instance: GLuint,
}

impl Gl {
    pub fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        unsafe { self.DrawArrays(mode, first, count) }
    }

    pub fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instances: GLsizei,
    ) {
        unsafe { self.DrawArraysInstanced(mode, first, count, instances) }
    }

    /// Indexed draw reading indices from the bound `GL_ELEMENT_ARRAY_BUFFER`
    /// at byte `offset`.
    pub fn draw_elements(&self, mode: GLenum, count: GLsizei, index_type: GLenum, offset: usize) {
        unsafe { self.DrawElements(mode, count, index_type, offset as *const _) }
    }

    pub fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        index_type: GLenum,
        offset: usize,
        instances: GLsizei,
    ) {
        unsafe { self.DrawElementsInstanced(mode, count, index_type, offset as *const _, instances) }
    }

    /// One draw per `(first, count)` pair. `drawcount` is the slice length.
    pub fn multi_draw_arrays(
        &self,
        mode: GLenum,
        first: &[GLint],
        count: &[GLsizei],
    ) -> BindResult<()> {
        marshal::same_len(first, count)?;
        let draw_count = marshal::count_of(first)?;
        unsafe {
            self.MultiDrawArrays(
                mode,
                marshal::ptr_or_null(first),
                marshal::ptr_or_null(count),
                draw_count,
            )
        };
        Ok(())
    }

    /// Draws `draw_count` tightly packed commands from the bound
    /// `GL_DRAW_INDIRECT_BUFFER`, starting at byte `offset`.
    pub fn multi_draw_arrays_indirect(
        &self,
        mode: GLenum,
        offset: usize,
        draw_count: usize,
    ) -> BindResult<()> {
        let draw_count =
            GLsizei::try_from(draw_count).map_err(|_| BindError::TooLarge(draw_count))?;
        unsafe { self.MultiDrawArraysIndirect(mode, offset as *const _, draw_count, 0) };
        Ok(())
    }

    pub fn multi_draw_elements_indirect(
        &self,
        mode: GLenum,
        index_type: GLenum,
        offset: usize,
        draw_count: usize,
    ) -> BindResult<()> {
        let draw_count =
            GLsizei::try_from(draw_count).map_err(|_| BindError::TooLarge(draw_count))?;
        unsafe {
            self.MultiDrawElementsIndirect(mode, index_type, offset as *const _, draw_count, 0)
        };
        Ok(())
    }

    pub fn dispatch_compute(&self, x: GLuint, y: GLuint, z: GLuint) {
        unsafe { self.DispatchCompute(x, y, z) }
    }
}
