use bitflags::bitflags;

use crate::{
    marshal, transmutable_u32,
    types::{GLbitfield, GLenum, GLfloat, GLint, GLuint},
    BindResult, Gl,
};

bitflags! {
    /// `mask` of `glClear` and `glBlitFramebuffer`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: GLbitfield {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete = gl::FRAMEBUFFER_COMPLETE,
    Undefined = gl::FRAMEBUFFER_UNDEFINED,
    IncompleteAttachment = gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
    MissingAttachment = gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
    IncompleteDrawBuffer = gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER,
    IncompleteReadBuffer = gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER,
    Unsupported = gl::FRAMEBUFFER_UNSUPPORTED,
    IncompleteMultisample = gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE,
    IncompleteLayerTargets = gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS,
}
transmutable_u32!(FramebufferStatus {
    Complete,
    Undefined,
    IncompleteAttachment,
    MissingAttachment,
    IncompleteDrawBuffer,
    IncompleteReadBuffer,
    Unsupported,
    IncompleteMultisample,
    IncompleteLayerTargets,
});

impl Gl {
    pub fn clear(&self, mask: ClearMask) {
        unsafe { self.Clear(mask.bits()) }
    }

    pub fn clear_color(&self, [red, green, blue, alpha]: [GLfloat; 4]) {
        unsafe { self.ClearColor(red, green, blue, alpha) }
    }

    pub fn gen_framebuffers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenFramebuffers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_framebuffers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateFramebuffers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_framebuffers(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteFramebuffers(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    pub fn gen_renderbuffers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.GenRenderbuffers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn create_renderbuffers(&self, count: usize) -> BindResult<Vec<GLuint>> {
        let mut names = vec![0; count];
        unsafe { self.CreateRenderbuffers(marshal::count_of(&names)?, names.as_mut_ptr()) };
        Ok(names)
    }

    pub fn delete_renderbuffers(&self, names: &[GLuint]) -> BindResult<()> {
        unsafe { self.DeleteRenderbuffers(marshal::count_of(names)?, names.as_ptr()) };
        Ok(())
    }

    /// `Err` carries the raw value when GL returns something unlisted, which
    /// includes 0 on error.
    pub fn check_framebuffer_status(&self, target: GLenum) -> Result<FramebufferStatus, GLenum> {
        FramebufferStatus::try_from(unsafe { self.CheckFramebufferStatus(target) })
    }

    pub fn check_named_framebuffer_status(
        &self,
        framebuffer: GLuint,
        target: GLenum,
    ) -> Result<FramebufferStatus, GLenum> {
        FramebufferStatus::try_from(unsafe { self.CheckNamedFramebufferStatus(framebuffer, target) })
    }

    pub fn draw_buffers(&self, buffers: &[GLenum]) -> BindResult<()> {
        unsafe { self.DrawBuffers(marshal::count_of(buffers)?, buffers.as_ptr()) };
        Ok(())
    }

    pub fn named_framebuffer_draw_buffers(
        &self,
        framebuffer: GLuint,
        buffers: &[GLenum],
    ) -> BindResult<()> {
        let count = marshal::count_of(buffers)?;
        unsafe { self.NamedFramebufferDrawBuffers(framebuffer, count, buffers.as_ptr()) };
        Ok(())
    }

    pub fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) -> BindResult<()> {
        let count = marshal::count_of(attachments)?;
        unsafe { self.InvalidateFramebuffer(target, count, attachments.as_ptr()) };
        Ok(())
    }

    pub fn invalidate_named_framebuffer_data(
        &self,
        framebuffer: GLuint,
        attachments: &[GLenum],
    ) -> BindResult<()> {
        let count = marshal::count_of(attachments)?;
        unsafe { self.InvalidateNamedFramebufferData(framebuffer, count, attachments.as_ptr()) };
        Ok(())
    }

    /// Clears one color draw buffer of the bound draw framebuffer.
    pub fn clear_buffer_fv(&self, draw_buffer: GLint, color: [GLfloat; 4]) {
        unsafe { self.ClearBufferfv(gl::COLOR, draw_buffer, color.as_ptr()) }
    }

    pub fn clear_buffer_iv(&self, draw_buffer: GLint, color: [GLint; 4]) {
        unsafe { self.ClearBufferiv(gl::COLOR, draw_buffer, color.as_ptr()) }
    }

    pub fn clear_buffer_uiv(&self, draw_buffer: GLint, color: [GLuint; 4]) {
        unsafe { self.ClearBufferuiv(gl::COLOR, draw_buffer, color.as_ptr()) }
    }

    pub fn clear_depth_stencil(&self, depth: GLfloat, stencil: GLint) {
        unsafe { self.ClearBufferfi(gl::DEPTH_STENCIL, 0, depth, stencil) }
    }

    pub fn clear_named_framebuffer_fv(
        &self,
        framebuffer: GLuint,
        draw_buffer: GLint,
        color: [GLfloat; 4],
    ) {
        unsafe { self.ClearNamedFramebufferfv(framebuffer, gl::COLOR, draw_buffer, color.as_ptr()) }
    }

    pub fn clear_named_framebuffer_depth(&self, framebuffer: GLuint, depth: GLfloat) {
        unsafe { self.ClearNamedFramebufferfv(framebuffer, gl::DEPTH, 0, &depth) }
    }
}
