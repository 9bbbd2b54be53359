//! OpenGL 4.6 core entry points, generated by gl4_registry.

use std::ffi::c_void;

use crate::entry::gl_entry_points;
use crate::types::*;

gl_entry_points! {
    fn ActiveShaderProgram("glActiveShaderProgram")(pipeline: GLuint, program: GLuint);
    fn ActiveTexture("glActiveTexture", "glActiveTextureARB")(texture: GLenum);
    fn AttachShader("glAttachShader", "glAttachObjectARB")(program: GLuint, shader: GLuint);
    fn BeginConditionalRender("glBeginConditionalRender", "glBeginConditionalRenderNV")(id: GLuint, mode: GLenum);
    fn BeginQuery("glBeginQuery", "glBeginQueryARB")(target: GLenum, id: GLuint);
    fn BeginQueryIndexed("glBeginQueryIndexed")(target: GLenum, index: GLuint, id: GLuint);
    fn BeginTransformFeedback("glBeginTransformFeedback", "glBeginTransformFeedbackEXT", "glBeginTransformFeedbackNV")(primitiveMode: GLenum);
    fn BindAttribLocation("glBindAttribLocation", "glBindAttribLocationARB")(program: GLuint, index: GLuint, name: *const GLchar);
    fn BindBuffer("glBindBuffer", "glBindBufferARB")(target: GLenum, buffer: GLuint);
    fn BindBufferBase("glBindBufferBase", "glBindBufferBaseEXT", "glBindBufferBaseNV")(target: GLenum, index: GLuint, buffer: GLuint);
    fn BindBufferRange("glBindBufferRange", "glBindBufferRangeEXT", "glBindBufferRangeNV")(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    fn BindBuffersBase("glBindBuffersBase")(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint);
    fn BindBuffersRange("glBindBuffersRange")(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, sizes: *const GLsizeiptr);
    fn BindFragDataLocation("glBindFragDataLocation", "glBindFragDataLocationEXT")(program: GLuint, color: GLuint, name: *const GLchar);
    fn BindFragDataLocationIndexed("glBindFragDataLocationIndexed")(program: GLuint, colorNumber: GLuint, index: GLuint, name: *const GLchar);
    fn BindFramebuffer("glBindFramebuffer")(target: GLenum, framebuffer: GLuint);
    fn BindImageTexture("glBindImageTexture")(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, access: GLenum, format: GLenum);
    fn BindImageTextures("glBindImageTextures")(first: GLuint, count: GLsizei, textures: *const GLuint);
    fn BindProgramPipeline("glBindProgramPipeline")(pipeline: GLuint);
    fn BindRenderbuffer("glBindRenderbuffer")(target: GLenum, renderbuffer: GLuint);
    fn BindSampler("glBindSampler")(unit: GLuint, sampler: GLuint);
    fn BindSamplers("glBindSamplers")(first: GLuint, count: GLsizei, samplers: *const GLuint);
    fn BindTexture("glBindTexture", "glBindTextureEXT")(target: GLenum, texture: GLuint);
    fn BindTextureUnit("glBindTextureUnit")(unit: GLuint, texture: GLuint);
    fn BindTextures("glBindTextures")(first: GLuint, count: GLsizei, textures: *const GLuint);
    fn BindTransformFeedback("glBindTransformFeedback")(target: GLenum, id: GLuint);
    fn BindVertexArray("glBindVertexArray")(array: GLuint);
    fn BindVertexBuffer("glBindVertexBuffer")(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
    fn BindVertexBuffers("glBindVertexBuffers")(first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei);
    fn BlendColor("glBlendColor", "glBlendColorEXT")(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn BlendEquation("glBlendEquation", "glBlendEquationEXT")(mode: GLenum);
    fn BlendEquationSeparate("glBlendEquationSeparate", "glBlendEquationSeparateEXT")(modeRGB: GLenum, modeAlpha: GLenum);
    fn BlendEquationSeparatei("glBlendEquationSeparatei", "glBlendEquationSeparateIndexedAMD", "glBlendEquationSeparateiARB")(buf: GLuint, modeRGB: GLenum, modeAlpha: GLenum);
    fn BlendEquationi("glBlendEquationi", "glBlendEquationIndexedAMD", "glBlendEquationiARB")(buf: GLuint, mode: GLenum);
    fn BlendFunc("glBlendFunc")(sfactor: GLenum, dfactor: GLenum);
    fn BlendFuncSeparate("glBlendFuncSeparate", "glBlendFuncSeparateEXT", "glBlendFuncSeparateINGR")(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum, dfactorAlpha: GLenum);
    fn BlendFuncSeparatei("glBlendFuncSeparatei", "glBlendFuncSeparateIndexedAMD", "glBlendFuncSeparateiARB")(buf: GLuint, srcRGB: GLenum, dstRGB: GLenum, srcAlpha: GLenum, dstAlpha: GLenum);
    fn BlendFunci("glBlendFunci", "glBlendFuncIndexedAMD", "glBlendFunciARB")(buf: GLuint, src: GLenum, dst: GLenum);
    fn BlitFramebuffer("glBlitFramebuffer", "glBlitFramebufferEXT")(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum);
    fn BlitNamedFramebuffer("glBlitNamedFramebuffer")(readFramebuffer: GLuint, drawFramebuffer: GLuint, srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum);
    fn BufferData("glBufferData", "glBufferDataARB")(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    fn BufferStorage("glBufferStorage")(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    fn BufferSubData("glBufferSubData", "glBufferSubDataARB")(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    fn CheckFramebufferStatus("glCheckFramebufferStatus", "glCheckFramebufferStatusEXT")(target: GLenum) -> GLenum;
    fn CheckNamedFramebufferStatus("glCheckNamedFramebufferStatus")(framebuffer: GLuint, target: GLenum) -> GLenum;
    fn ClampColor("glClampColor", "glClampColorARB")(target: GLenum, clamp: GLenum);
    fn Clear("glClear")(mask: GLbitfield);
    fn ClearBufferData("glClearBufferData")(target: GLenum, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
    fn ClearBufferSubData("glClearBufferSubData")(target: GLenum, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void);
    fn ClearBufferfi("glClearBufferfi")(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    fn ClearBufferfv("glClearBufferfv")(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
    fn ClearBufferiv("glClearBufferiv")(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
    fn ClearBufferuiv("glClearBufferuiv")(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
    fn ClearColor("glClearColor")(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn ClearDepth("glClearDepth")(depth: GLdouble);
    fn ClearDepthf("glClearDepthf", "glClearDepthfOES")(d: GLfloat);
    fn ClearNamedBufferData("glClearNamedBufferData")(buffer: GLuint, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
    fn ClearNamedBufferSubData("glClearNamedBufferSubData")(buffer: GLuint, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void);
    fn ClearNamedFramebufferfi("glClearNamedFramebufferfi")(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    fn ClearNamedFramebufferfv("glClearNamedFramebufferfv")(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
    fn ClearNamedFramebufferiv("glClearNamedFramebufferiv")(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLint);
    fn ClearNamedFramebufferuiv("glClearNamedFramebufferuiv")(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
    fn ClearStencil("glClearStencil")(s: GLint);
    fn ClearTexImage("glClearTexImage")(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void);
    fn ClearTexSubImage("glClearTexSubImage")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, data: *const c_void);
    fn ClientWaitSync("glClientWaitSync")(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
    fn ClipControl("glClipControl")(origin: GLenum, depth: GLenum);
    fn ColorMask("glColorMask")(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
    fn ColorMaski("glColorMaski", "glColorMaskIndexedEXT")(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
    fn CompileShader("glCompileShader", "glCompileShaderARB")(shader: GLuint);
    fn CompressedTexImage1D("glCompressedTexImage1D", "glCompressedTexImage1DARB")(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void);
    fn CompressedTexImage2D("glCompressedTexImage2D", "glCompressedTexImage2DARB")(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void);
    fn CompressedTexImage3D("glCompressedTexImage3D", "glCompressedTexImage3DARB")(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void);
    fn CompressedTexSubImage1D("glCompressedTexSubImage1D", "glCompressedTexSubImage1DARB")(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
    fn CompressedTexSubImage2D("glCompressedTexSubImage2D", "glCompressedTexSubImage2DARB")(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
    fn CompressedTexSubImage3D("glCompressedTexSubImage3D", "glCompressedTexSubImage3DARB")(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
    fn CompressedTextureSubImage1D("glCompressedTextureSubImage1D")(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
    fn CompressedTextureSubImage2D("glCompressedTextureSubImage2D")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
    fn CompressedTextureSubImage3D("glCompressedTextureSubImage3D")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
    fn CopyBufferSubData("glCopyBufferSubData")(readTarget: GLenum, writeTarget: GLenum, readOffset: GLintptr, writeOffset: GLintptr, size: GLsizeiptr);
    fn CopyImageSubData("glCopyImageSubData")(srcName: GLuint, srcTarget: GLenum, srcLevel: GLint, srcX: GLint, srcY: GLint, srcZ: GLint, dstName: GLuint, dstTarget: GLenum, dstLevel: GLint, dstX: GLint, dstY: GLint, dstZ: GLint, srcWidth: GLsizei, srcHeight: GLsizei, srcDepth: GLsizei);
    fn CopyNamedBufferSubData("glCopyNamedBufferSubData")(readBuffer: GLuint, writeBuffer: GLuint, readOffset: GLintptr, writeOffset: GLintptr, size: GLsizeiptr);
    fn CopyTexImage1D("glCopyTexImage1D", "glCopyTexImage1DEXT")(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
    fn CopyTexImage2D("glCopyTexImage2D", "glCopyTexImage2DEXT")(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
    fn CopyTexSubImage1D("glCopyTexSubImage1D", "glCopyTexSubImage1DEXT")(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
    fn CopyTexSubImage2D("glCopyTexSubImage2D", "glCopyTexSubImage2DEXT")(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn CopyTexSubImage3D("glCopyTexSubImage3D", "glCopyTexSubImage3DEXT")(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn CopyTextureSubImage1D("glCopyTextureSubImage1D")(texture: GLuint, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
    fn CopyTextureSubImage2D("glCopyTextureSubImage2D")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn CopyTextureSubImage3D("glCopyTextureSubImage3D")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn CreateBuffers("glCreateBuffers")(n: GLsizei, buffers: *mut GLuint);
    fn CreateFramebuffers("glCreateFramebuffers")(n: GLsizei, framebuffers: *mut GLuint);
    fn CreateProgram("glCreateProgram", "glCreateProgramObjectARB")() -> GLuint;
    fn CreateProgramPipelines("glCreateProgramPipelines")(n: GLsizei, pipelines: *mut GLuint);
    fn CreateQueries("glCreateQueries")(target: GLenum, n: GLsizei, ids: *mut GLuint);
    fn CreateRenderbuffers("glCreateRenderbuffers")(n: GLsizei, renderbuffers: *mut GLuint);
    fn CreateSamplers("glCreateSamplers")(n: GLsizei, samplers: *mut GLuint);
    fn CreateShader("glCreateShader", "glCreateShaderObjectARB")(type_: GLenum) -> GLuint;
    fn CreateShaderProgramv("glCreateShaderProgramv")(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
    fn CreateTextures("glCreateTextures")(target: GLenum, n: GLsizei, textures: *mut GLuint);
    fn CreateTransformFeedbacks("glCreateTransformFeedbacks")(n: GLsizei, ids: *mut GLuint);
    fn CreateVertexArrays("glCreateVertexArrays")(n: GLsizei, arrays: *mut GLuint);
    fn CullFace("glCullFace")(mode: GLenum);
    fn DebugMessageCallback("glDebugMessageCallback", "glDebugMessageCallbackARB")(callback: GLDEBUGPROC, userParam: *const c_void);
    fn DebugMessageControl("glDebugMessageControl", "glDebugMessageControlARB")(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean);
    fn DebugMessageInsert("glDebugMessageInsert", "glDebugMessageInsertARB")(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar);
    fn DeleteBuffers("glDeleteBuffers", "glDeleteBuffersARB")(n: GLsizei, buffers: *const GLuint);
    fn DeleteFramebuffers("glDeleteFramebuffers", "glDeleteFramebuffersEXT")(n: GLsizei, framebuffers: *const GLuint);
    fn DeleteProgram("glDeleteProgram")(program: GLuint);
    fn DeleteProgramPipelines("glDeleteProgramPipelines")(n: GLsizei, pipelines: *const GLuint);
    fn DeleteQueries("glDeleteQueries", "glDeleteQueriesARB")(n: GLsizei, ids: *const GLuint);
    fn DeleteRenderbuffers("glDeleteRenderbuffers", "glDeleteRenderbuffersEXT")(n: GLsizei, renderbuffers: *const GLuint);
    fn DeleteSamplers("glDeleteSamplers")(count: GLsizei, samplers: *const GLuint);
    fn DeleteShader("glDeleteShader")(shader: GLuint);
    fn DeleteSync("glDeleteSync")(sync: GLsync);
    fn DeleteTextures("glDeleteTextures")(n: GLsizei, textures: *const GLuint);
    fn DeleteTransformFeedbacks("glDeleteTransformFeedbacks", "glDeleteTransformFeedbacksNV")(n: GLsizei, ids: *const GLuint);
    fn DeleteVertexArrays("glDeleteVertexArrays", "glDeleteVertexArraysAPPLE")(n: GLsizei, arrays: *const GLuint);
    fn DepthFunc("glDepthFunc")(func: GLenum);
    fn DepthMask("glDepthMask")(flag: GLboolean);
    fn DepthRange("glDepthRange")(n: GLdouble, f: GLdouble);
    fn DepthRangeArrayv("glDepthRangeArrayv")(first: GLuint, count: GLsizei, v: *const GLdouble);
    fn DepthRangeIndexed("glDepthRangeIndexed")(index: GLuint, n: GLdouble, f: GLdouble);
    fn DepthRangef("glDepthRangef", "glDepthRangefOES")(n: GLfloat, f: GLfloat);
    fn DetachShader("glDetachShader", "glDetachObjectARB")(program: GLuint, shader: GLuint);
    fn Disable("glDisable")(cap: GLenum);
    fn DisableVertexArrayAttrib("glDisableVertexArrayAttrib")(vaobj: GLuint, index: GLuint);
    fn DisableVertexAttribArray("glDisableVertexAttribArray", "glDisableVertexAttribArrayARB")(index: GLuint);
    fn Disablei("glDisablei", "glDisableIndexedEXT")(target: GLenum, index: GLuint);
    fn DispatchCompute("glDispatchCompute")(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
    fn DispatchComputeIndirect("glDispatchComputeIndirect")(indirect: GLintptr);
    fn DrawArrays("glDrawArrays", "glDrawArraysEXT")(mode: GLenum, first: GLint, count: GLsizei);
    fn DrawArraysIndirect("glDrawArraysIndirect")(mode: GLenum, indirect: *const c_void);
    fn DrawArraysInstanced("glDrawArraysInstanced", "glDrawArraysInstancedARB", "glDrawArraysInstancedEXT")(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
    fn DrawArraysInstancedBaseInstance("glDrawArraysInstancedBaseInstance")(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint);
    fn DrawBuffer("glDrawBuffer")(buf: GLenum);
    fn DrawBuffers("glDrawBuffers", "glDrawBuffersARB", "glDrawBuffersATI")(n: GLsizei, bufs: *const GLenum);
    fn DrawElements("glDrawElements")(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
    fn DrawElementsBaseVertex("glDrawElementsBaseVertex")(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
    fn DrawElementsIndirect("glDrawElementsIndirect")(mode: GLenum, type_: GLenum, indirect: *const c_void);
    fn DrawElementsInstanced("glDrawElementsInstanced", "glDrawElementsInstancedARB", "glDrawElementsInstancedEXT")(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei);
    fn DrawElementsInstancedBaseInstance("glDrawElementsInstancedBaseInstance")(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, baseinstance: GLuint);
    fn DrawElementsInstancedBaseVertex("glDrawElementsInstancedBaseVertex")(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint);
    fn DrawElementsInstancedBaseVertexBaseInstance("glDrawElementsInstancedBaseVertexBaseInstance")(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint);
    fn DrawRangeElements("glDrawRangeElements", "glDrawRangeElementsEXT")(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void);
    fn DrawRangeElementsBaseVertex("glDrawRangeElementsBaseVertex")(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
    fn DrawTransformFeedback("glDrawTransformFeedback", "glDrawTransformFeedbackNV")(mode: GLenum, id: GLuint);
    fn DrawTransformFeedbackInstanced("glDrawTransformFeedbackInstanced")(mode: GLenum, id: GLuint, instancecount: GLsizei);
    fn DrawTransformFeedbackStream("glDrawTransformFeedbackStream")(mode: GLenum, id: GLuint, stream: GLuint);
    fn DrawTransformFeedbackStreamInstanced("glDrawTransformFeedbackStreamInstanced")(mode: GLenum, id: GLuint, stream: GLuint, instancecount: GLsizei);
    fn Enable("glEnable")(cap: GLenum);
    fn EnableVertexArrayAttrib("glEnableVertexArrayAttrib")(vaobj: GLuint, index: GLuint);
    fn EnableVertexAttribArray("glEnableVertexAttribArray", "glEnableVertexAttribArrayARB")(index: GLuint);
    fn Enablei("glEnablei", "glEnableIndexedEXT")(target: GLenum, index: GLuint);
    fn EndConditionalRender("glEndConditionalRender", "glEndConditionalRenderNV", "glEndConditionalRenderNVX")();
    fn EndQuery("glEndQuery", "glEndQueryARB")(target: GLenum);
    fn EndQueryIndexed("glEndQueryIndexed")(target: GLenum, index: GLuint);
    fn EndTransformFeedback("glEndTransformFeedback", "glEndTransformFeedbackEXT", "glEndTransformFeedbackNV")();
    fn FenceSync("glFenceSync")(condition: GLenum, flags: GLbitfield) -> GLsync;
    fn Finish("glFinish")();
    fn Flush("glFlush")();
    fn FlushMappedBufferRange("glFlushMappedBufferRange", "glFlushMappedBufferRangeAPPLE")(target: GLenum, offset: GLintptr, length: GLsizeiptr);
    fn FlushMappedNamedBufferRange("glFlushMappedNamedBufferRange")(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
    fn FramebufferParameteri("glFramebufferParameteri")(target: GLenum, pname: GLenum, param: GLint);
    fn FramebufferRenderbuffer("glFramebufferRenderbuffer", "glFramebufferRenderbufferEXT")(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
    fn FramebufferTexture("glFramebufferTexture", "glFramebufferTextureARB", "glFramebufferTextureEXT")(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
    fn FramebufferTexture1D("glFramebufferTexture1D", "glFramebufferTexture1DEXT")(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    fn FramebufferTexture2D("glFramebufferTexture2D", "glFramebufferTexture2DEXT")(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    fn FramebufferTexture3D("glFramebufferTexture3D", "glFramebufferTexture3DEXT")(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
    fn FramebufferTextureLayer("glFramebufferTextureLayer", "glFramebufferTextureLayerARB", "glFramebufferTextureLayerEXT")(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
    fn FrontFace("glFrontFace")(mode: GLenum);
    fn GenBuffers("glGenBuffers", "glGenBuffersARB")(n: GLsizei, buffers: *mut GLuint);
    fn GenFramebuffers("glGenFramebuffers", "glGenFramebuffersEXT")(n: GLsizei, framebuffers: *mut GLuint);
    fn GenProgramPipelines("glGenProgramPipelines")(n: GLsizei, pipelines: *mut GLuint);
    fn GenQueries("glGenQueries", "glGenQueriesARB")(n: GLsizei, ids: *mut GLuint);
    fn GenRenderbuffers("glGenRenderbuffers", "glGenRenderbuffersEXT")(n: GLsizei, renderbuffers: *mut GLuint);
    fn GenSamplers("glGenSamplers")(count: GLsizei, samplers: *mut GLuint);
    fn GenTextures("glGenTextures")(n: GLsizei, textures: *mut GLuint);
    fn GenTransformFeedbacks("glGenTransformFeedbacks", "glGenTransformFeedbacksNV")(n: GLsizei, ids: *mut GLuint);
    fn GenVertexArrays("glGenVertexArrays", "glGenVertexArraysAPPLE")(n: GLsizei, arrays: *mut GLuint);
    fn GenerateMipmap("glGenerateMipmap", "glGenerateMipmapEXT")(target: GLenum);
    fn GenerateTextureMipmap("glGenerateTextureMipmap")(texture: GLuint);
    fn GetActiveAtomicCounterBufferiv("glGetActiveAtomicCounterBufferiv")(program: GLuint, bufferIndex: GLuint, pname: GLenum, params: *mut GLint);
    fn GetActiveAttrib("glGetActiveAttrib", "glGetActiveAttribARB")(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
    fn GetActiveSubroutineName("glGetActiveSubroutineName")(program: GLuint, shadertype: GLenum, index: GLuint, bufsize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    fn GetActiveSubroutineUniformName("glGetActiveSubroutineUniformName")(program: GLuint, shadertype: GLenum, index: GLuint, bufsize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    fn GetActiveSubroutineUniformiv("glGetActiveSubroutineUniformiv")(program: GLuint, shadertype: GLenum, index: GLuint, pname: GLenum, values: *mut GLint);
    fn GetActiveUniform("glGetActiveUniform", "glGetActiveUniformARB")(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
    fn GetActiveUniformBlockName("glGetActiveUniformBlockName")(program: GLuint, uniformBlockIndex: GLuint, bufSize: GLsizei, length: *mut GLsizei, uniformBlockName: *mut GLchar);
    fn GetActiveUniformBlockiv("glGetActiveUniformBlockiv")(program: GLuint, uniformBlockIndex: GLuint, pname: GLenum, params: *mut GLint);
    fn GetActiveUniformName("glGetActiveUniformName")(program: GLuint, uniformIndex: GLuint, bufSize: GLsizei, length: *mut GLsizei, uniformName: *mut GLchar);
    fn GetActiveUniformsiv("glGetActiveUniformsiv")(program: GLuint, uniformCount: GLsizei, uniformIndices: *const GLuint, pname: GLenum, params: *mut GLint);
    fn GetAttachedShaders("glGetAttachedShaders")(program: GLuint, maxCount: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
    fn GetAttribLocation("glGetAttribLocation", "glGetAttribLocationARB")(program: GLuint, name: *const GLchar) -> GLint;
    fn GetBooleani_v("glGetBooleani_v", "glGetBooleanIndexedvEXT")(target: GLenum, index: GLuint, data: *mut GLboolean);
    fn GetBooleanv("glGetBooleanv")(pname: GLenum, data: *mut GLboolean);
    fn GetBufferParameteri64v("glGetBufferParameteri64v")(target: GLenum, pname: GLenum, params: *mut GLint64);
    fn GetBufferParameteriv("glGetBufferParameteriv", "glGetBufferParameterivARB")(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetBufferPointerv("glGetBufferPointerv", "glGetBufferPointervARB")(target: GLenum, pname: GLenum, params: *mut *mut c_void);
    fn GetBufferSubData("glGetBufferSubData", "glGetBufferSubDataARB")(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
    fn GetCompressedTexImage("glGetCompressedTexImage", "glGetCompressedTexImageARB")(target: GLenum, level: GLint, img: *mut c_void);
    fn GetCompressedTextureImage("glGetCompressedTextureImage")(texture: GLuint, level: GLint, bufSize: GLsizei, pixels: *mut c_void);
    fn GetCompressedTextureSubImage("glGetCompressedTextureSubImage")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, bufSize: GLsizei, pixels: *mut c_void);
    fn GetDebugMessageLog("glGetDebugMessageLog", "glGetDebugMessageLogARB")(count: GLuint, bufSize: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, messageLog: *mut GLchar) -> GLuint;
    fn GetDoublei_v("glGetDoublei_v", "glGetDoubleIndexedvEXT", "glGetDoublei_vEXT")(target: GLenum, index: GLuint, data: *mut GLdouble);
    fn GetDoublev("glGetDoublev")(pname: GLenum, data: *mut GLdouble);
    fn GetError("glGetError")() -> GLenum;
    fn GetFloati_v("glGetFloati_v", "glGetFloatIndexedvEXT", "glGetFloati_vEXT")(target: GLenum, index: GLuint, data: *mut GLfloat);
    fn GetFloatv("glGetFloatv")(pname: GLenum, data: *mut GLfloat);
    fn GetFragDataIndex("glGetFragDataIndex")(program: GLuint, name: *const GLchar) -> GLint;
    fn GetFragDataLocation("glGetFragDataLocation", "glGetFragDataLocationEXT")(program: GLuint, name: *const GLchar) -> GLint;
    fn GetFramebufferAttachmentParameteriv("glGetFramebufferAttachmentParameteriv", "glGetFramebufferAttachmentParameterivEXT")(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
    fn GetFramebufferParameteriv("glGetFramebufferParameteriv")(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetGraphicsResetStatus("glGetGraphicsResetStatus")() -> GLenum;
    fn GetInteger64i_v("glGetInteger64i_v")(target: GLenum, index: GLuint, data: *mut GLint64);
    fn GetInteger64v("glGetInteger64v")(pname: GLenum, data: *mut GLint64);
    fn GetIntegeri_v("glGetIntegeri_v", "glGetIntegerIndexedvEXT")(target: GLenum, index: GLuint, data: *mut GLint);
    fn GetIntegerv("glGetIntegerv")(pname: GLenum, data: *mut GLint);
    fn GetInternalformati64v("glGetInternalformati64v")(target: GLenum, internalformat: GLenum, pname: GLenum, bufSize: GLsizei, params: *mut GLint64);
    fn GetInternalformativ("glGetInternalformativ")(target: GLenum, internalformat: GLenum, pname: GLenum, bufSize: GLsizei, params: *mut GLint);
    fn GetMultisamplefv("glGetMultisamplefv", "glGetMultisamplefvNV")(pname: GLenum, index: GLuint, val: *mut GLfloat);
    fn GetNamedBufferParameteri64v("glGetNamedBufferParameteri64v")(buffer: GLuint, pname: GLenum, params: *mut GLint64);
    fn GetNamedBufferParameteriv("glGetNamedBufferParameteriv")(buffer: GLuint, pname: GLenum, params: *mut GLint);
    fn GetNamedBufferPointerv("glGetNamedBufferPointerv")(buffer: GLuint, pname: GLenum, params: *mut *mut c_void);
    fn GetNamedBufferSubData("glGetNamedBufferSubData")(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
    fn GetNamedFramebufferAttachmentParameteriv("glGetNamedFramebufferAttachmentParameteriv")(framebuffer: GLuint, attachment: GLenum, pname: GLenum, params: *mut GLint);
    fn GetNamedFramebufferParameteriv("glGetNamedFramebufferParameteriv")(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
    fn GetNamedRenderbufferParameteriv("glGetNamedRenderbufferParameteriv")(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
    fn GetObjectLabel("glGetObjectLabel")(identifier: GLenum, name: GLuint, bufSize: GLsizei, length: *mut GLsizei, label: *mut GLchar);
    fn GetObjectPtrLabel("glGetObjectPtrLabel")(ptr: *const c_void, bufSize: GLsizei, length: *mut GLsizei, label: *mut GLchar);
    fn GetPointerv("glGetPointerv", "glGetPointervEXT")(pname: GLenum, params: *mut *mut c_void);
    fn GetProgramBinary("glGetProgramBinary")(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, binaryFormat: *mut GLenum, binary: *mut c_void);
    fn GetProgramInfoLog("glGetProgramInfoLog")(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
    fn GetProgramInterfaceiv("glGetProgramInterfaceiv")(program: GLuint, programInterface: GLenum, pname: GLenum, params: *mut GLint);
    fn GetProgramPipelineInfoLog("glGetProgramPipelineInfoLog")(pipeline: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
    fn GetProgramPipelineiv("glGetProgramPipelineiv")(pipeline: GLuint, pname: GLenum, params: *mut GLint);
    fn GetProgramResourceIndex("glGetProgramResourceIndex")(program: GLuint, programInterface: GLenum, name: *const GLchar) -> GLuint;
    fn GetProgramResourceLocation("glGetProgramResourceLocation")(program: GLuint, programInterface: GLenum, name: *const GLchar) -> GLint;
    fn GetProgramResourceLocationIndex("glGetProgramResourceLocationIndex")(program: GLuint, programInterface: GLenum, name: *const GLchar) -> GLint;
    fn GetProgramResourceName("glGetProgramResourceName")(program: GLuint, programInterface: GLenum, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    fn GetProgramResourceiv("glGetProgramResourceiv")(program: GLuint, programInterface: GLenum, index: GLuint, propCount: GLsizei, props: *const GLenum, bufSize: GLsizei, length: *mut GLsizei, params: *mut GLint);
    fn GetProgramStageiv("glGetProgramStageiv")(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
    fn GetProgramiv("glGetProgramiv")(program: GLuint, pname: GLenum, params: *mut GLint);
    fn GetQueryBufferObjecti64v("glGetQueryBufferObjecti64v")(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    fn GetQueryBufferObjectiv("glGetQueryBufferObjectiv")(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    fn GetQueryBufferObjectui64v("glGetQueryBufferObjectui64v")(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    fn GetQueryBufferObjectuiv("glGetQueryBufferObjectuiv")(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    fn GetQueryIndexediv("glGetQueryIndexediv")(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
    fn GetQueryObjecti64v("glGetQueryObjecti64v", "glGetQueryObjecti64vEXT")(id: GLuint, pname: GLenum, params: *mut GLint64);
    fn GetQueryObjectiv("glGetQueryObjectiv", "glGetQueryObjectivARB")(id: GLuint, pname: GLenum, params: *mut GLint);
    fn GetQueryObjectui64v("glGetQueryObjectui64v", "glGetQueryObjectui64vEXT")(id: GLuint, pname: GLenum, params: *mut GLuint64);
    fn GetQueryObjectuiv("glGetQueryObjectuiv", "glGetQueryObjectuivARB")(id: GLuint, pname: GLenum, params: *mut GLuint);
    fn GetQueryiv("glGetQueryiv", "glGetQueryivARB")(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetRenderbufferParameteriv("glGetRenderbufferParameteriv", "glGetRenderbufferParameterivEXT")(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetSamplerParameterIiv("glGetSamplerParameterIiv")(sampler: GLuint, pname: GLenum, params: *mut GLint);
    fn GetSamplerParameterIuiv("glGetSamplerParameterIuiv")(sampler: GLuint, pname: GLenum, params: *mut GLuint);
    fn GetSamplerParameterfv("glGetSamplerParameterfv")(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
    fn GetSamplerParameteriv("glGetSamplerParameteriv")(sampler: GLuint, pname: GLenum, params: *mut GLint);
    fn GetShaderInfoLog("glGetShaderInfoLog")(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
    fn GetShaderPrecisionFormat("glGetShaderPrecisionFormat")(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
    fn GetShaderSource("glGetShaderSource", "glGetShaderSourceARB")(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, source: *mut GLchar);
    fn GetShaderiv("glGetShaderiv")(shader: GLuint, pname: GLenum, params: *mut GLint);
    fn GetString("glGetString")(name: GLenum) -> *const GLubyte;
    fn GetStringi("glGetStringi")(name: GLenum, index: GLuint) -> *const GLubyte;
    fn GetSubroutineIndex("glGetSubroutineIndex")(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint;
    fn GetSubroutineUniformLocation("glGetSubroutineUniformLocation")(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLint;
    fn GetSynciv("glGetSynciv")(sync: GLsync, pname: GLenum, bufSize: GLsizei, length: *mut GLsizei, values: *mut GLint);
    fn GetTexImage("glGetTexImage")(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
    fn GetTexLevelParameterfv("glGetTexLevelParameterfv")(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
    fn GetTexLevelParameteriv("glGetTexLevelParameteriv")(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    fn GetTexParameterIiv("glGetTexParameterIiv", "glGetTexParameterIivEXT")(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetTexParameterIuiv("glGetTexParameterIuiv", "glGetTexParameterIuivEXT")(target: GLenum, pname: GLenum, params: *mut GLuint);
    fn GetTexParameterfv("glGetTexParameterfv")(target: GLenum, pname: GLenum, params: *mut GLfloat);
    fn GetTexParameteriv("glGetTexParameteriv")(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetTextureImage("glGetTextureImage")(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, bufSize: GLsizei, pixels: *mut c_void);
    fn GetTextureLevelParameterfv("glGetTextureLevelParameterfv")(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLfloat);
    fn GetTextureLevelParameteriv("glGetTextureLevelParameteriv")(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLint);
    fn GetTextureParameterIiv("glGetTextureParameterIiv")(texture: GLuint, pname: GLenum, params: *mut GLint);
    fn GetTextureParameterIuiv("glGetTextureParameterIuiv")(texture: GLuint, pname: GLenum, params: *mut GLuint);
    fn GetTextureParameterfv("glGetTextureParameterfv")(texture: GLuint, pname: GLenum, params: *mut GLfloat);
    fn GetTextureParameteriv("glGetTextureParameteriv")(texture: GLuint, pname: GLenum, params: *mut GLint);
    fn GetTextureSubImage("glGetTextureSubImage")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, bufSize: GLsizei, pixels: *mut c_void);
    fn GetTransformFeedbackVarying("glGetTransformFeedbackVarying", "glGetTransformFeedbackVaryingEXT")(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLsizei, type_: *mut GLenum, name: *mut GLchar);
    fn GetTransformFeedbacki64_v("glGetTransformFeedbacki64_v")(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint64);
    fn GetTransformFeedbacki_v("glGetTransformFeedbacki_v")(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint);
    fn GetTransformFeedbackiv("glGetTransformFeedbackiv")(xfb: GLuint, pname: GLenum, param: *mut GLint);
    fn GetUniformBlockIndex("glGetUniformBlockIndex")(program: GLuint, uniformBlockName: *const GLchar) -> GLuint;
    fn GetUniformIndices("glGetUniformIndices")(program: GLuint, uniformCount: GLsizei, uniformNames: *const *const GLchar, uniformIndices: *mut GLuint);
    fn GetUniformLocation("glGetUniformLocation", "glGetUniformLocationARB")(program: GLuint, name: *const GLchar) -> GLint;
    fn GetUniformSubroutineuiv("glGetUniformSubroutineuiv")(shadertype: GLenum, location: GLint, params: *mut GLuint);
    fn GetUniformdv("glGetUniformdv")(program: GLuint, location: GLint, params: *mut GLdouble);
    fn GetUniformfv("glGetUniformfv", "glGetUniformfvARB")(program: GLuint, location: GLint, params: *mut GLfloat);
    fn GetUniformiv("glGetUniformiv", "glGetUniformivARB")(program: GLuint, location: GLint, params: *mut GLint);
    fn GetUniformuiv("glGetUniformuiv", "glGetUniformuivEXT")(program: GLuint, location: GLint, params: *mut GLuint);
    fn GetVertexArrayIndexed64iv("glGetVertexArrayIndexed64iv")(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint64);
    fn GetVertexArrayIndexediv("glGetVertexArrayIndexediv")(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
    fn GetVertexArrayiv("glGetVertexArrayiv")(vaobj: GLuint, pname: GLenum, param: *mut GLint);
    fn GetVertexAttribIiv("glGetVertexAttribIiv", "glGetVertexAttribIivEXT")(index: GLuint, pname: GLenum, params: *mut GLint);
    fn GetVertexAttribIuiv("glGetVertexAttribIuiv", "glGetVertexAttribIuivEXT")(index: GLuint, pname: GLenum, params: *mut GLuint);
    fn GetVertexAttribLdv("glGetVertexAttribLdv", "glGetVertexAttribLdvEXT")(index: GLuint, pname: GLenum, params: *mut GLdouble);
    fn GetVertexAttribPointerv("glGetVertexAttribPointerv", "glGetVertexAttribPointervARB", "glGetVertexAttribPointervNV")(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
    fn GetVertexAttribdv("glGetVertexAttribdv", "glGetVertexAttribdvARB", "glGetVertexAttribdvNV")(index: GLuint, pname: GLenum, params: *mut GLdouble);
    fn GetVertexAttribfv("glGetVertexAttribfv", "glGetVertexAttribfvARB", "glGetVertexAttribfvNV")(index: GLuint, pname: GLenum, params: *mut GLfloat);
    fn GetVertexAttribiv("glGetVertexAttribiv", "glGetVertexAttribivARB", "glGetVertexAttribivNV")(index: GLuint, pname: GLenum, params: *mut GLint);
    fn GetnCompressedTexImage("glGetnCompressedTexImage")(target: GLenum, lod: GLint, bufSize: GLsizei, pixels: *mut c_void);
    fn GetnTexImage("glGetnTexImage")(target: GLenum, level: GLint, format: GLenum, type_: GLenum, bufSize: GLsizei, pixels: *mut c_void);
    fn GetnUniformdv("glGetnUniformdv")(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLdouble);
    fn GetnUniformfv("glGetnUniformfv")(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLfloat);
    fn GetnUniformiv("glGetnUniformiv")(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLint);
    fn GetnUniformuiv("glGetnUniformuiv")(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLuint);
    fn Hint("glHint")(target: GLenum, mode: GLenum);
    fn InvalidateBufferData("glInvalidateBufferData")(buffer: GLuint);
    fn InvalidateBufferSubData("glInvalidateBufferSubData")(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
    fn InvalidateFramebuffer("glInvalidateFramebuffer")(target: GLenum, numAttachments: GLsizei, attachments: *const GLenum);
    fn InvalidateNamedFramebufferData("glInvalidateNamedFramebufferData")(framebuffer: GLuint, numAttachments: GLsizei, attachments: *const GLenum);
    fn InvalidateNamedFramebufferSubData("glInvalidateNamedFramebufferSubData")(framebuffer: GLuint, numAttachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn InvalidateSubFramebuffer("glInvalidateSubFramebuffer")(target: GLenum, numAttachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn InvalidateTexImage("glInvalidateTexImage")(texture: GLuint, level: GLint);
    fn InvalidateTexSubImage("glInvalidateTexSubImage")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei);
    fn IsBuffer("glIsBuffer", "glIsBufferARB")(buffer: GLuint) -> GLboolean;
    fn IsEnabled("glIsEnabled")(cap: GLenum) -> GLboolean;
    fn IsEnabledi("glIsEnabledi", "glIsEnabledIndexedEXT")(target: GLenum, index: GLuint) -> GLboolean;
    fn IsFramebuffer("glIsFramebuffer", "glIsFramebufferEXT")(framebuffer: GLuint) -> GLboolean;
    fn IsProgram("glIsProgram")(program: GLuint) -> GLboolean;
    fn IsProgramPipeline("glIsProgramPipeline")(pipeline: GLuint) -> GLboolean;
    fn IsQuery("glIsQuery", "glIsQueryARB")(id: GLuint) -> GLboolean;
    fn IsRenderbuffer("glIsRenderbuffer", "glIsRenderbufferEXT")(renderbuffer: GLuint) -> GLboolean;
    fn IsSampler("glIsSampler")(sampler: GLuint) -> GLboolean;
    fn IsShader("glIsShader")(shader: GLuint) -> GLboolean;
    fn IsSync("glIsSync")(sync: GLsync) -> GLboolean;
    fn IsTexture("glIsTexture")(texture: GLuint) -> GLboolean;
    fn IsTransformFeedback("glIsTransformFeedback", "glIsTransformFeedbackNV")(id: GLuint) -> GLboolean;
    fn IsVertexArray("glIsVertexArray", "glIsVertexArrayAPPLE")(array: GLuint) -> GLboolean;
    fn LineWidth("glLineWidth")(width: GLfloat);
    fn LinkProgram("glLinkProgram", "glLinkProgramARB")(program: GLuint);
    fn LogicOp("glLogicOp")(opcode: GLenum);
    fn MapBuffer("glMapBuffer", "glMapBufferARB")(target: GLenum, access: GLenum) -> *mut c_void;
    fn MapBufferRange("glMapBufferRange")(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
    fn MapNamedBuffer("glMapNamedBuffer")(buffer: GLuint, access: GLenum) -> *mut c_void;
    fn MapNamedBufferRange("glMapNamedBufferRange")(buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
    fn MemoryBarrier("glMemoryBarrier", "glMemoryBarrierEXT")(barriers: GLbitfield);
    fn MemoryBarrierByRegion("glMemoryBarrierByRegion")(barriers: GLbitfield);
    fn MinSampleShading("glMinSampleShading", "glMinSampleShadingARB")(value: GLfloat);
    fn MultiDrawArrays("glMultiDrawArrays", "glMultiDrawArraysEXT")(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei);
    fn MultiDrawArraysIndirect("glMultiDrawArraysIndirect", "glMultiDrawArraysIndirectAMD")(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
    fn MultiDrawArraysIndirectCount("glMultiDrawArraysIndirectCount", "glMultiDrawArraysIndirectCountARB")(mode: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei);
    fn MultiDrawElements("glMultiDrawElements", "glMultiDrawElementsEXT")(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei);
    fn MultiDrawElementsBaseVertex("glMultiDrawElementsBaseVertex")(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei, basevertex: *const GLint);
    fn MultiDrawElementsIndirect("glMultiDrawElementsIndirect", "glMultiDrawElementsIndirectAMD")(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
    fn MultiDrawElementsIndirectCount("glMultiDrawElementsIndirectCount", "glMultiDrawElementsIndirectCountARB")(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei);
    fn NamedBufferData("glNamedBufferData")(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    fn NamedBufferStorage("glNamedBufferStorage", "glNamedBufferStorageEXT")(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    fn NamedBufferSubData("glNamedBufferSubData", "glNamedBufferSubDataEXT")(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    fn NamedFramebufferDrawBuffer("glNamedFramebufferDrawBuffer")(framebuffer: GLuint, buf: GLenum);
    fn NamedFramebufferDrawBuffers("glNamedFramebufferDrawBuffers")(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
    fn NamedFramebufferParameteri("glNamedFramebufferParameteri")(framebuffer: GLuint, pname: GLenum, param: GLint);
    fn NamedFramebufferReadBuffer("glNamedFramebufferReadBuffer")(framebuffer: GLuint, src: GLenum);
    fn NamedFramebufferRenderbuffer("glNamedFramebufferRenderbuffer")(framebuffer: GLuint, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
    fn NamedFramebufferTexture("glNamedFramebufferTexture")(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint);
    fn NamedFramebufferTextureLayer("glNamedFramebufferTextureLayer")(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
    fn NamedRenderbufferStorage("glNamedRenderbufferStorage")(renderbuffer: GLuint, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn NamedRenderbufferStorageMultisample("glNamedRenderbufferStorageMultisample")(renderbuffer: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn ObjectLabel("glObjectLabel")(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
    fn ObjectPtrLabel("glObjectPtrLabel")(ptr: *const c_void, length: GLsizei, label: *const GLchar);
    fn PatchParameterfv("glPatchParameterfv")(pname: GLenum, values: *const GLfloat);
    fn PatchParameteri("glPatchParameteri")(pname: GLenum, value: GLint);
    fn PauseTransformFeedback("glPauseTransformFeedback", "glPauseTransformFeedbackNV")();
    fn PixelStoref("glPixelStoref")(pname: GLenum, param: GLfloat);
    fn PixelStorei("glPixelStorei")(pname: GLenum, param: GLint);
    fn PointParameterf("glPointParameterf", "glPointParameterfARB", "glPointParameterfEXT", "glPointParameterfSGIS")(pname: GLenum, param: GLfloat);
    fn PointParameterfv("glPointParameterfv", "glPointParameterfvARB", "glPointParameterfvEXT", "glPointParameterfvSGIS")(pname: GLenum, params: *const GLfloat);
    fn PointParameteri("glPointParameteri", "glPointParameteriNV")(pname: GLenum, param: GLint);
    fn PointParameteriv("glPointParameteriv", "glPointParameterivNV")(pname: GLenum, params: *const GLint);
    fn PointSize("glPointSize")(size: GLfloat);
    fn PolygonMode("glPolygonMode")(face: GLenum, mode: GLenum);
    fn PolygonOffset("glPolygonOffset")(factor: GLfloat, units: GLfloat);
    fn PolygonOffsetClamp("glPolygonOffsetClamp", "glPolygonOffsetClampEXT")(factor: GLfloat, units: GLfloat, clamp: GLfloat);
    fn PopDebugGroup("glPopDebugGroup")();
    fn PrimitiveRestartIndex("glPrimitiveRestartIndex")(index: GLuint);
    fn ProgramBinary("glProgramBinary")(program: GLuint, binaryFormat: GLenum, binary: *const c_void, length: GLsizei);
    fn ProgramParameteri("glProgramParameteri", "glProgramParameteriARB", "glProgramParameteriEXT")(program: GLuint, pname: GLenum, value: GLint);
    fn ProgramUniform1d("glProgramUniform1d")(program: GLuint, location: GLint, v0: GLdouble);
    fn ProgramUniform1dv("glProgramUniform1dv")(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    fn ProgramUniform1f("glProgramUniform1f", "glProgramUniform1fEXT")(program: GLuint, location: GLint, v0: GLfloat);
    fn ProgramUniform1fv("glProgramUniform1fv", "glProgramUniform1fvEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    fn ProgramUniform1i("glProgramUniform1i", "glProgramUniform1iEXT")(program: GLuint, location: GLint, v0: GLint);
    fn ProgramUniform1iv("glProgramUniform1iv", "glProgramUniform1ivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    fn ProgramUniform1ui("glProgramUniform1ui", "glProgramUniform1uiEXT")(program: GLuint, location: GLint, v0: GLuint);
    fn ProgramUniform1uiv("glProgramUniform1uiv", "glProgramUniform1uivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    fn ProgramUniform2d("glProgramUniform2d")(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
    fn ProgramUniform2dv("glProgramUniform2dv")(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    fn ProgramUniform2f("glProgramUniform2f", "glProgramUniform2fEXT")(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
    fn ProgramUniform2fv("glProgramUniform2fv", "glProgramUniform2fvEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    fn ProgramUniform2i("glProgramUniform2i", "glProgramUniform2iEXT")(program: GLuint, location: GLint, v0: GLint, v1: GLint);
    fn ProgramUniform2iv("glProgramUniform2iv", "glProgramUniform2ivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    fn ProgramUniform2ui("glProgramUniform2ui", "glProgramUniform2uiEXT")(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
    fn ProgramUniform2uiv("glProgramUniform2uiv", "glProgramUniform2uivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    fn ProgramUniform3d("glProgramUniform3d")(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble);
    fn ProgramUniform3dv("glProgramUniform3dv")(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    fn ProgramUniform3f("glProgramUniform3f", "glProgramUniform3fEXT")(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    fn ProgramUniform3fv("glProgramUniform3fv", "glProgramUniform3fvEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    fn ProgramUniform3i("glProgramUniform3i", "glProgramUniform3iEXT")(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
    fn ProgramUniform3iv("glProgramUniform3iv", "glProgramUniform3ivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    fn ProgramUniform3ui("glProgramUniform3ui", "glProgramUniform3uiEXT")(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
    fn ProgramUniform3uiv("glProgramUniform3uiv", "glProgramUniform3uivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    fn ProgramUniform4d("glProgramUniform4d")(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble, v3: GLdouble);
    fn ProgramUniform4dv("glProgramUniform4dv")(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    fn ProgramUniform4f("glProgramUniform4f", "glProgramUniform4fEXT")(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    fn ProgramUniform4fv("glProgramUniform4fv", "glProgramUniform4fvEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    fn ProgramUniform4i("glProgramUniform4i", "glProgramUniform4iEXT")(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    fn ProgramUniform4iv("glProgramUniform4iv", "glProgramUniform4ivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    fn ProgramUniform4ui("glProgramUniform4ui", "glProgramUniform4uiEXT")(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
    fn ProgramUniform4uiv("glProgramUniform4uiv", "glProgramUniform4uivEXT")(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    fn ProgramUniformMatrix2dv("glProgramUniformMatrix2dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix2fv("glProgramUniformMatrix2fv", "glProgramUniformMatrix2fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix2x3dv("glProgramUniformMatrix2x3dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix2x3fv("glProgramUniformMatrix2x3fv", "glProgramUniformMatrix2x3fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix2x4dv("glProgramUniformMatrix2x4dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix2x4fv("glProgramUniformMatrix2x4fv", "glProgramUniformMatrix2x4fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix3dv("glProgramUniformMatrix3dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix3fv("glProgramUniformMatrix3fv", "glProgramUniformMatrix3fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix3x2dv("glProgramUniformMatrix3x2dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix3x2fv("glProgramUniformMatrix3x2fv", "glProgramUniformMatrix3x2fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix3x4dv("glProgramUniformMatrix3x4dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix3x4fv("glProgramUniformMatrix3x4fv", "glProgramUniformMatrix3x4fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix4dv("glProgramUniformMatrix4dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix4fv("glProgramUniformMatrix4fv", "glProgramUniformMatrix4fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix4x2dv("glProgramUniformMatrix4x2dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix4x2fv("glProgramUniformMatrix4x2fv", "glProgramUniformMatrix4x2fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProgramUniformMatrix4x3dv("glProgramUniformMatrix4x3dv")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn ProgramUniformMatrix4x3fv("glProgramUniformMatrix4x3fv", "glProgramUniformMatrix4x3fvEXT")(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn ProvokingVertex("glProvokingVertex", "glProvokingVertexEXT")(mode: GLenum);
    fn PushDebugGroup("glPushDebugGroup")(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
    fn QueryCounter("glQueryCounter")(id: GLuint, target: GLenum);
    fn ReadBuffer("glReadBuffer")(src: GLenum);
    fn ReadPixels("glReadPixels")(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
    fn ReadnPixels("glReadnPixels", "glReadnPixelsARB")(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, bufSize: GLsizei, data: *mut c_void);
    fn ReleaseShaderCompiler("glReleaseShaderCompiler")();
    fn RenderbufferStorage("glRenderbufferStorage", "glRenderbufferStorageEXT")(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn RenderbufferStorageMultisample("glRenderbufferStorageMultisample", "glRenderbufferStorageMultisampleEXT")(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn ResumeTransformFeedback("glResumeTransformFeedback", "glResumeTransformFeedbackNV")();
    fn SampleCoverage("glSampleCoverage", "glSampleCoverageARB")(value: GLfloat, invert: GLboolean);
    fn SampleMaski("glSampleMaski")(maskNumber: GLuint, mask: GLbitfield);
    fn SamplerParameterIiv("glSamplerParameterIiv")(sampler: GLuint, pname: GLenum, param: *const GLint);
    fn SamplerParameterIuiv("glSamplerParameterIuiv")(sampler: GLuint, pname: GLenum, param: *const GLuint);
    fn SamplerParameterf("glSamplerParameterf")(sampler: GLuint, pname: GLenum, param: GLfloat);
    fn SamplerParameterfv("glSamplerParameterfv")(sampler: GLuint, pname: GLenum, param: *const GLfloat);
    fn SamplerParameteri("glSamplerParameteri")(sampler: GLuint, pname: GLenum, param: GLint);
    fn SamplerParameteriv("glSamplerParameteriv")(sampler: GLuint, pname: GLenum, param: *const GLint);
    fn Scissor("glScissor")(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn ScissorArrayv("glScissorArrayv")(first: GLuint, count: GLsizei, v: *const GLint);
    fn ScissorIndexed("glScissorIndexed")(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei);
    fn ScissorIndexedv("glScissorIndexedv")(index: GLuint, v: *const GLint);
    fn ShaderBinary("glShaderBinary")(count: GLsizei, shaders: *const GLuint, binaryformat: GLenum, binary: *const c_void, length: GLsizei);
    fn ShaderSource("glShaderSource", "glShaderSourceARB")(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
    fn ShaderStorageBlockBinding("glShaderStorageBlockBinding")(program: GLuint, storageBlockIndex: GLuint, storageBlockBinding: GLuint);
    fn SpecializeShader("glSpecializeShader", "glSpecializeShaderARB")(shader: GLuint, pEntryPoint: *const GLchar, numSpecializationConstants: GLuint, pConstantIndex: *const GLuint, pConstantValue: *const GLuint);
    fn StencilFunc("glStencilFunc")(func: GLenum, ref_: GLint, mask: GLuint);
    fn StencilFuncSeparate("glStencilFuncSeparate")(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
    fn StencilMask("glStencilMask")(mask: GLuint);
    fn StencilMaskSeparate("glStencilMaskSeparate")(face: GLenum, mask: GLuint);
    fn StencilOp("glStencilOp")(fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn StencilOpSeparate("glStencilOpSeparate", "glStencilOpSeparateATI")(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    fn TexBuffer("glTexBuffer", "glTexBufferARB", "glTexBufferEXT")(target: GLenum, internalformat: GLenum, buffer: GLuint);
    fn TexBufferRange("glTexBufferRange")(target: GLenum, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    fn TexImage1D("glTexImage1D")(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TexImage2D("glTexImage2D")(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TexImage2DMultisample("glTexImage2DMultisample")(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
    fn TexImage3D("glTexImage3D", "glTexImage3DEXT")(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TexImage3DMultisample("glTexImage3DMultisample")(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
    fn TexParameterIiv("glTexParameterIiv", "glTexParameterIivEXT")(target: GLenum, pname: GLenum, params: *const GLint);
    fn TexParameterIuiv("glTexParameterIuiv", "glTexParameterIuivEXT")(target: GLenum, pname: GLenum, params: *const GLuint);
    fn TexParameterf("glTexParameterf")(target: GLenum, pname: GLenum, param: GLfloat);
    fn TexParameterfv("glTexParameterfv")(target: GLenum, pname: GLenum, params: *const GLfloat);
    fn TexParameteri("glTexParameteri")(target: GLenum, pname: GLenum, param: GLint);
    fn TexParameteriv("glTexParameteriv")(target: GLenum, pname: GLenum, params: *const GLint);
    fn TexStorage1D("glTexStorage1D")(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
    fn TexStorage2D("glTexStorage2D")(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn TexStorage2DMultisample("glTexStorage2DMultisample")(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
    fn TexStorage3D("glTexStorage3D")(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
    fn TexStorage3DMultisample("glTexStorage3DMultisample")(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
    fn TexSubImage1D("glTexSubImage1D", "glTexSubImage1DEXT")(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TexSubImage2D("glTexSubImage2D", "glTexSubImage2DEXT")(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TexSubImage3D("glTexSubImage3D", "glTexSubImage3DEXT")(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TextureBarrier("glTextureBarrier")();
    fn TextureBuffer("glTextureBuffer")(texture: GLuint, internalformat: GLenum, buffer: GLuint);
    fn TextureBufferRange("glTextureBufferRange")(texture: GLuint, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    fn TextureParameterIiv("glTextureParameterIiv")(texture: GLuint, pname: GLenum, params: *const GLint);
    fn TextureParameterIuiv("glTextureParameterIuiv")(texture: GLuint, pname: GLenum, params: *const GLuint);
    fn TextureParameterf("glTextureParameterf")(texture: GLuint, pname: GLenum, param: GLfloat);
    fn TextureParameterfv("glTextureParameterfv")(texture: GLuint, pname: GLenum, param: *const GLfloat);
    fn TextureParameteri("glTextureParameteri")(texture: GLuint, pname: GLenum, param: GLint);
    fn TextureParameteriv("glTextureParameteriv")(texture: GLuint, pname: GLenum, param: *const GLint);
    fn TextureStorage1D("glTextureStorage1D")(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei);
    fn TextureStorage2D("glTextureStorage2D")(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn TextureStorage2DMultisample("glTextureStorage2DMultisample")(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
    fn TextureStorage3D("glTextureStorage3D")(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
    fn TextureStorage3DMultisample("glTextureStorage3DMultisample")(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
    fn TextureSubImage1D("glTextureSubImage1D")(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TextureSubImage2D("glTextureSubImage2D")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TextureSubImage3D("glTextureSubImage3D")(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn TextureView("glTextureView")(texture: GLuint, target: GLenum, origtexture: GLuint, internalformat: GLenum, minlevel: GLuint, numlevels: GLuint, minlayer: GLuint, numlayers: GLuint);
    fn TransformFeedbackBufferBase("glTransformFeedbackBufferBase")(xfb: GLuint, index: GLuint, buffer: GLuint);
    fn TransformFeedbackBufferRange("glTransformFeedbackBufferRange")(xfb: GLuint, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    fn TransformFeedbackVaryings("glTransformFeedbackVaryings", "glTransformFeedbackVaryingsEXT")(program: GLuint, count: GLsizei, varyings: *const *const GLchar, bufferMode: GLenum);
    fn Uniform1d("glUniform1d")(location: GLint, x: GLdouble);
    fn Uniform1dv("glUniform1dv")(location: GLint, count: GLsizei, value: *const GLdouble);
    fn Uniform1f("glUniform1f", "glUniform1fARB")(location: GLint, v0: GLfloat);
    fn Uniform1fv("glUniform1fv", "glUniform1fvARB")(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform1i("glUniform1i", "glUniform1iARB")(location: GLint, v0: GLint);
    fn Uniform1iv("glUniform1iv", "glUniform1ivARB")(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform1ui("glUniform1ui", "glUniform1uiEXT")(location: GLint, v0: GLuint);
    fn Uniform1uiv("glUniform1uiv", "glUniform1uivEXT")(location: GLint, count: GLsizei, value: *const GLuint);
    fn Uniform2d("glUniform2d")(location: GLint, x: GLdouble, y: GLdouble);
    fn Uniform2dv("glUniform2dv")(location: GLint, count: GLsizei, value: *const GLdouble);
    fn Uniform2f("glUniform2f", "glUniform2fARB")(location: GLint, v0: GLfloat, v1: GLfloat);
    fn Uniform2fv("glUniform2fv", "glUniform2fvARB")(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform2i("glUniform2i", "glUniform2iARB")(location: GLint, v0: GLint, v1: GLint);
    fn Uniform2iv("glUniform2iv", "glUniform2ivARB")(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform2ui("glUniform2ui", "glUniform2uiEXT")(location: GLint, v0: GLuint, v1: GLuint);
    fn Uniform2uiv("glUniform2uiv", "glUniform2uivEXT")(location: GLint, count: GLsizei, value: *const GLuint);
    fn Uniform3d("glUniform3d")(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
    fn Uniform3dv("glUniform3dv")(location: GLint, count: GLsizei, value: *const GLdouble);
    fn Uniform3f("glUniform3f", "glUniform3fARB")(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    fn Uniform3fv("glUniform3fv", "glUniform3fvARB")(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform3i("glUniform3i", "glUniform3iARB")(location: GLint, v0: GLint, v1: GLint, v2: GLint);
    fn Uniform3iv("glUniform3iv", "glUniform3ivARB")(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform3ui("glUniform3ui", "glUniform3uiEXT")(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
    fn Uniform3uiv("glUniform3uiv", "glUniform3uivEXT")(location: GLint, count: GLsizei, value: *const GLuint);
    fn Uniform4d("glUniform4d")(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    fn Uniform4dv("glUniform4dv")(location: GLint, count: GLsizei, value: *const GLdouble);
    fn Uniform4f("glUniform4f", "glUniform4fARB")(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    fn Uniform4fv("glUniform4fv", "glUniform4fvARB")(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform4i("glUniform4i", "glUniform4iARB")(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    fn Uniform4iv("glUniform4iv", "glUniform4ivARB")(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform4ui("glUniform4ui", "glUniform4uiEXT")(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
    fn Uniform4uiv("glUniform4uiv", "glUniform4uivEXT")(location: GLint, count: GLsizei, value: *const GLuint);
    fn UniformBlockBinding("glUniformBlockBinding")(program: GLuint, uniformBlockIndex: GLuint, uniformBlockBinding: GLuint);
    fn UniformMatrix2dv("glUniformMatrix2dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix2fv("glUniformMatrix2fv", "glUniformMatrix2fvARB")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix2x3dv("glUniformMatrix2x3dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix2x3fv("glUniformMatrix2x3fv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix2x4dv("glUniformMatrix2x4dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix2x4fv("glUniformMatrix2x4fv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix3dv("glUniformMatrix3dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix3fv("glUniformMatrix3fv", "glUniformMatrix3fvARB")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix3x2dv("glUniformMatrix3x2dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix3x2fv("glUniformMatrix3x2fv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix3x4dv("glUniformMatrix3x4dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix3x4fv("glUniformMatrix3x4fv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix4dv("glUniformMatrix4dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix4fv("glUniformMatrix4fv", "glUniformMatrix4fvARB")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix4x2dv("glUniformMatrix4x2dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix4x2fv("glUniformMatrix4x2fv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix4x3dv("glUniformMatrix4x3dv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
    fn UniformMatrix4x3fv("glUniformMatrix4x3fv")(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformSubroutinesuiv("glUniformSubroutinesuiv")(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
    fn UnmapBuffer("glUnmapBuffer", "glUnmapBufferARB")(target: GLenum) -> GLboolean;
    fn UnmapNamedBuffer("glUnmapNamedBuffer")(buffer: GLuint) -> GLboolean;
    fn UseProgram("glUseProgram", "glUseProgramObjectARB")(program: GLuint);
    fn UseProgramStages("glUseProgramStages")(pipeline: GLuint, stages: GLbitfield, program: GLuint);
    fn ValidateProgram("glValidateProgram", "glValidateProgramARB")(program: GLuint);
    fn ValidateProgramPipeline("glValidateProgramPipeline")(pipeline: GLuint);
    fn VertexArrayAttribBinding("glVertexArrayAttribBinding")(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
    fn VertexArrayAttribFormat("glVertexArrayAttribFormat")(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
    fn VertexArrayAttribIFormat("glVertexArrayAttribIFormat")(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    fn VertexArrayAttribLFormat("glVertexArrayAttribLFormat")(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    fn VertexArrayBindingDivisor("glVertexArrayBindingDivisor")(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
    fn VertexArrayElementBuffer("glVertexArrayElementBuffer")(vaobj: GLuint, buffer: GLuint);
    fn VertexArrayVertexBuffer("glVertexArrayVertexBuffer")(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
    fn VertexArrayVertexBuffers("glVertexArrayVertexBuffers")(vaobj: GLuint, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei);
    fn VertexAttrib1d("glVertexAttrib1d", "glVertexAttrib1dARB", "glVertexAttrib1dNV")(index: GLuint, x: GLdouble);
    fn VertexAttrib1dv("glVertexAttrib1dv", "glVertexAttrib1dvARB", "glVertexAttrib1dvNV")(index: GLuint, v: *const GLdouble);
    fn VertexAttrib1f("glVertexAttrib1f", "glVertexAttrib1fARB", "glVertexAttrib1fNV")(index: GLuint, x: GLfloat);
    fn VertexAttrib1fv("glVertexAttrib1fv", "glVertexAttrib1fvARB", "glVertexAttrib1fvNV")(index: GLuint, v: *const GLfloat);
    fn VertexAttrib1s("glVertexAttrib1s", "glVertexAttrib1sARB", "glVertexAttrib1sNV")(index: GLuint, x: GLshort);
    fn VertexAttrib1sv("glVertexAttrib1sv", "glVertexAttrib1svARB", "glVertexAttrib1svNV")(index: GLuint, v: *const GLshort);
    fn VertexAttrib2d("glVertexAttrib2d", "glVertexAttrib2dARB", "glVertexAttrib2dNV")(index: GLuint, x: GLdouble, y: GLdouble);
    fn VertexAttrib2dv("glVertexAttrib2dv", "glVertexAttrib2dvARB", "glVertexAttrib2dvNV")(index: GLuint, v: *const GLdouble);
    fn VertexAttrib2f("glVertexAttrib2f", "glVertexAttrib2fARB", "glVertexAttrib2fNV")(index: GLuint, x: GLfloat, y: GLfloat);
    fn VertexAttrib2fv("glVertexAttrib2fv", "glVertexAttrib2fvARB", "glVertexAttrib2fvNV")(index: GLuint, v: *const GLfloat);
    fn VertexAttrib2s("glVertexAttrib2s", "glVertexAttrib2sARB", "glVertexAttrib2sNV")(index: GLuint, x: GLshort, y: GLshort);
    fn VertexAttrib2sv("glVertexAttrib2sv", "glVertexAttrib2svARB", "glVertexAttrib2svNV")(index: GLuint, v: *const GLshort);
    fn VertexAttrib3d("glVertexAttrib3d", "glVertexAttrib3dARB", "glVertexAttrib3dNV")(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
    fn VertexAttrib3dv("glVertexAttrib3dv", "glVertexAttrib3dvARB", "glVertexAttrib3dvNV")(index: GLuint, v: *const GLdouble);
    fn VertexAttrib3f("glVertexAttrib3f", "glVertexAttrib3fARB", "glVertexAttrib3fNV")(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    fn VertexAttrib3fv("glVertexAttrib3fv", "glVertexAttrib3fvARB", "glVertexAttrib3fvNV")(index: GLuint, v: *const GLfloat);
    fn VertexAttrib3s("glVertexAttrib3s", "glVertexAttrib3sARB", "glVertexAttrib3sNV")(index: GLuint, x: GLshort, y: GLshort, z: GLshort);
    fn VertexAttrib3sv("glVertexAttrib3sv", "glVertexAttrib3svARB", "glVertexAttrib3svNV")(index: GLuint, v: *const GLshort);
    fn VertexAttrib4Nbv("glVertexAttrib4Nbv", "glVertexAttrib4NbvARB")(index: GLuint, v: *const GLbyte);
    fn VertexAttrib4Niv("glVertexAttrib4Niv", "glVertexAttrib4NivARB")(index: GLuint, v: *const GLint);
    fn VertexAttrib4Nsv("glVertexAttrib4Nsv", "glVertexAttrib4NsvARB")(index: GLuint, v: *const GLshort);
    fn VertexAttrib4Nub("glVertexAttrib4Nub", "glVertexAttrib4NubARB", "glVertexAttrib4ubNV")(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
    fn VertexAttrib4Nubv("glVertexAttrib4Nubv", "glVertexAttrib4NubvARB", "glVertexAttrib4ubvNV")(index: GLuint, v: *const GLubyte);
    fn VertexAttrib4Nuiv("glVertexAttrib4Nuiv", "glVertexAttrib4NuivARB")(index: GLuint, v: *const GLuint);
    fn VertexAttrib4Nusv("glVertexAttrib4Nusv", "glVertexAttrib4NusvARB")(index: GLuint, v: *const GLushort);
    fn VertexAttrib4bv("glVertexAttrib4bv", "glVertexAttrib4bvARB")(index: GLuint, v: *const GLbyte);
    fn VertexAttrib4d("glVertexAttrib4d", "glVertexAttrib4dARB", "glVertexAttrib4dNV")(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    fn VertexAttrib4dv("glVertexAttrib4dv", "glVertexAttrib4dvARB", "glVertexAttrib4dvNV")(index: GLuint, v: *const GLdouble);
    fn VertexAttrib4f("glVertexAttrib4f", "glVertexAttrib4fARB", "glVertexAttrib4fNV")(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn VertexAttrib4fv("glVertexAttrib4fv", "glVertexAttrib4fvARB", "glVertexAttrib4fvNV")(index: GLuint, v: *const GLfloat);
    fn VertexAttrib4iv("glVertexAttrib4iv", "glVertexAttrib4ivARB")(index: GLuint, v: *const GLint);
    fn VertexAttrib4s("glVertexAttrib4s", "glVertexAttrib4sARB", "glVertexAttrib4sNV")(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort);
    fn VertexAttrib4sv("glVertexAttrib4sv", "glVertexAttrib4svARB", "glVertexAttrib4svNV")(index: GLuint, v: *const GLshort);
    fn VertexAttrib4ubv("glVertexAttrib4ubv", "glVertexAttrib4ubvARB")(index: GLuint, v: *const GLubyte);
    fn VertexAttrib4uiv("glVertexAttrib4uiv", "glVertexAttrib4uivARB")(index: GLuint, v: *const GLuint);
    fn VertexAttrib4usv("glVertexAttrib4usv", "glVertexAttrib4usvARB")(index: GLuint, v: *const GLushort);
    fn VertexAttribBinding("glVertexAttribBinding")(attribindex: GLuint, bindingindex: GLuint);
    fn VertexAttribDivisor("glVertexAttribDivisor", "glVertexAttribDivisorARB")(index: GLuint, divisor: GLuint);
    fn VertexAttribFormat("glVertexAttribFormat")(attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
    fn VertexAttribI1i("glVertexAttribI1i", "glVertexAttribI1iEXT")(index: GLuint, x: GLint);
    fn VertexAttribI1iv("glVertexAttribI1iv", "glVertexAttribI1ivEXT")(index: GLuint, v: *const GLint);
    fn VertexAttribI1ui("glVertexAttribI1ui", "glVertexAttribI1uiEXT")(index: GLuint, x: GLuint);
    fn VertexAttribI1uiv("glVertexAttribI1uiv", "glVertexAttribI1uivEXT")(index: GLuint, v: *const GLuint);
    fn VertexAttribI2i("glVertexAttribI2i", "glVertexAttribI2iEXT")(index: GLuint, x: GLint, y: GLint);
    fn VertexAttribI2iv("glVertexAttribI2iv", "glVertexAttribI2ivEXT")(index: GLuint, v: *const GLint);
    fn VertexAttribI2ui("glVertexAttribI2ui", "glVertexAttribI2uiEXT")(index: GLuint, x: GLuint, y: GLuint);
    fn VertexAttribI2uiv("glVertexAttribI2uiv", "glVertexAttribI2uivEXT")(index: GLuint, v: *const GLuint);
    fn VertexAttribI3i("glVertexAttribI3i", "glVertexAttribI3iEXT")(index: GLuint, x: GLint, y: GLint, z: GLint);
    fn VertexAttribI3iv("glVertexAttribI3iv", "glVertexAttribI3ivEXT")(index: GLuint, v: *const GLint);
    fn VertexAttribI3ui("glVertexAttribI3ui", "glVertexAttribI3uiEXT")(index: GLuint, x: GLuint, y: GLuint, z: GLuint);
    fn VertexAttribI3uiv("glVertexAttribI3uiv", "glVertexAttribI3uivEXT")(index: GLuint, v: *const GLuint);
    fn VertexAttribI4bv("glVertexAttribI4bv", "glVertexAttribI4bvEXT")(index: GLuint, v: *const GLbyte);
    fn VertexAttribI4i("glVertexAttribI4i", "glVertexAttribI4iEXT")(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
    fn VertexAttribI4iv("glVertexAttribI4iv", "glVertexAttribI4ivEXT")(index: GLuint, v: *const GLint);
    fn VertexAttribI4sv("glVertexAttribI4sv", "glVertexAttribI4svEXT")(index: GLuint, v: *const GLshort);
    fn VertexAttribI4ubv("glVertexAttribI4ubv", "glVertexAttribI4ubvEXT")(index: GLuint, v: *const GLubyte);
    fn VertexAttribI4ui("glVertexAttribI4ui", "glVertexAttribI4uiEXT")(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
    fn VertexAttribI4uiv("glVertexAttribI4uiv", "glVertexAttribI4uivEXT")(index: GLuint, v: *const GLuint);
    fn VertexAttribI4usv("glVertexAttribI4usv", "glVertexAttribI4usvEXT")(index: GLuint, v: *const GLushort);
    fn VertexAttribIFormat("glVertexAttribIFormat")(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    fn VertexAttribIPointer("glVertexAttribIPointer", "glVertexAttribIPointerEXT")(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn VertexAttribL1d("glVertexAttribL1d", "glVertexAttribL1dEXT")(index: GLuint, x: GLdouble);
    fn VertexAttribL1dv("glVertexAttribL1dv", "glVertexAttribL1dvEXT")(index: GLuint, v: *const GLdouble);
    fn VertexAttribL2d("glVertexAttribL2d", "glVertexAttribL2dEXT")(index: GLuint, x: GLdouble, y: GLdouble);
    fn VertexAttribL2dv("glVertexAttribL2dv", "glVertexAttribL2dvEXT")(index: GLuint, v: *const GLdouble);
    fn VertexAttribL3d("glVertexAttribL3d", "glVertexAttribL3dEXT")(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
    fn VertexAttribL3dv("glVertexAttribL3dv", "glVertexAttribL3dvEXT")(index: GLuint, v: *const GLdouble);
    fn VertexAttribL4d("glVertexAttribL4d", "glVertexAttribL4dEXT")(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    fn VertexAttribL4dv("glVertexAttribL4dv", "glVertexAttribL4dvEXT")(index: GLuint, v: *const GLdouble);
    fn VertexAttribLFormat("glVertexAttribLFormat")(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    fn VertexAttribLPointer("glVertexAttribLPointer", "glVertexAttribLPointerEXT")(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn VertexAttribP1ui("glVertexAttribP1ui")(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    fn VertexAttribP1uiv("glVertexAttribP1uiv")(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    fn VertexAttribP2ui("glVertexAttribP2ui")(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    fn VertexAttribP2uiv("glVertexAttribP2uiv")(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    fn VertexAttribP3ui("glVertexAttribP3ui")(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    fn VertexAttribP3uiv("glVertexAttribP3uiv")(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    fn VertexAttribP4ui("glVertexAttribP4ui")(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    fn VertexAttribP4uiv("glVertexAttribP4uiv")(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    fn VertexAttribPointer("glVertexAttribPointer", "glVertexAttribPointerARB")(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
    fn VertexBindingDivisor("glVertexBindingDivisor")(bindingindex: GLuint, divisor: GLuint);
    fn Viewport("glViewport")(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn ViewportArrayv("glViewportArrayv")(first: GLuint, count: GLsizei, v: *const GLfloat);
    fn ViewportIndexedf("glViewportIndexedf")(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
    fn ViewportIndexedfv("glViewportIndexedfv")(index: GLuint, v: *const GLfloat);
    fn WaitSync("glWaitSync")(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
}
