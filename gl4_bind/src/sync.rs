use std::time::Duration;

use crate::{
    transmutable_u32,
    types::{GLint, GLsizei, GLsync, GLuint64},
    Gl,
};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    AlreadySignaled = gl::ALREADY_SIGNALED,
    ConditionSatisfied = gl::CONDITION_SATISFIED,
    TimeoutExpired = gl::TIMEOUT_EXPIRED,
    WaitFailed = gl::WAIT_FAILED,
}
transmutable_u32!(WaitStatus {
    AlreadySignaled,
    ConditionSatisfied,
    TimeoutExpired,
    WaitFailed,
});

impl WaitStatus {
    pub fn is_signaled(self) -> bool {
        matches!(self, Self::AlreadySignaled | Self::ConditionSatisfied)
    }
}

fn timeout_nanos(timeout: Duration) -> GLuint64 {
    GLuint64::try_from(timeout.as_nanos()).unwrap_or(gl::TIMEOUT_IGNORED)
}

impl Gl {
    /// Inserts a fence after all commands issued so far. `None` if GL could
    /// not create one.
    pub fn fence_sync(&self) -> Option<GLsync> {
        let sync = unsafe { self.FenceSync(gl::SYNC_GPU_COMMANDS_COMPLETE, 0) };
        (!sync.is_null()).then_some(sync)
    }

    /// Blocks the client for up to `timeout`. With `flush` the command
    /// stream is flushed first, so the fence can actually be reached.
    pub fn client_wait_sync(&self, sync: GLsync, flush: bool, timeout: Duration) -> WaitStatus {
        let flags = if flush { gl::SYNC_FLUSH_COMMANDS_BIT } else { 0 };
        let status = unsafe { self.ClientWaitSync(sync, flags, timeout_nanos(timeout)) };
        WaitStatus::from_u32(status).unwrap_or_else(|| {
            log::warn!("glClientWaitSync returned unknown status {status:#06x}");
            WaitStatus::WaitFailed
        })
    }

    /// Makes the server wait for `sync` before running later commands.
    pub fn wait_sync(&self, sync: GLsync) {
        unsafe { self.WaitSync(sync, 0, gl::TIMEOUT_IGNORED) }
    }

    pub fn is_signaled(&self, sync: GLsync) -> bool {
        let mut value: GLint = 0;
        let mut length: GLsizei = 0;
        unsafe { self.GetSynciv(sync, gl::SYNC_STATUS, 1, &mut length, &mut value) };
        value == gl::SIGNALED as GLint
    }

    pub fn delete_sync(&self, sync: GLsync) {
        unsafe { self.DeleteSync(sync) }
    }
}
