//! GL error-queue draining.
//!
//! OpenGL reports failures through a sticky error queue rather than return
//! values. [`clear_errors`] empties the queue so a later check cannot blame
//! the wrong call; [`check_errors`] empties it again and logs every flag that
//! was raised in between.

use glow::HasContext;

/// Human-readable name for a `glGetError` code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown GL error",
    }
}

/// Drains any stale error flags without reporting them.
pub fn clear_errors(gl: &glow::Context) {
    unsafe { while gl.get_error() != glow::NO_ERROR {} }
}

/// Drains the error queue, logging each flag. Returns `true` if the queue
/// was clean.
pub fn check_errors(gl: &glow::Context, context: &str) -> bool {
    let mut clean = true;
    unsafe {
        loop {
            let code = gl.get_error();
            if code == glow::NO_ERROR {
                break;
            }
            log::error!("{}: {} (0x{:04x})", context, error_name(code), code);
            clean = false;
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names() {
        assert_eq!(error_name(glow::INVALID_ENUM), "GL_INVALID_ENUM");
        assert_eq!(error_name(glow::OUT_OF_MEMORY), "GL_OUT_OF_MEMORY");
        assert_eq!(error_name(0xDEAD), "unknown GL error");
    }
}
