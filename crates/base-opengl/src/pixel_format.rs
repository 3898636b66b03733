/// Framebuffer the window's device context is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormatRequest {
    pub colour_bits: u8,
    pub alpha_bits: u8,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    pub double_buffered: bool,
}

impl Default for PixelFormatRequest {
    fn default() -> Self {
        Self {
            colour_bits: 32,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 8,
            double_buffered: true,
        }
    }
}

#[cfg(windows)]
impl PixelFormatRequest {
    pub fn descriptor(&self) -> windows::Win32::Graphics::OpenGL::PIXELFORMATDESCRIPTOR {
        use windows::Win32::Graphics::OpenGL::*;

        let mut flags = PFD_DRAW_TO_WINDOW | PFD_SUPPORT_OPENGL;
        if self.double_buffered {
            flags |= PFD_DOUBLEBUFFER;
        }

        // Zeroed layer type is the main plane.
        PIXELFORMATDESCRIPTOR {
            nSize: std::mem::size_of::<PIXELFORMATDESCRIPTOR>() as u16,
            nVersion: 1,
            dwFlags: flags,
            iPixelType: PFD_TYPE_RGBA,
            cColorBits: self.colour_bits,
            cAlphaBits: self.alpha_bits,
            cDepthBits: self.depth_bits,
            cStencilBits: self.stencil_bits,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request() {
        let request = PixelFormatRequest::default();
        assert_eq!(request.colour_bits, 32);
        assert_eq!(request.alpha_bits, 8);
        assert_eq!(request.depth_bits, 24);
        assert_eq!(request.stencil_bits, 8);
        assert!(request.double_buffered);
    }

    #[cfg(windows)]
    #[test]
    fn descriptor_carries_the_request() {
        use windows::Win32::Graphics::OpenGL::*;

        let pfd = PixelFormatRequest::default().descriptor();
        assert_eq!(pfd.nSize as usize, std::mem::size_of::<PIXELFORMATDESCRIPTOR>());
        assert_eq!(pfd.cColorBits, 32);
        assert_eq!(pfd.cDepthBits, 24);
        assert_eq!(pfd.iPixelType, PFD_TYPE_RGBA);
        assert!(pfd.dwFlags.contains(PFD_DOUBLEBUFFER));
    }
}
