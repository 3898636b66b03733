use windows::Win32::Graphics::OpenGL::*;

use crate::sample_config::SampleConfig;
use crate::triangle::TRIANGLE_VERTICES;

/// Clears the framebuffer and draws the triangle through the fixed-function path.
pub fn draw_frame(config: &SampleConfig) {
    let [r, g, b, a] = config.clear_colour;
    let [tr, tg, tb] = config.triangle_colour;
    unsafe {
        glClearColor(r, g, b, a);
        glClear(GL_COLOR_BUFFER_BIT | GL_DEPTH_BUFFER_BIT);

        glBegin(GL_TRIANGLES);
        glColor3f(tr, tg, tb);
        for vertex in TRIANGLE_VERTICES {
            glVertex3f(vertex.x, vertex.y, vertex.z);
        }
        glEnd();
    }
}
