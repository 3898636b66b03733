/// Fixed settings of the sample.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleConfig {
    pub title: String,
    /// Client area in pixels.
    pub window_size: (u32, u32),
    pub clear_colour: [f32; 4],
    pub triangle_colour: [f32; 3],
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL".into(),
            window_size: (1024, 1024),
            clear_colour: [0.6, 0.7, 1.0, 1.0],
            triangle_colour: [1.0, 1.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_sample() {
        let config = SampleConfig::default();
        assert_eq!(config.title, "OpenGL");
        assert_eq!(config.window_size, (1024, 1024));
        assert_eq!(config.clear_colour, [0.6, 0.7, 1.0, 1.0]);
        assert_eq!(config.triangle_colour, [1.0, 1.0, 0.0]);
    }
}
