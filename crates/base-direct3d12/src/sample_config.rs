/// Switches taken from the process arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleCommandLine {
    pub use_warp_device: bool,
}

/// Builds a SampleCommandLine from the given arguments.
///
/// `-warp` or `/warp` (any case) selects the software rasteriser.
pub fn build_command_line<I, S>(args: I) -> SampleCommandLine
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let use_warp_device = args.into_iter().any(|arg| {
        let arg = arg.as_ref();
        arg.eq_ignore_ascii_case("-warp") || arg.eq_ignore_ascii_case("/warp")
    });

    SampleCommandLine { use_warp_device }
}

/// Fixed settings of the sample.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleConfig {
    pub title: String,
    /// Client area in pixels; also the swap chain size.
    pub window_size: (u32, u32),
    pub clear_color: [f32; 4],
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            title: "DX12".into(),
            window_size: (1024, 1024),
            clear_color: [0.0, 0.2, 0.4, 1.0],
        }
    }
}

impl SampleConfig {
    pub fn window_title(&self, command_line: &SampleCommandLine) -> String {
        if command_line.use_warp_device {
            format!("{} (WARP)", self.title)
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_hardware() {
        let command_line = build_command_line(Vec::<String>::new());
        assert!(!command_line.use_warp_device);
    }

    #[test]
    fn warp_switch_in_either_form_and_any_case() {
        for arg in ["-warp", "/warp", "-WARP", "/Warp"] {
            let command_line = build_command_line(["base_direct3d12.exe", arg]);
            assert!(command_line.use_warp_device, "{arg} should select WARP");
        }
    }

    #[test]
    fn unrelated_arguments_are_ignored() {
        let command_line = build_command_line(["base_direct3d12.exe", "--warp", "warp"]);
        assert!(!command_line.use_warp_device);
    }

    #[test]
    fn defaults_match_the_sample() {
        let config = SampleConfig::default();
        assert_eq!(config.window_size, (1024, 1024));
        assert_eq!(config.clear_color, [0.0, 0.2, 0.4, 1.0]);
    }

    #[test]
    fn title_marks_warp() {
        let config = SampleConfig::default();
        let warp = SampleCommandLine {
            use_warp_device: true,
        };
        assert_eq!(config.window_title(&SampleCommandLine::default()), "DX12");
        assert_eq!(config.window_title(&warp), "DX12 (WARP)");
    }
}
