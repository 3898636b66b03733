use std::ffi::CStr;

use bevy_math::Vec3;

pub const TRIANGLE_VERTICES: [Vec3; 3] = [
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
];

pub const VERTEX_STRIDE: u32 = std::mem::size_of::<Vec3>() as u32;
pub const VERTEX_OFFSET: u32 = 0;
pub const VERTEX_COUNT: u32 = TRIANGLE_VERTICES.len() as u32;
pub const VERTEX_BUFFER_SIZE: u32 = std::mem::size_of::<[Vec3; 3]>() as u32;

pub const VERTEX_SHADER_NAME: &CStr = c"vertex_shader";
pub const VERTEX_SHADER_ENTRY: &CStr = c"vs_main";
pub const VERTEX_SHADER_TARGET: &CStr = c"vs_5_0";
pub const PIXEL_SHADER_NAME: &CStr = c"pixel_shader";
pub const PIXEL_SHADER_ENTRY: &CStr = c"ps_main";
pub const PIXEL_SHADER_TARGET: &CStr = c"ps_5_0";

/// Semantic the input layout binds the position to.
pub const POSITION_SEMANTIC: &CStr = c"POS";

pub const SHADER_SOURCE: &str = r#"
struct vertexInput
{
    float3 v_position : POS;
};

struct vertexOutput
{
    float4 f_position : SV_POSITION;
};

vertexOutput vs_main(vertexInput _in)
{
    vertexOutput output;
    output.f_position = float4(_in.v_position, 1.0);
    return output;
}

float4 ps_main(vertexOutput input) : SV_TARGET
{
    // Yellow fragments.
    return float4(1.0, 1.0, 0.0, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_the_half_size_triangle() {
        let floats: Vec<f32> = TRIANGLE_VERTICES
            .iter()
            .flat_map(|v| v.to_array())
            .collect();
        assert_eq!(floats, vec![0.0, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0]);
    }

    #[test]
    fn buffer_layout() {
        assert_eq!(VERTEX_STRIDE, 3 * 4);
        assert_eq!(VERTEX_BUFFER_SIZE, 9 * 4);
        assert_eq!(VERTEX_COUNT, 3);
    }

    #[test]
    fn input_semantic_matches_shader() {
        let semantic = POSITION_SEMANTIC.to_str().unwrap();
        assert!(SHADER_SOURCE.contains(&format!(": {semantic};")));
        assert!(SHADER_SOURCE.contains("vs_main("));
        assert!(SHADER_SOURCE.contains("ps_main("));
    }
}
