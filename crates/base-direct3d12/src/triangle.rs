use std::ffi::CStr;

use bevy_math::Vec3;

/// Clip-space positions of the triangle, clockwise.
pub const TRIANGLE_VERTICES: [Vec3; 3] = [
    Vec3::new(0.0, 0.25, 0.0),
    Vec3::new(0.25, -0.25, 0.0),
    Vec3::new(-0.25, -0.25, 0.0),
];

pub const VERTEX_STRIDE: u32 = std::mem::size_of::<Vec3>() as u32;
pub const VERTEX_BUFFER_SIZE: u32 = std::mem::size_of::<[Vec3; 3]>() as u32;
pub const VERTEX_COUNT: u32 = TRIANGLE_VERTICES.len() as u32;

pub const SHADER_SOURCE_NAME: &CStr = c"triangle_shaders";
pub const VERTEX_SHADER_ENTRY: &CStr = c"vs_main";
pub const VERTEX_SHADER_TARGET: &CStr = c"vs_5_1";
pub const PIXEL_SHADER_ENTRY: &CStr = c"ps_main";
pub const PIXEL_SHADER_TARGET: &CStr = c"ps_5_1";

/// Passes positions through and fills every fragment with opaque yellow.
pub const SHADER_SOURCE: &str = r#"
struct vertexOutput
{
    float4 p_position : SV_POSITION;
};

vertexOutput vs_main(float3 v_position : POSITION)
{
    vertexOutput output;
    output.p_position = float4(v_position, 1.0);
    return output;
}

float4 ps_main(vertexOutput input) : SV_TARGET
{
    return float4(1.0, 1.0, 0.0, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_floats_in_three_vertices() {
        let floats: Vec<f32> = TRIANGLE_VERTICES
            .iter()
            .flat_map(|v| v.to_array())
            .collect();
        assert_eq!(
            floats,
            vec![0.0, 0.25, 0.0, 0.25, -0.25, 0.0, -0.25, -0.25, 0.0]
        );
    }

    #[test]
    fn buffer_layout_is_tightly_packed() {
        assert_eq!(VERTEX_STRIDE, 12);
        assert_eq!(VERTEX_BUFFER_SIZE, 36);
        assert_eq!(VERTEX_COUNT, 3);
    }

    #[test]
    fn shader_source_defines_compiled_entry_points() {
        for entry in [VERTEX_SHADER_ENTRY, PIXEL_SHADER_ENTRY] {
            let name = entry.to_str().unwrap();
            assert!(SHADER_SOURCE.contains(&format!("{name}(")), "missing {name}");
        }
        assert!(SHADER_SOURCE.contains(": POSITION"));
    }
}
