pub mod compile_shader;
pub mod create_device;
pub mod create_pipeline_state;
pub mod create_root_signature;
pub mod create_vertex_buffer;
pub mod populate_command_list;
pub mod resources;
pub mod sample;
pub mod sample_bind_to_window;
pub mod sample_on_destroy;
pub mod sample_render;
pub mod transition_barrier;
pub mod wait_for_gpu;
