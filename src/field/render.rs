//! WebGL2 point renderer for the particle field.

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::camera;
use super::FieldCore;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 a_position;
uniform mat4 u_matrix;
uniform float u_size;
void main() {
    gl_Position = u_matrix * vec4(a_position, 1.0);
    // Size attenuation: nearer points draw larger.
    gl_PointSize = clamp(u_size * 2000.0 / gl_Position.w, 1.0, 8.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec3 u_color;
uniform float u_opacity;
out vec4 frag_color;
void main() {
    vec2 d = gl_PointCoord - vec2(0.5);
    if (dot(d, d) > 0.25) discard;
    frag_color = vec4(u_color, u_opacity);
}
"#;

pub(super) struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    position_buffer: WebGlBuffer,
    u_matrix: WebGlUniformLocation,
    u_size: WebGlUniformLocation,
    u_color: WebGlUniformLocation,
    u_opacity: WebGlUniformLocation,
    aspect: f32,
}

impl Renderer {
    pub(super) fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let attrs = Object::new();
        Reflect::set(&attrs, &"alpha".into(), &JsValue::TRUE)?;
        Reflect::set(&attrs, &"antialias".into(), &JsValue::FALSE)?;
        Reflect::set(&attrs, &"powerPreference".into(), &"high-performance".into())?;

        let gl: GL = canvas
            .get_context_with_context_options("webgl2", attrs.as_ref())?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let program = link_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        gl.use_program(Some(&program));

        let vao = gl
            .create_vertex_array()
            .ok_or("failed to create vertex array")?;
        gl.bind_vertex_array(Some(&vao));

        let position_buffer = gl.create_buffer().ok_or("failed to create buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&position_buffer));
        let a_position = gl.get_attrib_location(&program, "a_position");
        gl.enable_vertex_attrib_array(a_position as u32);
        gl.vertex_attrib_pointer_with_i32(a_position as u32, 3, GL::FLOAT, false, 0, 0);

        let u_matrix = gl
            .get_uniform_location(&program, "u_matrix")
            .ok_or("missing uniform u_matrix")?;
        let u_size = gl
            .get_uniform_location(&program, "u_size")
            .ok_or("missing uniform u_size")?;
        let u_color = gl
            .get_uniform_location(&program, "u_color")
            .ok_or("missing uniform u_color")?;
        let u_opacity = gl
            .get_uniform_location(&program, "u_opacity")
            .ok_or("missing uniform u_opacity")?;

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            gl,
            canvas: canvas.clone(),
            program,
            vao,
            position_buffer,
            u_matrix,
            u_size,
            u_color,
            u_opacity,
            aspect: 1.0,
        })
    }

    /// Match the drawing buffer to the viewport, with the pixel ratio
    /// already capped by the caller. Particle data is untouched.
    pub(super) fn resize(&mut self, css_width: f64, css_height: f64, pixel_ratio: f64) {
        let width = (css_width * pixel_ratio) as u32;
        let height = (css_height * pixel_ratio) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.aspect = if css_height > 0.0 {
            (css_width / css_height) as f32
        } else {
            1.0
        };
    }

    pub(super) fn draw(&self, core: &FieldCore) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.position_buffer));

        // The view aliases wasm memory, so it must not outlive this call:
        // any allocation would invalidate it.
        unsafe {
            let view = js_sys::Float32Array::view(core.positions());
            gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::DYNAMIC_DRAW);
        }

        let (rot_x, rot_y) = core.rotation();
        let matrix = camera::view_projection(self.aspect, rot_x, rot_y);
        gl.uniform_matrix4fv_with_f32_array(Some(&self.u_matrix), false, &matrix);

        let [r, g, b] = core.settings().color_rgb();
        gl.uniform3f(Some(&self.u_color), r, g, b);
        gl.uniform1f(Some(&self.u_size), core.settings().particle_size);
        gl.uniform1f(Some(&self.u_opacity), core.settings().particle_opacity);

        gl.draw_arrays(GL::POINTS, 0, core.particle_count() as i32);
    }

    /// Release GPU-side objects. The context itself is dropped with the
    /// canvas.
    pub(super) fn dispose(&self) {
        self.gl.delete_buffer(Some(&self.position_buffer));
        self.gl.delete_vertex_array(Some(&self.vao));
        self.gl.delete_program(Some(&self.program));
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader compile error".into());
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&log))
    }
}

fn link_program(gl: &GL, vertex_src: &str, fragment_src: &str) -> Result<WebGlProgram, JsValue> {
    let vertex = compile_shader(gl, GL::VERTEX_SHADER, vertex_src)?;
    let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_src)?;

    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    // The shaders can be flagged for deletion once linked.
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program link error".into());
        gl.delete_program(Some(&program));
        Err(JsValue::from_str(&log))
    }
}
