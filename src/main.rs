use glam::Vec4;
use glow::HasContext;

use crate::abs::*;
use crate::source::ShaderSource;

mod abs;
mod source;

const WINDOW_TITLE: &str = "glquad";
const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;

const BASIC_SHADER: &str = include_str!("shaders/basic.shader");

/// How far the red channel moves per frame while ping-ponging in [0, 1].
const COLOR_STEP: f32 = 0.05;

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn run() -> Result<(), String> {
    let mut app = App::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;

    unsafe {
        log::info!("OpenGL {}", app.gl.get_parameter_string(glow::VERSION));
    }

    // A unit quad as two triangles sharing the diagonal.
    let vertices = [
        Vertex2 { position: [-0.5, -0.5] },
        Vertex2 { position: [0.5, -0.5] },
        Vertex2 { position: [0.5, 0.5] },
        Vertex2 { position: [-0.5, 0.5] },
    ];
    let indices = [0, 1, 2, 2, 3, 0];
    let quad = Mesh::new(&app.gl, &vertices, &indices, glow::TRIANGLES)?;

    let source: ShaderSource = BASIC_SHADER.parse()?;
    let shader_program = ShaderProgram::from_source(&app.gl, &source)?;

    let mut red = 0.0f32;
    let mut step = COLOR_STEP;

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        if red > 1.0 || red < 0.0 {
            step = -step;
        }
        red += step;

        unsafe {
            app.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        clear_errors(&app.gl);
        shader_program.use_program();
        shader_program.set_uniform("u_color", Vec4::new(red, 0.3, 0.8, 1.0));
        quad.draw();
        // check_errors runs in every build so release still logs; only the
        // assert is debug-gated.
        let clean = check_errors(&app.gl, "draw");
        debug_assert!(clean, "GL errors raised during draw");

        app.window.gl_swap_window();
    }

    Ok(())
}

fn main() {
    if let Err(e) = setup_logger() {
        eprintln!("failed to set up logging: {e}");
    }

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_shader_has_both_stages() {
        let source: ShaderSource = BASIC_SHADER.parse().unwrap();
        assert!(source.vertex.contains("gl_Position"));
        assert!(!source.fragment.is_empty());
    }

    #[test]
    fn test_embedded_shader_declares_the_animated_uniform() {
        // The frame loop sets exactly one uniform; the shipped shader must
        // declare it.
        let source: ShaderSource = BASIC_SHADER.parse().unwrap();
        assert!(source.fragment.contains("uniform vec4 u_color"));
    }
}
