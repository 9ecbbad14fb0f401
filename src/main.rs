use std::path::Path;
use std::time::Instant;

use glam::{Vec2, Vec3};
use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::abs::App;
use crate::camera::{Camera, CameraMovement};
use crate::input::{KeyboardState, MouseState};
use crate::render::Renderer;
use crate::scene::Scene;
use crate::settings::Settings;

mod abs;
mod camera;
mod geometry;
mod input;
mod logging;
mod render;
mod scene;
mod settings;

#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .map_err(|e| format!(concat!(stringify!($name), " vertex shader: {}"), e))?;
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .map_err(|e| format!(concat!(stringify!($name), " fragment shader: {}"), e))?;
        $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag])
            .map_err(|e| format!(concat!(stringify!($name), " program link: {}"), e))?
    }};
}

fn main() {
    logging::init();
    let settings = Settings::load_or_default(Path::new("settings.json"));
    if let Err(e) = run(&settings) {
        log::error!("fatal startup error: {e}");
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), String> {
    let mut app = App::new(settings)?;
    app.sdl.mouse().set_relative_mouse_mode(true);

    let scene = Scene::new(&app.gl, settings)?;
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
    let mut renderer = Renderer::new(settings.width, settings.height);

    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        keyboard.begin_frame();
        mouse.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => {
                    unsafe {
                        app.gl.viewport(0, 0, width, height);
                    }
                    renderer.resize(width as u32, height as u32);
                }
                sdl2::event::Event::MouseMotion {
                    x, y, xrel, yrel, ..
                } => {
                    mouse.push_motion(
                        Vec2::new(x as f32, y as f32),
                        Vec2::new(xrel as f32, yrel as f32),
                    );
                }
                sdl2::event::Event::MouseWheel { y, .. } => mouse.push_scroll(y as f32),
                sdl2::event::Event::MouseButtonDown { mouse_btn, .. } => {
                    mouse.button_down(mouse_btn)
                }
                sdl2::event::Event::MouseButtonUp { mouse_btn, .. } => mouse.button_up(mouse_btn),
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard.key_down(keycode),
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard.key_up(keycode),
                _ => {}
            }
        }

        if keyboard.pressed.contains(&Keycode::Escape) {
            break 'running;
        }
        if keyboard.pressed.contains(&Keycode::P) {
            renderer.toggle_projection();
        }
        if keyboard.down.contains(&Keycode::Num1) {
            unsafe { app.gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE) };
        }
        if keyboard.down.contains(&Keycode::Num2) {
            unsafe { app.gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL) };
        }

        if keyboard.down.contains(&Keycode::W) {
            camera.process_keyboard(CameraMovement::Forward, delta_time);
        }
        if keyboard.down.contains(&Keycode::S) {
            camera.process_keyboard(CameraMovement::Backward, delta_time);
        }
        if keyboard.down.contains(&Keycode::A) {
            camera.process_keyboard(CameraMovement::Left, delta_time);
        }
        if keyboard.down.contains(&Keycode::D) {
            camera.process_keyboard(CameraMovement::Right, delta_time);
        }
        if keyboard.down.contains(&Keycode::Q) {
            camera.process_keyboard(CameraMovement::Up, delta_time);
        }
        if keyboard.down.contains(&Keycode::E) {
            camera.process_keyboard(CameraMovement::Down, delta_time);
        }

        if mouse.delta != Vec2::ZERO {
            camera.process_mouse_movement(mouse.delta.x, mouse.delta.y);
        }
        if mouse.scroll_delta != 0.0 {
            camera.process_mouse_scroll(mouse.scroll_delta);
        }
        for button in &mouse.pressed {
            log::info!("{button:?} mouse button pressed");
        }
        for button in &mouse.released {
            log::info!("{button:?} mouse button released");
        }

        renderer.render(&app.gl, &scene, &camera);
        app.window.gl_swap_window();
    }

    Ok(())
}
