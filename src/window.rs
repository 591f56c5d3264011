use anyhow::{Result, anyhow};
use raylib::prelude::*;

use crate::config::WindowConfig;
use crate::screen::{PixelSurface, Presenter};

/// A raylib window showing each frame as a stretched texture.
pub struct RaylibPresenter {
    handle: RaylibHandle,
    thread: RaylibThread,
    texture: Texture2D,
    rgba: Vec<u8>,
    width: f32,
    height: f32,
}

impl RaylibPresenter {
    pub fn open(config: &WindowConfig) -> Result<Self> {
        let (width, height) = (config.width as i32, config.height as i32);
        let (mut handle, thread) = raylib::init()
            .size(width, height)
            .title(&config.title)
            .resizable()
            .build();
        handle.set_target_fps(config.target_fps);

        let image = Image::gen_image_color(width, height, Color::BLACK);
        let texture = handle
            .load_texture_from_image(&thread, &image)
            .map_err(|e| anyhow!("creating window texture: {e:?}"))?;
        log::info!("opened {width}x{height} window");

        Ok(Self {
            handle,
            thread,
            texture,
            rgba: Vec::with_capacity(config.width * config.height * 4),
            width: width as f32,
            height: height as f32,
        })
    }

    pub fn should_close(&self) -> bool {
        self.handle.window_should_close() || self.handle.is_key_pressed(KeyboardKey::KEY_ESCAPE)
    }
}

impl Presenter for RaylibPresenter {
    fn present(&mut self, surface: &PixelSurface) -> Result<()> {
        surface.copy_rgba_top_down(&mut self.rgba);
        // on a failed upload the window keeps the previous frame
        if let Err(e) = self.texture.update_texture(&self.rgba) {
            log::warn!("texture upload failed: {e:?}");
        }

        let window_width = self.handle.get_screen_width();
        let window_height = self.handle.get_screen_height();
        let fps = self.handle.get_fps();

        let mut d = self.handle.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &self.texture,
            Rectangle { x: 0.0, y: 0.0, width: self.width, height: self.height },
            Rectangle { x: 0.0, y: 0.0, width: window_width as f32, height: window_height as f32 },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
        d.draw_text(&format!("FPS {fps}"), 10, 10, 20, Color::LIME);
        Ok(())
    }
}
