use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::framebuffer::Framebuffer;
use crate::manager::*;
use crate::material::Material;
use crate::scene::{PointLight, Scene};
use crate::sink::ProgressSink;
use crate::*;

use log::*;
use std::sync::Mutex;

pub mod shade;
pub mod trace;

/// Everything a pixel needs, shared read-only by all render threads.
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub camera: Camera,
    pub max_depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(scene: &'a Scene, config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(RenderContext {
            scene,
            camera: Camera::new(*scene.camera(), config.width, config.height)?,
            max_depth: config.max_depth,
        })
    }

    pub fn trace_pixel(&self, row: usize, col: usize) -> Result<RGB> {
        let ray = self.camera.ray_to(row, col)?;
        trace::radiance(self.scene, &ray, self.max_depth)
    }
}

pub struct Renderer;

impl Renderer {
    pub fn render(
        &self,
        scene: &Scene,
        config: &RenderConfig,
        progress: &mut dyn ProgressSink,
    ) -> Result<Framebuffer> {
        let ctx = RenderContext::new(scene, config)?;
        let (w, h) = (ctx.camera.width(), ctx.camera.height());
        info!(
            "rendering {}x{}, {} spheres, depth {}, {} threads",
            w,
            h,
            scene.objects().len(),
            ctx.max_depth,
            config.nthread
        );
        let start = std::time::Instant::now();

        let mut film = Framebuffer::new(w, h);
        let manager = Mutex::new(Manager::new(film.rows_mut().enumerate(), h, progress));
        let results: Vec<Result<()>> = std::thread::scope(|s| {
            let threads: Vec<_> = (0..config.nthread.min(h))
                .map(|_| s.spawn(|| Self::render_thread(&ctx, &manager)))
                .collect();
            threads
                .into_iter()
                .map(|t| t.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        });
        let manager = manager.into_inner().unwrap_or_else(|e| e.into_inner());
        results.into_iter().collect::<Result<Vec<()>>>()?;
        manager.finish()?;

        info!("rendered in {:.2?}", start.elapsed());
        Ok(film)
    }

    fn render_thread<'f, I>(ctx: &RenderContext, manager: &Mutex<Manager<I>>) -> Result<()>
    where
        I: Iterator<Item = (usize, &'f mut [RGB])>,
    {
        loop {
            let task = manager.lock().unwrap_or_else(|e| e.into_inner()).next();
            let (row, pixels) = match task {
                Some(task) => task,
                None => break,
            };
            let filled = pixels
                .iter_mut()
                .enumerate()
                .try_for_each(|(col, px)| -> Result<()> {
                    *px = ctx.trace_pixel(row, col)?;
                    Ok(())
                });
            let mut manager = manager.lock().unwrap_or_else(|e| e.into_inner());
            if let Err(e) = filled {
                error!("row {} failed: {}", row, e);
                manager.halt();
                return Err(e);
            }
            manager.complete();
        }
        Ok(())
    }
}
