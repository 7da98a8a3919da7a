use crate::dom;
use crate::frame::{FrameLoop, LoopControl};
use crate::render::GpuState;
use folio_core::{SceneConfig, SceneState, Viewport};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the rotating background needs, owned in one place so the
/// frame task and the resize listener share it by reference.
pub struct SceneDriver {
    scene: SceneState,
    gpu: GpuState,
    canvas: web::HtmlCanvasElement,
    frames: u64,
}

impl SceneDriver {
    /// Build the scene and start drawing. Returns `None` when the canvas is
    /// missing or no rendering backend is available; the page carries on
    /// without a background.
    pub async fn start(canvas_id: &str, cfg: &SceneConfig) -> Option<(Rc<RefCell<Self>>, FrameLoop)> {
        let window = web::window()?;
        let document = window.document()?;
        let Some(canvas_el) = document.get_element_by_id(canvas_id) else {
            log::warn!("[scene] missing #{}; background disabled", canvas_id);
            return None;
        };
        let canvas: web::HtmlCanvasElement = match canvas_el.dyn_into() {
            Ok(c) => c,
            Err(_) => {
                log::warn!("[scene] #{} is not a canvas; background disabled", canvas_id);
                return None;
            }
        };

        let viewport = current_viewport(&window);
        apply_canvas_size(&canvas, viewport);

        let mut rng = StdRng::from_entropy();
        let scene = SceneState::new(cfg, viewport, &mut rng);

        let started = Instant::now();
        let gpu = match GpuState::new(&canvas, &scene).await {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[scene] renderer unavailable: {:?}", e);
                return None;
            }
        };
        log::info!(
            "[scene] renderer ready in {:?} points={}",
            started.elapsed(),
            scene.points.len()
        );

        let driver = Rc::new(RefCell::new(Self {
            scene,
            gpu,
            canvas,
            frames: 0,
        }));
        wire_resize(&window, driver.clone());

        let driver_tick = driver.clone();
        let task = match FrameLoop::start(move || driver_tick.borrow_mut().frame()) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[scene] frame loop unavailable: {:?}", e);
                return None;
            }
        };
        Some((driver, task))
    }

    fn frame(&mut self) -> LoopControl {
        self.scene.advance();
        self.frames += 1;
        match self.gpu.render(&self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[scene] out of memory; stopping background");
                return LoopControl::Stop;
            }
            Err(e) => log::warn!("[scene] frame {} skipped: {:?}", self.frames, e),
        }
        LoopControl::Continue
    }

    /// Match camera aspect and output size to the viewport.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.scene.resize(viewport);
        apply_canvas_size(&self.canvas, viewport);
        let (w, h) = viewport.backing_size();
        self.gpu.resize(w, h);
        let (sw, sh) = self.gpu.size();
        log::debug!(
            "[scene] resized to {}x{} (surface {}x{}) aspect={:.3}",
            viewport.width,
            viewport.height,
            sw,
            sh,
            self.scene.camera.aspect
        );
    }
}

fn current_viewport(window: &web::Window) -> Viewport {
    let (w, h) = dom::viewport_size(window);
    Viewport::new(w, h, window.device_pixel_ratio())
}

// Backing store in device pixels, CSS box in layout pixels.
fn apply_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let (w, h) = viewport.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

fn wire_resize(window: &web::Window, driver: Rc<RefCell<SceneDriver>>) {
    dom::listen(window.as_ref(), "resize", move |_: web::Event| {
        if let Some(w) = web::window() {
            driver.borrow_mut().on_resize(current_viewport(&w));
        }
    });
}
