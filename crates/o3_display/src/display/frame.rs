//! Per-frame update, render and animate

use super::{Display, DisplayError, DisplayEvent, DisplayResult};
use crate::engine::{HeadlessRenderer, MountPoint, Renderer, ShadowMode};

impl Display {
    /// The renderer, creating a [`HeadlessRenderer`] sized to the display
    /// when none was installed
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        let (width, height) = self.size();
        let name = &self.name;
        self.renderer
            .get_or_insert_with(|| {
                log::debug!("Display '{}' created default renderer {}x{}", name, width, height);
                Box::new(HeadlessRenderer::new(width, height))
            })
            .as_mut()
    }

    /// Install `renderer`, replacing any previous one
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    /// Whether a renderer exists yet
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Toggle shadow mapping on the renderer
    pub fn shadows(&mut self, enabled: bool, mode: ShadowMode) {
        self.renderer().set_shadows(enabled, mode);
    }

    /// Insert the renderer's output surface into `parent`
    pub fn append(&mut self, parent: &mut dyn MountPoint) -> DisplayResult<()> {
        let surface = self.renderer().surface().ok_or(DisplayError::NoRenderSurface)?;
        parent.append_child(surface);
        Ok(())
    }

    /// Emit `Update` on every registered object, or with `from_animate`
    /// only on those whose `update_on_animate` is set. A failing hook stops
    /// the pass.
    pub fn update(&mut self, from_animate: bool) -> DisplayResult<()> {
        for key in &self.order {
            if let Some(object) = self.objects.get_mut(*key) {
                if !from_animate || object.update_on_animate {
                    object.update()?;
                }
            }
        }
        Ok(())
    }

    /// Draw scene `scene` through camera `camera`, each defaulting to the
    /// active one and created if missing
    pub fn render(&mut self, camera: Option<&str>, scene: Option<&str>) -> DisplayResult<()> {
        let scene_name = self.scene(scene)?.name().to_string();
        let camera_name = self.camera(camera)?.name().to_string();
        self.renderer();

        let scene = self.scenes.get(&scene_name).ok_or(DisplayError::UnknownScene(scene_name.clone()))?;
        let camera = self.cameras.get(&camera_name).ok_or(DisplayError::UnknownCamera(camera_name.clone()))?;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(scene, camera)?;
        }
        Ok(())
    }

    /// One host-driven frame: `Animate` on the display, `Animate` on every
    /// object, then when active and updating on animate an update pass and
    /// a render of the active scene and camera
    pub fn animate(&mut self, t: f64) -> DisplayResult<()> {
        self.emit(&DisplayEvent::Animate { t })?;
        for key in &self.order {
            if let Some(object) = self.objects.get_mut(*key) {
                object.animate(t)?;
            }
        }

        if self.active && self.update_on_animate {
            self.update(true)?;
            self.render(None, None)?;
        }
        log::trace!("Display '{}' animated at {}", self.name, t);
        Ok(())
    }
}
