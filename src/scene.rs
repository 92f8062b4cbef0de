use crate::images::ImageLoader;
use crate::viewer::ModalViewer;
use sphere_core::{Camera, ImageSource, InteractionController, OrbitControls};

/// Everything the event listeners and the frame loop share.
pub struct Scene {
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub controller: InteractionController<ModalViewer>,
}

impl Scene {
    pub fn new(
        camera: Camera,
        orbit: OrbitControls,
        controller: InteractionController<ModalViewer>,
    ) -> Self {
        Self {
            camera,
            orbit,
            controller,
        }
    }

    /// Swap in a new image set and start fetching its pixels.
    pub fn replace_images(&mut self, images: &[ImageSource], loader: &ImageLoader) {
        self.controller.rebuild(images);
        for source in images {
            loader.request(source);
        }
    }
}
