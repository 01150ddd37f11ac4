use super::scene::ScrollScene;

/// Swaps the video for a static panel. One-way for the life of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FallbackPresenter {
    active: bool,
}

impl FallbackPresenter {
    /// Returns `true` only on the call that actually switched the scene.
    pub fn activate<S: ScrollScene + ?Sized>(&mut self, scene: &S) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        scene.set_loading(false);
        scene.hide_media();
        scene.hide_indicator();
        if !scene.inject_fallback_panel() {
            log::debug!("Fallback panel already present");
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_video::scene::MockScrollScene;

    #[test]
    fn activation_happens_once() {
        let mut scene = MockScrollScene::new();
        scene.expect_set_loading().returning(|_| ());
        scene.expect_hide_media().times(1).returning(|| ());
        scene.expect_hide_indicator().times(1).returning(|| ());
        scene
            .expect_inject_fallback_panel()
            .times(1)
            .returning(|| true);

        let mut presenter = FallbackPresenter::default();
        assert!(presenter.activate(&scene));
        assert!(!presenter.activate(&scene));
        assert!(presenter.is_active());
    }
}
