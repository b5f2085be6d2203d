//! Video lesson page layout: lesson-list drawers around the player.

use disclosure::DisclosureController;
use shared::protocol::Lesson;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawer {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Left,
    Right,
}

/// Each drawer owns its own controller so the two never share open state.
/// Whether the layout is compact is decided by the rendering side.
#[derive(Debug)]
pub struct LessonLayout {
    lessons: Vec<Lesson>,
    desktop: DisclosureController<Drawer>,
    mobile: DisclosureController<Drawer>,
}

impl Default for LessonLayout {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LessonLayout {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            desktop: DisclosureController::with_open(Drawer::Desktop),
            mobile: DisclosureController::new(),
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    fn active(compact: bool) -> Drawer {
        if compact {
            Drawer::Mobile
        } else {
            Drawer::Desktop
        }
    }

    fn controller_mut(&mut self, drawer: Drawer) -> &mut DisclosureController<Drawer> {
        match drawer {
            Drawer::Desktop => &mut self.desktop,
            Drawer::Mobile => &mut self.mobile,
        }
    }

    pub fn is_open(&self, drawer: Drawer) -> bool {
        match drawer {
            Drawer::Desktop => self.desktop.is_open(&Drawer::Desktop),
            Drawer::Mobile => self.mobile.is_open(&Drawer::Mobile),
        }
    }

    /// Toggler click. Returns whether the affected drawer is now open.
    pub fn toggle(&mut self, compact: bool) -> bool {
        let drawer = Self::active(compact);
        self.controller_mut(drawer).toggle(drawer);
        let open = self.is_open(drawer);
        debug!(?drawer, open, "lesson drawer toggled");
        open
    }

    pub fn close(&mut self, drawer: Drawer) {
        self.controller_mut(drawer).close();
    }

    pub fn chevron(&self, compact: bool) -> Chevron {
        if self.is_open(Self::active(compact)) {
            Chevron::Left
        } else {
            Chevron::Right
        }
    }

    /// The player container widens its left margin while the desktop drawer is out.
    pub fn main_container_open(&self) -> bool {
        self.is_open(Drawer::Desktop)
    }

    /// Lessons to list, empty while the drawer for this layout is closed.
    pub fn visible_lessons(&self, compact: bool) -> &[Lesson] {
        if self.is_open(Self::active(compact)) {
            &self.lessons
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::LessonId;

    use super::*;

    fn layout() -> LessonLayout {
        LessonLayout::new(vec![Lesson {
            id: LessonId::new("l1"),
            title: "Intro".into(),
        }])
    }

    #[test]
    fn desktop_drawer_starts_open_and_mobile_closed() {
        let layout = layout();
        assert!(layout.is_open(Drawer::Desktop));
        assert!(!layout.is_open(Drawer::Mobile));
        assert_eq!(layout.chevron(false), Chevron::Left);
        assert_eq!(layout.chevron(true), Chevron::Right);
        assert!(layout.main_container_open());
    }

    #[test]
    fn toggler_targets_the_drawer_for_the_current_layout() {
        let mut layout = layout();

        assert!(layout.toggle(true));
        assert!(layout.is_open(Drawer::Mobile));
        assert!(layout.is_open(Drawer::Desktop), "desktop drawer untouched");

        assert!(!layout.toggle(false));
        assert!(!layout.main_container_open());
        assert!(layout.visible_lessons(false).is_empty());
        assert_eq!(layout.visible_lessons(true).len(), 1);

        layout.close(Drawer::Mobile);
        assert_eq!(layout.chevron(true), Chevron::Right);
    }
}
