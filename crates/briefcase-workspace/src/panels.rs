// ABOUTME: Collapse state of the left and right side panels
// ABOUTME: Reacts to direct toggles and to layout resize notifications

use briefcase_types::PanelSide;

/// Size limits of a resizable panel, in percent of the window width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConstraints {
    pub default_size: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Width the panel shrinks to when collapsed
    pub collapsed_size: f32,
}

impl PanelConstraints {
    pub const LEFT: PanelConstraints = PanelConstraints {
        default_size: 20.0,
        min_size: 5.0,
        max_size: 25.0,
        collapsed_size: 5.0,
    };

    pub const RIGHT: PanelConstraints = PanelConstraints {
        default_size: 25.0,
        min_size: 10.0,
        max_size: 30.0,
        collapsed_size: 5.0,
    };

    /// Default width of the editor pane between the two side panels
    pub const EDITOR_DEFAULT_SIZE: f32 = 55.0;

    pub fn for_side(side: PanelSide) -> Self {
        match side {
            PanelSide::Left => Self::LEFT,
            PanelSide::Right => Self::RIGHT,
        }
    }
}

/// Tracks whether each side panel is collapsed. Both start expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelController {
    left_collapsed: bool,
    right_collapsed: bool,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, side: PanelSide) -> bool {
        match side {
            PanelSide::Left => self.left_collapsed,
            PanelSide::Right => self.right_collapsed,
        }
    }

    /// Returns true if the state changed
    pub fn collapse(&mut self, side: PanelSide) -> bool {
        self.set_collapsed(side, true)
    }

    /// Returns true if the state changed
    pub fn expand(&mut self, side: PanelSide) -> bool {
        self.set_collapsed(side, false)
    }

    /// Flip the state and return the new collapsed value
    pub fn toggle(&mut self, side: PanelSide) -> bool {
        let collapsed = !self.is_collapsed(side);
        self.set_collapsed(side, collapsed);
        collapsed
    }

    /// Apply a size reported by the layout.
    ///
    /// At or below the collapsed size the panel collapses; at or above the
    /// minimum size it expands. Returns true if the state changed.
    pub fn on_resize(&mut self, side: PanelSide, size: f32) -> bool {
        let constraints = PanelConstraints::for_side(side);
        if size <= constraints.collapsed_size {
            self.collapse(side)
        } else if size >= constraints.min_size {
            self.expand(side)
        } else {
            false
        }
    }

    fn set_collapsed(&mut self, side: PanelSide, collapsed: bool) -> bool {
        let slot = match side {
            PanelSide::Left => &mut self.left_collapsed,
            PanelSide::Right => &mut self.right_collapsed,
        };
        let changed = *slot != collapsed;
        *slot = collapsed;
        changed
    }
}
