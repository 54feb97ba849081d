//! Two-pane layout for image sections.

/// Horizontal distance the text pane travels on entrance.
pub const TEXT_SLIDE_PX: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Image,
    Text,
}

impl Pane {
    pub const fn as_str(self) -> &'static str {
        match self {
            Pane::Image => "image",
            Pane::Text => "text",
        }
    }
}

/// Pane order and text entrance offset, derived from the mirror flag alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitLayout {
    pub mirrored: bool,
    pub panes: [Pane; 2],
    pub text_offset_x: i32,
}

impl SplitLayout {
    pub const fn new(mirrored: bool) -> Self {
        if mirrored {
            Self {
                mirrored,
                panes: [Pane::Text, Pane::Image],
                text_offset_x: -TEXT_SLIDE_PX,
            }
        } else {
            Self {
                mirrored,
                panes: [Pane::Image, Pane::Text],
                text_offset_x: TEXT_SLIDE_PX,
            }
        }
    }

    pub const fn class(&self) -> &'static str {
        if self.mirrored {
            "image-section mirrored"
        } else {
            "image-section"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_puts_image_first() {
        let layout = SplitLayout::new(false);
        assert_eq!(layout.panes, [Pane::Image, Pane::Text]);
        assert_eq!(layout.text_offset_x, 50);
        assert_eq!(layout.class(), "image-section");
    }

    #[test]
    fn mirroring_swaps_panes_and_offset() {
        let plain = SplitLayout::new(false);
        let mirrored = SplitLayout::new(true);
        assert_eq!(mirrored.panes, [plain.panes[1], plain.panes[0]]);
        assert_eq!(mirrored.text_offset_x, -plain.text_offset_x);
        assert_eq!(mirrored.class(), "image-section mirrored");
    }
}
