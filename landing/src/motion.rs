//! Declarative entrance motion.
//!
//! Sections never animate anything themselves. They describe each animated
//! element with a [`Motion`]: where it starts, where it ends, what triggers
//! the transition and how long it takes. The descriptor is rendered into
//! element attributes and a playback module (`playback` in the browser
//! build, `styles::MOTION_SCRIPT` in the static export) flips the element from
//! its initial style to its target style.
//!
//! # Rendered attributes
//!
//! ```text
//! style="opacity:0;transform:translate(0px,-20px) scale(1);transition:..."
//! data-motion="mount"            # or "in-view"
//! data-motion-from="<initial style>"
//! data-motion-to="<target style>"
//! data-motion-delay="300"        # milliseconds
//! ```
//!
//! `data-motion-delay` is informational: the delay already sits in the
//! transition declaration and playback never reads it. It keeps the timing
//! inspectable in the rendered markup.

use std::fmt;

/// Duration used when a motion does not set one explicitly.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Delay step between consecutive items of a staggered list.
pub const STAGGER_STEP_MS: u32 = 300;

const EASING: &str = "ease-out";

/// What starts the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is mounted.
    Mount,
    /// Whenever the element scrolls into the viewport.
    InView,
}

impl Trigger {
    pub const fn as_str(self) -> &'static str {
        match self {
            Trigger::Mount => "mount",
            Trigger::InView => "in-view",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visual state an element can be in. Offsets are in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: i32,
    pub y: i32,
    pub scale: f32,
}

impl VisualState {
    /// Fully visible, in place.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0,
        y: 0,
        scale: 1.0,
    };

    /// Transparent, in place.
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn offset_x(self, x: i32) -> Self {
        Self { x, ..self }
    }

    pub const fn offset_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// Inline CSS declarations for this state.
    pub fn to_css(&self) -> String {
        format!(
            "opacity:{};transform:translate({}px,{}px) scale({})",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// Entrance motion for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub trigger: Trigger,
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    /// Transition from `from` to rest once mounted.
    pub const fn on_mount(from: VisualState) -> Self {
        Self {
            trigger: Trigger::Mount,
            from,
            to: VisualState::REST,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
        }
    }

    /// Transition from `from` to rest whenever scrolled into view.
    pub const fn in_view(from: VisualState) -> Self {
        Self {
            trigger: Trigger::InView,
            ..Self::on_mount(from)
        }
    }

    pub const fn duration(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Delay this motion by its position in a staggered list.
    pub const fn staggered(self, index: usize) -> Self {
        self.delay(stagger_delay(index))
    }

    pub fn transition_css(&self) -> String {
        let timing = format!("{}ms {EASING} {}ms", self.duration_ms, self.delay_ms);
        format!("transition:opacity {timing},transform {timing}")
    }

    /// Style the element is rendered with.
    pub fn initial_style(&self) -> String {
        format!("{};{}", self.from.to_css(), self.transition_css())
    }

    /// Style playback applies once the trigger fires.
    pub fn target_style(&self) -> String {
        format!("{};{}", self.to.to_css(), self.transition_css())
    }

    pub fn trigger_attr(&self) -> &'static str {
        self.trigger.as_str()
    }

    /// Value of the informational `data-motion-delay` attribute.
    pub fn delay_attr(&self) -> String {
        self.delay_ms.to_string()
    }
}

/// Delay for the item at `index` of a staggered list.
pub const fn stagger_delay(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}
