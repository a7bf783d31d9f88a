use std::fmt;
use std::str::FromStr;

use crate::{DeviceProfile, UnknownVariant};

/// Uniform view scale, stored in whole percent so that repeated steps stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoomFactor(u16);

impl ZoomFactor {
    pub const MIN_PERCENT: u16 = 30;
    pub const MAX_PERCENT: u16 = 150;
    pub const STEP_PERCENT: u16 = 10;
    pub const DEFAULT_PERCENT: u16 = 65;

    pub const MIN: ZoomFactor = ZoomFactor(Self::MIN_PERCENT);
    pub const MAX: ZoomFactor = ZoomFactor(Self::MAX_PERCENT);

    /// Out-of-range values are clamped to the nearest bound.
    pub fn from_percent(percent: i32) -> Self {
        let clamped = percent.clamp(Self::MIN_PERCENT as i32, Self::MAX_PERCENT as i32);
        ZoomFactor(clamped as u16)
    }

    pub fn from_scale(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self::from_percent((scale * 100.0).round() as i32)
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    pub fn scale(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn zoom_in(self) -> Self {
        Self::from_percent(i32::from(self.0) + i32::from(Self::STEP_PERCENT))
    }

    pub fn zoom_out(self) -> Self {
        Self::from_percent(i32::from(self.0) - i32::from(Self::STEP_PERCENT))
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        ZoomFactor(Self::DEFAULT_PERCENT)
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Accepts either a scale (`0.8`) or a percentage (`80%`).
impl FromStr for ZoomFactor {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (number, divisor) = match trimmed.strip_suffix('%') {
            Some(percent) => (percent.trim(), 100.0),
            None => (trimmed, 1.0),
        };
        number
            .parse::<f32>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .map(|parsed| ZoomFactor::from_scale(parsed / divisor))
            .ok_or_else(|| UnknownVariant::new("zoom", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Blueprint,
    Documentation,
    DesignTool,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [
        ViewMode::Blueprint,
        ViewMode::Documentation,
        ViewMode::DesignTool,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Blueprint => "blueprint",
            ViewMode::Documentation => "documentation",
            ViewMode::DesignTool => "design-tool",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Blueprint => "Blueprint",
            ViewMode::Documentation => "Docs",
            ViewMode::DesignTool => "Design Tool",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant::new("view mode", value))
    }
}

/// A single user interaction with the toolbar or the documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    SetDevice(DeviceProfile),
    SetView(ViewMode),
    /// Raised by the documentation page when the reader asks for the design tool.
    OpenDesignTool,
}

/// Session-local UI state. Nothing here is persisted; a fresh session starts from `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub zoom: ZoomFactor,
    pub device: DeviceProfile,
    pub view: ViewMode,
}

impl ViewState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ZoomIn => self.zoom = self.zoom.zoom_in(),
            Action::ZoomOut => self.zoom = self.zoom.zoom_out(),
            Action::SetDevice(device) => self.device = device,
            Action::SetView(view) => self.view = view,
            Action::OpenDesignTool => self.view = ViewMode::DesignTool,
        }
    }

    pub fn applied(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }
}
