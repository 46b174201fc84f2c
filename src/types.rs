// src/types.rs

// Button accent colours
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Accent {
    Green,
    Red,
    Neutral,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Red => "red",
            Accent::Neutral => "gray",
        }
    }
}

// Start button: flips between idle and running on every press
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ToggleButton {
    active: bool,
}

impl ToggleButton {
    pub fn activate(&mut self) {
        self.active = !self.active;
    }

    pub fn label(&self) -> &'static str {
        if self.active { "In Progress" } else { "Start" }
    }

    pub fn accent(&self) -> Accent {
        if self.active { Accent::Red } else { Accent::Green }
    }
}

// Static control buttons, no backend behind them
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ControlButton {
    Abort,
    Fv04,
    Ov04,
    Fv02,
    Ov02,
    RecordData,
    Hitl,
    Coil,
}

impl ControlButton {
    // Grid order: valves in the first two columns, auxiliaries in the third
    pub const GRID: [[Option<ControlButton>; 3]; 3] = [
        [Some(ControlButton::Fv04), Some(ControlButton::Ov04), Some(ControlButton::RecordData)],
        [Some(ControlButton::Fv02), Some(ControlButton::Ov02), Some(ControlButton::Hitl)],
        [None, None, Some(ControlButton::Coil)],
    ];

    pub fn label(self) -> &'static str {
        match self {
            ControlButton::Abort => "Abort",
            ControlButton::Fv04 => "FV-04",
            ControlButton::Ov04 => "OV-04",
            ControlButton::Fv02 => "FV-02",
            ControlButton::Ov02 => "OV-02",
            ControlButton::RecordData => "Record Data",
            ControlButton::Hitl => "HITL",
            ControlButton::Coil => "Coil",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            ControlButton::Abort => Accent::Red,
            _ => Accent::Neutral,
        }
    }
}

// Free-text timing field (spark / burn), not parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingEntry {
    pub label: &'static str,
    pub text: String,
}

impl TimingEntry {
    pub fn new(label: &'static str) -> Self {
        Self { label, text: String::new() }
    }

    pub fn defaults() -> [TimingEntry; 2] {
        [TimingEntry::new("Spark time"), TimingEntry::new("Burn time")]
    }
}
