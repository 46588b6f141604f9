//! The Tape-Out Crunch board: a five-day debug of a failing CTLE block.

mod days;
pub use days::{ButtonVariant, Day, DayDescriptor, DayPanel, DAYS, DAY_COUNT};

mod engine;
pub use engine::{Action, CrunchEngine, Rejection, TaskState, Transition};

mod metrics;
pub use metrics::{
    Metrics, BANDWIDTH_GAUGE_FULL_SCALE_GHZ, GAIN_GAUGE_FULL_SCALE_DB, METRICS_BASE,
    POWER_BUDGET_MW, TARGETS,
};

mod quality;
pub use quality::{BadgeVerdicts, Mood, Quality, Verdict};

mod waveform;
pub use waveform::{
    grid_lines, ideal_y, render_waveform, scope_frame, Trace, TraceKind, WaveformFrame,
    POINTS_PER_TRACE, SCOPE_HEIGHT, SCOPE_WIDTH,
};

mod layout;
pub use layout::{LayoutNote, LayoutView, TraceWidth, ACTIVE_FINS};

mod eye;
pub use eye::EyeDiagram;

mod panels;
mod workbench;

mod view;
pub use view::{use_crunch_session, CrunchView};
