//! FinFET layout preview shown during the layout ECO.

use super::engine::TaskState;

pub const ACTIVE_FINS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceWidth {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutNote {
    /// Input pair sits on the well edge without dummy poly.
    LdeStress,
    Optimized,
}

impl LayoutNote {
    pub fn css_class(self) -> &'static str {
        match self {
            LayoutNote::LdeStress => "finfet__note finfet__note--stress",
            LayoutNote::Optimized => "finfet__note finfet__note--ok",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutView {
    pub dummy_poly: bool,
    pub trace_width: TraceWidth,
}

impl LayoutView {
    pub fn from_flags(flags: &TaskState) -> Self {
        Self {
            dummy_poly: flags.circuit_fixed,
            trace_width: if flags.layout_fixed {
                TraceWidth::Wide
            } else {
                TraceWidth::Narrow
            },
        }
    }

    pub fn note(&self) -> Option<LayoutNote> {
        match (self.dummy_poly, self.trace_width) {
            (false, _) => Some(LayoutNote::LdeStress),
            (true, TraceWidth::Wide) => Some(LayoutNote::Optimized),
            (true, TraceWidth::Narrow) => None,
        }
    }

    pub fn contact_class(&self) -> &'static str {
        match self.trace_width {
            TraceWidth::Narrow => "finfet__contact",
            TraceWidth::Wide => "finfet__contact finfet__contact--wide",
        }
    }

    pub fn dummy_class(&self) -> &'static str {
        if self.dummy_poly {
            "finfet__dummy finfet__dummy--placed"
        } else {
            "finfet__dummy"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_layout_shows_stress() {
        let view = LayoutView::from_flags(&TaskState::default());
        assert!(!view.dummy_poly);
        assert_eq!(view.trace_width, TraceWidth::Narrow);
        assert_eq!(view.note(), Some(LayoutNote::LdeStress));
    }

    #[test]
    fn dummy_poly_alone_clears_the_warning() {
        let flags = TaskState {
            circuit_fixed: true,
            ..TaskState::default()
        };
        assert_eq!(LayoutView::from_flags(&flags).note(), None);
    }

    #[test]
    fn both_fixes_are_optimized() {
        let flags = TaskState {
            circuit_fixed: true,
            layout_fixed: true,
            ..TaskState::default()
        };
        let view = LayoutView::from_flags(&flags);
        assert_eq!(view.note(), Some(LayoutNote::Optimized));
        assert!(view.contact_class().ends_with("--wide"));
    }

    #[test]
    fn wide_traces_without_dummy_poly_still_stressed() {
        let flags = TaskState {
            layout_fixed: true,
            ..TaskState::default()
        };
        assert_eq!(LayoutView::from_flags(&flags).note(), Some(LayoutNote::LdeStress));
    }
}
