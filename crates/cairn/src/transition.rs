//! Opacity transitions for entering, composed, and exiting elements.
//!
//! Animation timing is a host concern. A [`Transition`] only decides the
//! opacity an element is left with at each lifecycle step; the pipeline
//! tracks the lifecycle state itself.

use std::fmt;

use crate::scene::NodeElement;

pub trait Transition: fmt::Debug {
    /// Called once on a newly created element before it is composed.
    fn enter(&self, element: &mut NodeElement) {
        element.set_opacity(0.0);
    }

    /// Called once an element is fully composed.
    fn settle(&self, element: &mut NodeElement) {
        element.set_opacity(1.0);
    }

    /// Called on an element whose node left the graph, after it has been
    /// detached from the scene.
    fn fade_out_and_remove(&self, element: &mut NodeElement) {
        element.set_opacity(0.0);
    }
}

/// Applies every opacity change immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Transition for Immediate {}
