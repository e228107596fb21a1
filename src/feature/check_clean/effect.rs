//! One-shot notifications from the inspection screen.

use crate::mvi::SideEffect;

/// The inspection screen emits no one-shot notifications; every intent
/// resolves into state. Uninhabited until the screen grows one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckCleanSideEffect {}

impl SideEffect for CheckCleanSideEffect {}
