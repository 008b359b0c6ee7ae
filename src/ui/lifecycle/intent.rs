//! Intents for the render lifecycle.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleIntent {
    /// Everything suspended during the first render has resolved.
    FirstRenderSettled,
}

impl Intent for LifecycleIntent {}
