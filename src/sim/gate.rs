//! Activity gate: whether the reaction surface is currently engaged

use std::cell::Cell;
use std::rc::Rc;

/// Read once per spawn request; true permits new units.
pub trait ActivityGate {
    fn is_active(&self) -> bool;
}

impl<F> ActivityGate for F
where
    F: Fn() -> bool,
{
    fn is_active(&self) -> bool {
        self()
    }
}

/// Pointer-hover flag shared between the reaction buttons and the simulation
#[derive(Debug, Clone, Default)]
pub struct HoverState(Rc<Cell<bool>>);

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value just stored
    pub fn set_hovering(&self, value: bool) -> bool {
        self.0.set(value);
        value
    }

    pub fn is_hovering(&self) -> bool {
        self.0.get()
    }
}

impl ActivityGate for HoverState {
    fn is_active(&self) -> bool {
        self.is_hovering()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_state_shared() {
        let buttons = HoverState::new();
        let gate = buttons.clone();
        assert!(!gate.is_active());

        assert!(buttons.set_hovering(true));
        assert!(gate.is_active());

        assert!(!buttons.set_hovering(false));
        assert!(!gate.is_active());
    }
}
