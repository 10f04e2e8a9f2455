//! Input payloads for the widget's two handlers.
//!
//! Handlers only need the control's current string value, so anything that
//! can expose one qualifies: a plain `&str`, an owned `String`, or a
//! [`ControlInput`] produced by the egui controls.

pub trait InputValue {
    fn value(&self) -> &str;
}

impl InputValue for str {
    fn value(&self) -> &str {
        self
    }
}

impl InputValue for String {
    fn value(&self) -> &str {
        self.as_str()
    }
}

impl<T: InputValue + ?Sized> InputValue for &T {
    fn value(&self) -> &str {
        (**self).value()
    }
}

/// A change reported by one of the on-screen controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    /// Text box content
    SampleText(String),
    /// Slider position, as the control reports it
    Size(String),
}

impl InputValue for ControlInput {
    fn value(&self) -> &str {
        match self {
            ControlInput::SampleText(v) | ControlInput::Size(v) => v,
        }
    }
}
