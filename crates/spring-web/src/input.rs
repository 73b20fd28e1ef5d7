use spring_core::Controls;

/// One of the spring parameter inputs on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Stiffness,
    Damping,
    Mass,
}

impl ParamField {
    pub const ALL: [ParamField; 3] = [ParamField::Stiffness, ParamField::Damping, ParamField::Mass];

    pub fn element_id(self) -> &'static str {
        match self {
            ParamField::Stiffness => "stiffness",
            ParamField::Damping => "damping",
            ParamField::Mass => "mass",
        }
    }

    /// Parse an input's text and hand it to `controls`. Unparseable or
    /// rejected values are logged and the previous value stays in place.
    /// Returns whether the value was applied.
    pub fn apply_text(self, controls: &Controls, text: &str) -> bool {
        let Some(value) = parse_param(text) else {
            log::warn!("[input] #{}: not a number: {:?}", self.element_id(), text);
            return false;
        };
        let applied = match self {
            ParamField::Stiffness => controls.set_stiffness(value),
            ParamField::Damping => controls.set_damping(value),
            ParamField::Mass => controls.set_mass(value),
        };
        applied.is_ok()
    }
}

#[inline]
pub fn parse_param(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
