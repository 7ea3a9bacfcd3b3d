//! Built-in device kinds.

use super::{Device, DeviceKind};
use crate::pole::Pole;

fn default_poles<const N: usize>(kind: DeviceKind) -> [Pole; N] {
    let names = kind.default_pole_names();
    std::array::from_fn(|i| Pole::new(names[i]))
}

/// Simple switch with two poles
#[derive(Debug, Clone)]
pub struct Switch {
    name: String,
    poles: [Pole; 2],
}

impl Switch {
    pub fn new() -> Self {
        Self::named("Switch")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            poles: default_poles(DeviceKind::Switch),
        }
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Switch {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Switch
    }

    fn poles(&self) -> &[Pole] {
        &self.poles
    }

    fn poles_mut(&mut self) -> &mut [Pole] {
        &mut self.poles
    }
}

/// Light fixture with two poles
#[derive(Debug, Clone)]
pub struct Light {
    name: String,
    poles: [Pole; 2],
}

impl Light {
    pub fn new() -> Self {
        Self::named("Light")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            poles: default_poles(DeviceKind::Light),
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Light {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn poles(&self) -> &[Pole] {
        &self.poles
    }

    fn poles_mut(&mut self) -> &mut [Pole] {
        &mut self.poles
    }
}

/// Generator with three poles.
///
/// A1, A2 and A3 are conventionally phase, neutral and ground; the names
/// carry no electrical meaning here.
#[derive(Debug, Clone)]
pub struct Generator {
    name: String,
    poles: [Pole; 3],
}

impl Generator {
    pub fn new() -> Self {
        Self::named("Generator")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            poles: default_poles(DeviceKind::Generator),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Generator {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Generator
    }

    fn poles(&self) -> &[Pole] {
        &self.poles
    }

    fn poles_mut(&mut self) -> &mut [Pole] {
        &mut self.poles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_poles() {
        let sw = Switch::new();
        assert_eq!(sw.kind(), DeviceKind::Switch);
        assert_eq!(sw.pole_count(), 2);
        assert_eq!(sw.pole_names(), vec!["A1", "A2"]);
        assert!(sw.pole("A3").is_none());
    }

    #[test]
    fn test_light_poles() {
        let lamp = Light::named("desk lamp");
        assert_eq!(lamp.name(), "desk lamp");
        assert_eq!(lamp.pole_at(1).map(Pole::name), Some("A1"));
        assert_eq!(lamp.pole_at(2).map(Pole::name), Some("A2"));
        assert!(lamp.pole_at(3).is_none());
    }

    #[test]
    fn test_generator_poles() {
        let generator = Generator::new();
        assert_eq!(generator.pole_count(), 3);
        for i in 1..=generator.pole_count() {
            let pole = generator.pole_at(i).unwrap();
            assert_eq!(generator.pole(pole.name()), Some(pole));
        }
        assert!(generator.pole_at(4).is_none());
    }

    #[test]
    fn test_renamed_pole_is_found_by_new_name() {
        let mut sw = Switch::new();
        sw.pole_mut("A1").unwrap().set_name("IN");
        assert!(sw.pole("A1").is_none());
        assert!(sw.pole("IN").is_some());
        assert_eq!(sw.pole_at(1).map(Pole::name), Some("IN"));
    }
}
