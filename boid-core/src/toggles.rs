use core::fmt;
use core::str::FromStr;

use crate::error::UnknownBehavior;

/// A steering behavior that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Seek,
    Wander,
    Bounds,
    /// Separation, alignment and cohesion together.
    Flock,
    Separation,
    Alignment,
    Cohesion,
    AvoidObstacles,
}

impl Behavior {
    pub const ALL: [Behavior; 8] = [
        Behavior::Seek,
        Behavior::Wander,
        Behavior::Bounds,
        Behavior::Flock,
        Behavior::Separation,
        Behavior::Alignment,
        Behavior::Cohesion,
        Behavior::AvoidObstacles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Seek => "seek",
            Behavior::Wander => "wander",
            Behavior::Bounds => "bounds",
            Behavior::Flock => "flock",
            Behavior::Separation => "separation",
            Behavior::Alignment => "alignment",
            Behavior::Cohesion => "cohesion",
            Behavior::AvoidObstacles => "avoid",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Behavior {
    type Err = UnknownBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Behavior::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("avoid-obstacles").then_some(Behavior::AvoidObstacles))
            .ok_or_else(|| UnknownBehavior(s.into()))
    }
}

/// Which flocking forces a tick applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flocking {
    Off,
    /// All three, via the combined flock behavior.
    Combined,
    Individual {
        separation: bool,
        alignment: bool,
        cohesion: bool,
    },
}

/// Per-tick switches for every behavior. Owned by the caller and handed to
/// [`crate::Simulation::step`]; all off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggles {
    pub seek: bool,
    pub wander: bool,
    pub bounds: bool,
    pub flock: bool,
    pub separation: bool,
    pub alignment: bool,
    pub cohesion: bool,
    pub avoid_obstacles: bool,
}

impl Toggles {
    fn slot(&mut self, behavior: Behavior) -> &mut bool {
        match behavior {
            Behavior::Seek => &mut self.seek,
            Behavior::Wander => &mut self.wander,
            Behavior::Bounds => &mut self.bounds,
            Behavior::Flock => &mut self.flock,
            Behavior::Separation => &mut self.separation,
            Behavior::Alignment => &mut self.alignment,
            Behavior::Cohesion => &mut self.cohesion,
            Behavior::AvoidObstacles => &mut self.avoid_obstacles,
        }
    }

    pub fn get(&self, behavior: Behavior) -> bool {
        match behavior {
            Behavior::Seek => self.seek,
            Behavior::Wander => self.wander,
            Behavior::Bounds => self.bounds,
            Behavior::Flock => self.flock,
            Behavior::Separation => self.separation,
            Behavior::Alignment => self.alignment,
            Behavior::Cohesion => self.cohesion,
            Behavior::AvoidObstacles => self.avoid_obstacles,
        }
    }

    pub fn set(&mut self, behavior: Behavior, enabled: bool) {
        *self.slot(behavior) = enabled;
    }

    /// Flip a behavior and return its new state.
    pub fn toggle(&mut self, behavior: Behavior) -> bool {
        let slot = self.slot(behavior);
        *slot = !*slot;
        *slot
    }

    pub fn with(mut self, behavior: Behavior) -> Self {
        self.set(behavior, true);
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn enabled(&self) -> impl Iterator<Item = Behavior> + '_ {
        Behavior::ALL.into_iter().filter(|b| self.get(*b))
    }

    /// The combined flag wins over the individual ones.
    pub fn flocking(&self) -> Flocking {
        if self.flock {
            Flocking::Combined
        } else if self.separation || self.alignment || self.cohesion {
            Flocking::Individual {
                separation: self.separation,
                alignment: self.alignment,
                cohesion: self.cohesion,
            }
        } else {
            Flocking::Off
        }
    }
}
