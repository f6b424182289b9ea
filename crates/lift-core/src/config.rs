//! Fleet configuration and reset overrides.

use crate::{CoreError, CoreResult};

/// Shape of the fleet rebuilt on every reset.
///
/// The defaults (floors 0..=5, five riders per cabin, two cabins) are what
/// the controller runs with until the first reset overrides them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    /// Lowest served floor (inclusive).  May be negative.
    pub lower_floor: i32,

    /// Highest served floor (inclusive).  Must be above `lower_floor`.
    pub higher_floor: i32,

    /// Maximum number of riders aboard one cabin.
    pub capacity: usize,

    /// Number of cabins in the fleet.
    pub cabin_count: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            lower_floor:  0,
            higher_floor: 5,
            capacity:     5,
            cabin_count:  2,
        }
    }
}

impl FleetConfig {
    /// Reject shapes the decision logic cannot run on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.lower_floor >= self.higher_floor {
            return Err(CoreError::Config(format!(
                "lower floor {} must be below higher floor {}",
                self.lower_floor, self.higher_floor
            )));
        }
        if self.capacity == 0 {
            return Err(CoreError::Config("cabin capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// `true` if `floor` is within `[lower_floor, higher_floor]`.
    #[inline]
    pub fn contains(&self, floor: i32) -> bool {
        (self.lower_floor..=self.higher_floor).contains(&floor)
    }

    /// Number of floors between the two bounds.
    #[inline]
    pub fn span(&self) -> i32 {
        self.higher_floor - self.lower_floor
    }

    /// Floor every cabin starts on after a reset: floor 0, clamped into the
    /// served range.
    #[inline]
    pub fn start_floor(&self) -> i32 {
        0_i32.clamp(self.lower_floor, self.higher_floor)
    }
}

/// Optional overrides applied on top of the current [`FleetConfig`] by a
/// reset.  Any field left `None` keeps its previous value.
///
/// ```rust,ignore
/// let params = ResetParams::new()
///     .floors(-2, 20)
///     .cabin_count(3)
///     .cause("new building profile");
/// engine.reset(params)?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetParams {
    pub lower_floor:  Option<i32>,
    pub higher_floor: Option<i32>,
    pub capacity:     Option<usize>,
    pub cabin_count:  Option<usize>,
    /// Free-text reason reported by the caller; logged, never interpreted.
    pub cause:        Option<String>,
}

impl ResetParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lower_floor(mut self, floor: i32) -> Self {
        self.lower_floor = Some(floor);
        self
    }

    pub fn higher_floor(mut self, floor: i32) -> Self {
        self.higher_floor = Some(floor);
        self
    }

    /// Set both bounds at once.
    pub fn floors(self, lower: i32, higher: i32) -> Self {
        self.lower_floor(lower).higher_floor(higher)
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn cabin_count(mut self, count: usize) -> Self {
        self.cabin_count = Some(count);
        self
    }

    pub fn cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Overlay these overrides on `base` and validate the result.
    pub fn apply(&self, base: &FleetConfig) -> CoreResult<FleetConfig> {
        let config = FleetConfig {
            lower_floor:  self.lower_floor.unwrap_or(base.lower_floor),
            higher_floor: self.higher_floor.unwrap_or(base.higher_floor),
            capacity:     self.capacity.unwrap_or(base.capacity),
            cabin_count:  self.cabin_count.unwrap_or(base.cabin_count),
        };
        config.validate()?;
        Ok(config)
    }
}
