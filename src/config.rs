/// Router-wide settings. Groups inherit the settings of the router they are
/// declared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    last_route_cache: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            last_route_cache: true,
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the single-entry cache in front of route lookup.
    pub fn last_route_cache(mut self, enabled: bool) -> Self {
        self.last_route_cache = enabled;
        self
    }

    pub fn is_last_route_cache_enabled(&self) -> bool {
        self.last_route_cache
    }
}
