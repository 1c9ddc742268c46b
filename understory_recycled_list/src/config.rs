// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time settings for a [`RecycledList`](crate::RecycledList).

use crate::{EdgeSlack, Scalar};

/// Initial viewport and slack for a [`RecycledList`](crate::RecycledList).
///
/// With the `serde` feature this can be loaded alongside other host settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig<S: Scalar> {
    /// Height of the viewport.
    pub viewport_extent: S,
    /// Margin around the viewport used when computing the visible range.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slack: EdgeSlack<S>,
}

impl<S: Scalar> ListConfig<S> {
    /// Creates a config with the given viewport height and default slack.
    #[must_use]
    pub fn new(viewport_extent: S) -> Self {
        Self {
            viewport_extent,
            slack: EdgeSlack::default(),
        }
    }

    /// Replaces the slack.
    #[must_use]
    pub fn with_slack(mut self, slack: EdgeSlack<S>) -> Self {
        self.slack = slack;
        self
    }
}

impl<S: Scalar> Default for ListConfig<S> {
    fn default() -> Self {
        Self::new(S::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::ListConfig;
    use crate::EdgeSlack;

    #[test]
    fn default_config_uses_default_slack() {
        let config = ListConfig::<f32>::default();
        assert_eq!(config.viewport_extent, 0.0);
        assert_eq!(config.slack, EdgeSlack::new(1.0, 2.0));

        let config = ListConfig::new(240.0_f64).with_slack(EdgeSlack::none());
        assert_eq!(config.viewport_extent, 240.0);
        assert_eq!(config.slack.before, 0.0);
        assert_eq!(config.slack.after, 0.0);
    }
}
