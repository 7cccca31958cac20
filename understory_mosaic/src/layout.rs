// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached layout controller.
//!
//! [`MosaicLayout`] keeps the most recent [`LayoutResult`] around until
//! something invalidates it: a configuration change, a different dimension,
//! or an explicit [`MosaicLayout::invalidate`] when the source's answers
//! changed. Results are never patched; an invalid result is rebuilt wholesale.

use alloc::vec::Vec;

use tracing::debug;

use crate::axis::Direction;
use crate::builder::build;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::result::LayoutResult;
use crate::source::PatternSource;

/// Owns a [`LayoutConfig`] and caches the layout built from it.
#[derive(Clone, Debug, Default)]
pub struct MosaicLayout {
    config: LayoutConfig,
    dimension: Vec<usize>,
    cached: Option<LayoutResult>,
}

impl MosaicLayout {
    /// Creates a controller with no cached layout.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            dimension: Vec::new(),
            cached: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Replaces the configuration, invalidating the cache if it changed.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Changes the direction, invalidating the cache if it changed.
    pub fn set_direction(&mut self, direction: Direction) {
        let mut config = self.config;
        config.set_direction(direction);
        self.set_config(config);
    }

    /// Changes the cross-axis length, invalidating the cache if it changed.
    pub fn set_cross_axis_length(&mut self, length: f64) {
        let mut config = self.config;
        config.set_cross_axis_length(length);
        self.set_config(config);
    }

    /// Drops the cached layout; the next [`layout`](Self::layout) call rebuilds.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Returns `true` if a layout is cached.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.cached.is_some()
    }

    /// The cached layout, if any.
    #[must_use]
    pub fn cached(&self) -> Option<&LayoutResult> {
        self.cached.as_ref()
    }

    /// Content extent of the cached layout, if any.
    #[must_use]
    pub fn content_extent(&self) -> Option<f64> {
        self.cached.as_ref().map(LayoutResult::content_extent)
    }

    /// Returns the layout for `dimension`, rebuilding it if the cache is
    /// invalid or was built for a different dimension.
    ///
    /// On error the cache is left empty.
    pub fn layout<S: PatternSource + ?Sized>(
        &mut self,
        dimension: &[usize],
        source: &S,
    ) -> Result<&LayoutResult, LayoutError> {
        if self.cached.is_some() && self.dimension == dimension {
            debug!(sections = dimension.len(), "reusing cached mosaic layout");
        } else {
            self.cached = None;
            self.dimension.clear();
            self.dimension.extend_from_slice(dimension);
            debug!(sections = dimension.len(), "rebuilding mosaic layout");
        }
        let result = match self.cached.take() {
            Some(result) => result,
            None => build(dimension, source, &self.config)?,
        };
        Ok(&*self.cached.insert(result))
    }
}
