//! Tiler: measure, solve, reconcile.
//!
//! [`Tiler`] owns the container node, the ordered content items, and a
//! [`TilerConfig`]. The caller decides when to recompute (startup, resize, a
//! timer) and supplies the measured container size each time.

use std::time::Duration;

use tracing::debug;

use crate::content::{collect_items, ContentError, ContentItem};
use crate::dom::{Dom, NodeId};
use crate::geometry::Size;
use crate::layout::{solve, solve_memoized, LayoutEngine, Solution};
use crate::reconcile::{build, reconcile, HostTree};

/// Errors from setting up a [`Tiler`].
#[derive(Debug, thiserror::Error)]
pub enum TilerError {
    #[error("no node with id {0:?}")]
    MissingNode(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

// ---------------------------------------------------------------------------
// TilerConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Tiler`].
#[derive(Debug, Clone, PartialEq)]
pub struct TilerConfig {
    /// Gap between panes, in layout units.
    pub gap: f64,
    /// Cache sub-layouts while solving. Same result, faster for many items.
    pub memoize: bool,
    /// How often the driver should recompute without a resize.
    pub refresh: Duration,
    /// Id of the node the layout is rendered into.
    pub container_id: String,
    /// Id of the node whose children are the content items.
    pub contents_id: String,
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self {
            gap: 10.0,
            memoize: false,
            refresh: Duration::from_millis(250),
            container_id: "app".into(),
            contents_id: "contents".into(),
        }
    }
}

impl TilerConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap (builder).
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Enable or disable memoized solving (builder).
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Set the periodic refresh interval (builder).
    pub fn with_refresh(mut self, refresh: Duration) -> Self {
        self.refresh = refresh;
        self
    }

    /// Set the container and contents ids (builder).
    pub fn with_ids(mut self, container: impl Into<String>, contents: impl Into<String>) -> Self {
        self.container_id = container.into();
        self.contents_id = contents.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Tiler
// ---------------------------------------------------------------------------

/// Keeps one container laid out over a fixed list of content items.
#[derive(Debug, Clone)]
pub struct Tiler {
    container: NodeId,
    items: Vec<ContentItem>,
    config: TilerConfig,
}

impl Tiler {
    /// Create a tiler over explicit items.
    pub fn new(container: NodeId, items: Vec<ContentItem>, config: TilerConfig) -> Self {
        Self {
            container,
            items,
            config,
        }
    }

    /// Find the container and contents nodes by id and read the items.
    pub fn from_dom(dom: &Dom, config: TilerConfig) -> Result<Self, TilerError> {
        let container = dom
            .query_by_id(&config.container_id)
            .ok_or_else(|| TilerError::MissingNode(config.container_id.clone()))?;
        let contents = dom
            .query_by_id(&config.contents_id)
            .ok_or_else(|| TilerError::MissingNode(config.contents_id.clone()))?;
        let items = collect_items(dom, contents)?;
        debug!(items = items.len(), "tiler ready");
        Ok(Self::new(container, items, config))
    }

    /// The node layouts are rendered into.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The content items, in layout order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// The active configuration.
    pub fn config(&self) -> &TilerConfig {
        &self.config
    }

    /// Solve for a container of the given size without touching the host.
    pub fn solve(&self, size: Size) -> Solution {
        if self.config.memoize {
            solve_memoized(size.width, size.height, self.config.gap, &self.items, None)
        } else {
            solve(size.width, size.height, self.config.gap, &self.items, None)
        }
    }

    /// Solve and render into fresh nodes. Use when nothing has been rendered yet.
    pub fn first_paint<H: HostTree + ?Sized>(&self, host: &mut H, size: Size) -> f64 {
        let _span = tracing::debug_span!("first_paint", width = size.width, height = size.height)
            .entered();
        let solution = self.solve(size);
        build(host, self.container, &solution.tree);
        solution.cost
    }

    /// Solve and reconcile the existing rendering. Returns the layout cost.
    pub fn recompute<H: HostTree + ?Sized>(&self, host: &mut H, size: Size) -> f64 {
        let _span = tracing::debug_span!("recompute", width = size.width, height = size.height)
            .entered();
        let solution = self.solve(size);
        reconcile(host, self.container, &solution.tree);
        debug!(cost = solution.cost, "layout applied");
        solution.cost
    }

    /// Measure the container with `engine`, then recompute.
    ///
    /// `engine` must have been synced and computed over a subtree containing the
    /// container. Returns `None` if the container has no computed layout.
    pub fn recompute_measured(&self, dom: &mut Dom, engine: &LayoutEngine) -> Option<f64> {
        let size = engine.measure(self.container)?;
        Some(self.recompute(dom, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ASPECT_ATTR, WEIGHT_ATTR};
    use crate::dom::NodeData;

    fn page() -> Dom {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("Body"));
        dom.insert_child(body, NodeData::new("App").with_id("app"));
        let contents = dom.insert_child(body, NodeData::new("List").with_id("contents"));
        dom.insert_child(contents, NodeData::new("Panel").with_attr(ASPECT_ATTR, "16:9"));
        dom.insert_child(contents, NodeData::new("Panel").with_attr(WEIGHT_ATTR, "2"));
        dom.insert_child(contents, NodeData::new("Panel"));
        dom
    }

    #[test]
    fn default_config() {
        let config = TilerConfig::default();
        assert_eq!(config.gap, 10.0);
        assert!(!config.memoize);
        assert_eq!(config.refresh, Duration::from_millis(250));
        assert_eq!(config.container_id, "app");
        assert_eq!(config.contents_id, "contents");
    }

    #[test]
    fn config_builders() {
        let config = TilerConfig::new()
            .with_gap(4.0)
            .with_memoize(true)
            .with_refresh(Duration::from_secs(1))
            .with_ids("root", "panels");
        assert_eq!(config.gap, 4.0);
        assert!(config.memoize);
        assert_eq!(config.refresh, Duration::from_secs(1));
        assert_eq!(config.container_id, "root");
        assert_eq!(config.contents_id, "panels");
    }

    #[test]
    fn from_dom_reads_items_in_order() {
        let dom = page();
        let tiler = Tiler::from_dom(&dom, TilerConfig::default()).unwrap();
        assert_eq!(tiler.container(), dom.query_by_id("app").unwrap());
        assert_eq!(tiler.items().len(), 3);
        assert!(tiler.items()[0].target_aspect.is_some());
        assert_eq!(tiler.items()[1].weight, Some(2.0));
    }

    #[test]
    fn from_dom_missing_container() {
        let dom = page();
        let err = Tiler::from_dom(&dom, TilerConfig::new().with_ids("nope", "contents")).unwrap_err();
        assert!(matches!(err, TilerError::MissingNode(ref id) if id == "nope"));
    }

    #[test]
    fn from_dom_bad_attribute() {
        let mut dom = page();
        let contents = dom.query_by_id("contents").unwrap();
        dom.insert_child(contents, NodeData::new("Panel").with_attr(ASPECT_ATTR, "0:1"));
        let err = Tiler::from_dom(&dom, TilerConfig::default()).unwrap_err();
        assert!(matches!(err, TilerError::Content(ContentError::InvalidAspect { .. })));
    }

    #[test]
    fn recompute_moves_items_into_container() {
        let mut dom = page();
        let tiler = Tiler::from_dom(&dom, TilerConfig::default()).unwrap();
        let cost = tiler.recompute(&mut dom, Size::new(800.0, 600.0));
        assert!(cost.is_finite());

        let contents = dom.query_by_id("contents").unwrap();
        assert!(dom.children(contents).is_empty());
        for item in tiler.items() {
            assert!(dom.ancestors(item.node).contains(&tiler.container()));
        }
    }

    #[test]
    fn memoized_config_gives_same_cost() {
        let mut plain_dom = page();
        let mut memo_dom = page();
        let plain = Tiler::from_dom(&plain_dom, TilerConfig::default()).unwrap();
        let memo = Tiler::from_dom(&memo_dom, TilerConfig::new().with_memoize(true)).unwrap();
        let size = Size::new(1024.0, 768.0);
        assert_eq!(plain.recompute(&mut plain_dom, size), memo.recompute(&mut memo_dom, size));
    }

    #[test]
    fn first_paint_then_recompute_is_stable() {
        let mut dom = page();
        let tiler = Tiler::from_dom(&dom, TilerConfig::default()).unwrap();
        let size = Size::new(800.0, 600.0);
        tiler.first_paint(&mut dom, size);
        let before = dom.mutations();
        tiler.recompute(&mut dom, size);
        assert_eq!(dom.mutations(), before);
    }

    #[test]
    fn recompute_measured_uses_engine_size() {
        let mut dom = page();
        let tiler = Tiler::from_dom(&dom, TilerConfig::default()).unwrap();
        let app = tiler.container();
        let viewport = Size::new(300.0, 100.0);

        let mut engine = LayoutEngine::new();
        engine.sync(&dom, app, viewport);
        engine.compute(viewport);
        let cost = tiler.recompute_measured(&mut dom, &engine).unwrap();
        assert_eq!(cost, tiler.solve(viewport).cost);
    }
}
