//! Gallery state: loading icons and retinting the copies.

use std::cell::RefCell;

use ih_core::HueShift;
use ih_svg::{ColorizeError, DocumentNode, colorize_with, make_ids_unique};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::fetch::Fetcher;
use crate::listing::{IconSource, fetch_listing};
use crate::surface::{IconPair, IconSurface};

/// An icon (or the listing itself) that did not make it into the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedIcon {
    pub name: String,
    pub reason: String,
}

/// Outcome of one [`Gallery::load`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Icons that passed the listing filter.
    pub listed: usize,
    pub loaded: usize,
    pub skipped: Vec<SkippedIcon>,
}

impl LoadReport {
    fn skip(&mut self, name: &str, err: &GalleryError) {
        self.skipped.push(SkippedIcon {
            name: name.to_string(),
            reason: err.to_string(),
        });
    }
}

/// Mounted icon pairs and the color their copies are tinted with.
#[derive(Debug)]
pub struct Gallery<N> {
    config: GalleryConfig,
    target: String,
    shift: HueShift,
    icons: Vec<IconPair<N>>,
}

impl<N: DocumentNode> Gallery<N> {
    /// Start an empty gallery tinted toward `config.initial_color`, which
    /// must be a recognized color.
    pub fn new(config: GalleryConfig) -> Result<Self, GalleryError> {
        let target = config.initial_color.clone();
        let shift = HueShift::parse(&target)
            .ok_or_else(|| ColorizeError::InvalidTarget(target.clone()))?;
        Ok(Self {
            config,
            target,
            shift,
            icons: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Color the copies are currently tinted toward.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn icons(&self) -> &[IconPair<N>] {
        &self.icons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Retint every copy toward `color`. Originals are never touched.
    ///
    /// Returns the number of rewritten paint channels. An unrecognized color
    /// is rejected before any copy changes and the previous target is kept.
    pub fn set_target(&mut self, color: &str) -> Result<usize, ColorizeError> {
        let shift = HueShift::parse(color)
            .ok_or_else(|| ColorizeError::InvalidTarget(color.to_string()))?;
        let mut rewritten = 0;
        for pair in &mut self.icons {
            rewritten += colorize_with(&mut pair.copy, &shift).rewritten;
        }
        self.target = color.to_string();
        self.shift = shift;
        info!(color, icons = self.icons.len(), rewritten, "retinted gallery");
        Ok(rewritten)
    }

    /// Mount one fetched icon: give both frames fresh ids, tint the copy
    /// with the current target and keep the pair.
    pub fn mount_icon<S>(
        &mut self,
        surface: &mut S,
        source: &IconSource,
        markup: &str,
    ) -> Result<(), GalleryError>
    where
        S: IconSurface<Node = N>,
    {
        let mut pair = surface.mount(source, markup, self.config.icon_size)?;
        let renamed = unique_content_ids(&mut pair.original) + unique_content_ids(&mut pair.copy);
        let report = colorize_with(&mut pair.copy, &self.shift);
        debug!(
            icon = %source.name,
            ids = renamed,
            rewritten = report.rewritten,
            "mounted icon"
        );
        self.icons.push(pair);
        Ok(())
    }

    /// Fetch the listing and then every icon in it, one after another,
    /// mounting each as soon as its markup has arrived.
    ///
    /// The gallery is borrowed only between fetches, so a retint requested
    /// while a fetch is pending sees the icons mounted so far and every later
    /// icon picks up the new target. Failures are logged and recorded in the
    /// report; nothing is retried.
    pub async fn load<F, S>(gallery: &RefCell<Self>, fetcher: &F, surface: &mut S) -> LoadReport
    where
        F: Fetcher,
        S: IconSurface<Node = N>,
    {
        let listing_url = gallery.borrow().config.listing_url();
        let mut report = LoadReport::default();

        let sources = match fetch_listing(fetcher, &listing_url).await {
            Ok(sources) => sources,
            Err(err) => {
                warn!(url = %listing_url, error = %err, "icon listing unavailable");
                report.skip(&listing_url, &err);
                return report;
            }
        };
        report.listed = sources.len();
        debug!(url = %listing_url, icons = sources.len(), "fetched icon listing");

        for source in &sources {
            let mounted = match fetcher.fetch_text(&source.download_url).await {
                Ok(markup) => gallery.borrow_mut().mount_icon(surface, source, &markup),
                Err(err) => Err(err.into()),
            };
            match mounted {
                Ok(()) => report.loaded += 1,
                Err(err) => {
                    warn!(icon = %source.name, error = %err, "skipping icon");
                    report.skip(&source.name, &err);
                }
            }
        }

        info!(
            listed = report.listed,
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "gallery loaded"
        );
        report
    }
}

/// Deduplicate ids inside a frame's content, leaving the frame id alone.
fn unique_content_ids<N: DocumentNode>(frame: &mut N) -> usize {
    let mut renamed = 0;
    frame.for_each_child(&mut |content| renamed += make_ids_unique(content).len());
    renamed
}
