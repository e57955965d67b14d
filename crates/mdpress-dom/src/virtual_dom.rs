//! Process-wide virtual document handle.

use std::sync::OnceLock;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::DomError;
use crate::tree::VirtualDocument;

/// Prepended to every fragment so leading `<script>`, `<style>` or `<meta>`
/// are placed in the body rather than the head.
const BODY_START: &str = "<body>";

/// Initialized virtual document library.
///
/// Built at most once per process by [`VirtualDom::shared`] and read-only
/// afterwards, so it can be shared by concurrent renders. Parsing follows the
/// HTML5 tree construction rules, so any input produces a document.
pub struct VirtualDom {
    opts: ParseOpts,
}

impl VirtualDom {
    fn new() -> Self {
        Self {
            opts: ParseOpts {
                // Matches documents created by a browser `DOMParser`, where
                // `<noscript>` content is parsed as markup.
                tree_builder: TreeBuilderOpts {
                    scripting_enabled: false,
                    ..TreeBuilderOpts::default()
                },
                ..ParseOpts::default()
            },
        }
    }

    /// Shared handle, created on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<VirtualDom> = OnceLock::new();
        SHARED.get_or_init(|| {
            tracing::debug!("Initialized virtual document library");
            Self::new()
        })
    }

    /// Parse an HTML fragment into a virtual document.
    pub fn parse(&self, html: &str) -> Result<VirtualDocument, DomError> {
        let mut input = String::with_capacity(BODY_START.len() + html.len());
        input.push_str(BODY_START);
        input.push_str(html);

        let dom = parse_document(RcDom::default(), self.opts.clone()).one(input);
        let body = find_element(&dom.document, "body").ok_or(DomError::MissingElement("body"))?;
        Ok(VirtualDocument::new(body))
    }
}

/// First element named `local` under `node`, depth first.
fn find_element(node: &Handle, local: &str) -> Option<Handle> {
    node.children.borrow().iter().find_map(|child| match child.data {
        NodeData::Element { ref name, .. } if name.local.as_ref() == local => Some(child.clone()),
        _ => find_element(child, local),
    })
}
