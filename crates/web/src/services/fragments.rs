// =============================================================================
// Folio Web - Fragment Loader
// =============================================================================
// Fetches shared HTML fragments (header, footer) and injects them into
// placeholder elements, then brings up the modules that depend on the
// injected markup.
// =============================================================================

use futures::future::join_all;
use gloo_net::http::Request;
use thiserror::Error;

use super::{icons::IconRenderer, Module};
use crate::utils;

// -----------------------------------------------------------------------------
// Error Types
// -----------------------------------------------------------------------------

/// Fragment load error types.
#[derive(Error, Debug, Clone)]
pub enum FragmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("No element matches selector: {0}")]
    TargetMissing(String),
}

// -----------------------------------------------------------------------------
// Fragment Loader
// -----------------------------------------------------------------------------

/// A named fragment and the selector of the element receiving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentSpec {
    pub name: String,
    pub target: String,
}

impl FragmentSpec {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

/// Loads reusable HTML fragments into the host document.
pub struct FragmentLoader {
    base_path: String,
}

impl FragmentLoader {
    /// Create a loader rooted at the given fragment base path.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resource URL for a named fragment.
    fn fragment_url(&self, name: &str) -> String {
        format!("{}/{}.html", self.base_path, name)
    }

    /// Load one fragment into the element matching `target`.
    ///
    /// Failures are logged and reported as `false`; they never propagate.
    pub async fn load(&self, name: &str, target: &str) -> bool {
        match self.try_load(name, target).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("Error loading fragment {}: {}", name, err);
                false
            }
        }
    }

    async fn try_load(&self, name: &str, target: &str) -> Result<(), FragmentError> {
        let response = Request::get(&self.fragment_url(name))
            .send()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FragmentError::Server {
                status: response.status(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;

        let target_el = utils::query(target)
            .ok_or_else(|| FragmentError::TargetMissing(target.to_string()))?;
        target_el.set_inner_html(&html);
        Ok(())
    }

    /// Load several fragments concurrently.
    ///
    /// Every load settles before this returns; results keep the input order.
    pub async fn load_many(&self, specs: &[FragmentSpec]) -> Vec<bool> {
        join_all(specs.iter().map(|spec| self.load(&spec.name, &spec.target))).await
    }

    /// Load the shared header and footer fragments, then bring up the modules
    /// that depend on the injected markup: icon regeneration first, then each
    /// module in the order given.
    ///
    /// A failed fragment or module init never aborts the sequence.
    pub async fn init_common(&self, icons: Option<&IconRenderer>, modules: &[&dyn Module]) {
        let results = self
            .load_many(&[
                FragmentSpec::new("header", "#header-placeholder"),
                FragmentSpec::new("footer", "#footer-placeholder"),
            ])
            .await;
        if results.iter().any(|ok| !ok) {
            log::warn!("Shared fragment load results: {:?}", results);
        }

        if let Some(icons) = icons {
            icons.refresh();
        }

        for module in modules {
            if let Err(err) = module.init() {
                log::warn!("{} init error: {}", module.name(), err);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_url_is_rooted_at_base_path() {
        let loader = FragmentLoader::new("/components");
        assert_eq!(loader.fragment_url("header"), "/components/header.html");
        assert_eq!(loader.fragment_url("footer"), "/components/footer.html");
    }

    #[test]
    fn fragment_spec_keeps_name_and_target() {
        let spec = FragmentSpec::new("header", "#header-placeholder");
        assert_eq!(spec.name, "header");
        assert_eq!(spec.target, "#header-placeholder");
    }
}
