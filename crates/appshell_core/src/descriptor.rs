use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Accessibility of a registered application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStatus {
    #[default]
    Accessible,
    Inaccessible,
}

/// How the application appears in navigation. `Default` means "derive from
/// [`AppStatus`]"; the other values are explicit declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLinkStatus {
    #[default]
    Default,
    Hidden,
    Visible,
    Disabled,
}

/// Teardown closure returned by a [`MountHandler`].
pub type UnmountHandler = Box<dyn FnOnce() + Send>;

/// Callback invoked when the shell mounts the application.
pub type MountHandler = Arc<dyn Fn() -> UnmountHandler + Send + Sync>;

/// Partial status override produced by a [`StatusUpdater`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppUpdate {
    pub status: Option<AppStatus>,
    pub nav_link_status: Option<NavLinkStatus>,
}

/// Live update hook polled by the owning registry after registration.
pub type StatusUpdater = Arc<dyn Fn(&AppDescriptor) -> Option<AppUpdate> + Send + Sync>;

/// A named sub-route of an application, discoverable from shell search.
/// Children are owned by value; a link tree is always acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkDescriptor {
    pub id: String,
    pub title: String,
    /// Relative sub-route. Absent for pure grouping nodes.
    pub path: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub search_deep_links: Option<Vec<DeepLinkDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppMeta {
    pub keywords: Option<Vec<String>>,
    pub search_deep_links: Option<Vec<DeepLinkDescriptor>>,
}

/// Internal record for a registered application, including the behavior
/// hooks that must never leave the owning module.
#[derive(Clone)]
pub struct AppDescriptor {
    pub id: String,
    pub title: String,
    pub status: AppStatus,
    pub nav_link_status: NavLinkStatus,
    pub app_route: String,
    pub mount: MountHandler,
    pub updater: StatusUpdater,
    pub meta: Option<AppMeta>,
}

impl fmt::Debug for AppDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("status", &self.status)
            .field("nav_link_status", &self.nav_link_status)
            .field("app_route", &self.app_route)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}
