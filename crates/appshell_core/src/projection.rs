use crate::descriptor::{AppDescriptor, AppStatus, DeepLinkDescriptor, NavLinkStatus};
use crate::info::{PublicAppInfo, PublicAppMeta, PublicDeepLinkInfo};

/// Pure projection: strips the behavior hooks from a descriptor and returns
/// its serializable public record, with `nav_link_status` derived and every
/// level of the deep-link tree normalized.
pub fn public_app_info(app: &AppDescriptor) -> PublicAppInfo {
    let meta = app.meta.as_ref();
    PublicAppInfo {
        id: app.id.clone(),
        title: app.title.clone(),
        status: app.status,
        nav_link_status: derive_nav_link_status(app.nav_link_status, app.status),
        app_route: app.app_route.clone(),
        meta: PublicAppMeta {
            keywords: meta.and_then(|m| m.keywords.clone()).unwrap_or_default(),
            search_deep_links: normalize_deep_links(
                meta.and_then(|m| m.search_deep_links.as_deref())
                    .unwrap_or_default(),
            ),
        },
    }
}

impl From<&AppDescriptor> for PublicAppInfo {
    fn from(app: &AppDescriptor) -> Self {
        public_app_info(app)
    }
}

/// A declared status always wins; only `Default` is derived.
fn derive_nav_link_status(declared: NavLinkStatus, status: AppStatus) -> NavLinkStatus {
    match (declared, status) {
        (NavLinkStatus::Default, AppStatus::Accessible) => NavLinkStatus::Visible,
        (NavLinkStatus::Default, AppStatus::Inaccessible) => NavLinkStatus::Hidden,
        (declared, _) => declared,
    }
}

fn normalize_deep_links(links: &[DeepLinkDescriptor]) -> Vec<PublicDeepLinkInfo> {
    links.iter().map(normalize_deep_link).collect()
}

/// Depth-first. Input order is preserved at every level; terminal nodes end
/// with explicit empty vectors, never absent fields.
fn normalize_deep_link(link: &DeepLinkDescriptor) -> PublicDeepLinkInfo {
    PublicDeepLinkInfo {
        id: link.id.clone(),
        title: link.title.clone(),
        path: link.path.clone(),
        keywords: link.keywords.clone().unwrap_or_default(),
        search_deep_links: normalize_deep_links(
            link.search_deep_links.as_deref().unwrap_or_default(),
        ),
    }
}
