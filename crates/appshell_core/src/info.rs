use serde::{Deserialize, Serialize};

use crate::descriptor::{AppStatus, NavLinkStatus};

/// Sanitized, serializable projection of an application descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAppInfo {
    pub id: String,
    pub title: String,
    pub status: AppStatus,
    pub nav_link_status: NavLinkStatus,
    pub app_route: String,
    pub meta: PublicAppMeta,
}

/// Search metadata with all defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAppMeta {
    pub keywords: Vec<String>,
    pub search_deep_links: Vec<PublicDeepLinkInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicDeepLinkInfo {
    pub id: String,
    pub title: String,
    /// Omitted from the serialized form when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub keywords: Vec<String>,
    pub search_deep_links: Vec<PublicDeepLinkInfo>,
}
