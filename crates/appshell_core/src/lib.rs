//! Appshell core: pure projection of application descriptors into
//! serializable public application info.
mod descriptor;
mod info;
mod projection;

pub use descriptor::{
    AppDescriptor, AppMeta, AppStatus, AppUpdate, DeepLinkDescriptor, MountHandler,
    NavLinkStatus, StatusUpdater, UnmountHandler,
};
pub use info::{PublicAppInfo, PublicAppMeta, PublicDeepLinkInfo};
pub use projection::public_app_info;
