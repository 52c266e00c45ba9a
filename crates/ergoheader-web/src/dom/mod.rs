//! Browser binding for the header and mobile menu controllers
//!
//! Every lookup is optional. A missing element is noted in the
//! [`AttachReport`](ergoheader_core::AttachReport) and the behavior that
//! needs it is simply not attached.

mod header;
mod listener;
mod menu;
mod page;
mod surface;

pub use header::HeaderBinding;
pub use listener::Listener;
pub use menu::MenuBinding;
pub use page::{attach_all, PageBindings};
pub use surface::{DomHeaderSurface, DomMenuSurface};
