// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.
//!
//! Toasts stack from the top-right corner, newest at the bottom. Each one
//! auto-dismisses after its duration or closes early from its "×" button,
//! and always plays its exit transition before leaving the tree.
//!
//! # Components
//!
//! - [`category`] - The four categories with their icons and accent colors
//! - [`notification`] - `Notification` requests and on-screen `Entry` state
//! - [`container`] - `ToastContainer`, the ordered store swept on every tick
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! let id = presenter.notify(Notification::success("Saved").with_title("Done"));
//! presenter.update(Message::CloseNotification(id));
//! ```

pub mod category;
pub mod container;
pub mod notification;
pub mod toast;

pub use category::Category;
pub use container::ToastContainer;
pub use notification::{Entry, Notification, NotificationId};
pub use toast::Toast;
