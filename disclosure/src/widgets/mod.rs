//! Disclosure widgets.
//!
//! A [`Disclosure`] owns the open/closed state and publishes a
//! [`DisclosureContext`] to its subtree. A [`DisclosureButton`] toggles it and
//! a [`DisclosurePanel`] shows or hides its content. Button and panel hold no
//! state of their own.
//!
//! # Example
//!
//! ```
//! use disclosure::prelude::*;
//!
//! let props = DisclosureProps::new().children(vec![
//!     DisclosureButton::new().label("Details").into(),
//!     DisclosurePanel::new().child("Hidden content").into(),
//! ]);
//! let disclosure = Disclosure::mount(&props, &SequentialIds::new());
//!
//! let renderer = Renderer::new();
//! let out = renderer.render(&disclosure.view(props)).unwrap();
//! assert_eq!(out.len(), 2);
//! assert!(out[1].hidden);
//! ```

mod button;
mod disclosure;
mod panel;

pub use button::DisclosureButton;
pub use disclosure::{
    Children, DataState, Disclosure, DisclosureContext, DisclosureProps, OwnershipMode,
};
pub use panel::DisclosurePanel;
