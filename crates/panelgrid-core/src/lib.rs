//! Panelgrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Panelgrid layout
//! engine and its exporters. It includes:
//!
//! - **Templates**: The two supported card shapes ([`template::LayoutKind`])
//! - **Colors**: Golden-angle card colors and CSS color validation ([`color`] module)
//! - **Geometry**: Pixel positions and sizes ([`geometry`] module)
//! - **Panels**: Cards, panels, and their labels ([`panel`] module)

pub mod color;
pub mod geometry;
pub mod panel;
pub mod template;
