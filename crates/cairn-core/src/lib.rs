//! Cairn Core Types and Drawing Primitives
//!
//! This crate provides the building blocks the Cairn composition pipeline
//! draws nodes with. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds, and insets ([`geometry`] module)
//! - **Draw**: Shapes, decorations, icons, and text ([`draw`] module)

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod identifier;
