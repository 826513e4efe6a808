//! Context-dependent key hints on the bottom line

pub mod help_line_render;
