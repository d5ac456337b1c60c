//! Browser-facing pages rendered with Askama templates.

pub mod handlers;
