//! Subtitle conversion module
//!
//! Rewrites SubRip (`.srt`) caption files as WebVTT (`.vtt`) siblings so
//! browsers can load them as text tracks.

pub mod srt;

pub use srt::{srt_to_vtt, srt_to_webvtt, CaptionBlock, SRT_EXTENSION, VTT_EXTENSION, WEBVTT_HEADER};
