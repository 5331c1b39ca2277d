//! SubRip to WebVTT conversion

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Extension of convertible caption files
pub const SRT_EXTENSION: &str = "srt";

/// Extension of converted caption files
pub const VTT_EXTENSION: &str = "vtt";

/// First line of every WebVTT document
pub const WEBVTT_HEADER: &str = "WEBVTT";

/// One cue of a caption document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionBlock {
    pub timecode: String,
    pub text: String,
}

impl CaptionBlock {
    /// Parse a blank-line separated SubRip block.
    ///
    /// The first line is the cue counter and is dropped, the second is the
    /// timecode, everything after it is caption text.
    fn parse(block: &str, number: usize) -> Result<Self> {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() < 2 {
            return Err(CatalogError::MalformedSubtitle {
                block: number,
                lines: lines.len(),
            });
        }
        Ok(Self {
            timecode: lines[1].to_string(),
            text: lines[2..].join("\n"),
        })
    }
}

/// Normalize SubRip separators to their WebVTT spelling
fn normalize(srt: &str) -> String {
    srt.replace("\r\n", "\n")
        .replace(',', ".")
        .replace(" --> ", "-->")
}

/// Split a SubRip document into caption blocks
pub fn parse_blocks(srt: &str) -> Result<Vec<CaptionBlock>> {
    let normalized = normalize(srt);
    normalized
        .trim()
        .split("\n\n")
        .enumerate()
        .map(|(i, block)| CaptionBlock::parse(block, i + 1))
        .collect()
}

/// Convert SubRip text into a WebVTT document
pub fn srt_to_webvtt(srt: &str) -> Result<String> {
    let blocks = parse_blocks(srt)?;

    let mut vtt = format!("{}\n\n", WEBVTT_HEADER);
    for block in &blocks {
        vtt.push_str(&block.timecode);
        vtt.push('\n');
        vtt.push_str(&block.text);
        vtt.push_str("\n\n");
    }
    Ok(vtt)
}

/// Convert `filepath` into a `.vtt` file next to it.
///
/// Returns `Ok(false)` without touching the filesystem when the file is not
/// a `.srt`, and `Ok(false)` when the output could not be written. An
/// existing `.vtt` is overwritten.
pub fn srt_to_vtt<P: AsRef<Path>>(filepath: P) -> Result<bool> {
    let filepath = filepath.as_ref();
    if filepath.extension().and_then(|e| e.to_str()) != Some(SRT_EXTENSION) {
        return Ok(false);
    }

    let srt = fs::read_to_string(filepath)?;
    let vtt = srt_to_webvtt(&srt)?;

    let output = filepath.with_extension(VTT_EXTENSION);
    if let Err(e) = fs::write(&output, vtt) {
        tracing::warn!("Failed to write {:?}: {}", output, e);
        return Ok(false);
    }

    let written = output.exists();
    if written {
        tracing::info!("Converted {:?} to {:?}", filepath, output);
    }
    Ok(written)
}
