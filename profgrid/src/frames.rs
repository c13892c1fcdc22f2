use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use profgrid_ui_tree::{
    LayoutDigest, SampleEntry, Snapshot, count_entries, layout_digest,
};
use serde::Deserialize;

/// One recorded refresh as stored in a frames file.
#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(default)]
    digest: Option<LayoutDigest>,
    /// Re-send the previous snapshot unchanged.
    #[serde(default)]
    repeat: bool,
    #[serde(default)]
    entries: Vec<SampleEntry>,
}

/// A refresh ready to be fed to grid views.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) entry_count: usize,
    pub(crate) digest: LayoutDigest,
    pub(crate) entries: Snapshot,
}

pub(crate) fn load(path: &Path) -> Result<Vec<Frame>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid frames in {}", path.display()))
}

pub(crate) fn parse(text: &str) -> Result<Vec<Frame>> {
    let raw: Vec<RawFrame> = serde_json::from_str(text)?;
    let mut frames: Vec<Frame> = Vec::with_capacity(raw.len());

    for (index, frame) in raw.into_iter().enumerate() {
        if frame.repeat {
            let Some(previous) = frames.last().cloned() else {
                bail!("frame {index} repeats but has no previous frame");
            };
            frames.push(previous);
            continue;
        }

        let digest = frame
            .digest
            .unwrap_or_else(|| layout_digest(&frame.entries));
        frames.push(Frame {
            entry_count: count_entries(&frame.entries),
            digest,
            entries: Rc::from(frame.entries),
        });
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FRAMES: &str = r##"[
        {
            "digest": "d1",
            "entries": [
                {
                    "id": 1, "name": "foo", "colour": "#FF0000",
                    "ms_length": 2.0, "ms_self": 1.0,
                    "call_count": 1, "recurse_depth": 0,
                    "children": [
                        {
                            "id": 2, "name": "bar", "colour": "#00FF00",
                            "ms_length": 1.0, "ms_self": 1.0,
                            "call_count": 1, "recurse_depth": 0
                        }
                    ]
                }
            ]
        },
        { "repeat": true },
        {
            "entries": [
                {
                    "id": 3, "name": "baz", "colour": "#0000FF",
                    "ms_length": 0.5, "ms_self": 0.5,
                    "call_count": 2, "recurse_depth": 1
                }
            ]
        }
    ]"##;

    #[test]
    fn parse_counts_nested_entries_and_keeps_digest() {
        let frames = parse(FRAMES).expect("frames");
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].entry_count, 2);
        assert_eq!(frames[0].digest, LayoutDigest::from("d1"));
    }

    #[test]
    fn parse_repeat_shares_previous_snapshot() {
        let frames = parse(FRAMES).expect("frames");
        assert!(Rc::ptr_eq(&frames[0].entries, &frames[1].entries));
    }

    #[test]
    fn parse_computes_missing_digest() {
        let frames = parse(FRAMES).expect("frames");
        assert_eq!(frames[2].digest, layout_digest(&frames[2].entries));
        assert_eq!(frames[2].entry_count, 1);
    }

    #[test]
    fn parse_rejects_leading_repeat() {
        let err = parse(r#"[{ "repeat": true }]"#).expect_err("no previous");
        assert!(err.to_string().contains("no previous frame"));
    }

    #[test]
    fn load_reports_path_on_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{ not json").expect("write");

        let err = load(file.path()).expect_err("invalid json");
        assert!(err.to_string().contains("invalid frames in"));
    }
}
