//! core/probe.rs
//! Startup asset checks (Symphonia probe for sounds, existence for images).

use std::fs::File;
use std::path::{Path, PathBuf};

use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use super::catalog::Catalog;
use super::error::{Result, SoundscapeError};
use super::types::ItemId;

/// One problem found while checking the catalog. `id` is None for shared assets.
#[derive(Debug)]
pub struct AssetIssue {
    pub id: Option<ItemId>,
    pub error: SoundscapeError,
}

/// Confirm `path` holds a decodable audio track.
/// Returns its duration in ms when the container declares one.
pub fn probe_sound(path: &Path) -> Result<Option<u64>> {
    let file = File::open(path).map_err(|e| SoundscapeError::io(path, e))?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| SoundscapeError::decode(path, format!("format probe failed: {e}")))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| SoundscapeError::decode(path, "no supported audio track"))?;

    let params = &track.codec_params;

    symphonia::default::get_codecs()
        .make(params, &DecoderOptions::default())
        .map_err(|e| SoundscapeError::decode(path, format!("decoder init failed: {e}")))?;

    Ok(duration_from_params(params.time_base, params.n_frames))
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SoundscapeError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "asset not found"),
        ))
    }
}

/// Check every asset the UI will touch. Never fails; problems are collected.
pub fn check_catalog(catalog: &Catalog, paused_icon: &Path) -> Vec<AssetIssue> {
    let mut issues: Vec<AssetIssue> = Vec::new();

    for item in catalog.items() {
        match probe_sound(&item.sound) {
            Ok(Some(ms)) => log::debug!("item {} loop is {ms} ms", item.id),
            Ok(None) => log::debug!("item {} loop length unknown", item.id),
            Err(error) => issues.push(AssetIssue {
                id: Some(item.id),
                error,
            }),
        }

        for image in [&item.background, &item.icon] {
            if let Err(error) = require_file(image) {
                issues.push(AssetIssue {
                    id: Some(item.id),
                    error,
                });
            }
        }
    }

    if let Err(error) = require_file(paused_icon) {
        issues.push(AssetIssue { id: None, error });
    }

    issues
}

/// Paths the checks were run against, for log lines.
pub fn issue_path(issue: &AssetIssue) -> Option<&PathBuf> {
    match &issue.error {
        SoundscapeError::Io { path, .. } | SoundscapeError::Decode { path, .. } => Some(path),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::write_tone;
    use crate::core::types::CatalogItem;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_probe_wav() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tone.wav");
        write_tone(&path, 1);

        let Some(ms) = probe_sound(&path).unwrap() else {
            panic!("wav should declare its length");
        };
        assert!((990..=1010).contains(&ms), "unexpected duration {ms}");
    }

    #[test]
    fn test_probe_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.mp3");

        assert!(matches!(
            probe_sound(&path),
            Err(SoundscapeError::Io { .. })
        ));
    }

    #[test]
    fn test_probe_garbage_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("noise.bin");
        fs::write(&path, b"definitely not audio").unwrap();

        assert!(matches!(
            probe_sound(&path),
            Err(SoundscapeError::Decode { .. })
        ));
    }

    #[test]
    fn test_duration_from_params() {
        assert_eq!(duration_from_params(Some(TimeBase::new(1, 1000)), Some(2500)), Some(2500));
        assert_eq!(duration_from_params(None, Some(10)), None);
        assert_eq!(duration_from_params(Some(TimeBase::new(1, 44100)), None), None);
    }

    #[test]
    fn test_check_catalog_reports_each_missing_asset() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        write_tone(&root.join("ok.wav"), 1);
        fs::write(root.join("ok.jpg"), b"jpg").unwrap();
        fs::write(root.join("ok.svg"), b"<svg/>").unwrap();
        fs::write(root.join("pause.svg"), b"<svg/>").unwrap();

        let catalog = Catalog::new(vec![
            CatalogItem::new(1, "ok.wav", "ok.jpg", "ok.svg"),
            CatalogItem::new(2, "gone.wav", "ok.jpg", "gone.svg"),
        ])
        .unwrap()
        .resolve(root);

        let issues = check_catalog(&catalog, &root.join("pause.svg"));
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.id == Some(2)));
        assert_eq!(issue_path(&issues[1]), Some(&root.join("gone.svg")));

        let issues = check_catalog(&catalog, &root.join("missing-pause.svg"));
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[2].id, None);
    }
}
