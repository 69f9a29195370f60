//! FFmpeg command lines for extracting matched content with the `dvdvideo` demuxer.
//!
//! Commands are only assembled here, never executed.

use std::path::Path;

use dvdmeta_core::ContentMatch;

/// Strips one leading `./` from the disc's device string.
pub fn dvd_path(device: &str) -> &str {
    device.strip_prefix("./").unwrap_or(device)
}

/// Default output prefix for a report: `<file stem>_episodes`.
pub fn default_output_prefix(report: &Path) -> String {
    let stem = report
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}_episodes")
}

/// Builds the command that extracts `content` from the disc at `dvd_path`.
pub fn command(content: &ContentMatch<'_>, dvd_path: &str, output_prefix: &str) -> String {
    let title = content.track().index;
    match content.chapter() {
        None => {
            let output = format!("{output_prefix}_track_{title:02}.mkv");
            format!("ffmpeg -f dvdvideo -i '{dvd_path}' -title {title} -map 0 -c copy {output:?}")
        }
        Some(chapter) => {
            let output = format!(
                "{output_prefix}_track_{title:02}_chapter_{:02}.mkv",
                chapter.index
            );
            format!(
                "ffmpeg -f dvdvideo -i '{dvd_path}' -title {title} -chapter_start {} -chapter_end {} -map 0 -c copy {output:?}",
                chapter.index,
                chapter.index + 1
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use dvdmeta_core::{Chapter, Track};

    use super::*;

    #[test]
    fn dvd_path_strips_relative_prefix() {
        for (device, expected) in [
            ("./s1d1/Law And Order Svu", "s1d1/Law And Order Svu"),
            ("s2d1/Some Movie", "s2d1/Some Movie"),
            ("/path/to/dvd", "/path/to/dvd"),
            ("./", ""),
            ("/dev/sr0", "/dev/sr0"),
        ] {
            assert_eq!(dvd_path(device), expected, "failed for device: {device}");
        }
    }

    #[test]
    fn default_prefix_uses_file_stem() {
        assert_eq!(
            default_output_prefix(Path::new("source/s1d1.xml")),
            "s1d1_episodes"
        );
    }

    #[test]
    fn track_command() {
        let track = Track {
            index: 3,
            length: 2583.5,
            ..Track::default()
        };
        let content = ContentMatch::Track {
            track: &track,
            duration: track.length,
        };

        assert_eq!(
            command(&content, "s1d1/Law And Order Svu", "s1d1_episodes"),
            "ffmpeg -f dvdvideo -i 's1d1/Law And Order Svu' -title 3 -map 0 -c copy \"s1d1_episodes_track_03.mkv\""
        );
    }

    #[test]
    fn chapter_command() {
        let chapter = Chapter {
            index: 4,
            length: 2400.0,
            start_cell: 7,
        };
        let track = Track {
            index: 12,
            chapters: vec![chapter],
            ..Track::default()
        };
        let content = ContentMatch::Chapter {
            track: &track,
            chapter: &track.chapters[0],
            duration: chapter.length,
        };

        let cmd = command(&content, "disc", "test");
        assert!(cmd.contains("-title 12 -chapter_start 4 -chapter_end 5"));
        assert!(cmd.ends_with("\"test_track_12_chapter_04.mkv\""));
        assert!(cmd.contains("-c copy"));
    }
}
