//! Text rendering of decoded discs and duration matches.

use std::fmt::{self, Write};

use dvdmeta_core::{ContentMatch, Disc, DurationWindow, MatchSummary, Track};

/// Tracks listed in a summary before the rest are elided.
const SUMMARY_TRACK_LIMIT: usize = 5;

/// Audio or subtitle streams listed per track in a summary.
const SUMMARY_STREAM_LIMIT: usize = 3;

/// Writes the per-file overview of a disc.
pub fn write_summary(out: &mut impl Write, file_name: &str, disc: &Disc) -> fmt::Result {
    writeln!(out, "\n=== {file_name} ===")?;
    writeln!(out, "Device: {}", disc.device)?;
    writeln!(out, "Title: {}", disc.title)?;
    writeln!(out, "Provider ID: {}", disc.provider_id)?;
    writeln!(out, "Number of tracks: {}", disc.tracks.len())?;
    writeln!(out, "Longest track: {}", disc.longest_track)?;

    for track in disc.tracks.iter().take(SUMMARY_TRACK_LIMIT) {
        writeln!(out, "\n  Track {}:", track.index)?;
        writeln!(
            out,
            "    Length: {:.2} seconds ({:.2} minutes)",
            track.length,
            track.minutes()
        )?;
        writeln!(out, "    Resolution: {}", track.resolution())?;
        writeln!(out, "    Aspect: {}", track.aspect)?;
        writeln!(out, "    Format: {} @ {:.2} fps", track.format, track.fps)?;
        writeln!(out, "    Chapters: {}", track.chapters.len())?;
        writeln!(out, "    Audio streams: {}", track.audio_streams.len())?;
        writeln!(out, "    Subtitle streams: {}", track.subtitle_streams.len())?;

        for audio in track.audio_streams.iter().take(SUMMARY_STREAM_LIMIT) {
            writeln!(
                out,
                "      Audio {}: {} ({}) - {}, {} Hz, {} channels",
                audio.index,
                audio.language,
                audio.language_code,
                audio.format,
                audio.frequency,
                audio.channels
            )?;
        }
        let rest = track.audio_streams.len().saturating_sub(SUMMARY_STREAM_LIMIT);
        if rest > 0 {
            writeln!(out, "      ... and {rest} more audio streams")?;
        }

        for subtitle in track.subtitle_streams.iter().take(SUMMARY_STREAM_LIMIT) {
            writeln!(
                out,
                "      Subtitle {}: {} ({})",
                subtitle.index, subtitle.language, subtitle.language_code
            )?;
        }
        let rest = track.subtitle_streams.len().saturating_sub(SUMMARY_STREAM_LIMIT);
        if rest > 0 {
            writeln!(out, "      ... and {rest} more subtitle streams")?;
        }
    }

    let rest = disc.tracks.len().saturating_sub(SUMMARY_TRACK_LIMIT);
    if rest > 0 {
        writeln!(out, "\n  ... and {rest} more tracks")?;
    }

    Ok(())
}

/// Writes every stream and chapter of one track.
pub fn write_track_details(out: &mut impl Write, track: &Track) -> fmt::Result {
    writeln!(out, "\n--- Detailed Track {} Information ---", track.index)?;
    writeln!(out, "Length: {:.2} seconds", track.length)?;
    writeln!(
        out,
        "Video: {}, {}, {}, {:.2} fps",
        track.format,
        track.resolution(),
        track.aspect,
        track.fps
    )?;
    writeln!(out, "VTS: {}, TTN: {}", track.vts, track.ttn)?;

    writeln!(out, "\nAudio Streams ({}):", track.audio_streams.len())?;
    for audio in &track.audio_streams {
        writeln!(
            out,
            "  [{}] {} ({}): {}, {} Hz, {} ch, Stream ID: {}",
            audio.index,
            audio.language,
            audio.language_code,
            audio.format,
            audio.frequency,
            audio.channels,
            audio.stream_id
        )?;
    }

    writeln!(out, "\nSubtitle Streams ({}):", track.subtitle_streams.len())?;
    for subtitle in &track.subtitle_streams {
        writeln!(
            out,
            "  [{}] {} ({}): {}, Stream ID: {}",
            subtitle.index,
            subtitle.language,
            subtitle.language_code,
            subtitle.content,
            subtitle.stream_id
        )?;
    }

    writeln!(out, "\nChapters ({}):", track.chapters.len())?;
    for chapter in &track.chapters {
        writeln!(
            out,
            "  Chapter {}: {:.2} seconds (starts at cell {})",
            chapter.index, chapter.length, chapter.start_cell
        )?;
    }

    Ok(())
}

/// Writes the matches found around a target duration, grouping chapter
/// matches under their track.
pub fn write_episodes(
    out: &mut impl Write,
    file_name: &str,
    window: &DurationWindow,
    matches: &[ContentMatch<'_>],
) -> fmt::Result {
    let target_minutes = window.target_seconds / 60.0;
    writeln!(out, "\n=== {file_name} - ~{target_minutes:.0} Minute Content ===")?;
    writeln!(
        out,
        "Looking for content between {:.1}-{:.1} minutes...",
        window.lower() / 60.0,
        window.upper() / 60.0
    )?;

    if matches.is_empty() {
        writeln!(
            out,
            "  No tracks or chapters found around {target_minutes:.0} minutes."
        )?;
        return Ok(());
    }

    let mut current_track = None;
    for content in matches {
        let track = content.track();
        match content.chapter() {
            None => {
                writeln!(
                    out,
                    "\n  ✓ Track {}: {:.2} minutes ({:.2} seconds)",
                    track.index,
                    content.duration() / 60.0,
                    content.duration()
                )?;
                writeln!(
                    out,
                    "    Resolution: {}, Format: {} @ {:.2} fps",
                    track.resolution(),
                    track.format,
                    track.fps
                )?;
                writeln!(
                    out,
                    "    Audio: {} streams, Subtitles: {} streams, Chapters: {}",
                    track.audio_streams.len(),
                    track.subtitle_streams.len(),
                    track.chapters.len()
                )?;
            }
            Some(chapter) => {
                if current_track != Some(track.index) {
                    current_track = Some(track.index);
                    writeln!(out, "\n  Track {} chapters:", track.index)?;
                    writeln!(
                        out,
                        "    Track length: {:.2} minutes, Resolution: {}",
                        track.minutes(),
                        track.resolution()
                    )?;
                }
                writeln!(
                    out,
                    "    ✓ Chapter {}: {:.2} minutes ({:.2} seconds)",
                    chapter.index,
                    chapter.minutes(),
                    chapter.length
                )?;
            }
        }
    }

    let summary = MatchSummary::from_matches(matches);
    writeln!(
        out,
        "\nSummary: {} tracks and {} chapters found around {target_minutes:.0} minutes.",
        summary.tracks, summary.chapters
    )
}
