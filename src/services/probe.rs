use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Duration:\s(\d+):(\d+):(\d+\.\d+)").expect("valid duration regex")
});

/// Extracts the container duration, in seconds, from ffmpeg's diagnostic
/// output (`Duration: HH:MM:SS.ss`). Returns `None` when no duration is
/// printed, e.g. `Duration: N/A` for streams.
pub fn parse_duration(diagnostics: &str) -> Option<f64> {
    let caps = DURATION_RE.captures(diagnostics)?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Picks the frame offset for the thumbnail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPolicy {
    pub fraction: f64,
    pub fallback_seconds: u64,
}

impl Default for SeekPolicy {
    fn default() -> Self {
        Self {
            fraction: 0.25,
            fallback_seconds: 1,
        }
    }
}

impl SeekPolicy {
    pub fn new(fraction: f64, fallback_seconds: u64) -> Self {
        Self {
            fraction,
            fallback_seconds,
        }
    }

    /// Whole seconds at `fraction` of the duration, or the fallback when the
    /// duration is unknown or zero.
    pub fn seek_seconds(&self, duration: Option<f64>) -> u64 {
        match duration {
            Some(d) if d > 0.0 => (d * self.fraction).floor() as u64,
            _ => self.fallback_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FFMPEG_STDERR: &str = r#"ffmpeg version 6.0-static https://johnvansickle.com/ffmpeg/  Copyright (c) 2000-2023 the FFmpeg developers
  built with gcc 8 (Debian 8.3.0-6)
Input #0, mov,mp4,m4a,3gp,3g2,mj2, from '/tmp/input-5b1c.mp4':
  Metadata:
    major_brand     : isom
    minor_version   : 512
    compatible_brands: isomiso2avc1mp41
    encoder         : Lavf58.76.100
  Duration: 00:00:40.04, start: 0.000000, bitrate: 1205 kb/s
  Stream #0:0[0x1](und): Video: h264 (High) (avc1 / 0x31637661), yuv420p(progressive), 1280x720, 1070 kb/s, 30 fps, 30 tbr, 15360 tbn (default)
At least one output file must be specified
"#;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("Duration: 00:01:30.50"), Some(90.5));
    }

    #[test]
    fn test_parse_duration_from_full_output() {
        let duration = parse_duration(FFMPEG_STDERR).unwrap();
        assert!((duration - 40.04).abs() < 1e-9);
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration("  Duration: 01:02:03.25, start: 0"), Some(3723.25));
    }

    #[test]
    fn test_parse_duration_missing() {
        assert_eq!(parse_duration("At least one output file must be specified"), None);
        assert_eq!(parse_duration("  Duration: N/A, bitrate: N/A"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_seek_quarter_point() {
        let policy = SeekPolicy::default();
        assert_eq!(policy.seek_seconds(Some(100.0)), 25);
        assert_eq!(policy.seek_seconds(Some(40.04)), 10);
        assert_eq!(policy.seek_seconds(Some(3.9)), 0);
    }

    #[test]
    fn test_seek_fallback() {
        let policy = SeekPolicy::default();
        assert_eq!(policy.seek_seconds(None), 1);
        assert_eq!(policy.seek_seconds(parse_duration("no match here")), 1);
        assert_eq!(policy.seek_seconds(Some(0.0)), 1);
    }

    #[test]
    fn test_custom_policy() {
        let policy = SeekPolicy::new(0.5, 3);
        assert_eq!(policy.seek_seconds(Some(61.0)), 30);
        assert_eq!(policy.seek_seconds(None), 3);
    }
}
